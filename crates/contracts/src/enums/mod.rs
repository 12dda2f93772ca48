pub mod payment_type;
pub mod purchase_status;
pub mod user_role;
