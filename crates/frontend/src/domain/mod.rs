pub mod a001_currency;
pub mod a002_warehouse;
pub mod a003_product_category;
pub mod a004_product;
pub mod a005_supplier;
pub mod a006_customer;
pub mod a007_contract;
pub mod a008_expense;
pub mod a009_purchase;
