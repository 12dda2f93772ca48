//! Workspace tabs: the strip of openers and the keep-mounted pages.

pub mod tab;
pub mod tabs;

pub use tabs::Tabs;

use contracts::domain::a001_currency::aggregate::Currency;
use contracts::domain::a002_warehouse::aggregate::Warehouse;
use contracts::domain::a003_product_category::aggregate::ProductCategory;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a005_supplier::aggregate::Supplier;
use contracts::domain::a006_customer::aggregate::Customer;
use contracts::domain::a007_contract::aggregate::Contract;
use contracts::domain::a008_expense::aggregate::Expense;
use contracts::domain::a009_purchase::aggregate::Purchase;
use contracts::domain::common::Resource;
use contracts::system::users::User;

pub const PURCHASE_DETAIL_PREFIX: &str = "a009_purchase_detail_";

/// Tab label for a registry key. Collection names come from contracts so
/// the sidebar, the tab strip and the list pages agree.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_currency" => Currency::list_name(),
        "a002_warehouse" => Warehouse::list_name(),
        "a003_product_category" => ProductCategory::list_name(),
        "a004_product" => Product::list_name(),
        "a005_supplier" => Supplier::list_name(),
        "a006_customer" => Customer::list_name(),
        "a007_contract" => Contract::list_name(),
        "a008_expense" => Expense::list_name(),
        "a009_purchase" => Purchase::list_name(),
        "sys_users" => User::list_name(),
        _ => "",
    }
}

/// Title for any tab key, including dynamic detail keys. Used when a tab
/// is restored from the URL and no record is loaded yet.
pub fn tab_title(key: &str) -> String {
    if let Some(raw_id) = key.strip_prefix(PURCHASE_DETAIL_PREFIX) {
        return format!("{} #{}", Purchase::element_name(), raw_id);
    }
    let label = tab_label_for_key(key);
    if label.is_empty() {
        key.to_string()
    } else {
        label.to_string()
    }
}
