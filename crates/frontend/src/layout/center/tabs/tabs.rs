use leptos::prelude::*;

use crate::domain::a001_currency::ui::list::CurrencyList;
use crate::domain::a002_warehouse::ui::list::WarehouseList;
use crate::domain::a003_product_category::ui::list::ProductCategoryList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_supplier::ui::list::SupplierList;
use crate::domain::a006_customer::ui::list::CustomerList;
use crate::domain::a007_contract::ui::list::ContractList;
use crate::domain::a008_expense::ui::list::ExpenseList;
use crate::domain::a009_purchase::ui::details::PurchaseDetails;
use crate::domain::a009_purchase::ui::list::PurchaseList;
use crate::layout::center::tabs::tab::Tab as TabButton;
use crate::layout::center::tabs::PURCHASE_DETAIL_PREFIX;
use crate::layout::global_context::{use_tabs, Tab as TabData};
use crate::system::users::ui::list::UsersList;

#[component]
fn TabPage(tab: TabData) -> impl IntoView {
    let ctx = use_tabs();
    let tab_key = tab.key.clone();

    let key_for_active = tab_key.clone();
    let is_active = move || ctx.active.get().as_deref() == Some(key_for_active.as_str());

    let key_for_close = tab_key.clone();
    let content = match tab_key.as_str() {
        "a001_currency" => view! { <CurrencyList /> }.into_any(),
        "a002_warehouse" => view! { <WarehouseList /> }.into_any(),
        "a003_product_category" => view! { <ProductCategoryList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_supplier" => view! { <SupplierList /> }.into_any(),
        "a006_customer" => view! { <CustomerList /> }.into_any(),
        "a007_contract" => view! { <ContractList /> }.into_any(),
        "a008_expense" => view! { <ExpenseList /> }.into_any(),
        "a009_purchase" => view! { <PurchaseList /> }.into_any(),
        k if k.starts_with(PURCHASE_DETAIL_PREFIX) => {
            let parsed = k
                .strip_prefix(PURCHASE_DETAIL_PREFIX)
                .and_then(|raw| raw.parse::<i64>().ok());
            match parsed {
                Some(id) => view! {
                    <PurchaseDetails
                        id=id
                        on_close=Callback::new(move |_| ctx.close_tab(&key_for_close))
                    />
                }
                .into_any(),
                None => view! { <div class="placeholder">"Not implemented yet"</div> }.into_any(),
            }
        }
        "sys_users" => view! { <UsersList /> }.into_any(),
        other => {
            log::warn!("unknown tab key: {}", other);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    };

    view! {
        <div class="tab-page" class:hidden=move || !is_active() data-tab-key=tab_key>
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_tabs();

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabButton tab_key=tab.key /> }
                    }
                />
            </div>
            <div class="tab-content">
                // Pages stay mounted while their tab is open; switching
                // tabs only toggles visibility.
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab /> }
                    }
                />
            </div>
        </div>
    }
}
