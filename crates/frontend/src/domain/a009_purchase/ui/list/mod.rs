use contracts::domain::a002_warehouse::aggregate::Warehouse;
use contracts::domain::a005_supplier::aggregate::Supplier;
use contracts::domain::a009_purchase::aggregate::{Purchase, PurchaseFilter};
use contracts::domain::common::Resource;
use contracts::enums::purchase_status::PurchaseStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::use_api;
use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, record_select, FilterField, FormSelect};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowCtx, RowOpen};
use crate::layout::center::tabs::PURCHASE_DETAIL_PREFIX;
use crate::shared::confirm::confirm;
use crate::shared::notify::use_notices;
use crate::shared::number_format::format_money;

use super::form::PurchaseEditor;

fn filter_fields(filter: RwSignal<PurchaseFilter>) -> AnyView {
    let status_options = std::iter::once(("".to_string(), "All statuses".to_string()))
        .chain(
            PurchaseStatus::all()
                .into_iter()
                .map(|s| (s.code().to_string(), s.display_name().to_string())),
        )
        .collect::<Vec<_>>();

    view! {
        <FilterField label="Invoice">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.invoice_number.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.invoice_number = none_if_blank(&value));
                }
            />
        </FilterField>
        <FilterField label="Supplier">
            {record_select::<Supplier>(
                Signal::derive(move || filter.with(|f| f.supplier_id)),
                Callback::new(move |picked| filter.update(|f| f.supplier_id = picked)),
                "All suppliers",
                Signal::from(false),
            )}
        </FilterField>
        <FilterField label="Warehouse">
            {record_select::<Warehouse>(
                Signal::derive(move || filter.with(|f| f.warehouse_id)),
                Callback::new(move |picked| filter.update(|f| f.warehouse_id = picked)),
                "All warehouses",
                Signal::from(false),
            )}
        </FilterField>
        <FilterField label="Status">
            <FormSelect
                value=Signal::derive(move || {
                    filter.with(|f| f.status.map(|s| s.code().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |code: String| {
                    filter.update(|f| f.status = PurchaseStatus::from_code(&code));
                })
                options=status_options
            />
        </FilterField>
        <FilterField label="From">
            <input
                type="date"
                class="form__input"
                prop:value=move || filter.with(|f| f.date_from.clone().unwrap_or_default())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.date_from = none_if_blank(&value));
                }
            />
        </FilterField>
        <FilterField label="To">
            <input
                type="date"
                class="form__input"
                prop:value=move || filter.with(|f| f.date_to.clone().unwrap_or_default())
                on:change=move |ev| {
                    filter.update(|f| f.date_to = none_if_blank(&event_target_value(&ev)));
                }
            />
        </FilterField>
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <PurchaseEditor ctx=ctx /> }.into_any()
}

/// Complete/Cancel shortcuts on open documents. Terminal rows get no
/// extra actions.
fn status_actions(purchase: Purchase, row: RowCtx) -> AnyView {
    let api = use_api();
    let notices = use_notices();

    let id = purchase.id;
    let status = purchase.status;
    let title = StoredValue::new(purchase.title());

    let transition = move |target: PurchaseStatus| {
        if !status.can_transition_to(target) {
            return;
        }
        let verb = match target {
            PurchaseStatus::Completed => "Complete",
            PurchaseStatus::Cancelled => "Cancel",
            _ => return,
        };
        if !confirm(&format!("{} purchase \"{}\"?", verb, title.get_value())) {
            return;
        }
        spawn_local(async move {
            match api.set_purchase_status(id, target).await {
                Ok(updated) => {
                    notices.success(format!(
                        "Purchase \"{}\" marked as {}",
                        updated.title(),
                        updated.status.display_name()
                    ));
                    row.refresh.run(());
                }
                Err(err) => notices.api_error(&err),
            }
        });
    };

    if status.is_terminal() {
        return view! { <></> }.into_any();
    }

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            on_click=move |_| transition(PurchaseStatus::Completed)
        >
            "Complete"
        </Button>
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            on_click=move |_| transition(PurchaseStatus::Cancelled)
        >
            "Cancel"
        </Button>
    }
    .into_any()
}

fn schema() -> ListSchema<Purchase> {
    ListSchema {
        page_id: "a009_purchase--list",
        title: Purchase::list_name(),
        new_label: "New purchase",
        search_hint: "Invoice, supplier or warehouse...",
        columns: vec![
            Column::text("invoice", "Invoice", |p: &Purchase| p.title()),
            Column::text("supplier", "Supplier", |p: &Purchase| {
                p.supplier_name.clone().unwrap_or_default()
            }),
            Column::text("warehouse", "Warehouse", |p: &Purchase| {
                p.warehouse_name.clone().unwrap_or_default()
            }),
            Column::date("date", "Date", |p: &Purchase| p.purchase_date.clone()),
            Column::number("total", "Total", |p: &Purchase| format_money(p.total_amount)),
            Column::number("paid", "Paid", |p: &Purchase| format_money(p.paid_amount)),
            Column::text("status", "Status", |p: &Purchase| {
                p.status.display_name().to_string()
            }),
        ],
        default_sort: ("date", false),
        filter_fields,
        editor,
        open: RowOpen::DetailTab(|p| {
            (format!("{}{}", PURCHASE_DETAIL_PREFIX, p.id), p.title())
        }),
        // Terminal documents are read-only.
        can_edit: |p| p.status == PurchaseStatus::Pending,
        row_actions: Some(status_actions),
    }
}

#[component]
pub fn PurchaseList() -> impl IntoView {
    resource_list_page(schema())
}
