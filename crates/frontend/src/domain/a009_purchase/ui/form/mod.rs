//! Purchase editor.
//!
//! The whole form is backed by one [`PurchaseDraft`] signal; line
//! totals, the document total, and the remaining balance are recomputed
//! from it on every render instead of being stored anywhere. Numeric
//! cell inputs are deliberately not echoed back from the draft while
//! typing, so entering "2." does not get rewritten under the cursor.

use std::collections::HashMap;

use contracts::domain::a002_warehouse::aggregate::Warehouse;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a005_supplier::aggregate::Supplier;
use contracts::domain::a009_purchase::aggregate::Purchase;
use contracts::domain::a009_purchase::draft::{DraftItem, PurchaseDraft};
use contracts::domain::common::Resource;
use contracts::enums::payment_type::PaymentType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::{use_api, ApiError};
use crate::crud::form::{field_error, record_select, FormField, FormSelect, FormShell};
use crate::crud::list_page::EditorCtx;
use crate::shared::date_utils::today_iso;
use crate::shared::dialog::use_dialogs;
use crate::shared::notify::use_notices;
use crate::shared::number_format::format_money;
use crate::shared::picker::open_record_picker;

fn payment_type_options() -> Vec<(String, String)> {
    std::iter::once(("".to_string(), "Not selected".to_string()))
        .chain(
            PaymentType::all()
                .into_iter()
                .map(|p| (p.code().to_string(), p.display_name().to_string())),
        )
        .collect()
}

#[component]
pub fn PurchaseEditor(ctx: EditorCtx) -> impl IntoView {
    let api = use_api();
    let dialogs = use_dialogs();
    let notices = use_notices();

    let draft = RwSignal::new(PurchaseDraft::new(today_iso()));

    let (banner, set_banner) = signal(None::<String>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());
    let (saving, set_saving) = signal(false);
    // A new document is editable right away; an existing one only after
    // its draft has been rebuilt from the stored record.
    let (ready, set_ready) = signal(ctx.id.is_none());

    Effect::new(move |_| {
        let Some(id) = ctx.id else {
            return;
        };
        spawn_local(async move {
            match api.get::<Purchase>(id).await {
                Ok(purchase) => {
                    draft.set(PurchaseDraft::from_purchase(&purchase));
                    set_ready.set(true);
                }
                Err(err) => {
                    notices.api_error(&err);
                    ctx.on_cancel.run(());
                }
            }
        });
    });

    // First failing rule blocks the save; nothing is sent until the
    // draft passes.
    let on_save = Callback::new(move |_| {
        let current = draft.get_untracked();
        if let Err(error) = current.validate() {
            set_banner.set(Some(error.to_string()));
            return;
        }
        set_banner.set(None);
        field_errors.set(HashMap::new());
        set_saving.set(true);

        let dto = current.to_dto(ctx.id);
        spawn_local(async move {
            let outcome = match ctx.id {
                Some(id) => api.update::<Purchase>(id, &dto).await,
                None => api.create::<Purchase>(&dto).await,
            };
            match outcome {
                Ok(saved) => {
                    notices.success(format!("Purchase \"{}\" saved", saved.title()));
                    ctx.on_saved.run(());
                }
                Err(ApiError::Rejected {
                    message,
                    field_errors: fields,
                    ..
                }) => {
                    field_errors.set(fields);
                    set_banner.set(Some(message));
                    set_saving.set(false);
                }
                Err(err) => {
                    notices.api_error(&err);
                    set_saving.set(false);
                }
            }
        });
    });

    let title = Signal::derive(move || match ctx.id {
        None => "New purchase".to_string(),
        Some(id) => draft.with(|d| {
            if d.invoice_number.trim().is_empty() {
                format!("Purchase #{}", id)
            } else {
                format!("Purchase: {}", d.invoice_number)
            }
        }),
    });

    view! {
        <FormShell
            title=title
            banner=banner
            saving=saving
            on_save=on_save
            on_cancel=ctx.on_cancel
        >
            <Show
                when=move || ready.get()
                fallback=|| {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items:center;justify-content:center;padding:var(--spacing-2xl);">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }
                }
            >
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: var(--spacing-md);">
                    <FormField label="Supplier" error=field_error(field_errors, "supplierId")>
                        {record_select::<Supplier>(
                            Signal::derive(move || {
                                draft.with(|d| (d.supplier_id > 0).then_some(d.supplier_id))
                            }),
                            Callback::new(move |picked: Option<i64>| {
                                draft.update(|d| d.supplier_id = picked.unwrap_or(0));
                            }),
                            "Select a supplier...",
                            Signal::derive(move || saving.get()),
                        )}
                    </FormField>

                    <FormField label="Warehouse" error=field_error(field_errors, "warehouseId")>
                        {record_select::<Warehouse>(
                            Signal::derive(move || {
                                draft.with(|d| (d.warehouse_id > 0).then_some(d.warehouse_id))
                            }),
                            Callback::new(move |picked: Option<i64>| {
                                draft.update(|d| d.warehouse_id = picked.unwrap_or(0));
                            }),
                            "Select a warehouse...",
                            Signal::derive(move || saving.get()),
                        )}
                    </FormField>

                    <FormField label="Invoice number" error=field_error(field_errors, "invoiceNumber")>
                        <input
                            class="form__input"
                            prop:value=move || draft.with(|d| d.invoice_number.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.invoice_number = value);
                            }
                        />
                    </FormField>

                    <FormField label="Date" error=field_error(field_errors, "purchaseDate")>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || draft.with(|d| d.purchase_date.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.purchase_date = value);
                            }
                        />
                    </FormField>
                </div>

                <div class="form__section">
                    <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: var(--spacing-sm);">
                        <span class="form__label">"Items"</span>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| draft.update(|d| d.add_item())
                        >
                            "Add item"
                        </Button>
                    </div>

                    <table class="items-table" style="width: 100%; border-collapse: collapse;">
                        <thead>
                            <tr>
                                <th style="text-align: left;">"Product"</th>
                                <th style="width: 90px;">"Qty"</th>
                                <th style="width: 120px;">"Unit price"</th>
                                <th style="width: 120px; text-align: right;">"Total"</th>
                                <th style="width: 90px;"></th>
                            </tr>
                        </thead>
                        <tbody>
                            // Keyed by (position, product) so picking a
                            // product refreshes the row while typing in
                            // it does not recreate the focused input.
                            <For
                                each=move || {
                                    draft.get().items.into_iter().enumerate().collect::<Vec<_>>()
                                }
                                key=|(idx, item)| (*idx, item.product_id)
                                children=move |(idx, item): (usize, DraftItem)| {
                                    let product_label = if item.product_name.is_empty() {
                                        "Select product...".to_string()
                                    } else {
                                        item.product_name.clone()
                                    };
                                    view! {
                                        <tr class="items-table__row">
                                            <td>
                                                <button
                                                    type="button"
                                                    class="items-table__product"
                                                    on:click=move |_| {
                                                        open_record_picker::<Product>(
                                                            dialogs,
                                                            "Select product",
                                                            Callback::new(move |product: Product| {
                                                                draft.update(|d| d.set_product(idx, &product));
                                                            }),
                                                        );
                                                    }
                                                >
                                                    {product_label}
                                                </button>
                                            </td>
                                            <td>
                                                <input
                                                    type="number"
                                                    class="form__input"
                                                    min="0"
                                                    step="1"
                                                    value=item.quantity.to_string()
                                                    on:input=move |ev| {
                                                        let quantity =
                                                            event_target_value(&ev).parse().unwrap_or(0);
                                                        draft.update(|d| d.set_quantity(idx, quantity));
                                                    }
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="number"
                                                    class="form__input"
                                                    min="0"
                                                    step="0.01"
                                                    placeholder="0.00"
                                                    value=item
                                                        .unit_price
                                                        .map(|p| p.to_string())
                                                        .unwrap_or_default()
                                                    on:input=move |ev| {
                                                        let price =
                                                            event_target_value(&ev).parse().ok();
                                                        draft.update(|d| d.set_unit_price(idx, price));
                                                    }
                                                />
                                            </td>
                                            <td style="text-align: right; font-variant-numeric: tabular-nums;">
                                                {move || {
                                                    draft.with(|d| {
                                                        d.items
                                                            .get(idx)
                                                            .map(|it| format_money(it.total_price()))
                                                            .unwrap_or_default()
                                                    })
                                                }}
                                            </td>
                                            <td>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| draft.update(|d| d.remove_item(idx))
                                                >
                                                    "Remove"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    {move || {
                        draft.with(|d| d.items.is_empty()).then(|| view! {
                            <div style="padding: var(--spacing-md); text-align: center; color: var(--color-text-tertiary);">
                                "No items yet"
                            </div>
                        })
                    }}
                </div>

                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: var(--spacing-md);">
                    <FormField label="Paid amount" error=field_error(field_errors, "paidAmount")>
                        <input
                            type="number"
                            class="form__input"
                            min="0"
                            step="0.01"
                            placeholder="0.00"
                            value=draft.with_untracked(|d| {
                                if d.paid_amount == 0.0 {
                                    String::new()
                                } else {
                                    d.paid_amount.to_string()
                                }
                            })
                            on:input=move |ev| {
                                let paid = event_target_value(&ev).parse().unwrap_or(0.0);
                                draft.update(|d| d.paid_amount = paid);
                            }
                        />
                    </FormField>

                    <FormField label="Payment type" error=field_error(field_errors, "paymentType")>
                        <FormSelect
                            value=Signal::derive(move || {
                                draft.with(|d| {
                                    d.payment_type.map(|p| p.code().to_string()).unwrap_or_default()
                                })
                            })
                            on_change=Callback::new(move |code: String| {
                                draft.update(|d| d.payment_type = PaymentType::from_code(&code));
                            })
                            options=payment_type_options()
                            disabled=Signal::derive(move || saving.get())
                        />
                    </FormField>
                </div>

                <div style="display: flex; gap: var(--spacing-xl); justify-content: flex-end; font-variant-numeric: tabular-nums;">
                    <span>
                        "Total: "
                        <strong>{move || draft.with(|d| format_money(d.total_amount()))}</strong>
                    </span>
                    <span>
                        "Remaining: "
                        <strong>{move || draft.with(|d| format_money(d.remaining_amount()))}</strong>
                    </span>
                </div>

                <FormField label="Note" error=field_error(field_errors, "note")>
                    <textarea
                        class="form__input"
                        rows="3"
                        prop:value=move || draft.with(|d| d.note.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.note = value);
                        }
                    ></textarea>
                </FormField>
            </Show>
        </FormShell>
    }
}
