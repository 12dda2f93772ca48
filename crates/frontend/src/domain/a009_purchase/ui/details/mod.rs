//! Purchase detail tab: read-only document view plus the status
//! transition actions an open document allows.

use contracts::domain::a009_purchase::aggregate::Purchase;
use contracts::domain::common::Resource;
use contracts::enums::purchase_status::PurchaseStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::use_api;
use crate::crud::list_page::EditorCtx;
use crate::layout::center::tabs::PURCHASE_DETAIL_PREFIX;
use crate::layout::global_context::use_tabs;
use crate::shared::confirm::confirm;
use crate::shared::date_utils::format_date;
use crate::shared::dialog::{use_dialogs, FrameOptions};
use crate::shared::icons::icon;
use crate::shared::notify::use_notices;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

use super::form::PurchaseEditor;

fn status_badge(status: PurchaseStatus) -> &'static str {
    match status {
        PurchaseStatus::Pending => "badge badge--warning",
        PurchaseStatus::Completed => "badge badge--success",
        PurchaseStatus::Cancelled => "badge badge--error",
        PurchaseStatus::Returned => "badge badge--secondary",
    }
}

#[component]
pub fn PurchaseDetails(id: i64, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let api = use_api();
    let dialogs = use_dialogs();
    let notices = use_notices();
    let tabs = use_tabs();

    let purchase = RwSignal::new(None::<Purchase>);
    let (loading, set_loading) = signal(true);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api.get::<Purchase>(id).await {
                Ok(doc) => {
                    let tab_key = format!("{}{}", PURCHASE_DETAIL_PREFIX, id);
                    tabs.update_tab_title(&tab_key, &doc.title());
                    purchase.set(Some(doc));
                }
                Err(err) => notices.api_error(&err),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let open_editor = move || {
        dialogs.push_framed(
            FrameOptions {
                style: Some(
                    "max-width: min(900px, 95vw); width: min(900px, 95vw); max-height: 90vh; overflow-y: auto;"
                        .to_string(),
                ),
                class: None,
            },
            move |handle| {
                let on_saved = Callback::new(move |_| {
                    handle.close();
                    load();
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! {
                    <PurchaseEditor ctx=EditorCtx {
                        id: Some(id),
                        on_saved,
                        on_cancel,
                    } />
                }
                .into_any()
            },
        );
    };

    // The guard mirrors the transition policy, so a stale button click
    // on an already-moved document does nothing.
    let transition = move |target: PurchaseStatus| {
        let Some(current) = purchase.get_untracked() else {
            return;
        };
        if !current.status.can_transition_to(target) {
            return;
        }
        let verb = match target {
            PurchaseStatus::Completed => "Complete",
            PurchaseStatus::Cancelled => "Cancel",
            _ => return,
        };
        if !confirm(&format!("{} purchase \"{}\"?", verb, current.title())) {
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
                    purchase.set(Some(updated));
                }
                Err(err) => notices.api_error(&err),
            }
        });
    };

    view! {
        <PageFrame page_id="a009_purchase--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || {
                            purchase
                                .get()
                                .map(|p| p.title())
                                .unwrap_or_else(|| "Purchase".to_string())
                        }}
                    </h1>
                    {move || {
                        purchase.get().map(|p| view! {
                            <span class=status_badge(p.status)>{p.status.display_name()}</span>
                        })
                    }}
                </div>
                <div class="page__header-right">
                    {move || {
                        let Some(p) = purchase.get() else {
                            return view! { <></> }.into_any();
                        };
                        if p.status != PurchaseStatus::Pending {
                            return view! { <></> }.into_any();
                        }
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| open_editor()
                            >
                                "Edit"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| transition(PurchaseStatus::Completed)
                            >
                                {icon("check-circle")}
                                " Complete"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| transition(PurchaseStatus::Cancelled)
                            >
                                {icon("x-circle")}
                                " Cancel"
                            </Button>
                        }
                        .into_any()
                    }}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        "Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }
                        .into_any();
                    }
                    let Some(p) = purchase.get() else {
                        return view! {
                            <div style="padding: var(--spacing-2xl); text-align: center; color: var(--color-text-tertiary);">
                                "No data"
                            </div>
                        }
                        .into_any();
                    };

                    let payment = p
                        .payment_type
                        .map(|pt| pt.display_name().to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let remaining = p.remaining_amount();

                    view! {
                        <div style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
                            <Card>
                                <div style="padding:var(--spacing-md);display:grid;grid-template-columns:max-content 1fr;gap:var(--spacing-sm) var(--spacing-xl);align-items:baseline;">
                                    <span class="form__label">"Supplier:"</span>
                                    <strong>{p.supplier_name.clone().unwrap_or_default()}</strong>

                                    <span class="form__label">"Warehouse:"</span>
                                    <span>{p.warehouse_name.clone().unwrap_or_default()}</span>

                                    <span class="form__label">"Date:"</span>
                                    <span>{format_date(&p.purchase_date)}</span>

                                    <span class="form__label">"Invoice:"</span>
                                    <span>{p.invoice_number.clone().unwrap_or_else(|| "-".to_string())}</span>

                                    <span class="form__label">"Payment:"</span>
                                    <span>{payment}</span>

                                    <span class="form__label">"Note:"</span>
                                    <span>{p.note.clone().unwrap_or_default()}</span>
                                </div>
                            </Card>

                            <Card>
                                <div style="padding:var(--spacing-md);">
                                    <table style="width:100%;border-collapse:collapse;">
                                        <thead>
                                            <tr>
                                                <th style="text-align:left;">"#"</th>
                                                <th style="text-align:left;">"Product"</th>
                                                <th style="text-align:right;">"Qty"</th>
                                                <th style="text-align:right;">"Unit price"</th>
                                                <th style="text-align:right;">"Total"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {p.items
                                                .iter()
                                                .enumerate()
                                                .map(|(idx, item)| {
                                                    view! {
                                                        <tr>
                                                            <td>{idx + 1}</td>
                                                            <td>
                                                                {item
                                                                    .product_name
                                                                    .clone()
                                                                    .unwrap_or_else(|| format!(
                                                                        "Product #{}",
                                                                        item.product_id
                                                                    ))}
                                                            </td>
                                                            <td style="text-align:right;font-variant-numeric:tabular-nums;">
                                                                {item.quantity}
                                                            </td>
                                                            <td style="text-align:right;font-variant-numeric:tabular-nums;">
                                                                {format_money(item.unit_price)}
                                                            </td>
                                                            <td style="text-align:right;font-variant-numeric:tabular-nums;">
                                                                {format_money(item.total_price)}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>

                                    <div style="display:flex;gap:var(--spacing-xl);justify-content:flex-end;margin-top:var(--spacing-md);font-variant-numeric:tabular-nums;">
                                        <span>
                                            "Total: " <strong>{format_money(p.total_amount)}</strong>
                                        </span>
                                        <span>
                                            "Paid: " <strong>{format_money(p.paid_amount)}</strong>
                                        </span>
                                        <span>
                                            "Remaining: " <strong>{format_money(remaining)}</strong>
                                        </span>
                                    </div>
                                </div>
                            </Card>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}
