//! Record picker dialog.
//!
//! Lets a form pick a related record (product, customer, ...) from a
//! searchable list without leaving the editor. Click selects, double
//! click confirms.

use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::crud::core::apply_fetch;
use crate::shared::dialog::{DialogHandle, DialogStackService, FrameOptions};
use crate::shared::list_utils::SearchInput;
use crate::shared::notify::use_notices;

/// Opens a picker for `T` on top of the current dialog.
pub fn open_record_picker<T: Resource>(
    dialogs: DialogStackService,
    title: &'static str,
    on_pick: Callback<T>,
) {
    dialogs.push_framed(
        FrameOptions {
            style: Some(
                "max-width: min(640px, 95vw); width: min(640px, 95vw); max-height: 80vh; display: flex; flex-direction: column;"
                    .to_string(),
            ),
            class: None,
        },
        move |handle| picker_view::<T>(handle, title, on_pick),
    );
}

fn picker_view<T: Resource>(
    handle: DialogHandle,
    title: &'static str,
    on_pick: Callback<T>,
) -> AnyView {
    let api = use_api();
    let notices = use_notices();

    let rows = RwSignal::new(Vec::<T>::new());
    let (loading, set_loading) = signal(true);
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<i64>);

    Effect::new(move |_| {
        spawn_local(async move {
            let criteria = T::Filter::default();
            let (fetched, failure) = apply_fetch(api.filter::<T>(&criteria).await);
            rows.set(fetched);
            if let Some(err) = failure {
                notices.api_error(&err);
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let query = search.get().trim().to_lowercase();
        rows.with(|all| {
            all.iter()
                .filter(|row| query.is_empty() || row.title().to_lowercase().contains(&query))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let pick = move |row: T| {
        on_pick.run(row);
        handle.close();
    };

    let confirm_selection = move |_| {
        let Some(id) = selected.get() else {
            return;
        };
        let found = rows.with(|all| all.iter().find(|row| row.id() == id).cloned());
        if let Some(row) = found {
            pick(row);
        }
    };

    view! {
        <div class="picker-container">
            <div class="picker-header">
                <h3>{title}</h3>
                <SearchInput
                    value=search
                    on_change=Callback::new(move |q| search.set(q))
                    placeholder="Search by name..."
                />
            </div>

            <div class="picker-content">
                {move || {
                    if loading.get() {
                        view! { <div class="picker-loading">"Loading..."</div> }.into_any()
                    } else {
                        visible.with(|list| {
                            if list.is_empty() {
                                view! { <div class="picker-empty">"No records to show"</div> }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="picker-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .iter()
                                                .map(|row| {
                                                    let row_id = row.id();
                                                    let row_dbl = row.clone();
                                                    view! {
                                                        <tr
                                                            class="picker-row"
                                                            class:selected=move || {
                                                                selected.get() == Some(row_id)
                                                            }
                                                            on:click=move |_| selected.set(Some(row_id))
                                                            on:dblclick=move |_| pick(row_dbl.clone())
                                                        >
                                                            <td>{row.title()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }
                        })
                    }
                }}
            </div>

            <div class="picker-actions">
                <button
                    class="button button--primary"
                    on:click=confirm_selection
                    disabled=move || selected.get().is_none()
                >
                    "Select"
                </button>
                <button class="button button--secondary" on:click=move |_| handle.close()>
                    "Cancel"
                </button>
            </div>
        </div>
    }
    .into_any()
}
