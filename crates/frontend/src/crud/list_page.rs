//! Generic resource list page.
//!
//! One controller drives every collection screen: it loads rows through
//! the shared API client, applies the client-side quick search and sort,
//! and opens editors on the dialog stack. Everything resource-specific
//! comes in through a [`ListSchema`].

use contracts::domain::common::{Resource, ResourceFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::core::{apply_fetch, delete_target, matches_search, sort_rows, Column, ColumnKind};
use crate::api::use_api;
use crate::layout::global_context::use_tabs;
use crate::shared::confirm::confirm;
use crate::shared::dialog::{use_dialogs, FrameOptions};
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use crate::shared::notify::use_notices;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Context handed to a schema's editor builder.
#[derive(Clone, Copy)]
pub struct EditorCtx {
    /// `None` when creating a new record.
    pub id: Option<i64>,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Context handed to a schema's extra row actions.
#[derive(Clone, Copy)]
pub struct RowCtx {
    pub refresh: Callback<()>,
}

/// What clicking the first cell of a row does.
pub enum RowOpen<T> {
    /// Open the record in the editor dialog.
    Editor,
    /// Open a detail tab; the fn yields (tab key, tab title).
    DetailTab(fn(&T) -> (String, String)),
}

// Derived Clone/Copy would demand T: Clone/Copy for no reason.
impl<T> Clone for RowOpen<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowOpen<T> {}

/// Everything resource-specific about a list page.
pub struct ListSchema<T: Resource> {
    pub page_id: &'static str,
    pub title: &'static str,
    pub new_label: &'static str,
    pub search_hint: &'static str,
    pub columns: Vec<Column<T>>,
    /// (column key, ascending)
    pub default_sort: (&'static str, bool),
    /// Controls rendered inside the collapsible filter panel.
    pub filter_fields: fn(RwSignal<T::Filter>) -> AnyView,
    pub editor: fn(EditorCtx) -> AnyView,
    pub open: RowOpen<T>,
    /// Rows failing this keep their Edit action hidden.
    pub can_edit: fn(&T) -> bool,
    /// Extra per-row actions, rendered between Edit and Delete.
    pub row_actions: Option<fn(T, RowCtx) -> AnyView>,
}

pub fn resource_list_page<T: Resource>(schema: ListSchema<T>) -> impl IntoView {
    let api = use_api();
    let dialogs = use_dialogs();
    let notices = use_notices();
    let tabs = use_tabs();

    let ListSchema {
        page_id,
        title,
        new_label,
        search_hint,
        columns,
        default_sort,
        filter_fields,
        editor,
        open,
        can_edit,
        row_actions,
    } = schema;

    let columns = StoredValue::new(columns);
    let rows = RwSignal::new(Vec::<T>::new());
    let (loading, set_loading) = signal(false);
    let filter = RwSignal::new(T::Filter::default());
    let search = RwSignal::new(String::new());
    let (sort_key, set_sort_key) = signal(default_sort.0.to_string());
    let (sort_ascending, set_sort_ascending) = signal(default_sort.1);
    let (is_filter_expanded, set_is_filter_expanded) = signal(false);

    // A failed fetch empties the collection and announces exactly once.
    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            let criteria = filter.get_untracked();
            let (fetched, failure) = apply_fetch(api.filter::<T>(&criteria).await);
            rows.set(fetched);
            if let Some(err) = failure {
                notices.api_error(&err);
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    // Quick search and sort run on the loaded rows only.
    let visible = Memo::new(move |_| {
        let query = search.get();
        let key = sort_key.get();
        let ascending = sort_ascending.get();
        let mut list = rows.get();
        columns.with_value(|cols| {
            list.retain(|row| matches_search(cols, row, &query));
            sort_rows(cols, &mut list, &key, ascending);
        });
        list
    });

    let toggle_sort = move |key: &'static str| {
        if sort_key.get() == key {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_key.set(key.to_string());
            set_sort_ascending.set(true);
        }
    };

    let open_editor = move |id: Option<i64>| {
        dialogs.push_framed(
            FrameOptions {
                // surface sizing is controlled here; the editor renders
                // its own compact header.
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
                editor(EditorCtx {
                    id,
                    on_saved,
                    on_cancel,
                })
            },
        );
    };

    let open_row = move |row: T| match open {
        RowOpen::Editor => open_editor(Some(row.id())),
        RowOpen::DetailTab(make) => {
            let (key, tab_title) = make(&row);
            tabs.open_tab(&key, &tab_title);
        }
    };

    // Nothing is deleted, or even requested, unless the user confirms.
    let delete_row = move |id: i64, row_title: String| {
        let confirmed = confirm(&format!("Delete \"{}\"?", row_title));
        let Some(id) = delete_target(id, confirmed) else {
            return;
        };
        spawn_local(async move {
            match api.delete::<T>(id).await {
                Ok(()) => {
                    notices.success(format!("{} deleted", T::element_name()));
                    load();
                }
                Err(err) => notices.api_error(&err),
            }
        });
    };

    let refresh = Callback::new(move |_| load());

    let active_filters_count = Signal::derive(move || filter.get().active_count());

    let apply_filters = move |_| load();
    let clear_filters = move |_| {
        filter.set(T::Filter::default());
        load();
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <span class="badge badge--primary">
                        {move || rows.with(|r| r.len())}
                    </span>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_editor(None)
                    >
                        {new_label}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div
                            class="filter-panel-header__left"
                            on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                        >
                            <svg
                                width="16"
                                height="16"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                class=move || {
                                    if is_filter_expanded.get() {
                                        "filter-panel__chevron filter-panel__chevron--expanded"
                                    } else {
                                        "filter-panel__chevron"
                                    }
                                }
                            >
                                <polyline points="6 9 12 15 18 9"></polyline>
                            </svg>
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = active_filters_count.get();
                                if count > 0 {
                                    view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>

                        <div class="filter-panel-header__right" style="display: flex; gap: var(--spacing-sm); align-items: center;">
                            <SearchInput
                                value=search
                                on_change=Callback::new(move |q| search.set(q))
                                placeholder=search_hint
                            />
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| load()
                                disabled=Signal::derive(move || loading.get())
                            >
                                {move || if loading.get() { "Loading..." } else { "Refresh" }}
                            </Button>
                        </div>
                    </div>

                    <Show when=move || is_filter_expanded.get()>
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                {filter_fields(filter)}
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=apply_filters
                                    disabled=Signal::derive(move || loading.get())
                                >
                                    "Apply"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=clear_filters
                                    disabled=Signal::derive(move || loading.get())
                                >
                                    "Clear"
                                </Button>
                            </Flex>
                        </div>
                    </Show>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|col| {
                                            let col = *col;
                                            view! {
                                                <TableHeaderCell>
                                                    <div
                                                        class="table__sortable-header"
                                                        style="cursor: pointer;"
                                                        on:click=move |_| toggle_sort(col.key)
                                                    >
                                                        {col.label}
                                                        <span>
                                                            {move || get_sort_indicator(
                                                                &sort_key.get(),
                                                                col.key,
                                                                sort_ascending.get(),
                                                            )}
                                                        </span>
                                                    </div>
                                                </TableHeaderCell>
                                            }
                                        })
                                        .collect_view()
                                })}
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            // Rebuild rows wholesale so edits show up even
                            // when ids stay stable.
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        let row_id = row.id();
                                        let row_title = row.title();
                                        let editable = can_edit(&row);

                                        let cells = columns.with_value(|cols| {
                                            cols.iter()
                                                .enumerate()
                                                .map(|(idx, col)| {
                                                    let text = col.display(&row);
                                                    if idx == 0 {
                                                        let row_link = row.clone();
                                                        view! {
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>
                                                                    <a
                                                                        href="#"
                                                                        class="table__link"
                                                                        on:click=move |e| {
                                                                            e.prevent_default();
                                                                            open_row(row_link.clone());
                                                                        }
                                                                    >
                                                                        {text}
                                                                    </a>
                                                                </TableCellLayout>
                                                            </TableCell>
                                                        }
                                                        .into_any()
                                                    } else if col.kind == ColumnKind::Number {
                                                        view! {
                                                            <TableCell>
                                                                <TableCellLayout>
                                                                    <span style="font-variant-numeric: tabular-nums;">
                                                                        {text}
                                                                    </span>
                                                                </TableCellLayout>
                                                            </TableCell>
                                                        }
                                                        .into_any()
                                                    } else {
                                                        view! {
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>
                                                                    {text}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                        }
                                                        .into_any()
                                                    }
                                                })
                                                .collect_view()
                                        });

                                        let extra = row_actions
                                            .map(|make| make(row.clone(), RowCtx { refresh }));

                                        view! {
                                            <TableRow>
                                                {cells}
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div style="display: flex; gap: var(--spacing-xs); justify-content: flex-end;">
                                                            {editable.then(|| view! {
                                                                <Button
                                                                    size=ButtonSize::Small
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |_| open_editor(Some(row_id))
                                                                >
                                                                    "Edit"
                                                                </Button>
                                                            })}
                                                            {extra}
                                                            <Button
                                                                size=ButtonSize::Small
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| delete_row(row_id, row_title.clone())
                                                            >
                                                                "Delete"
                                                            </Button>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>

                    {move || {
                        if visible.with(|v| !v.is_empty()) {
                            return None;
                        }
                        Some(if loading.get() {
                            view! {
                                <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                                    <Spinner />
                                    <span>"Loading..."</span>
                                </Flex>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div style="padding: var(--spacing-2xl); text-align: center; color: var(--color-text-tertiary);">
                                    "No records to show"
                                </div>
                            }
                            .into_any()
                        })
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
