//! Left navigation: collapsible menu groups that open workspace tabs.

use leptos::prelude::*;

use crate::layout::center::tab_label_for_key;
use crate::layout::global_context::use_tabs;
use crate::session::use_session;
use crate::shared::icons::icon;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_tabs();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, label, icon)
    items: Vec<(&'static str, &'static str, &'static str)>,
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "references",
            label: "References",
            icon: "folder-closed",
            items: vec![
                ("a001_currency", tab_label_for_key("a001_currency"), "currencies"),
                ("a002_warehouse", tab_label_for_key("a002_warehouse"), "warehouses"),
                ("a003_product_category", tab_label_for_key("a003_product_category"), "categories"),
                ("a004_product", tab_label_for_key("a004_product"), "products"),
                ("a005_supplier", tab_label_for_key("a005_supplier"), "suppliers"),
                ("a006_customer", tab_label_for_key("a006_customer"), "customers"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "documents",
            label: "Documents",
            icon: "contracts",
            items: vec![
                ("a009_purchase", tab_label_for_key("a009_purchase"), "purchases"),
                ("a007_contract", tab_label_for_key("a007_contract"), "contracts"),
                ("a008_expense", tab_label_for_key("a008_expense"), "expenses"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "system",
            label: "System",
            icon: "users",
            items: vec![("sys_users", tab_label_for_key("sys_users"), "users")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_tabs();
    let session = use_session();

    // Role does not change mid-session, so one untracked check is enough.
    let is_admin = session.is_admin();

    let expanded_groups = RwSignal::new(vec!["references".to_string(), "documents".to_string()]);

    let groups = menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().filter_map(|group| {
                    if group.admin_only && !is_admin {
                        return None;
                    }

                    let group_id = group.id.to_string();
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    Some(view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&group_id_for_exp)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.get().contains(&group_id)>
                                <div class="app-sidebar__children">
                                    {group.items.iter().map(|&(id, label, icon_name)| {
                                        let item_id = StoredValue::new(id.to_string());
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    let iid = item_id.get_value();
                                                    ctx.active.get().as_deref() == Some(iid.as_str())
                                                }
                                                style:padding-left="10px"
                                                on:click=move |_| {
                                                    ctx.open_tab(id, label);
                                                }
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    })
                }).collect_view()}
        </div>
    }
}
