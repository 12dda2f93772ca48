//! Editor form chrome shared by every resource dialog.

use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::use_api;
use crate::shared::notify::use_notices;

/// Compact header, validation banner, fields, Save/Cancel footer. The
/// fields themselves come from the resource page.
#[component]
pub fn FormShell(
    /// Header text, e.g. "New product" or "Edit product".
    #[prop(into)]
    title: Signal<String>,
    /// Validation or submission failure shown above the fields.
    #[prop(into)]
    banner: Signal<Option<String>>,
    /// Disables the footer while a request is in flight.
    #[prop(into)]
    saving: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="details-container"
            style="display: flex; flex-direction: column; gap: var(--spacing-lg); padding: var(--spacing-lg); min-width: 480px;"
        >
            <div class="details-header" style="display: flex; align-items: center; justify-content: space-between;">
                <h3 style="margin: 0;">{move || title.get()}</h3>
            </div>

            {move || banner.get().map(|text| view! {
                <div
                    class="form__banner"
                    style="padding: var(--spacing-md); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error);"
                >
                    {text}
                </div>
            })}

            <div class="form__fields" style="display: flex; flex-direction: column; gap: var(--spacing-md);">
                {children()}
            </div>

            <div class="form__actions" style="display: flex; gap: var(--spacing-sm); justify-content: flex-end;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </div>
    }
}

/// Label + control + optional inline error from the backend's per-field
/// rejection map.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__field" style="display: flex; flex-direction: column; gap: var(--spacing-xs);">
            <span class="form__label">{label}</span>
            {children()}
            {move || {
                error.and_then(|slot| slot.get()).map(|text| view! {
                    <span class="form__error" style="color: var(--color-error); font-size: var(--font-size-xs);">
                        {text}
                    </span>
                })
            }}
        </div>
    }
}

/// Label + control inside the collapsible filter panel.
#[component]
pub fn FilterField(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="filter__field" style="display: flex; flex-direction: column; gap: var(--spacing-xs); min-width: 180px;">
            <span class="form__label">{label}</span>
            {children()}
        </div>
    }
}

/// Slot for [`FormField`]'s `error` prop, fed from the per-field error
/// map a rejected save carries.
pub fn field_error(
    errors: RwSignal<std::collections::HashMap<String, String>>,
    key: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|map| map.get(key).cloned()))
}

/// Plain select rendered in the form styling. Options are (value, label)
/// pairs; the caller decides whether a blank entry leads the list.
#[component]
pub fn FormSelect(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        // `selected` covers options that arrive after the first render;
        // `prop:value` covers programmatic resets once they are there.
        <select
            class="form__select"
            prop:value=move || value.get()
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <For
                each=move || options.get()
                key=|(val, _)| val.clone()
                children=move |(val, label)| {
                    let val_for_selected = val.clone();
                    let is_selected = move || value.get() == val_for_selected;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}

/// [`FormSelect`] whose options are the fetched collection of `T`,
/// keyed by record id with a leading blank entry. Covers foreign-key
/// fields in editors and the matching filter criteria.
pub fn record_select<T: Resource>(
    value: Signal<Option<i64>>,
    on_change: Callback<Option<i64>>,
    empty_label: &'static str,
    disabled: Signal<bool>,
) -> AnyView {
    let api = use_api();
    let notices = use_notices();
    let records = RwSignal::new(Vec::<(String, String)>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api.filter::<T>(&T::Filter::default()).await {
                Ok(rows) => {
                    records.set(
                        rows.iter()
                            .map(|row| (row.id().to_string(), row.title()))
                            .collect(),
                    );
                }
                Err(err) => notices.api_error(&err),
            }
        });
    });

    let options = Signal::derive(move || {
        let mut list = vec![(String::new(), empty_label.to_string())];
        list.extend(records.get());
        list
    });

    view! {
        <FormSelect
            value=Signal::derive(move || {
                value.get().map(|id| id.to_string()).unwrap_or_default()
            })
            on_change=Callback::new(move |raw: String| {
                on_change.run(raw.parse::<i64>().ok());
            })
            options=options
            disabled=disabled
        />
    }
    .into_any()
}

/// Trims the input and drops it entirely when blank, for optional text
/// fields that serialize as `Option`.
pub fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses an optional numeric field. Blank is `None`; anything else has
/// to parse, so a typo never silently drops the value.
pub fn parse_optional_number(raw: &str, label: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("{} must be a number", label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_becomes_none() {
        assert_eq!(none_if_blank(""), None);
        assert_eq!(none_if_blank("   "), None);
        assert_eq!(none_if_blank(" x "), Some("x".to_string()));
    }

    #[test]
    fn optional_numbers_accept_blank_and_reject_garbage() {
        assert_eq!(parse_optional_number("", "Amount"), Ok(None));
        assert_eq!(parse_optional_number("  12.5 ", "Amount"), Ok(Some(12.5)));
        assert_eq!(
            parse_optional_number("12,5", "Amount"),
            Err("Amount must be a number".to_string())
        );
    }
}
