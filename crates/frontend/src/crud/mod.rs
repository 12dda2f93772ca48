pub mod core;
pub mod form;
pub mod list_page;

pub use core::{Column, ColumnKind};
pub use form::{
    field_error, none_if_blank, parse_optional_number, record_select, FilterField, FormField,
    FormSelect, FormShell,
};
pub use list_page::{resource_list_page, EditorCtx, ListSchema, RowCtx, RowOpen};
