//! Column model and pure list transforms shared by every resource page.
//!
//! Search results, sort order, and the post-fetch page state are all
//! recomputed from the loaded rows on read; nothing derived is stored.

use std::cmp::Ordering;

use crate::api::ApiError;
use crate::shared::date_utils::format_date;

#[derive(Clone, Copy, PartialEq)]
pub enum ColumnKind {
    Text,
    Number,
    Date,
}

/// One table column of a resource list page.
///
/// `cell` is a plain fn pointer so a column table is `'static` data a
/// page can stash in a `StoredValue`.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub cell: fn(&T) -> String,
}

// Derived Clone/Copy would demand T: Clone/Copy, which the fn pointer
// does not actually need.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub fn text(key: &'static str, label: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Text,
            cell,
        }
    }

    pub fn number(key: &'static str, label: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Number,
            cell,
        }
    }

    pub fn date(key: &'static str, label: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Date,
            cell,
        }
    }

    /// Raw cell value; sorting and searching run on this.
    pub fn raw(&self, row: &T) -> String {
        (self.cell)(row)
    }

    /// Display text. Date cells arrive as YYYY-MM-DD and render as
    /// DD.MM.YYYY while the raw value keeps chronological sort order.
    pub fn display(&self, row: &T) -> String {
        match self.kind {
            ColumnKind::Date => format_date(&self.raw(row)),
            _ => self.raw(row),
        }
    }
}

/// Outcome of a collection fetch, shaped for the page state: a failure
/// always leaves an empty collection and hands back the error for a
/// single notification.
pub fn apply_fetch<T>(outcome: Result<Vec<T>, ApiError>) -> (Vec<T>, Option<ApiError>) {
    match outcome {
        Ok(rows) => (rows, None),
        Err(err) => (Vec::new(), Some(err)),
    }
}

/// Gate for the destructive row action. Only a confirmed prompt yields a
/// target id; a declined prompt issues no request and the collection
/// stays as fetched.
pub fn delete_target(id: i64, confirmed: bool) -> Option<i64> {
    confirmed.then_some(id)
}

/// Case-insensitive quick search across every visible column. A blank
/// query matches every row.
pub fn matches_search<T>(columns: &[Column<T>], row: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .any(|col| col.display(row).to_lowercase().contains(&needle))
}

fn numeric_value(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.parse::<f64>().unwrap_or(f64::NEG_INFINITY)
}

/// Sort by the column with the given key. Number columns compare
/// numerically (formatted group spaces stripped), everything else
/// compares the raw strings. An unknown key leaves the order alone.
pub fn sort_rows<T>(columns: &[Column<T>], rows: &mut [T], key: &str, ascending: bool) {
    let Some(column) = columns.iter().find(|col| col.key == key) else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = match column.kind {
            ColumnKind::Number => numeric_value(&column.raw(a))
                .partial_cmp(&numeric_value(&column.raw(b)))
                .unwrap_or(Ordering::Equal),
            _ => column.raw(a).cmp(&column.raw(b)),
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::number_format::format_money;

    #[derive(Clone, PartialEq)]
    struct Row {
        name: &'static str,
        amount: f64,
        date: &'static str,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::text("name", "Name", |r: &Row| r.name.to_string()),
            Column::number("amount", "Amount", |r: &Row| format_money(r.amount)),
            Column::date("date", "Date", |r: &Row| r.date.to_string()),
        ]
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            Row {
                name: "Beta",
                amount: 1200.0,
                date: "2026-03-01",
            },
            Row {
                name: "Alpha",
                amount: 90.0,
                date: "2026-01-15",
            },
            Row {
                name: "Gamma",
                amount: 300.5,
                date: "2026-02-20",
            },
        ]
    }

    #[test]
    fn failed_fetch_leaves_an_empty_collection() {
        let (rows, err) = apply_fetch::<Row>(Err(ApiError::Http(500)));
        assert!(rows.is_empty());
        assert_eq!(err, Some(ApiError::Http(500)));

        let (rows, err) = apply_fetch(Ok(sample_rows()));
        assert_eq!(rows.len(), 3);
        assert_eq!(err, None);
    }

    #[test]
    fn declined_confirmation_yields_no_delete_target() {
        assert_eq!(delete_target(9, false), None);
        assert_eq!(delete_target(9, true), Some(9));
    }

    #[test]
    fn search_is_case_insensitive_and_spans_columns() {
        let cols = columns();
        let rows = sample_rows();
        assert!(matches_search(&cols, &rows[0], "beta"));
        assert!(matches_search(&cols, &rows[1], "ALPHA"));
        assert!(matches_search(&cols, &rows[2], "  gam "));
        assert!(!matches_search(&cols, &rows[2], "zzz"));
        // blank query keeps every row
        assert!(matches_search(&cols, &rows[0], ""));
        assert!(matches_search(&cols, &rows[0], "   "));
    }

    #[test]
    fn search_sees_the_display_form_of_dates() {
        let cols = columns();
        let rows = sample_rows();
        assert!(matches_search(&cols, &rows[2], "20.02.2026"));
        assert!(!matches_search(&cols, &rows[2], "2026-02-20"));
    }

    #[test]
    fn number_columns_sort_numerically() {
        let cols = columns();
        let mut rows = sample_rows();
        sort_rows(&cols, &mut rows, "amount", true);
        // 90 comes first even though "1 200.00" sorts lower as text
        assert_eq!(rows[0].amount, 90.0);
        assert_eq!(rows[1].amount, 300.5);
        assert_eq!(rows[2].amount, 1200.0);

        sort_rows(&cols, &mut rows, "amount", false);
        assert_eq!(rows[0].amount, 1200.0);
    }

    #[test]
    fn date_columns_sort_chronologically_but_render_reversed() {
        let cols = columns();
        let mut rows = sample_rows();
        sort_rows(&cols, &mut rows, "date", true);
        assert_eq!(rows[0].date, "2026-01-15");
        assert_eq!(rows[2].date, "2026-03-01");
        assert_eq!(cols[2].display(&rows[0]), "15.01.2026");
    }

    #[test]
    fn text_sort_and_unknown_keys() {
        let cols = columns();
        let mut rows = sample_rows();
        sort_rows(&cols, &mut rows, "name", true);
        assert_eq!(rows[0].name, "Alpha");
        assert_eq!(rows[2].name, "Gamma");

        // unknown key leaves the order untouched
        sort_rows(&cols, &mut rows, "missing", false);
        assert_eq!(rows[0].name, "Alpha");
    }
}
