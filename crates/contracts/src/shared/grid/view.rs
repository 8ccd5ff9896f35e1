use std::cmp::Ordering;

use super::cell::{CellValue, GridRow};
use super::column::Column;
use super::state::{GridViewState, SortDirection, SortState};

/// Placeholder shown instead of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The source has no rows at all
    NoData,
    /// The search filtered every row out
    NoResults,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoData => "No data available",
            EmptyState::NoResults => "No results found",
        }
    }
}

/// Rows currently visible in a grid, borrowed from the source collection
#[derive(Debug)]
pub struct GridView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total: usize,
}

impl<'a, R> GridView<'a, R> {
    pub fn visible(&self) -> usize {
        self.rows.len()
    }

    /// An empty source wins over an unmatched search
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.total == 0 {
            Some(EmptyState::NoData)
        } else if self.rows.is_empty() {
            Some(EmptyState::NoResults)
        } else {
            None
        }
    }

    pub fn footer(&self) -> String {
        format!("Showing {} of {} records", self.visible(), self.total)
    }
}

/// Case-insensitive substring match over every column value.
/// `needle` must already be lower-cased.
pub fn matches_search<R: GridRow>(row: &R, columns: &[Column], needle: &str) -> bool {
    columns
        .iter()
        .any(|c| row.field(c.field).to_string().to_lowercase().contains(needle))
}

/// Order-preserving search filter; an empty term keeps every row
pub fn filter_rows<'a, R: GridRow>(rows: &'a [R], columns: &[Column], term: &str) -> Vec<&'a R> {
    if term.is_empty() {
        return rows.iter().collect();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| matches_search(*row, columns, &needle))
        .collect()
}

/// Numeric when both sides are numbers, lower-cased text otherwise.
/// NaN sorts after every number so the order stays total.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => match (x.is_nan(), y.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => x.total_cmp(&y),
        },
        _ => a
            .to_string()
            .to_lowercase()
            .cmp(&b.to_string().to_lowercase()),
    }
}

/// Stable sort by one field; ties keep their incoming order
pub fn sort_rows<R: GridRow>(rows: &mut Vec<&R>, sort: &SortState) {
    let mut keyed: Vec<(CellValue, &R)> = rows
        .drain(..)
        .map(|row| (row.field(&sort.field), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = compare_cells(a, b);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    rows.extend(keyed.into_iter().map(|(_, row)| row));
}

/// Search first, then sort
pub fn compute_view<'a, R: GridRow>(
    rows: &'a [R],
    columns: &[Column],
    state: &GridViewState,
) -> GridView<'a, R> {
    let mut visible = filter_rows(rows, columns, &state.search_term);
    if let Some(sort) = &state.sort {
        sort_rows(&mut visible, sort);
    }
    GridView {
        rows: visible,
        total: rows.len(),
    }
}
