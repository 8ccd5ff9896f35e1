//! Generic data grid engine: column schema, free-text search, tri-state
//! stable sort and CSV export over any row type implementing [`GridRow`].
//!
//! The frontend `DataGrid` component owns a [`GridViewState`] and calls
//! [`compute_view`] on every change; nothing here touches the DOM.

pub mod cell;
pub mod column;
pub mod csv;
pub mod state;
pub mod view;

pub use cell::{CellValue, GridRow};
pub use column::{Align, CellRenderer, CellTone, Column, Tone};
pub use csv::{export_filename, to_csv};
pub use state::{GridViewState, SortDirection, SortState};
pub use view::{compute_view, EmptyState, GridView};

/// Titled grid: schema plus shaped rows
#[derive(Debug, Clone)]
pub struct GridTable<R> {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<R>,
}

impl<R: GridRow> GridTable<R> {
    pub fn new(title: impl Into<String>, columns: Vec<Column>, rows: Vec<R>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
        }
    }

    pub fn view(&self, state: &GridViewState) -> GridView<'_, R> {
        compute_view(&self.rows, &self.columns, state)
    }

    /// CSV of the rows visible under `state`
    pub fn export_csv(&self, state: &GridViewState) -> String {
        to_csv(&self.columns, &self.view(state).rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Grid options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    pub searchable: bool,
    pub exportable: bool,
    /// Scroll height of the table body, px
    pub max_height: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            searchable: true,
            exportable: true,
            max_height: 400,
        }
    }
}

impl GridOptions {
    /// Default options with a taller scroll area
    pub fn with_max_height(max_height: u32) -> Self {
        Self {
            max_height,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_options_defaults_and_overrides() {
        let defaults = GridOptions::default();
        assert!(defaults.searchable);
        assert!(defaults.exportable);
        assert_eq!(defaults.max_height, 400);

        let tall = GridOptions::with_max_height(600);
        assert_eq!(tall.max_height, 600);
        assert!(tall.searchable && tall.exportable);

        let plain = GridOptions {
            exportable: false,
            ..GridOptions::with_max_height(500)
        };
        assert_eq!(plain.max_height, 500);
        assert!(!plain.exportable);
    }
}
