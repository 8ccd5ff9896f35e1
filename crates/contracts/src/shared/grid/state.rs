use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

/// Search and sort state of one grid instance.
///
/// Lives as long as the grid; a remount starts from `default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridViewState {
    pub search_term: String,
    pub sort: Option<SortState>,
}

impl GridViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Header click: unsorted → asc → desc → unsorted.
    /// Another column always starts at asc.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(current) if current.field == field => match current.direction {
                SortDirection::Asc => Some(SortState {
                    field: current.field,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(SortState {
                field: field.to_string(),
                direction: SortDirection::Asc,
            }),
        };
    }

    pub fn sort_direction_for(&self, field: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.field == field)
            .map(|s| s.direction)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
