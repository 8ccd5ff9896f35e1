use std::fmt;
use std::sync::Arc;

use super::cell::CellValue;
use crate::shared::format;
use crate::shared::metrics;

/// Display-only override for a cell
pub type CellRenderer = Arc<dyn Fn(&CellValue) -> String + Send + Sync>;

/// Color hint for a cell
pub type CellTone = Arc<dyn Fn(&CellValue) -> Tone + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Warning,
    Negative,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "",
            Tone::Positive => "cell-positive",
            Tone::Warning => "cell-warning",
            Tone::Negative => "cell-negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Column descriptor of a grid.
///
/// `field` names the row field passed to `GridRow::field`. The renderer and
/// the tone only change how a cell is shown; search, sort and export always
/// work on the raw value.
#[derive(Clone)]
pub struct Column {
    pub header: String,
    pub field: &'static str,
    pub align: Align,
    render: Option<CellRenderer>,
    tone: Option<CellTone>,
}

impl Column {
    pub fn new(header: impl Into<String>, field: &'static str) -> Self {
        Self {
            header: header.into(),
            field,
            align: Align::Left,
            render: None,
            tone: None,
        }
    }

    pub fn render_with<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn tone_with<F>(mut self, tone: F) -> Self
    where
        F: Fn(&CellValue) -> Tone + Send + Sync + 'static,
    {
        self.tone = Some(Arc::new(tone));
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    /// Text shown in the cell
    pub fn display(&self, value: &CellValue) -> String {
        match &self.render {
            Some(render) => render(value),
            None => value.to_string(),
        }
    }

    pub fn tone(&self, value: &CellValue) -> Tone {
        self.tone.as_ref().map(|t| t(value)).unwrap_or_default()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("field", &self.field)
            .field("align", &self.align)
            .field("render", &self.render.is_some())
            .field("tone", &self.tone.is_some())
            .finish()
    }
}

// ============================================================================
// Stock renderers
// ============================================================================

fn numeric(value: &CellValue, f: impl Fn(f64) -> String) -> String {
    match value.as_number() {
        Some(n) => f(n),
        None => value.to_string(),
    }
}

pub fn money(value: &CellValue) -> String {
    numeric(value, format::format_money)
}

pub fn percent_1(value: &CellValue) -> String {
    numeric(value, |n| format::format_percent(n, 1))
}

pub fn signed_percent_1(value: &CellValue) -> String {
    numeric(value, |n| format::format_signed_percent(n, 1))
}

pub fn fixed_1(value: &CellValue) -> String {
    numeric(value, |n| format::format_fixed(n, 1))
}

pub fn fixed_2(value: &CellValue) -> String {
    numeric(value, |n| format::format_fixed(n, 2))
}

/// Days until a date, `"—"` when absent
pub fn days(value: &CellValue) -> String {
    match value {
        CellValue::Null => format::DASH.to_string(),
        other => numeric(other, |n| format!("{} days", n)),
    }
}

/// Last entry of a note log
pub fn latest_note(value: &CellValue) -> String {
    match value.as_list() {
        Some(notes) => metrics::latest_note(notes).to_string(),
        None => value.to_string(),
    }
}

/// Negative is red, positive green
pub fn variance_tone(value: &CellValue) -> Tone {
    match value.as_number() {
        Some(n) if n < 0.0 => Tone::Negative,
        Some(n) if n > 0.0 => Tone::Positive,
        _ => Tone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_renderer_uses_raw_value() {
        let column = Column::new("ARR", "arr");
        assert_eq!(column.display(&CellValue::Number(48000.0)), "48000");
    }

    #[test]
    fn test_display_with_renderer() {
        let column = Column::new("ARR", "arr").render_with(money).align_right();
        assert_eq!(column.display(&CellValue::Number(48000.0)), "$48,000");
        assert_eq!(column.align, Align::Right);
    }

    #[test]
    fn test_stock_renderers() {
        assert_eq!(percent_1(&CellValue::Number(f64::NAN)), format::DASH);
        assert_eq!(signed_percent_1(&CellValue::Number(-15.0)), "-15.0%");
        assert_eq!(days(&CellValue::Integer(9)), "9 days");
        assert_eq!(days(&CellValue::Null), format::DASH);
        assert_eq!(
            latest_note(&CellValue::List(vec!["a".into(), "b".into()])),
            "b"
        );
        assert_eq!(latest_note(&CellValue::List(vec![])), metrics::NO_NOTES);
    }

    #[test]
    fn test_tone() {
        let column = Column::new("Variance", "variance").tone_with(variance_tone);
        assert_eq!(column.tone(&CellValue::Number(-1.0)), Tone::Negative);
        assert_eq!(column.tone(&CellValue::Number(3.0)), Tone::Positive);
        assert_eq!(Column::new("X", "x").tone(&CellValue::Null), Tone::Neutral);
    }
}
