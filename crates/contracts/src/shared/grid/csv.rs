use chrono::NaiveDate;

use super::cell::GridRow;
use super::column::Column;

/// Quotes a cell only when it contains a comma.
///
/// Embedded quotes and newlines pass through unescaped.
pub fn csv_cell(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// CSV of the given rows: header line, then one line per row, joined by `\n`.
///
/// Cells hold the raw field values, not the rendered text.
pub fn to_csv<R: GridRow>(columns: &[Column], rows: &[&R]) -> String {
    let header = columns
        .iter()
        .map(|c| c.header.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);
    for row in rows {
        let line = columns
            .iter()
            .map(|c| csv_cell(&row.field(c.field).to_string()))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }
    lines.join("\n")
}

/// `<title>_<YYYY-MM-DD>.csv`, each whitespace run in the title becomes `_`
pub fn export_filename(title: &str, date: NaiveDate) -> String {
    let mut name = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    format!("{}_{}.csv", name, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::cell::CellValue;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, CellValue)]) -> HashMap<String, CellValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_csv_cell_quotes_commas_only() {
        assert_eq!(csv_cell("Acme, Inc"), "\"Acme, Inc\"");
        assert_eq!(csv_cell("say \"hi\""), "say \"hi\"");
        assert_eq!(csv_cell("plain"), "plain");
    }

    #[test]
    fn test_to_csv_uses_raw_values() {
        let columns = vec![
            Column::new("Name", "name"),
            Column::new("ARR", "arr").render_with(crate::shared::grid::column::money),
            Column::new("Notes", "notes"),
            Column::new("Go Live", "go_live"),
        ];
        let rows = vec![record(&[
            ("name", "Acme, Inc".into()),
            ("arr", CellValue::Number(48000.0)),
            (
                "notes",
                CellValue::List(vec!["late".into(), "blocked".into()]),
            ),
        ])];
        let refs: Vec<_> = rows.iter().collect();

        let csv = to_csv(&columns, &refs);
        assert_eq!(
            csv,
            "Name,ARR,Notes,Go Live\n\"Acme, Inc\",48000,\"late,blocked\","
        );
    }

    #[test]
    fn test_to_csv_header_only_for_empty_rows() {
        let columns = vec![Column::new("Name", "name"), Column::new("ARR", "arr")];
        let rows: Vec<&HashMap<String, CellValue>> = Vec::new();
        assert_eq!(to_csv(&columns, &rows), "Name,ARR");
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(
            export_filename("At Risk  Accounts", date),
            "At_Risk_Accounts_2025-03-15.csv"
        );
        assert_eq!(export_filename("Churn", date), "Churn_2025-03-15.csv");
    }
}
