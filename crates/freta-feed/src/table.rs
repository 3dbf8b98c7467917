//! gviz table shape
//!
//! The feed serializes a worksheet as `table.rows[].c[].v`, where a cell
//! (or its value) may be null. Accessors normalize that into the string /
//! number views the mapper needs.

use serde::Deserialize;
use serde_json::Value;

use freta_domain::service::parse_decimal;

#[derive(Debug, Deserialize)]
pub(crate) struct GvizResponse {
    pub table: FeedTable,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedTable {
    #[serde(default)]
    pub rows: Vec<FeedRow>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedRow {
    #[serde(default)]
    pub c: Vec<Option<FeedCell>>,
}

#[derive(Debug, Deserialize)]
pub struct FeedCell {
    #[serde(default)]
    pub v: Option<Value>,
}

impl FeedRow {
    /// Raw cell value at a positional index.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.c.get(index)?.as_ref()?.v.as_ref()
    }

    /// Cell as text: strings verbatim, numbers/booleans stringified,
    /// missing cells empty.
    pub fn text(&self, index: usize) -> String {
        match self.value(index) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Cell as text with a fallback for missing/empty cells.
    pub fn text_or(&self, index: usize, fallback: &str) -> String {
        let text = self.text(index);
        if text.is_empty() {
            fallback.to_string()
        } else {
            text
        }
    }

    /// Cell as a number: numeric cells pass through, text cells go through
    /// currency parsing, anything else is zero.
    pub fn number(&self, index: usize) -> f64 {
        match self.value(index) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => parse_decimal(s),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(json: &str) -> FeedRow {
        serde_json::from_str(json).expect("row json")
    }

    #[test]
    fn test_missing_cells_read_as_empty() {
        let row = row(r#"{"c":[null,{"v":null},{"v":"x"}]}"#);
        assert_eq!(row.text(0), "");
        assert_eq!(row.text(1), "");
        assert_eq!(row.text(2), "x");
        assert_eq!(row.text(99), "");
    }

    #[test]
    fn test_number_cells() {
        let row = row(r#"{"c":[{"v":2},{"v":"R$ 1.234,56"},{"v":"abc"},null]}"#);
        assert_eq!(row.number(0), 2.0);
        assert_eq!(row.number(1), 1234.56);
        assert_eq!(row.number(2), 0.0);
        assert_eq!(row.number(3), 0.0);
    }

    #[test]
    fn test_text_or_fallback() {
        let row = row(r#"{"c":[{"v":""},{"v":"GARE"}]}"#);
        assert_eq!(row.text_or(0, "Geral"), "Geral");
        assert_eq!(row.text_or(1, "Geral"), "GARE");
        assert_eq!(row.text_or(5, "Geral"), "Geral");
    }

    #[test]
    fn test_numeric_cell_stringifies() {
        let row = row(r#"{"c":[{"v":4512}]}"#);
        assert_eq!(row.text(0), "4512");
    }
}
