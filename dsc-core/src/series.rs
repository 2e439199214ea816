//! Derivation of a chart-ready series from loaded rows.
//!
//! One point per row, in row order. No sorting, deduplication or
//! aggregation happens here; the renderer receives exactly what the rows
//! contain for the chosen X and Y columns.

use crate::dataset::Record;
use serde::Serialize;
use serde_json::Value;

/// How cell values are turned into series values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMode {
    /// Parse both X and Y as `f64`; unparseable or missing cells become NaN.
    #[default]
    Numeric,
    /// Hand cells to the renderer unconverted; missing cells become `null`.
    Raw,
}

/// Line style hints forwarded to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub fill: bool,
    pub border_color: String,
    pub tension: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            fill: false,
            border_color: "rgba(75,192,192,1)".to_string(),
            tension: 0.1,
        }
    }
}

/// A labeled series: `labels` are the X values, `values` the plotted Y values.
///
/// NaN entries serialize as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries<T> {
    pub label: String,
    pub labels: Vec<T>,
    pub values: Vec<T>,
    pub style: SeriesStyle,
}

impl<T> ChartSeries<T> {
    /// The series as `(x, y)` pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = (&T, &T)> {
        self.labels.iter().zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A series in either mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Numeric(ChartSeries<f64>),
    Raw(ChartSeries<Value>),
}

impl Series {
    pub fn label(&self) -> &str {
        match self {
            Series::Numeric(s) => &s.label,
            Series::Raw(s) => &s.label,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Numeric(s) => s.len(),
            Series::Raw(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Label shown for a series plotting `y_column` against `x_column`.
pub fn series_label(x_column: &str, y_column: &str) -> String {
    format!("{} vs {}", y_column, x_column)
}

/// Parse a cell as a float. Numbers pass through, strings are trimmed and
/// parsed, everything else is NaN.
pub fn parse_numeric(cell: Option<&Value>) -> f64 {
    match cell {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

pub fn numeric_series(rows: &[Record], x_column: &str, y_column: &str) -> ChartSeries<f64> {
    ChartSeries {
        label: series_label(x_column, y_column),
        labels: rows.iter().map(|r| parse_numeric(r.get(x_column))).collect(),
        values: rows.iter().map(|r| parse_numeric(r.get(y_column))).collect(),
        style: SeriesStyle::default(),
    }
}

pub fn raw_series(rows: &[Record], x_column: &str, y_column: &str) -> ChartSeries<Value> {
    let cell = |r: &Record, column: &str| r.get(column).cloned().unwrap_or(Value::Null);
    ChartSeries {
        label: series_label(x_column, y_column),
        labels: rows.iter().map(|r| cell(r, x_column)).collect(),
        values: rows.iter().map(|r| cell(r, y_column)).collect(),
        style: SeriesStyle::default(),
    }
}

/// Build the series for the chosen columns, or `None` while either column is
/// unset or no rows are loaded.
pub fn build_series(
    rows: &[Record],
    x_column: &str,
    y_column: &str,
    mode: SeriesMode,
) -> Option<Series> {
    if x_column.is_empty() || y_column.is_empty() || rows.is_empty() {
        return None;
    }
    Some(match mode {
        SeriesMode::Numeric => Series::Numeric(numeric_series(rows, x_column, y_column)),
        SeriesMode::Raw => Series::Raw(raw_series(rows, x_column, y_column)),
    })
}
