//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::commands::{Evaluation, ResultValue};

/// Prints an evaluation in the requested format.
pub fn print_evaluation(eval: &Evaluation, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(&table_rows(eval)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(eval)?);
            Ok(())
        }
        OutputFormat::Csv => print_csv(eval),
        OutputFormat::Minimal => {
            println!("{}", minimal(&eval.result));
            Ok(())
        }
    }
}

/// Builds the key-value rows shown in table output.
pub fn table_rows(eval: &Evaluation) -> Vec<KeyValue> {
    let mut rows = vec![KeyValue::new("Formula", eval.formula.to_string())];
    rows.extend(
        eval.inputs
            .iter()
            .map(|input| KeyValue::new(input.name, display_json(&input.value))),
    );

    let suffix = if eval.formula.is_percent() { "%" } else { "" };
    match &eval.result {
        ResultValue::Scalar(v) => rows.push(KeyValue::new("Result", format!("{v}{suffix}"))),
        ResultValue::Series(values) => {
            rows.extend(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| KeyValue::new(format!("Period {}", i + 1), v.to_string())),
            );
        }
    }
    rows.push(KeyValue::new("Rounding", eval.rounding.to_string()));
    rows
}

/// Renders a result as bare values, comma-separated for series.
pub fn minimal(result: &ResultValue) -> String {
    match result {
        ResultValue::Scalar(v) => v.to_string(),
        ResultValue::Series(values) => values
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn display_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(display_json)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

#[derive(Serialize)]
struct ScalarRow<'a> {
    formula: &'a str,
    result: f64,
}

#[derive(Serialize)]
struct SeriesRow<'a> {
    formula: &'a str,
    period: usize,
    result: f64,
}

/// Prints the result as CSV, one row per value.
fn print_csv(eval: &Evaluation) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    let formula = eval.formula.abbreviation();
    match &eval.result {
        ResultValue::Scalar(v) => wtr.serialize(ScalarRow {
            formula,
            result: *v,
        })?,
        ResultValue::Series(values) => {
            // serialize only emits the header with the first row
            if values.is_empty() {
                wtr.write_record(["formula", "period", "result"])?;
            }
            for (i, v) in values.iter().enumerate() {
                wtr.serialize(SeriesRow {
                    formula,
                    period: i + 1,
                    result: *v,
                })?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Prints key-value rows in the requested format.
pub fn print_key_values(rows: &[KeyValue], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = rows
                .iter()
                .map(|kv| (kv.key.clone(), serde_json::Value::String(kv.value.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
            Ok(())
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
            Ok(())
        }
        OutputFormat::Minimal => {
            for row in rows {
                println!("{}={}", row.key, row.value);
            }
            Ok(())
        }
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Input;
    use finmath_analytics::Formula;
    use serde_json::json;

    fn npv_eval() -> Evaluation {
        Evaluation::new(
            Formula::NetPresentValue,
            vec![
                Input::new("Rate (%)", json!(10.0)),
                Input::new("Cash flows", json!([200000.0, 300000.0])),
            ],
            ResultValue::Scalar(80_015.03),
        )
    }

    #[test]
    fn test_minimal() {
        assert_eq!(minimal(&ResultValue::Scalar(4.2)), "4.2");
        assert_eq!(minimal(&ResultValue::Scalar(105.0)), "105");
        assert_eq!(
            minimal(&ResultValue::Series(vec![1.0, 0.91, 0.827])),
            "1,0.91,0.827"
        );
    }

    #[test]
    fn test_table_rows() {
        let rows = table_rows(&npv_eval());
        assert_eq!(rows[0].value, "Net Present Value (NPV)");
        assert_eq!(rows[1].value, "10.0");
        assert_eq!(rows[2].value, "200000.0, 300000.0");
        assert_eq!(rows[3].key, "Result");
        assert_eq!(rows[3].value, "80015.03");
        assert_eq!(rows[4].value, "nearest, 2 dp");
    }

    #[test]
    fn test_table_rows_percent_and_series() {
        let eval = Evaluation::new(
            Formula::WeightedAverageCostOfCapital,
            vec![],
            ResultValue::Scalar(4.9),
        );
        assert_eq!(table_rows(&eval)[1].value, "4.9%");

        let eval = Evaluation::new(
            Formula::DiscountFactors,
            vec![],
            ResultValue::Series(vec![1.0, 0.91]),
        );
        let rows = table_rows(&eval);
        assert_eq!(rows[1].key, "Period 1");
        assert_eq!(rows[2].value, "0.91");
    }
}
