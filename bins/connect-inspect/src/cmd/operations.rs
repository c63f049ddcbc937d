use connect_model::Operation;
use serde::Serialize;

use crate::config::{InspectConfig, OutputFormat};
use crate::error::InspectError;

#[derive(Debug, Serialize)]
struct OperationRow {
    name: &'static str,
    request: &'static str,
    result: Option<&'static str>,
}

pub fn run(config: &InspectConfig) -> Result<String, InspectError> {
    let rows: Vec<OperationRow> = Operation::all()
        .iter()
        .map(|op| OperationRow {
            name: op.name(),
            request: op.request_shape(),
            result: op.result_shape(),
        })
        .collect();

    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
            let lines: Vec<String> = rows
                .iter()
                .map(|row| {
                    format!(
                        "{:<width$}  {} -> {}",
                        row.name,
                        row.request,
                        row.result.unwrap_or("(empty)"),
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_table_has_one_line_per_operation() {
        let output = run(&InspectConfig::default()).unwrap();
        assert_eq!(output.lines().count(), Operation::all().len());

        let tag = output.lines().find(|line| line.starts_with("TagResource ")).unwrap();
        assert!(tag.ends_with("TagResourceRequest -> (empty)"));
    }

    #[test]
    fn json_rows_carry_null_for_empty_results() {
        let config = InspectConfig { format: OutputFormat::Json, ..InspectConfig::default() };
        let output = run(&config).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        let stop = rows.iter().find(|row| row["name"] == "StopContact").unwrap();
        assert_eq!(stop["result"], "StopContactResult");
        let untag = rows.iter().find(|row| row["name"] == "UntagResource").unwrap();
        assert!(untag["result"].is_null());
    }
}
