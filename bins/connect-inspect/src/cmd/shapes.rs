use connect_model::catalog;

use crate::config::{InspectConfig, OutputFormat, ShapesArgs};
use crate::error::InspectError;

/// Without a shape: all shape names. With one: its wire field names.
pub fn run(args: &ShapesArgs, config: &InspectConfig) -> Result<String, InspectError> {
    let names = match &args.shape {
        Some(shape) => catalog::field_names(shape)?,
        None => catalog::shape_names(),
    };
    tracing::debug!(shape = ?args.shape, count = names.len(), "listing");

    match config.format {
        OutputFormat::Text => Ok(names.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(shape: Option<&str>) -> ShapesArgs {
        ShapesArgs { shape: shape.map(str::to_string) }
    }

    #[test]
    fn lists_all_shapes() {
        let output = run(&args(None), &InspectConfig::default()).unwrap();
        assert!(output.lines().any(|line| line == "CreateQueueRequest"));
        assert_eq!(output.lines().count(), catalog::shape_names().len());
    }

    #[test]
    fn lists_fields_of_one_shape() {
        let output = run(&args(Some("StopContactRequest")), &InspectConfig::default()).unwrap();
        assert_eq!(output, "ContactId\nInstanceId");
    }

    #[test]
    fn json_output_is_an_array() {
        let config = InspectConfig { format: OutputFormat::Json, ..InspectConfig::default() };
        let output = run(&args(Some("QueueReference")), &config).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, ["Id", "Arn"]);
    }

    #[test]
    fn unknown_shape_fails() {
        let err = run(&args(Some("Nope")), &InspectConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "unknown shape 'Nope'");
    }
}
