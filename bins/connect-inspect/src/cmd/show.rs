use std::io::Read;

use connect_model::catalog::{self, Inspection};

use crate::config::{InspectConfig, OutputFormat, ShowArgs};
use crate::error::InspectError;

pub fn run(args: &ShowArgs, config: &InspectConfig) -> Result<String, InspectError> {
    let json = read_input(args.input.as_deref())?;
    let inspection = catalog::inspect(&args.shape, &json)?;
    tracing::info!(
        shape = inspection.shape,
        present = inspection.present_fields.len(),
        "record loaded"
    );
    render(&inspection, config)
}

fn read_input(input: Option<&str>) -> Result<String, InspectError> {
    match input {
        None | Some("-") => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .map_err(|source| InspectError::Io { path: "<stdin>".into(), source })?;
            Ok(json)
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|source| InspectError::Io { path: path.into(), source }),
    }
}

fn render(inspection: &Inspection, config: &InspectConfig) -> Result<String, InspectError> {
    if config.format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(inspection)?);
    }

    let mut lines = vec![
        format!("shape:   {}", inspection.shape),
        format!("record:  {}", inspection.rendered),
    ];
    if config.show_hash {
        lines.push(format!("hash:    {}", inspection.hash_code));
    }
    if config.show_fields {
        lines.push(format!("present: {}", inspection.present_fields.join(", ")));
        lines.push(format!("absent:  {}", inspection.absent_fields.join(", ")));
    }
    Ok(lines.join("\n"))
}
