use std::fmt::Display;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render the run summary to a string in the requested format.
pub fn render<T: Serialize + Display>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Human => Ok(value.to_string()),
    }
}

/// Print the run summary in the requested format.
pub fn output<T: Serialize + Display>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
