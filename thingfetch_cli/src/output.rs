use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The raw value, as returned by the API
    Text,
    /// `{"identifier": .., "value": ..}`
    Json,
}

#[derive(Serialize)]
struct ThingRow<'a> {
    identifier: &'a str,
    value: &'a str,
}

pub fn render_thing(identifier: &str, value: &str, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&ThingRow { identifier, value })?,
    })
}

pub fn print_thing(identifier: &str, value: &str, format: OutputFormat) -> Result<()> {
    println!("{}", render_thing(identifier, value, format)?);
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
