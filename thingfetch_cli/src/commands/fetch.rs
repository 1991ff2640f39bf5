use anyhow::{bail, Result};
use clap::Args;
use thingfetch_api::DomainService;

use crate::output::{print_thing, OutputFormat};

#[derive(Args)]
pub struct FetchArgs {
    /// Identifier of the thing to fetch
    pub id: String,
}

/// Reject identifiers that would produce an empty `/things/` segment.
fn validate_identifier(input: &str) -> Result<&str> {
    if input.trim().is_empty() {
        bail!("identifier must not be empty");
    }
    Ok(input)
}

pub async fn run(
    args: &FetchArgs,
    service: &dyn DomainService,
    format: OutputFormat,
) -> Result<()> {
    let id = validate_identifier(&args.id)?;
    let value = service.fetch(id).await?;
    tracing::debug!("fetched '{}' ({} bytes)", id, value.len());
    print_thing(id, &value, format)
}
