//! Resolve command

use std::sync::Arc;

use anyhow::{Context, Result};
use camino::Utf8Path;
use lineage_core::RuntimeConfig;
use lineage_resolver::{ImageDetails, PreviousImageResolver};
use lineage_tags::CloudDriverClient;
use tracing::debug;

use crate::cli::ResolveArgs;
use crate::output;

pub async fn run(args: ResolveArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(url) = &args.clouddriver_url {
        config.clouddriver.base_url = url.clone();
    }

    let details = resolve_image(&args, &config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    match details {
        Some(details) => {
            output::success(&format!("Previous image of {}", args.server_group));
            output::kv("Image name", details.image_name());
            output::kv("Image id", details.image_id().unwrap_or("-"));
            output::kv("Build number", details.build_number().unwrap_or("-"));
        }
        None => output::info(&format!(
            "No previous image recorded for {}",
            args.server_group
        )),
    }

    Ok(())
}

async fn resolve_image(args: &ResolveArgs, config: &RuntimeConfig) -> Result<Option<ImageDetails>> {
    let client = Arc::new(CloudDriverClient::from_config(&config.clouddriver)?);
    debug!(base_url = client.base_url(), "Using tagging service");
    let resolver = PreviousImageResolver::new(client.clone(), client, config.retry.clone());

    resolver
        .resolve_previous_image(
            &args.cloud_provider,
            &args.account,
            &args.region,
            &args.server_group,
        )
        .await
        .with_context(|| format!("Failed to resolve previous image of {}", args.server_group))
}
