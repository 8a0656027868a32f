//! Conversation fixture generator - renders the intake dialogue to a single audio file

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use convo_fixture_core::{FixtureGenerator, GeneratorConfig, DEFAULT_CONFIG_FILE};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "convo_fixture=info,convo_fixture_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GeneratorConfig::load(DEFAULT_CONFIG_FILE)
        .with_context(|| format!("loading {}", DEFAULT_CONFIG_FILE))?;
    info!(
        "Rendering {} lines with {:?} into {:?}",
        config.utterances.len(),
        config.tts_program,
        config.output_path
    );

    let report = FixtureGenerator::from_config(config)
        .generate()
        .context("conversation fixture generation failed")?;
    info!("{} segments combined", report.segments);

    Ok(())
}
