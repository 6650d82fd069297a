use anyhow::Result;
use clap::Parser;
use healthai::{HealthAssistantCli, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = HealthAssistantCli::parse();
    let config = cli.load_config()?;

    telemetry::init(&config.logging, cli.verbose);
    tracing::debug!(
        "Assistant location {} ({}), alerts via {}",
        config.assistant.location().format_coordinates(),
        config.assistant.location_name,
        config.alerts.channel
    );

    if let Err(err) = cli.run(config).await {
        match err.downcast_ref::<healthai::HealthAiError>() {
            Some(app_err) => eprintln!("{}", app_err.user_message()),
            None => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
    Ok(())
}
