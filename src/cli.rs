//! Command line front end for the health assistant

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::{
    HealthAiConfig, HealthAssistant, alerts,
    models::Symptom,
    web,
};

#[derive(Parser, Debug)]
#[command(
    name = "healthai",
    version,
    about = "AI-powered personal health assistant: symptoms, trends, medications and emergency alerts"
)]
pub struct HealthAssistantCli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API used by the dashboard
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Check a symptom
    Analyze {
        #[arg(long)]
        symptom: String,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        severity: u8,
        #[arg(long, default_value = "1 day")]
        duration: String,
    },
    /// Show the trend of a health metric
    Trends {
        #[arg(long, value_enum, default_value_t = Metric::Weight)]
        metric: Metric,
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// List medication reminders that are due
    Reminders,
    /// Add a medication
    AddMedication {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        dosage: String,
        #[arg(long, default_value = "")]
        frequency: String,
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=365))]
        days_supply: u32,
    },
    /// Record that a medication was taken
    Take {
        #[arg(long)]
        name: String,
    },
    /// Send an emergency alert to the configured contacts
    Alert {
        #[arg(long)]
        message: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Weight,
    BloodPressure,
}

impl Metric {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::BloodPressure => "blood pressure",
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl HealthAssistantCli {
    pub fn load_config(&self) -> Result<HealthAiConfig> {
        HealthAiConfig::load_from_path(self.config.clone())
    }

    /// Run the selected command with an assistant built from `config`
    pub async fn run(self, mut config: HealthAiConfig) -> Result<()> {
        let mut assistant = HealthAssistant::with_dispatcher(
            config.assistant.location(),
            alerts::dispatcher_from_config(&config.alerts),
        );

        match self.command {
            Command::Serve { port } => {
                if let Some(port) = port {
                    config.server.port = port;
                }
                web::run(assistant, &config.server).await?;
            }
            Command::Analyze {
                symptom,
                severity,
                duration,
            } => {
                let symptoms = [Symptom::new(symptom, severity, duration)];
                print_json(&assistant.analyze_symptoms(&symptoms))?;
            }
            Command::Trends { metric, days } => {
                print_json(&assistant.get_health_trends(metric.as_str(), days)?)?;
            }
            Command::Reminders => {
                let reminders = assistant.get_medication_reminders();
                if reminders.is_empty() {
                    println!("✅ No medications due right now.");
                }
                for reminder in reminders {
                    println!("{reminder}");
                }
            }
            Command::AddMedication {
                name,
                dosage,
                frequency,
                days_supply,
            } => {
                let medication =
                    assistant.add_medication(&name, &dosage, &frequency, days_supply);
                println!("Added {medication}");
            }
            Command::Take { name } => {
                let intake = assistant.record_medication_taken(&name);
                println!(
                    "Recorded {} as taken at {}",
                    intake.name,
                    intake.taken_at.with_timezone(&chrono::Local).format("%H:%M")
                );
            }
            Command::Alert { message } => {
                if message.trim().is_empty() {
                    println!("Please enter a message before sending.");
                } else {
                    assistant.send_emergency_alert(&message).await;
                    println!("🚨 Emergency alerts sent to all registered contacts!");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        HealthAssistantCli::command().debug_assert();
    }

    #[test]
    fn test_parse_trends_with_metric() {
        let cli = HealthAssistantCli::try_parse_from([
            "healthai",
            "trends",
            "--metric",
            "blood-pressure",
            "--days",
            "14",
        ])
        .unwrap();
        match cli.command {
            Command::Trends { metric, days } => {
                assert_eq!(metric.as_str(), "blood pressure");
                assert_eq!(days, 14);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_severity_is_bounded() {
        let result = HealthAssistantCli::try_parse_from([
            "healthai",
            "analyze",
            "--symptom",
            "headache",
            "--severity",
            "11",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = HealthAssistantCli::try_parse_from([
            "healthai",
            "reminders",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[tokio::test]
    async fn test_one_shot_commands_succeed() {
        for args in [
            vec!["healthai", "analyze", "--symptom", "cough"],
            vec!["healthai", "trends", "--days", "7"],
            vec!["healthai", "reminders"],
            vec!["healthai", "add-medication", "--name", "X", "--dosage", "5mg"],
            vec!["healthai", "take", "--name", ""],
            vec!["healthai", "alert", "--message", ""],
        ] {
            let cli = HealthAssistantCli::try_parse_from(args).unwrap();
            assert!(cli.run(HealthAiConfig::default()).await.is_ok());
        }
    }
}
