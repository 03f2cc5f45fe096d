use crate::config::toml_config::DemoConfig;
use crate::core::Demo;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-demos")]
#[command(about = "Runs the factory method, decorator and observer demos")]
pub struct CliConfig {
    /// TOML scenario file; the stock scenario is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Demo to run, repeatable; overrides the scenario's demo list
    #[arg(short, long, value_enum)]
    pub demo: Vec<Demo>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the scenario and applies command line overrides.
    pub fn resolve(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };

        if !self.demo.is_empty() {
            tracing::info!("Demo list overridden to: {:?}", self.demo);
            config.demos = self.demo.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
