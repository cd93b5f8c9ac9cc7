use crate::config::toml_config::TheoremConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

/// Flags shared by both binaries; every flag is optional.
#[derive(Debug, Clone, Default, Parser)]
#[command(version, about = "Noetherian module theorem demonstrations")]
pub struct CliArgs {
    /// Path to a TOML file overriding the built-in ring, module and conditions
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Log process CPU and memory usage
    #[arg(long)]
    pub monitor: bool,
}

impl CliArgs {
    /// 載入並驗證配置；未指定 --config 時使用內建範例
    pub fn load_config(&self) -> Result<TheoremConfig> {
        let config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TheoremConfig::from_file(path)?
            }
            None => TheoremConfig::fixture(),
        };

        config.validate()?;
        tracing::debug!("Configuration: {:?}", config);
        Ok(config)
    }
}
