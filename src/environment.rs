// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::FsOps;

const DEFAULT_CV_PDF_PATH: &str = "social/CV-LeHoangDung.pdf";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_address")]
    pub address: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cv_pdf_path")]
    pub cv_pdf_path: PathBuf,
    #[serde(default)]
    pub cv_download_name: Option<String>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<EnvironmentConfig>,
    #[serde(default)]
    production: Option<EnvironmentConfig>,
}

fn default_address() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

fn default_cv_pdf_path() -> PathBuf {
    PathBuf::from(DEFAULT_CV_PDF_PATH)
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            cv_pdf_path: default_cv_pdf_path(),
            cv_download_name: None,
            log_file: None,
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration from `config_path`, falling back to defaults when it is absent
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let env_config = if config_path.exists() {
            let config_content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::select(&config_content, &environment)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            info!(
                "{} not found, using default configuration",
                config_path.display()
            );
            Self::default()
        };

        let mut resolved = env_config.resolve_paths()?;
        resolved.apply_env_overrides()?;
        Ok(resolved)
    }

    /// Active environment name: `PORTFOLIO_ENV`, then `ENVIRONMENT`, then `ENV`
    pub fn get_environment() -> String {
        std::env::var("PORTFOLIO_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn select(config_content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile = serde_yaml::from_str(config_content)?;

        let section = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(section.unwrap_or_default())
    }

    fn resolve_paths(mut self) -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        self.cv_pdf_path = FsOps::normalize_path(&current_dir, &self.cv_pdf_path);
        self.log_file = self
            .log_file
            .map(|path| FsOps::normalize_path(&current_dir, &path));
        Ok(self)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("ROCKET_PORT") {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
        }
        Ok(())
    }

    /// Filename sent in `Content-Disposition` for the CV download
    pub fn download_name(&self) -> String {
        self.cv_download_name.clone().unwrap_or_else(|| {
            self.cv_pdf_path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "cv.pdf".to_string())
        })
    }
}
