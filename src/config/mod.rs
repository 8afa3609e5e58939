use crate::core::{AppError, Result};
use crate::modules::schedules::repositories::ScheduleFormat;
use std::env;
use std::path::PathBuf;

pub mod server;

pub use server::ServerConfig;

const DEFAULT_SCHEDULE_PATH: &str = "data/fee_schedules.yaml";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        matches!(self.env.to_ascii_lowercase().as_str(), "prod" | "production")
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// JSON or YAML document holding the fee schedule records
    pub path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        let mut server = ServerConfig::new(
            env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
        );
        if let Ok(workers) = env::var("SERVER_WORKERS") {
            let workers = workers
                .parse()
                .map_err(|_| AppError::Configuration("Invalid SERVER_WORKERS".to_string()))?;
            server = server.with_workers(workers);
        }

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server,
            schedule: ScheduleConfig {
                path: env::var("FEE_SCHEDULE_PATH")
                    .unwrap_or_else(|_| DEFAULT_SCHEDULE_PATH.to_string())
                    .into(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if ScheduleFormat::from_path(&self.schedule.path).is_none() {
            return Err(AppError::Configuration(format!(
                "FEE_SCHEDULE_PATH must end in .json, .yaml or .yml: {}",
                self.schedule.path.display()
            )));
        }

        Ok(())
    }
}
