use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_APPLICANTS_PATH: &str = "./applicants.txt";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Distinguishes runtime behavior for different stages of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for an admissions run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub intake: IntakeConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("ADMISSIONS_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let applicants_path = env::var("ADMISSIONS_APPLICANTS_PATH")
            .unwrap_or_else(|_| DEFAULT_APPLICANTS_PATH.to_string());
        let output_dir =
            env::var("ADMISSIONS_OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());

        if applicants_path.trim().is_empty() {
            return Err(ConfigError::EmptyApplicantsPath);
        }
        if output_dir.trim().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }

        let log_level = env::var("ADMISSIONS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            intake: IntakeConfig {
                applicants_path: PathBuf::from(applicants_path),
                output_dir: PathBuf::from(output_dir),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where applicants are read from and rosters are written to.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub applicants_path: PathBuf,
    pub output_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyApplicantsPath,
    EmptyOutputDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyApplicantsPath => {
                write!(f, "ADMISSIONS_APPLICANTS_PATH must not be empty")
            }
            ConfigError::EmptyOutputDir => write!(f, "ADMISSIONS_OUTPUT_DIR must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
