//! Configuration module
//!
//! All tunables are read from the environment once at startup and carried in
//! an explicit [`Config`] that gets injected into the handlers through the
//! application state. Nothing configuration-related lives in process globals.

use std::env;

use anyhow::bail;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_CONVERTED_DIR: &str = "converted";
const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";
const DEFAULT_MAX_FILE_SIZE_MB: usize = 512;

/// Service configuration as loaded from the environment.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Directory that receives staged uploads.
    pub upload_dir: String,
    /// Directory the converter writes its output into.
    pub converted_dir: String,
    /// Converter binary; resolved through PATH when not absolute.
    pub ffmpeg_path: String,
    pub max_file_size_bytes: usize,
}

/// Application configuration handle.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServiceConfig>);

impl Config {
    fn inner(&self) -> &ServiceConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        let config = ServiceConfig {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment,
            cors_origins: parse_list(&cors_origins_str),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            converted_dir: env::var("CONVERTED_DIR")
                .unwrap_or_else(|_| DEFAULT_CONVERTED_DIR.to_string()),
            ffmpeg_path: env::var("FFMPEG_PATH")
                .unwrap_or_else(|_| DEFAULT_FFMPEG_PATH.to_string()),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
        };

        Ok(Config(Box::new(config)))
    }

    /// Fail-fast sanity checks, run once at startup.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let cfg = self.inner();
        if cfg.ffmpeg_path.is_empty() {
            bail!("FFMPEG_PATH must not be empty");
        }
        if cfg.upload_dir.is_empty() || cfg.converted_dir.is_empty() {
            bail!("UPLOAD_DIR and CONVERTED_DIR must not be empty");
        }
        if cfg.max_file_size_bytes == 0 {
            bail!("MAX_FILE_SIZE_MB must be greater than zero");
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.inner().environment.to_lowercase();
        env == "production" || env == "prod"
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.inner().server_port
    }

    pub fn environment(&self) -> &str {
        &self.inner().environment
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.inner().cors_origins
    }

    pub fn upload_dir(&self) -> &str {
        &self.inner().upload_dir
    }

    pub fn converted_dir(&self) -> &str {
        &self.inner().converted_dir
    }

    pub fn ffmpeg_path(&self) -> &str {
        &self.inner().ffmpeg_path
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.inner().max_file_size_bytes
    }
}

/// Split a comma-separated environment value into trimmed, non-empty entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config(Box::new(ServiceConfig {
            server_port: 8080,
            environment: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            upload_dir: "uploads".to_string(),
            converted_dir: "converted".to_string(),
            ffmpeg_path: "ffmpeg".to_string(),
            max_file_size_bytes: 512 * 1024 * 1024,
        }))
    }

    #[test]
    fn parse_list_trims_and_drops_empties() {
        assert_eq!(
            parse_list("http://a.example, http://b.example ,,"),
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
        assert_eq!(parse_list("*"), vec!["*".to_string()]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn validate_accepts_sane_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_ffmpeg_path() {
        let mut config = test_config();
        config.0.ffmpeg_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_upload_limit() {
        let mut config = test_config();
        config.0.max_file_size_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn production_detection() {
        let mut config = test_config();
        assert!(!config.is_production());
        config.0.environment = "Production".to_string();
        assert!(config.is_production());
        config.0.environment = "prod".to_string();
        assert!(config.is_production());
    }
}
