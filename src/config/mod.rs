// Required external crates for configuration management and serialization
use serde::Deserialize;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, Environment, File};

/// Default location of the joke file, relative to the working directory
pub const DEFAULT_JOKES_FILE: &str = "jokes.txt";

/// Configuration for the joke source
#[derive(Debug, Deserialize, Clone)]
pub struct JokesConfig {
    /// Path of the line-delimited joke file
    pub file: PathBuf,
}

/// Configuration for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,
    /// Optional directory for daily rolling log files; logs go to stderr when unset
    pub dir: Option<PathBuf>,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Joke source settings
    pub jokes: JokesConfig,
    /// Logging-related settings
    pub logging: LoggingConfig,
}

impl Settings {
    /// Loads settings from `config_dir` in the following order of precedence
    /// (highest to lowest):
    /// 1. Environment variables prefixed with JOKEGEN_
    /// 2. Local config file (local.toml) if present
    /// 3. Default config file (default.toml) if present
    /// 4. Built-in defaults
    ///
    /// Values are not validated here; call [`Settings::validate`] once
    /// command-line overrides have been applied.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = config_dir.join("default.toml");
        let local_config = config_dir.join("local.toml");

        let settings = Config::builder()
            .set_default("jokes.file", DEFAULT_JOKES_FILE)?
            .set_default("logging.level", "warn")?
            .add_source(File::from(default_config).required(false))
            .add_source(File::from(local_config).required(false))
            .add_source(Environment::with_prefix("JOKEGEN").separator("_"))
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(settings)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jokes.file.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "jokes.file must not be empty".to_string()
            ));
        }

        // Validate logging level
        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(
                format!("Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level)
            )),
        }?;

        // Create log directory if configured and doesn't exist
        if let Some(log_dir) = &self.logging.dir {
            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    ConfigError::Message(format!(
                        "Failed to create log directory at {}: {}",
                        log_dir.display(), e
                    ))
                })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests that read the environment through `load` must not overlap with
    // tests that set JOKEGEN_ variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_without_config_dir() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("missing")).unwrap();

        assert_eq!(settings.jokes.file, PathBuf::from(DEFAULT_JOKES_FILE));
        assert_eq!(settings.logging.level, "warn");
        assert!(settings.logging.dir.is_none());
    }

    #[test]
    fn test_local_overrides_default() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[jokes]\nfile = \"a.txt\"\n\n[logging]\nlevel = \"info\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("local.toml"), "[jokes]\nfile = \"b.txt\"\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();

        assert_eq!(settings.jokes.file, PathBuf::from("b.txt"));
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_rejects_bad_level() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.toml"), "[logging]\nlevel = \"loud\"\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.logging.level, "loud");

        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid logging level"));
    }

    #[test]
    fn test_environment_overrides_local() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.toml"), "[jokes]\nfile = \"a.txt\"\n").unwrap();
        std::fs::write(dir.path().join("local.toml"), "[jokes]\nfile = \"b.txt\"\n").unwrap();

        std::env::set_var("JOKEGEN_JOKES_FILE", "env.txt");
        let loaded = Settings::load(dir.path());
        std::env::remove_var("JOKEGEN_JOKES_FILE");

        assert_eq!(loaded.unwrap().jokes.file, PathBuf::from("env.txt"));
    }

    #[test]
    fn test_rejects_empty_jokes_path() {
        let settings = Settings {
            jokes: JokesConfig { file: PathBuf::new() },
            logging: LoggingConfig { level: "warn".to_string(), dir: None },
        };

        assert!(settings.validate().is_err());
    }
}
