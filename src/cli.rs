use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// Tells jokes from a file, one per "y".
#[derive(Debug, Parser)]
#[command(name = "jokegen", version, about)]
pub struct Cli {
    /// Joke file, one joke per line (overrides configuration)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding default.toml and local.toml
    #[arg(long, value_name = "DIR", default_value = "config")]
    pub config_dir: PathBuf,

    /// Log level: error, warn, info, debug or trace (overrides configuration)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(file) = &self.file {
            settings.jokes.file = file.clone();
        }
        if let Some(level) = &self.log_level {
            settings.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JokesConfig, LoggingConfig};

    fn settings() -> Settings {
        Settings {
            jokes: JokesConfig { file: PathBuf::from("jokes.txt") },
            logging: LoggingConfig { level: "warn".to_string(), dir: None },
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["jokegen"]).unwrap();
        let mut settings = settings();
        cli.apply(&mut settings);

        assert_eq!(cli.config_dir, PathBuf::from("config"));
        assert_eq!(settings.jokes.file, PathBuf::from("jokes.txt"));
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["jokegen", "-f", "dad.txt", "--log-level", "debug"]).unwrap();
        let mut settings = settings();
        cli.apply(&mut settings);

        assert_eq!(settings.jokes.file, PathBuf::from("dad.txt"));
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn test_flags_rescue_bad_config_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[jokes]\nfile = \"\"\n\n[logging]\nlevel = \"loud\"\n",
        )
        .unwrap();
        let config_dir = dir.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "jokegen", "--log-level", "debug", "--file", "dad.txt", "--config-dir", config_dir,
        ])
        .unwrap();
        let mut settings = Settings::load(&cli.config_dir).unwrap();
        assert!(settings.validate().is_err());

        cli.apply(&mut settings);
        settings.validate().unwrap();

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.jokes.file, PathBuf::from("dad.txt"));
    }
}
