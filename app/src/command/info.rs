use dme_config::Config;
use std::path::PathBuf;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone)]
pub struct InfoInput {
    /// Explicit `--config` path, if any
    pub config_path: Option<PathBuf>,
}

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config_path = match input.config_path {
            Some(path) => path,
            None => Config::default_path()?,
        };
        let config = if config_path.exists() {
            Config::load_from(&config_path)?
        } else {
            Config::default()
        };

        println!("=== dme Configuration ===\n");

        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not found, using defaults)", config_path.display());
        }
        println!();

        println!("Endpoint:");
        println!("  URL: {}", config.endpoint.url);
        println!("  Timeout: {}s", config.endpoint.timeout_secs);
        println!();

        println!("Note:");
        println!("  Path: {}", config.note.path.display());
        println!("  Fallback: {}", truncate(&config.note.fallback_text, 60));

        Ok(())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}
