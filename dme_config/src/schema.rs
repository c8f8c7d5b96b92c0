use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use dme_core::{DEFAULT_ENDPOINT, DEFAULT_FALLBACK_NOTE};

const CONFIG_DIR_NAME: &str = "dme";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub note: NoteConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    #[serde(default = "EndpointConfig::default_url")]
    pub url: String,
    /// Request timeout (seconds)
    #[serde(default = "EndpointConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl EndpointConfig {
    fn default_url() -> String {
        DEFAULT_ENDPOINT.to_string()
    }

    const fn default_timeout_secs() -> u64 {
        30
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NoteConfig {
    /// Note file read when no path or text is given on the command line.
    #[serde(default = "NoteConfig::default_path")]
    pub path: PathBuf,
    /// Extracted instead when the note file cannot be read.
    #[serde(default = "NoteConfig::default_fallback_text")]
    pub fallback_text: String,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            fallback_text: Self::default_fallback_text(),
        }
    }
}

impl NoteConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("physician_note.txt")
    }

    fn default_fallback_text() -> String {
        DEFAULT_FALLBACK_NOTE.to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load `~/dme/config.json`, or the built-in defaults when it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::default_path()?;

        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load an explicit config file; a missing file is an error here.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.endpoint.url)
            .with_context(|| format!("Invalid endpoint URL: {}", self.endpoint.url))?;

        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Endpoint URL must use http or https, got: {}",
                url.scheme()
            );
        }

        if self.endpoint.timeout_secs == 0 {
            anyhow::bail!("endpoint.timeout_secs must be greater than zero");
        }

        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point endpoint.url at your intake service");
        println!("   2. Set note.path to the physician note to process");
        println!("   3. Run 'dme send' to extract and submit the order");
        println!();
        println!("🔧 Configuration options:");
        println!("   - endpoint.timeout_secs: HTTP request timeout");
        println!("   - note.fallback_text: note used when note.path cannot be read");
        println!();
        Ok(())
    }

    /// Write the default template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}
