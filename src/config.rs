use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub reference: ReferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// URL or local path of the reference document
    pub source: Option<String>,
    /// API base URL shown in generated requests
    pub base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: ReferenceConfig {
                source: None,
                base_url: None,
            },
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        let config_dir = home_dir.join(".config");
        let app_dir = config_dir.join("apiref-tui");

        // Create directory if it doesn't exist
        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir.join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;
        Ok(())
    }

    /// Set the document source, auto-extract the base URL, and save
    pub fn set_reference_source(&mut self, source: String, base_url: Option<String>) -> Result<()> {
        self.reference.source = Some(source.clone());

        // Use provided base_url, or extract from the source URL
        self.reference.base_url = base_url.or_else(|| Some(extract_base_url(&source)));

        self.save()?;
        Ok(())
    }
}

/// Validation for the source field: remote URL or local file path
pub fn validate_source(source: &str) -> Result<(), String> {
    if source.is_empty() {
        return Err("Source cannot be empty".to_string());
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        return Ok(());
    }

    // Anything else is treated as a local path
    if source.contains("://") {
        return Err("Only http:// and https:// URLs are supported".to_string());
    }

    Ok(())
}

/// Extracts base URL from a document URL
/// Example: http://localhost:5000/docs/reference.json -> http://localhost:5000
/// Local paths fall back unchanged.
pub fn extract_base_url(source: &str) -> String {
    if let Ok(parsed) = url::Url::parse(source) {
        let scheme = parsed.scheme();
        let host = parsed.host_str().unwrap_or("localhost");

        if let Some(port) = parsed.port() {
            format!("{}://{}:{}", scheme, host, port)
        } else {
            format!("{}://{}", scheme, host)
        }
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_source_urls() {
        assert!(validate_source("https://docs.example.com/reference.json").is_ok());
        assert!(validate_source("http://localhost:5000/reference.json").is_ok());
    }

    #[test]
    fn test_validate_source_local_path() {
        assert!(validate_source("/home/me/reference.json").is_ok());
        assert!(validate_source("reference.json").is_ok());
    }

    #[test]
    fn test_validate_source_rejects_empty_and_odd_schemes() {
        assert!(validate_source("").is_err());
        assert!(validate_source("ftp://example.com/reference.json").is_err());
    }

    #[test]
    fn test_extract_base_url_with_port() {
        assert_eq!(
            extract_base_url("http://localhost:5000/docs/reference.json"),
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_extract_base_url_without_port() {
        assert_eq!(
            extract_base_url("https://docs.example.com/reference.json"),
            "https://docs.example.com"
        );
    }

    #[test]
    fn test_extract_base_url_local_path_unchanged() {
        assert_eq!(extract_base_url("/home/me/reference.json"), "/home/me/reference.json");
    }
}
