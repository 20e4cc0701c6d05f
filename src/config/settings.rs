use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_site_name() -> String {
    "Masjid Noor".to_string()
}
fn default_city() -> String {
    "Patna".to_string()
}
fn default_country() -> String {
    "India".to_string()
}
fn default_method() -> u8 {
    2
}
fn default_admin_username() -> String {
    "admin".to_string()
}
fn default_admin_password() -> String {
    "123456".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    /// City/country sent to the AlAdhan timings API.
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
    /// AlAdhan calculation method id (2 = ISNA).
    #[serde(default = "default_method")]
    pub method: u8,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            city: default_city(),
            country: default_country(),
            method: default_method(),
        }
    }
}

/// Operator credentials live in the config file, not in code. Comparison
/// is still plaintext equality — this gates a local notice board, not a
/// networked service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,
    #[serde(default = "default_admin_password")]
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
        }
    }
}

impl AdminConfig {
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username.trim() == self.username && password.trim() == self.password
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "minbar").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("minbar.db"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.write_to(&Self::config_path()?)
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_match_the_seed_pair() {
        let admin = AdminConfig::default();
        assert!(admin.verify("admin", "123456"));
        assert!(admin.verify(" admin ", " 123456 "));
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        let admin = AdminConfig::default();
        assert!(!admin.verify("admin", "wrong"));
        assert!(!admin.verify("root", "123456"));
        assert!(!admin.verify("", ""));
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: AppConfig = toml::from_str("[site]\ncity = \"Lahore\"\n").unwrap();
        assert_eq!(config.site.city, "Lahore");
        assert_eq!(config.site.country, "India");
        assert_eq!(config.site.method, 2);
        assert_eq!(config.admin.username, "admin");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        // Nested path: write_to must create missing parent directories,
        // as the first run does for the real config dir.
        let path = dir.path().join("conf").join("config.toml");

        let mut config = AppConfig::default();
        config.site.city = "Karachi".to_string();
        config.admin.password = "s3cret".to_string();

        config.write_to(&path).unwrap();
        let back: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.site.city, "Karachi");
        assert!(back.admin.verify("admin", "s3cret"));
    }
}
