//! eventfinder configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventfinderError, EventfinderResult};
use crate::geo::Coordinates;
use crate::loader::DataSource;
use crate::select::HomeLayout;
use crate::store::FileStore;

static DEFAULT_DATA_SOURCE: &str = "data.json";

fn default_data_source() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("eventfinder"))
        .unwrap_or_else(|| PathBuf::from("~/.eventfinder"))
}

fn default_nearby_radius_km() -> f64 {
    500.0
}

fn default_nearby_limit() -> usize {
    4
}

fn default_featured_count() -> usize {
    HomeLayout::default().featured_count
}

fn default_upcoming_count() -> usize {
    HomeLayout::default().upcoming_count
}

/// Fallback origin for the nearby view when the user's location is unknown.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DefaultOrigin {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
}

impl Default for DefaultOrigin {
    /// Seoul City Hall
    fn default() -> Self {
        DefaultOrigin {
            lat: 37.5668,
            lng: 126.9785,
            label: "Seoul".to_string(),
        }
    }
}

impl DefaultOrigin {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Configuration at ~/.config/eventfinder/config.toml
///
/// Every key can also be set through `EVENTFINDER_<KEY>` environment
/// variables, e.g. `EVENTFINDER_DATA_SOURCE`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventfinderConfig {
    /// Path or http(s) URL of the event document
    #[serde(default = "default_data_source")]
    pub data_source: String,

    /// Where favorites and reviews are kept
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    #[serde(default = "default_nearby_radius_km")]
    pub nearby_radius_km: f64,

    #[serde(default = "default_nearby_limit")]
    pub nearby_limit: usize,

    #[serde(default = "default_featured_count")]
    pub featured_count: usize,

    #[serde(default = "default_upcoming_count")]
    pub upcoming_count: usize,

    // last, so it renders as a trailing [default_origin] table
    #[serde(default)]
    pub default_origin: DefaultOrigin,
}

impl Default for EventfinderConfig {
    fn default() -> Self {
        EventfinderConfig {
            data_source: default_data_source(),
            storage_dir: default_storage_dir(),
            nearby_radius_km: default_nearby_radius_km(),
            nearby_limit: default_nearby_limit(),
            featured_count: default_featured_count(),
            upcoming_count: default_upcoming_count(),
            default_origin: DefaultOrigin::default(),
        }
    }
}

impl EventfinderConfig {
    pub fn config_path() -> EventfinderResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventfinderError::Config("Could not determine config directory".into()))?
            .join("eventfinder");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path, creating a commented-out
    /// config file on first run.
    pub fn load() -> EventfinderResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EventfinderResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("EVENTFINDER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| EventfinderError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventfinderError::Config(e.to_string()))
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.data_source)
    }

    pub fn storage_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.storage_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.storage_path())
    }

    pub fn home_layout(&self) -> HomeLayout {
        HomeLayout {
            featured_count: self.featured_count,
            upcoming_count: self.upcoming_count,
        }
    }

    /// Resolved settings, rendered as TOML.
    pub fn to_toml(&self) -> EventfinderResult<String> {
        toml::to_string_pretty(self).map_err(|e| EventfinderError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventfinderResult<()> {
        let defaults = DefaultOrigin::default();
        let contents = format!(
            "\
# eventfinder configuration

# Event document (file path or http(s) URL):
# data_source = \"{}\"

# Where favorites and reviews are stored:
# storage_dir = \"~/.local/share/eventfinder\"

# Nearby view:
# nearby_radius_km = {}
# nearby_limit = {}

# Home page sections:
# featured_count = {}
# upcoming_count = {}

# Used when no location is given:
# [default_origin]
# lat = {}
# lng = {}
# label = \"{}\"
",
            DEFAULT_DATA_SOURCE,
            default_nearby_radius_km(),
            default_nearby_limit(),
            default_featured_count(),
            default_upcoming_count(),
            defaults.lat,
            defaults.lng,
            defaults.label,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventfinderError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventfinderError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_default_config_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eventfinder/config.toml");

        EventfinderConfig::create_default_config(&path).unwrap();
        let config = EventfinderConfig::load_from(&path).unwrap();

        assert_eq!(config.data_source, "data.json");
        assert_eq!(config.nearby_radius_km, 500.0);
        assert_eq!(config.nearby_limit, 4);
        assert_eq!(config.home_layout(), HomeLayout::default());
        assert_eq!(config.default_origin, DefaultOrigin::default());
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
data_source = "https://example.com/events.json"
storage_dir = "/tmp/eventfinder-test"
nearby_limit = 10

[default_origin]
lat = 35.1796
lng = 129.0756
label = "Busan"
"#,
        )
        .unwrap();

        let config = EventfinderConfig::load_from(&path).unwrap();
        assert_eq!(
            config.data_source(),
            DataSource::Url("https://example.com/events.json".into())
        );
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/eventfinder-test"));
        assert_eq!(config.nearby_limit, 10);
        assert_eq!(config.default_origin.label, "Busan");
        assert_eq!(config.featured_count, 4);
    }

    #[test]
    fn test_to_toml_includes_origin() {
        let rendered = EventfinderConfig::default().to_toml().unwrap();
        assert!(rendered.contains("nearby_radius_km = 500.0"));
        assert!(rendered.contains("[default_origin]"));
        assert!(rendered.contains("label = \"Seoul\""));
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "nearby_limit = \"lots\"").unwrap();

        assert!(matches!(
            EventfinderConfig::load_from(&path),
            Err(EventfinderError::Config(_))
        ));
    }
}
