use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub style: StyleConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StyleConfig {
    /// Template applied at startup; unknown names fall back like any other load
    pub template: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AssetsConfig {
    pub base_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style: StyleConfig {
                template: "default_template".to_string(),
            },
            assets: AssetsConfig {
                base_path: PathBuf::from("assets"),
            },
            logging: LoggingConfig {
                filter: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("cosmo_scenes")
    }

    /// Layered load: defaults, then the optional file `name.*`, then environment
    pub fn load_from(name: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("style.template", "default_template")?
            .set_default("assets.base_path", "assets")?
            .set_default("logging.filter", "info")?
            // Load from file if exists
            .add_source(config::File::with_name(name).required(false))
            // Allow env var overrides (e.g. COSMO_SCENES_STYLE__TEMPLATE=dark_energy)
            .add_source(config::Environment::with_prefix("COSMO_SCENES").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let config = AppConfig::load_from(missing.to_str().unwrap()).unwrap();
        assert_eq!(config.style.template, AppConfig::default().style.template);
        assert_eq!(config.assets.base_path, PathBuf::from("assets"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenes.toml");
        std::fs::write(
            &path,
            "[style]\ntemplate = \"blue_ice\"\n\n[assets]\nbase_path = \"/srv/figures\"\n",
        )
        .unwrap();

        let name = dir.path().join("scenes");
        let config = AppConfig::load_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.style.template, "blue_ice");
        assert_eq!(config.assets.base_path, PathBuf::from("/srv/figures"));
        assert_eq!(config.logging.filter, "info");
    }
}
