use crate::config::{CONFIG_FILE_NAME, ENV_PREFIX, SatchelConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub minify: MinifyOverrides,
    pub serve: ServeOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MinifyOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_comments: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

const TOP_LEVEL_KEYS: &[&str] = &["root", "entry", "output", "minify", "serve"];

impl SatchelConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// Without an explicit `config_path`, `satchel.config.json` in the working
    /// directory is used if present.
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            tracing::debug!("Loading config file: {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        // SATCHEL_ROOT, SATCHEL_SERVE__PORT, SATCHEL_MINIFY__ENABLED, ...
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .filter(|key| {
                    let section = key.as_str().split('.').next().unwrap_or_default();
                    TOP_LEVEL_KEYS
                        .iter()
                        .any(|known| section.eq_ignore_ascii_case(known))
                }),
        );

        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: format!("Check {} syntax and field types", CONFIG_FILE_NAME),
        })?;

        config.validate()?;
        Ok(config)
    }
}
