use crate::config::SatchelConfig;
use crate::error::{ConfigError, Result};
use std::net::IpAddr;
use std::path::Path;

impl SatchelConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.entry.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "entry".to_string(),
                hint: "Provide the entry HTML file, e.g. `satchel build index.html`".to_string(),
            }
            .into());
        }

        if Path::new(&self.entry).is_absolute() {
            return Err(ConfigError::InvalidValue {
                field: "entry".to_string(),
                value: self.entry.clone(),
                hint: "The entry must be relative to the root directory".to_string(),
            }
            .into());
        }

        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "output".to_string(),
                hint: "Provide the bundle path with --out".to_string(),
            }
            .into());
        }

        validate_index_name(&self.serve.index)?;

        if self.serve.host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "serve.host".to_string(),
                value: self.serve.host.clone(),
                hint: "Use an IP address such as 127.0.0.1 or 0.0.0.0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// The index must be a bare file name inside the served directory.
pub fn validate_index_name(index: &str) -> Result<()> {
    if index.is_empty() || index.contains(['/', '\\']) || index == "." || index == ".." {
        return Err(ConfigError::InvalidValue {
            field: "serve.index".to_string(),
            value: index.to_string(),
            hint: "Use a file name such as index.html".to_string(),
        }
        .into());
    }
    Ok(())
}
