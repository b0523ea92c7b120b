//! Configuration system for Satchel with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod tests;
mod validation;

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::{ConfigOverrides, MinifyOverrides, ServeOverrides};
pub use validation::validate_index_name;

/// Satchel configuration - loaded from satchel.config.json, env and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SatchelConfig {
    /// Directory the entry file and its assets live in
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Entry HTML file, relative to `root`
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Bundle file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Minification settings
    #[serde(default)]
    pub minify: MinifyConfig,

    /// Static server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

/// Minification settings for `satchel build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinifyConfig {
    /// Run the minifier at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Minify inline JavaScript
    #[serde(default = "default_true")]
    pub js: bool,

    /// Minify inline CSS
    #[serde(default = "default_true")]
    pub css: bool,

    /// Strip `<?...?>` processing instructions
    #[serde(default = "default_true")]
    pub remove_processing_instructions: bool,

    /// Keep HTML comments
    #[serde(default)]
    pub keep_comments: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            js: true,
            css: true,
            remove_processing_instructions: true,
            keep_comments: false,
        }
    }
}

impl MinifyConfig {
    /// Minifier options, or `None` when minification is disabled.
    pub fn to_options(&self) -> Option<satchel_bundler::MinifyOptions> {
        self.enabled.then(|| satchel_bundler::MinifyOptions {
            minify_js: self.js,
            minify_css: self.css,
            remove_processing_instructions: self.remove_processing_instructions,
            keep_comments: self.keep_comments,
        })
    }
}

/// Settings for `satchel serve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    /// Directory of pre-built files to serve
    #[serde(default = "default_serve_dir")]
    pub dir: PathBuf,

    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,

    /// File served for `/`
    #[serde(default = "default_index")]
    pub index: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            dir: default_serve_dir(),
            host: default_host(),
            port: default_port(),
            index: default_index(),
        }
    }
}

impl ServeConfig {
    /// Socket address to bind. Call after [`SatchelConfig::validate`].
    pub fn socket_addr(&self) -> crate::error::Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            crate::error::ConfigError::InvalidValue {
                field: "serve.host".to_string(),
                value: self.host.clone(),
                hint: "Use an IP address such as 127.0.0.1 or 0.0.0.0".to_string(),
            }
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// URL printed for users. Wildcard hosts are shown as localhost.
    pub fn display_url(&self) -> String {
        match self.host.as_str() {
            "0.0.0.0" | "::" => format!("http://localhost:{}", self.port),
            v6 if v6.contains(':') => format!("http://[{}]:{}", v6, self.port),
            host => format!("http://{}:{}", host, self.port),
        }
    }
}

impl Default for SatchelConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            entry: default_entry(),
            output: default_output(),
            minify: MinifyConfig::default(),
            serve: ServeConfig::default(),
        }
    }
}
