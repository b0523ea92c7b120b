use std::path::PathBuf;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "satchel.config.json";

/// Prefix of environment variables merged into the configuration.
pub const ENV_PREFIX: &str = "SATCHEL_";

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_entry() -> String {
    "index.html".to_string()
}

pub fn default_output() -> PathBuf {
    PathBuf::from("bundled/index.html")
}

pub fn default_serve_dir() -> PathBuf {
    PathBuf::from("bundled")
}

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    3000
}

pub fn default_index() -> String {
    "index.html".to_string()
}

pub fn default_true() -> bool {
    true
}
