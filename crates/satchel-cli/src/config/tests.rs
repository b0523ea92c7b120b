#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_serialization() {
        let config = SatchelConfig::default();
        let json_val = serde_json::to_value(&config).unwrap();

        assert_eq!(json_val["entry"], "index.html");
        assert_eq!(json_val["output"], "bundled/index.html");
        assert_eq!(json_val["serve"]["port"], 3000);
        assert_eq!(json_val["minify"]["remove_processing_instructions"], true);

        let roundtrip: SatchelConfig = serde_json::from_value(json_val).unwrap();
        assert_eq!(roundtrip, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: SatchelConfig =
            serde_json::from_str(r#"{ "entry": "game.html", "serve": { "port": 8080 } }"#).unwrap();

        assert_eq!(config.entry, "game.html");
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.serve.host, "0.0.0.0");
        assert!(config.minify.enabled);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<SatchelConfig, _> = serde_json::from_str(r#"{ "entyr": "x.html" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        assert!(SatchelConfig::default().validate().is_ok());

        assert!(SatchelConfig {
            entry: "  ".to_string(),
            ..SatchelConfig::default()
        }
        .validate()
        .is_err());

        assert!(SatchelConfig {
            entry: "/abs/game.html".to_string(),
            ..SatchelConfig::default()
        }
        .validate()
        .is_err());

        assert!(SatchelConfig {
            output: PathBuf::new(),
            ..SatchelConfig::default()
        }
        .validate()
        .is_err());

        let mut bad_host = SatchelConfig::default();
        bad_host.serve.host = "localhost".to_string();
        assert!(bad_host.validate().is_err());
    }

    #[test]
    fn test_index_name_validation() {
        assert!(validate_index_name("index.html").is_ok());
        assert!(validate_index_name("").is_err());
        assert!(validate_index_name("..").is_err());
        assert!(validate_index_name("sub/index.html").is_err());
        assert!(validate_index_name("sub\\index.html").is_err());
    }

    #[test]
    fn test_minify_to_options() {
        let config = MinifyConfig {
            keep_comments: true,
            js: false,
            ..MinifyConfig::default()
        };
        let options = config.to_options().unwrap();
        assert!(options.keep_comments);
        assert!(!options.minify_js);
        assert!(options.minify_css);

        let disabled = MinifyConfig {
            enabled: false,
            ..MinifyConfig::default()
        };
        assert!(disabled.to_options().is_none());
    }

    #[test]
    fn test_serve_socket_addr_and_url() {
        let serve = ServeConfig::default();
        assert_eq!(serve.socket_addr().unwrap().to_string(), "0.0.0.0:3000");
        assert_eq!(serve.display_url(), "http://localhost:3000");

        let local = ServeConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            ..ServeConfig::default()
        };
        assert_eq!(local.display_url(), "http://127.0.0.1:8000");

        let v6 = ServeConfig {
            host: "::1".to_string(),
            ..ServeConfig::default()
        };
        assert_eq!(v6.display_url(), "http://[::1]:3000");
    }

    #[test]
    fn test_load_explicit_file_with_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.json");
        fs::write(
            &path,
            r#"{ "root": "./sisyphus", "entry": "game.html", "output": "bundled/sisyphus.html" }"#,
        )
        .unwrap();

        let overrides = ConfigOverrides {
            output: Some(PathBuf::from("dist/out.html")),
            ..ConfigOverrides::default()
        };
        let config = SatchelConfig::load(&overrides, Some(&path)).unwrap();

        assert_eq!(config.root, PathBuf::from("./sisyphus"));
        assert_eq!(config.entry, "game.html");
        assert_eq!(config.output, PathBuf::from("dist/out.html"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let err = SatchelConfig::load(&ConfigOverrides::default(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, r#"{ "serve": { "port": "not a port" } }"#).unwrap();

        let err = SatchelConfig::load(&ConfigOverrides::default(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid value for 'configuration'"));
    }
}
