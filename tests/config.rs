// ABOUTME: Integration tests for configuration parsing and discovery.
// ABOUTME: Tests YAML parsing, defaults, validation, and destination merging.

use cf_swap::config::*;
use cf_swap::error::Error;
use std::fs;
use std::path::Path;
use std::time::Duration;

mod parsing {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.cf_binary, Path::new("cf"));
        assert_eq!(config.retired_suffix, "-old");
        assert!(config.carry_health_check);
        assert!(config.cf_home.is_none());
        assert!(config.command_timeout.is_none());
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
cf_binary: /usr/local/bin/cf8
cf_home: /home/deploy/.cf-staging
command_timeout: 90s
retired_suffix: -blue
carry_health_check: false

destinations:
  prod:
    cf_home: /home/deploy/.cf-prod
    command_timeout: 5m
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.cf_binary, Path::new("/usr/local/bin/cf8"));
        assert_eq!(config.command_timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.retired_name("web"), "web-blue");
        assert!(!config.carry_health_check);
        assert!(config.destinations.contains_key("prod"));
    }

    #[test]
    fn unknown_field_rejected() {
        let err = Config::from_yaml("cf_bin: cf").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn empty_retired_suffix_rejected() {
        let err = Config::from_yaml("retired_suffix: \"\"").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = Config::from_yaml("command_timeout: 0s").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}

mod destinations {
    use super::*;

    const YAML: &str = r#"
cf_home: /home/deploy/.cf-staging
command_timeout: 1m
destinations:
  prod:
    cf_home: /home/deploy/.cf-prod
  legacy:
    cf_binary: /opt/cf6/cf
"#;

    #[test]
    fn destination_overrides_cf_home() {
        let config = Config::from_yaml(YAML).unwrap().for_destination("prod").unwrap();
        assert_eq!(
            config.cf_home.as_deref(),
            Some(Path::new("/home/deploy/.cf-prod"))
        );
        assert_eq!(config.command_timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn destination_keeps_unset_fields() {
        let config = Config::from_yaml(YAML)
            .unwrap()
            .for_destination("legacy")
            .unwrap();
        assert_eq!(config.cf_binary, Path::new("/opt/cf6/cf"));
        assert_eq!(
            config.cf_home.as_deref(),
            Some(Path::new("/home/deploy/.cf-staging"))
        );
    }

    #[test]
    fn unknown_destination() {
        let err = Config::from_yaml(YAML)
            .unwrap()
            .for_destination("nowhere")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownDestination(ref d) if d == "nowhere"));
    }
}

mod discovery {
    use super::*;

    #[test]
    fn discovers_primary_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "retired_suffix: -prev\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.retired_suffix, "-prev");
    }

    #[test]
    fn discovers_dir_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".cf-swap")).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_DIR), "carry_health_check: false\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert!(!config.carry_health_check);
    }

    #[test]
    fn missing_file_is_error_for_discover() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn missing_file_is_default_for_discover_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover_or_default(dir.path()).unwrap();
        assert_eq!(config.retired_suffix, "-old");
    }

    #[test]
    fn broken_file_is_not_silently_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "carry_health_check: [").unwrap();
        assert!(Config::discover_or_default(dir.path()).is_err());
    }
}

mod init {
    use super::*;

    #[test]
    fn init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), false).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert!(config.carry_health_check);
    }

    #[test]
    fn init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "retired_suffix: -x\n").unwrap();

        let err = init_config(dir.path(), false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));

        init_config(dir.path(), true).unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.retired_suffix, "-old");
    }
}
