// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates cf-swap.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = generate_template_yaml(&Config::default());
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"# Path or name of the cf CLI
cf_binary: {}
# Live app is renamed to <app><retired_suffix> after the swap
retired_suffix: "{}"
# Copy the live app's health check type onto the candidate
carry_health_check: {}
# Abort any single cf command that runs longer than this
# command_timeout: 5m
# destinations:
#   prod:
#     cf_home: /home/deploy/.cf-prod
"#,
        config.cf_binary.display(),
        config.retired_suffix,
        config.carry_health_check
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_back_to_defaults() {
        let yaml = generate_template_yaml(&Config::default());
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.cf_binary, Path::new("cf"));
        assert_eq!(config.retired_suffix, "-old");
        assert!(config.carry_health_check);
        assert!(config.command_timeout.is_none());
    }
}
