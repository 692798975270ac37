//!

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use snack_selector::Preferences;
use vending_entities::{default_inventory, Inventory};

use crate::constants;

///
#[derive(Serialize, Deserialize, Default)]
pub struct Configuration {
    ///
    #[serde(default)]
    pub machine: MachineConfiguration,

    ///
    #[serde(default)]
    pub selector: Preferences,

    ///
    #[serde(default)]
    pub log: LogConfiguration,
}

///
#[derive(Serialize, Deserialize)]
pub struct MachineConfiguration {
    /// Credit already in the machine at start up
    #[serde(default)]
    pub coins_deposited: u32,

    ///
    #[serde(default = "default_inventory")]
    pub inventory: Inventory,
}

impl Default for MachineConfiguration {
    #[inline]
    fn default() -> Self {
        Self {
            coins_deposited: 0,
            inventory: default_inventory(),
        }
    }
}

///
#[derive(Serialize, Deserialize, Default)]
pub struct LogConfiguration {
    /// Journal lines are kept in memory when unset
    pub path: Option<String>,
}

impl Configuration {
    /// An explicitly configured file has to exist, the default one doesn't
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = env::var(constants::VENDCLI_CONFIG_PATH) {
            return Self::read(Path::new(&path));
        }

        let home = env::var("HOME").unwrap_or_else(|_| ".".to_owned());
        let path = PathBuf::from(home).join(constants::DEFAULT_CONFIG_FILE);

        if path.is_file() {
            Self::read(&path)
        } else {
            Ok(Self::default())
        }
    }

    ///
    fn read(path: &Path) -> anyhow::Result<Self> {
        let config = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: Self = toml::from_str(&config)
            .with_context(|| format!("Invalid config file at {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use vending_entities::Good;

    use super::*;

    #[test]
    fn full_config() {
        let raw = r#"
            [machine]
            coins_deposited = 3

            [machine.inventory]
            Soda = { price = 5, remaining_count = 2 }

            [selector]
            default_selection = "Soda"

            [selector.favorites]
            Duke = "Soda"

            [log]
            path = "/tmp/vendcli.log"
        "#;

        let config: Configuration = toml::from_str(raw).expect("valid config");

        assert_eq!(3, config.machine.coins_deposited);
        assert_eq!(Some(&Good::new(5, 2)), config.machine.inventory.get("Soda"));
        assert_eq!(1, config.machine.inventory.len());
        assert_eq!("Soda", config.selector.resolve_preference("Anyone"));
        assert_eq!(Some("/tmp/vendcli.log"), config.log.path.as_deref());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Configuration = toml::from_str("").expect("valid config");

        assert_eq!(0, config.machine.coins_deposited);
        assert_eq!(default_inventory(), config.machine.inventory);
        assert_eq!("Cookies", config.selector.resolve_preference("Duke"));
        assert_eq!(None, config.log.path);
    }
}
