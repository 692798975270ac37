//!

/// Environment variable naming the config file
pub const VENDCLI_CONFIG_PATH: &str = "VENDCLI_CONFIG_PATH";

/// Relative to `$HOME`
pub const DEFAULT_CONFIG_FILE: &str = ".vendcli/config.toml";

///
pub const SESSION_NAME: &str = "vendcli";
