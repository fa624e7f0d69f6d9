//! Default config location (`~/.config/trains/config.toml` on Linux)

use std::path::PathBuf;

const CONFIG_DIR: &str = "trains";
const CONFIG_FILE: &str = "config.toml";

/// Overrides the directory holding `config.toml`
pub const CONFIG_DIR_ENV_VAR: &str = "TRAINS_CONFIG_DIR";

/// Path of the default config file, if a config directory can be determined
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
