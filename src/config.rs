use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Rendering options for a message board instance.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Neutralize injected markup in user text bodies.
    pub escape_markup: bool,
    /// Render line breaks inside user text bodies.
    pub preserve_line_breaks: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            escape_markup: true,
            preserve_line_breaks: true,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "chatboard", "chatboard") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!("failed to create config dir: {e}");
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_config() -> Option<BoardConfig> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_config(config: &BoardConfig) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(config)?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_protective() {
        let config = BoardConfig::default();
        assert!(config.escape_markup);
        assert!(config.preserve_line_breaks);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = BoardConfig {
            escape_markup: false,
            preserve_line_breaks: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
