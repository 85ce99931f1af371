mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./bvexport.toml",
        "~/.config/bvexport/config.toml",
        "/etc/bvexport/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) {
    if let Some(path) = &config.tools.ffmpeg_path {
        if !path.exists() {
            tracing::warn!("Configured ffmpeg path does not exist: {:?}", path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_with_tools_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bvexport.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[tools]").unwrap();
        writeln!(file, "ffmpeg_path = \"/opt/ffmpeg/bin/ffmpeg\"").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.tools.ffmpeg_path.as_deref(),
            Some(Path::new("/opt/ffmpeg/bin/ffmpeg"))
        );
    }

    #[test]
    fn test_load_config_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bvexport.toml");
        std::fs::write(&path, "").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.tools.ffmpeg_path.is_none());
    }

    #[test]
    fn test_load_config_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bvexport.toml");
        std::fs::write(&path, "[tools\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_load_config_or_default_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[tools]\n").unwrap();

        let config = load_config_or_default(Some(&path)).unwrap();
        assert!(config.tools.ffmpeg_path.is_none());
    }
}
