use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::APPLE_MUSIC_EMBED_HOST;

/// Section copy and embed settings loaded from `~/.config/mediasec/config.toml`.
///
/// Every field has a default so partial files load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Section heading.
    pub heading: String,
    /// Line under the heading.
    pub description: String,
    /// Trigger label for entries without a URL yet.
    pub placeholder_label: String,
    /// Label above the URL input.
    pub input_label: String,
    /// Placeholder text inside the URL input.
    pub input_placeholder: String,
    /// Hint listing supported providers.
    pub supported_hint: String,
    /// Label of the trailing add control.
    pub add_label: String,
    /// Label of the per-entry remove control.
    pub remove_label: String,
    /// Host Apple Music links are rewritten to.
    pub apple_music_embed_host: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            heading: "Media".to_string(),
            description: "Share your music, videos, and playlists from YouTube, SoundCloud, \
                          Spotify, and Apple Music."
                .to_string(),
            placeholder_label: "New Media".to_string(),
            input_label: "Media URL".to_string(),
            input_placeholder: "Paste URL from YouTube, SoundCloud, Spotify, or Apple Music"
                .to_string(),
            supported_hint: "Supports: YouTube videos, SoundCloud tracks & playlists, \
                             Spotify tracks & playlists, Apple Music playlists"
                .to_string(),
            add_label: "Add Media".to_string(),
            remove_label: "Remove Media".to_string(),
            apple_music_embed_host: APPLE_MUSIC_EMBED_HOST.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mediasec")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Pretty TOML form of `cfg`, as written to a fresh config file.
pub fn to_toml(cfg: &SectionConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SectionConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SectionConfig> {
    if !path.exists() {
        let default_cfg = SectionConfig::default();
        let toml = to_toml(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: SectionConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = SectionConfig::default();
        assert_eq!(cfg.heading, "Media");
        assert_eq!(cfg.placeholder_label, "New Media");
        assert_eq!(cfg.add_label, "Add Media");
        assert_eq!(cfg.remove_label, "Remove Media");
        assert_eq!(cfg.apple_music_embed_host, "embed.music.apple.com");
    }

    #[test]
    fn config_toml_partial_file() {
        let toml = r#"
            heading = "Listen"
            apple_music_embed_host = "embed.example.test"
        "#;
        let cfg: SectionConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.heading, "Listen");
        assert_eq!(cfg.apple_music_embed_host, "embed.example.test");
        assert_eq!(cfg.placeholder_label, "New Media");
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, SectionConfig::default());
        assert!(path.exists());

        fs::write(&path, "add_label = \"New entry\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.add_label, "New entry");
        assert_eq!(loaded.remove_label, "Remove Media");
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "heading = [").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
