//! Media entries owned by the parent form.
//!
//! `id` doubles as the normalized URL of the entry; [`MediaItem::normalized_url`]
//! names that role explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::url_model::detect_media_kind;

/// Provider/content variant of a media entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    #[default]
    Youtube,
    Soundcloud,
    SoundcloudPlaylist,
    Spotify,
    SpotifyPlaylist,
    AppleMusicPlaylist,
    AppleMusicAlbum,
    AppleMusicStation,
}

impl MediaKind {
    pub const ALL: [MediaKind; 8] = [
        MediaKind::Youtube,
        MediaKind::Soundcloud,
        MediaKind::SoundcloudPlaylist,
        MediaKind::Spotify,
        MediaKind::SpotifyPlaylist,
        MediaKind::AppleMusicPlaylist,
        MediaKind::AppleMusicAlbum,
        MediaKind::AppleMusicStation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Youtube => "youtube",
            MediaKind::Soundcloud => "soundcloud",
            MediaKind::SoundcloudPlaylist => "soundcloud-playlist",
            MediaKind::Spotify => "spotify",
            MediaKind::SpotifyPlaylist => "spotify-playlist",
            MediaKind::AppleMusicPlaylist => "apple-music-playlist",
            MediaKind::AppleMusicAlbum => "apple-music-album",
            MediaKind::AppleMusicStation => "apple-music-station",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        MediaKind::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// Human label used in panel triggers ("Spotify Playlist", ...).
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Youtube => "YouTube Video",
            MediaKind::Soundcloud => "SoundCloud Track",
            MediaKind::SoundcloudPlaylist => "SoundCloud Playlist",
            MediaKind::Spotify => "Spotify Track",
            MediaKind::SpotifyPlaylist => "Spotify Playlist",
            MediaKind::AppleMusicPlaylist => "Apple Music Playlist",
            MediaKind::AppleMusicAlbum => "Apple Music Album",
            MediaKind::AppleMusicStation => "Apple Music Station",
        }
    }

    pub fn is_apple_music(self) -> bool {
        matches!(
            self,
            MediaKind::AppleMusicPlaylist
                | MediaKind::AppleMusicAlbum
                | MediaKind::AppleMusicStation
        )
    }

    /// Classifies a URL by provider host and path. `None` for anything unrecognized.
    pub fn detect(url: &str) -> Option<Self> {
        detect_media_kind(url)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the media list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Entry key; holds the normalized URL once the user has pasted one.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    /// URL as the section forwarded it. For Apple Music links that is already the
    /// embed-host form; display names still read the slug from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,
}

impl MediaItem {
    /// Entry appended by the parent when the user asks for a new one.
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn with_url(url: impl Into<String>, kind: MediaKind) -> Self {
        let url = url.into();
        Self {
            id: url.clone(),
            title: None,
            kind,
            embed_url: None,
            raw_url: Some(url),
        }
    }

    pub fn normalized_url(&self) -> Option<&str> {
        if self.id.is_empty() {
            None
        } else {
            Some(&self.id)
        }
    }

    pub fn has_url(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Field keys a change event can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaField {
    Id,
    Title,
    Type,
    EmbedUrl,
    RawUrl,
}

impl MediaField {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaField::Id => "id",
            MediaField::Title => "title",
            MediaField::Type => "type",
            MediaField::EmbedUrl => "embedUrl",
            MediaField::RawUrl => "rawUrl",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" => Some(MediaField::Id),
            "title" => Some(MediaField::Title),
            "type" => Some(MediaField::Type),
            "embedUrl" => Some(MediaField::EmbedUrl),
            "rawUrl" => Some(MediaField::RawUrl),
            _ => None,
        }
    }
}

impl fmt::Display for MediaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
