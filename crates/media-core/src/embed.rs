//! Embed previews for media entries.
//!
//! The section hands each entry with a URL to an [`EmbedDelegate`] and shows
//! whatever frame it returns. [`IframeEmbed`] is the stock delegate: it derives
//! the provider's player URL from the entry's id and kind.

use thiserror::Error;
use url::form_urlencoded;

use crate::config::SectionConfig;
use crate::media_item::{MediaItem, MediaKind};
use crate::url_model::{
    bare_host, detect_media_kind, parse_apple_music_url, parse_lenient, spotify_segments,
    transform_apple_music_url_with_host, APPLE_MUSIC_EMBED_HOST,
};

/// Errors that can occur while building an embed preview.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    #[error("media entry has no URL yet")]
    EmptyId,

    #[error("invalid media URL: {0}")]
    InvalidUrl(String),

    #[error("no {0} id found in URL")]
    MissingId(MediaKind),
}

/// Player frame for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFrame {
    pub src: String,
    pub height: u32,
    pub title: String,
}

impl EmbedFrame {
    /// `<iframe>` markup for the frame.
    pub fn to_html(&self) -> String {
        format!(
            "<iframe src=\"{}\" title=\"{}\" width=\"100%\" height=\"{}\" frameborder=\"0\" \
             allow=\"autoplay; encrypted-media; fullscreen; clipboard-write\" loading=\"lazy\"></iframe>",
            escape_attr(&self.src),
            escape_attr(&self.title),
            self.height
        )
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders a preview for an entry that has a normalized URL.
pub trait EmbedDelegate {
    fn embed(&self, item: &MediaItem) -> Result<EmbedFrame, EmbedError>;
}

/// Frame height per provider layout.
pub fn frame_height(kind: MediaKind) -> u32 {
    match kind {
        MediaKind::Youtube => 315,
        MediaKind::Soundcloud => 166,
        MediaKind::SoundcloudPlaylist => 450,
        MediaKind::Spotify => 152,
        MediaKind::SpotifyPlaylist => 380,
        MediaKind::AppleMusicPlaylist | MediaKind::AppleMusicAlbum => 450,
        MediaKind::AppleMusicStation => 175,
    }
}

/// Stock delegate producing provider iframe players.
#[derive(Debug, Clone)]
pub struct IframeEmbed {
    apple_music_embed_host: String,
}

impl Default for IframeEmbed {
    fn default() -> Self {
        Self {
            apple_music_embed_host: APPLE_MUSIC_EMBED_HOST.to_string(),
        }
    }
}

impl IframeEmbed {
    pub fn new(config: &SectionConfig) -> Self {
        Self {
            apple_music_embed_host: config.apple_music_embed_host.clone(),
        }
    }

    /// Player URL for `url`, interpreted as `kind`.
    pub fn embed_url(&self, url: &str, kind: MediaKind) -> Result<String, EmbedError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(EmbedError::EmptyId);
        }
        match kind {
            MediaKind::Youtube => youtube_video_id(url)
                .map(|id| format!("https://www.youtube.com/embed/{id}"))
                .ok_or(EmbedError::MissingId(kind)),
            MediaKind::Soundcloud | MediaKind::SoundcloudPlaylist => {
                if !matches!(
                    detect_media_kind(url),
                    Some(MediaKind::Soundcloud | MediaKind::SoundcloudPlaylist)
                ) {
                    return Err(EmbedError::InvalidUrl(url.to_string()));
                }
                let encoded: String = form_urlencoded::byte_serialize(url.as_bytes()).collect();
                Ok(format!(
                    "https://w.soundcloud.com/player/?url={encoded}&visual={}",
                    kind == MediaKind::SoundcloudPlaylist
                ))
            }
            MediaKind::Spotify | MediaKind::SpotifyPlaylist => {
                let resource = if kind == MediaKind::Spotify {
                    "track"
                } else {
                    "playlist"
                };
                spotify_id(url, resource)
                    .map(|id| format!("https://open.spotify.com/embed/{resource}/{id}"))
                    .ok_or(EmbedError::MissingId(kind))
            }
            MediaKind::AppleMusicPlaylist
            | MediaKind::AppleMusicAlbum
            | MediaKind::AppleMusicStation => {
                if parse_apple_music_url(url).is_none() {
                    return Err(EmbedError::InvalidUrl(url.to_string()));
                }
                Ok(transform_apple_music_url_with_host(
                    url,
                    &self.apple_music_embed_host,
                ))
            }
        }
    }
}

impl EmbedDelegate for IframeEmbed {
    fn embed(&self, item: &MediaItem) -> Result<EmbedFrame, EmbedError> {
        let url = item.normalized_url().ok_or(EmbedError::EmptyId)?;
        let src = match item.embed_url.as_deref().filter(|s| !s.is_empty()) {
            Some(precomputed) => precomputed.to_string(),
            None => self.embed_url(url, item.kind)?,
        };
        let title = item
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| item.kind.label().to_string());
        Ok(EmbedFrame {
            src,
            height: frame_height(item.kind),
            title,
        })
    }
}

/// Extracts the video id from watch, short-link, embed and shorts URLs.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let parsed = parse_lenient(url)?;
    let host = bare_host(&parsed)?;

    let id = if host == "youtu.be" {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_string)
    } else if host.ends_with("youtube.com") || host.ends_with("youtube-nocookie.com") {
        let path = parsed.path().trim_matches('/');
        if path == "watch" {
            parsed
                .query_pairs()
                .find_map(|(key, value)| (key == "v").then(|| value.into_owned()))
        } else {
            path.strip_prefix("embed/")
                .or_else(|| path.strip_prefix("shorts/"))
                .or_else(|| path.strip_prefix("live/"))
                .map(|rest| rest.split('/').next().unwrap_or_default().to_string())
        }
    } else {
        None
    };

    id.filter(|id| !id.is_empty())
}

fn spotify_id(url: &str, resource: &str) -> Option<String> {
    if let Some(rest) = url.strip_prefix("spotify:") {
        let mut parts = rest.split(':');
        return match (parts.next(), parts.next()) {
            (Some(r), Some(id)) if r == resource && !id.is_empty() => Some(id.to_string()),
            _ => None,
        };
    }
    let parsed = parse_lenient(url)?;
    if bare_host(&parsed)?.as_str() != "open.spotify.com" {
        return None;
    }
    match spotify_segments(&parsed).as_slice() {
        [r, id, ..] if r == resource && !id.is_empty() => Some(id.clone()),
        _ => None,
    }
}
