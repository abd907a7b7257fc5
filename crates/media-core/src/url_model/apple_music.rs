//! Apple Music link parsing and the embed rewrite.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

use super::classify::parse_lenient;

use crate::media_item::MediaKind;

/// Host Apple serves embeddable players from.
pub const APPLE_MUSIC_EMBED_HOST: &str = "embed.music.apple.com";

const APPLE_MUSIC_HOST: &str = "music.apple.com";

/// `/{storefront}/{playlist|album|station}/{optional slug}/{id}`
fn resource_path() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^/([A-Za-z]{2})/(playlist|album|station)/(?:([^/]+)/)?([^/]+)/?$")
            .expect("static regex")
    })
}

/// Parsed Apple Music playlist, album or station link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppleMusicLink {
    /// Two-letter storefront, e.g. `us`.
    pub storefront: String,
    /// One of the three Apple Music kinds.
    pub kind: MediaKind,
    /// Human-readable name segment when the link has one.
    pub slug: Option<String>,
    /// Catalog id (`pl.…`, `ra.…` or a numeric album id).
    pub id: String,
}

fn is_apple_music_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == APPLE_MUSIC_HOST || host.ends_with(".music.apple.com")
}

fn parse_url(url: &Url) -> Option<AppleMusicLink> {
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    if !is_apple_music_host(url.host_str()?) {
        return None;
    }
    let caps = resource_path().captures(url.path())?;
    let kind = match &caps[2] {
        "playlist" => MediaKind::AppleMusicPlaylist,
        "album" => MediaKind::AppleMusicAlbum,
        _ => MediaKind::AppleMusicStation,
    };
    Some(AppleMusicLink {
        storefront: caps[1].to_ascii_lowercase(),
        kind,
        slug: caps.get(3).map(|m| m.as_str().to_string()),
        id: caps[4].to_string(),
    })
}

/// Parses an Apple Music playlist/album/station URL on `music.apple.com` or one of
/// its subdomains. A missing scheme reads as `https://`, as in provider detection.
/// Returns `None` for anything else.
pub fn parse_apple_music_url(url: &str) -> Option<AppleMusicLink> {
    let parsed = parse_lenient(url)?;
    parse_url(&parsed)
}

/// True for `https://` Apple Music playlist, album or station links.
pub fn is_valid_apple_music_url(url: &str) -> bool {
    url.trim().starts_with("https://") && parse_apple_music_url(url).is_some()
}

/// Rewrites an Apple Music link into its embeddable form on [`APPLE_MUSIC_EMBED_HOST`].
pub fn transform_apple_music_url(url: &str) -> String {
    transform_apple_music_url_with_host(url, APPLE_MUSIC_EMBED_HOST)
}

/// Rewrites an Apple Music link to `https://{embed_host}/…`, keeping path and query
/// and dropping the fragment. Scheme-less links are accepted; unrecognized input is
/// returned unchanged.
pub fn transform_apple_music_url_with_host(url: &str, embed_host: &str) -> String {
    let Some(mut parsed) = parse_lenient(url) else {
        return url.to_string();
    };
    if parse_url(&parsed).is_none() {
        return url.to_string();
    }
    if parsed.set_scheme("https").is_err() || parsed.set_host(Some(embed_host)).is_err() {
        return url.to_string();
    }
    parsed.set_fragment(None);
    parsed.to_string()
}
