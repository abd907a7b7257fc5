//! Provider classification from a pasted URL.

use url::Url;

use super::apple_music::parse_apple_music_url;
use crate::media_item::MediaKind;

/// Parses `url`, retrying with an `https://` prefix when the scheme was left off.
pub(crate) fn parse_lenient(url: &str) -> Option<Url> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Url::parse(trimmed) {
        Ok(u) if matches!(u.scheme(), "http" | "https") && u.has_host() => Some(u),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{trimmed}")).ok()
        }
        Err(_) => None,
    }
}

/// Host without `www.` / `m.` prefixes, lowercased.
pub(crate) fn bare_host(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(&host)
        .to_string();
    Some(host)
}

/// Path segments of a Spotify URL with locale (`intl-xx`) and `embed` prefixes removed.
pub(crate) fn spotify_segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .skip_while(|s| *s == "embed" || s.starts_with("intl-"))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn detect_spotify_uri(url: &str) -> Option<MediaKind> {
    let mut parts = url.trim().strip_prefix("spotify:")?.split(':');
    match (parts.next()?, parts.next()) {
        ("track", Some(id)) if !id.is_empty() => Some(MediaKind::Spotify),
        ("playlist", Some(id)) if !id.is_empty() => Some(MediaKind::SpotifyPlaylist),
        _ => None,
    }
}

/// Classifies a media URL into one of the supported provider kinds.
///
/// Returns `None` when the host or path does not match any known provider layout.
pub fn detect_media_kind(url: &str) -> Option<MediaKind> {
    if url.trim().starts_with("spotify:") {
        return detect_spotify_uri(url);
    }

    let parsed = parse_lenient(url)?;
    let host = bare_host(&parsed)?;

    match host.as_str() {
        "youtube.com" | "youtu.be" | "music.youtube.com" | "youtube-nocookie.com" => {
            Some(MediaKind::Youtube)
        }
        "soundcloud.com" | "on.soundcloud.com" => {
            let is_set = parsed
                .path_segments()
                .map(|mut segments| segments.any(|s| s == "sets"))
                .unwrap_or(false);
            if is_set {
                Some(MediaKind::SoundcloudPlaylist)
            } else {
                Some(MediaKind::Soundcloud)
            }
        }
        "open.spotify.com" => match spotify_segments(&parsed).first().map(String::as_str) {
            Some("track") => Some(MediaKind::Spotify),
            Some("playlist") => Some(MediaKind::SpotifyPlaylist),
            _ => None,
        },
        _ => parse_apple_music_url(parsed.as_str()).map(|link| link.kind),
    }
}
