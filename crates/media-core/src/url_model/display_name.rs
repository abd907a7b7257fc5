//! Panel labels derived from the pasted URL.

use super::apple_music::parse_apple_music_url;
use super::classify::parse_lenient;
use super::clean_media_url;
use crate::media_item::MediaKind;

fn humanize(slug: &str) -> Option<String> {
    let words: Vec<&str> = slug
        .split(['-', '_', '+'])
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn soundcloud_slug(raw_url: &str, kind: MediaKind) -> Option<String> {
    let parsed = parse_lenient(raw_url)?;
    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();
    match (kind, segments.as_slice()) {
        (MediaKind::SoundcloudPlaylist, [_, "sets", name, ..]) => Some(name.to_string()),
        (MediaKind::Soundcloud, [_, name, ..]) if *name != "sets" => Some(name.to_string()),
        _ => None,
    }
}

/// Label for a media panel: the provider label, plus the name segment of the URL
/// when the provider puts one there (Apple Music, SoundCloud).
///
/// - `media_display_name("", MediaKind::Spotify)` → `"Spotify Track"`
/// - `media_display_name("https://soundcloud.com/a/night-drive", MediaKind::Soundcloud)`
///   → `"SoundCloud Track: night drive"`
pub fn media_display_name(raw_url: &str, kind: MediaKind) -> String {
    let raw = clean_media_url(raw_url);
    let slug = if raw.is_empty() {
        None
    } else if kind.is_apple_music() {
        parse_apple_music_url(&raw).and_then(|link| link.slug)
    } else if matches!(kind, MediaKind::Soundcloud | MediaKind::SoundcloudPlaylist) {
        soundcloud_slug(&raw, kind)
    } else {
        None
    };

    match slug.as_deref().and_then(humanize) {
        Some(name) => format!("{}: {}", kind.label(), name),
        None => kind.label().to_string(),
    }
}
