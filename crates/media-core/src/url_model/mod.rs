//! URL modeling for pasted media links.
//!
//! Cleans raw input (whitespace, duplicated scheme prefixes), routes Apple Music
//! links to their embeddable form, classifies providers and derives display names.

mod apple_music;
mod classify;
mod display_name;
mod scheme;

pub use apple_music::{
    is_valid_apple_music_url, parse_apple_music_url, transform_apple_music_url,
    transform_apple_music_url_with_host, AppleMusicLink, APPLE_MUSIC_EMBED_HOST,
};
pub use classify::detect_media_kind;
pub(crate) use classify::{bare_host, parse_lenient, spotify_segments};
pub use display_name::media_display_name;
pub use scheme::{repair_scheme_prefix, strip_input_prefix};

/// Substring that routes a cleaned value through the Apple Music transform.
pub const APPLE_MUSIC_DOMAIN: &str = "music.apple.com";

/// Trims whitespace and collapses a leading `h+ttps://` into `https://`.
///
/// Idempotent: `clean_media_url(&clean_media_url(x)) == clean_media_url(x)`.
pub fn clean_media_url(value: &str) -> String {
    repair_scheme_prefix(value.trim()).into_owned()
}

/// Full normalization applied before a URL is handed back to the parent.
///
/// Cleans the value, then rewrites anything mentioning `music.apple.com` into the
/// Apple Music embed form. Never fails; unrecognized input passes through cleaned.
///
/// # Examples
///
/// - `normalize_media_url("hhttps://youtu.be/xyz")` → `"https://youtu.be/xyz"`
/// - `normalize_media_url(" https://music.apple.com/us/album/a/1 ")` →
///   `"https://embed.music.apple.com/us/album/a/1"`
pub fn normalize_media_url(value: &str) -> String {
    normalize_media_url_with_host(value, APPLE_MUSIC_EMBED_HOST)
}

/// Same as [`normalize_media_url`] with a configurable Apple Music embed host.
pub fn normalize_media_url_with_host(value: &str, embed_host: &str) -> String {
    let clean = clean_media_url(value);
    if clean.contains(APPLE_MUSIC_DOMAIN) {
        transform_apple_music_url_with_host(&clean, embed_host)
    } else {
        clean
    }
}
