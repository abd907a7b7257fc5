//! `mediasec inspect <url>` – provider, display name and embed URL of a link.

use anyhow::Result;
use media_core::config::SectionConfig;
use media_core::embed::IframeEmbed;
use media_core::media_item::MediaKind;
use media_core::url_model::{
    is_valid_apple_music_url, media_display_name, normalize_media_url_with_host,
};

pub fn run_inspect(cfg: &SectionConfig, url: &str) -> Result<()> {
    let normalized = normalize_media_url_with_host(url, &cfg.apple_music_embed_host);
    println!("{:<14} {}", "NORMALIZED", normalized);

    let Some(kind) = MediaKind::detect(&normalized) else {
        println!("{:<14} unrecognized", "KIND");
        return Ok(());
    };
    println!("{:<14} {}", "KIND", kind);
    println!("{:<14} {}", "NAME", media_display_name(&normalized, kind));
    if kind.is_apple_music() {
        println!(
            "{:<14} {}",
            "APPLE VALID",
            if is_valid_apple_music_url(&normalized) { "yes" } else { "no" }
        );
    }
    match IframeEmbed::new(cfg).embed_url(&normalized, kind) {
        Ok(src) => println!("{:<14} {}", "EMBED", src),
        Err(e) => {
            tracing::debug!(url = %normalized, "no embed: {}", e);
            println!("{:<14} unavailable ({})", "EMBED", e);
        }
    }
    Ok(())
}
