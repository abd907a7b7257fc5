//! `mediasec normalize <value>` – print the value the parent would receive.

use anyhow::Result;
use media_core::config::SectionConfig;
use media_core::url_model::{normalize_media_url_with_host, strip_input_prefix};

pub fn normalized_value(cfg: &SectionConfig, value: &str, from_input: bool) -> String {
    let value = if from_input {
        strip_input_prefix(value)
    } else {
        value.to_string()
    };
    normalize_media_url_with_host(&value, &cfg.apple_music_embed_host)
}

pub fn run_normalize(cfg: &SectionConfig, value: &str, from_input: bool) -> Result<()> {
    println!("{}", normalized_value(cfg, value, from_input));
    Ok(())
}
