//! `mediasec config` – show where the config lives and what is in effect.

use anyhow::Result;
use media_core::config::{self, SectionConfig};

pub fn run_config(cfg: &SectionConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", config::to_toml(cfg)?);
    Ok(())
}
