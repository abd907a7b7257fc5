//! The "Media" form section.
//!
//! The section never owns the list. It renders whatever slice the parent passes
//! and turns user events into calls on a [`MediaSectionHandler`]; the parent
//! applies them and renders again.

mod accordion;
mod input;
mod view;

pub use accordion::AccordionState;
pub use input::MediaUrlInput;
pub use view::{render, InputView, PanelEmbed, PanelView, SectionView};

use crate::config::SectionConfig;
use crate::embed::EmbedDelegate;
use crate::media_item::{MediaField, MediaItem};
use crate::url_model::{clean_media_url, normalize_media_url_with_host, APPLE_MUSIC_DOMAIN};

/// Callbacks supplied by the parent that owns the media list.
pub trait MediaSectionHandler {
    fn on_media_change(&mut self, index: usize, field: MediaField, value: String);
    fn on_add_media(&mut self);
    fn on_remove_media(&mut self, index: usize);
}

/// Event front end of the section, configured once and reused across renders.
#[derive(Debug, Clone, Copy)]
pub struct MediaSection<'a> {
    config: &'a SectionConfig,
}

impl<'a> MediaSection<'a> {
    pub fn new(config: &'a SectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a SectionConfig {
        self.config
    }

    /// Renders `items` with `open` as the expanded panel.
    pub fn render(
        &self,
        items: &[MediaItem],
        open: &AccordionState,
        embed: &dyn EmbedDelegate,
    ) -> SectionView {
        render(items, self.config, open, embed)
    }

    /// Normalizes a change and forwards it to the parent.
    ///
    /// Only [`MediaField::Id`] is handled; other fields are dropped. The value is
    /// trimmed, a leading `h+ttps://` is collapsed to `https://`, and anything
    /// mentioning `music.apple.com` is rewritten to its embed URL before
    /// `on_media_change` fires exactly once.
    pub fn handle_media_change(
        &self,
        handler: &mut dyn MediaSectionHandler,
        index: usize,
        field: MediaField,
        value: &str,
    ) {
        tracing::debug!(index, %field, value, "handling media change");
        if field != MediaField::Id {
            return;
        }

        let clean = clean_media_url(value);
        tracing::debug!(index, clean = %clean, "cleaned value");

        let normalized =
            normalize_media_url_with_host(&clean, &self.config.apple_music_embed_host);
        if clean.contains(APPLE_MUSIC_DOMAIN) {
            tracing::debug!(index, transformed = %normalized, "detected Apple Music URL");
        }
        handler.on_media_change(index, field, normalized);
    }

    pub fn add_media(&self, handler: &mut dyn MediaSectionHandler) {
        handler.on_add_media();
    }

    pub fn remove_media(&self, handler: &mut dyn MediaSectionHandler, index: usize) {
        handler.on_remove_media(index);
    }
}
