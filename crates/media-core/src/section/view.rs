//! Render model of the section and its plain-text form.

use std::fmt;

use super::accordion::AccordionState;
use crate::config::SectionConfig;
use crate::embed::{EmbedDelegate, EmbedFrame};
use crate::media_item::MediaItem;
use crate::url_model::media_display_name;

/// URL input inside a panel. Always rendered with an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub id: String,
    pub label: String,
    pub placeholder: String,
    pub hint: String,
    pub value: String,
}

/// Preview area of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEmbed {
    Frame(EmbedFrame),
    Unavailable(String),
}

/// One collapsible entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub index: usize,
    /// Accordion value, `media-{index}`.
    pub value: String,
    pub trigger: String,
    pub open: bool,
    pub input: InputView,
    /// Present only when the entry has a URL.
    pub embed: Option<PanelEmbed>,
    pub remove_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub heading: String,
    pub description: String,
    pub panels: Vec<PanelView>,
    pub add_label: String,
}

fn trigger_label(item: &MediaItem, config: &SectionConfig) -> String {
    if !item.has_url() {
        return config.placeholder_label.clone();
    }
    match item.title.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(title) => title.to_string(),
        None => media_display_name(item.raw_url.as_deref().unwrap_or(""), item.kind),
    }
}

fn panel(
    index: usize,
    item: &MediaItem,
    config: &SectionConfig,
    open: &AccordionState,
    embed: &dyn EmbedDelegate,
) -> PanelView {
    let preview = if item.has_url() {
        Some(match embed.embed(item) {
            Ok(frame) => PanelEmbed::Frame(frame),
            Err(e) => {
                tracing::warn!(index, id = %item.id, "embed unavailable: {}", e);
                PanelEmbed::Unavailable(e.to_string())
            }
        })
    } else {
        None
    };

    PanelView {
        index,
        value: AccordionState::value_for(index),
        trigger: trigger_label(item, config),
        open: open.is_open(index),
        input: InputView {
            id: format!("media-url-{index}"),
            label: config.input_label.clone(),
            placeholder: config.input_placeholder.clone(),
            hint: config.supported_hint.clone(),
            value: String::new(),
        },
        embed: preview,
        remove_label: config.remove_label.clone(),
    }
}

/// Renders one panel per item, in order, followed by the add control.
///
/// Total for any slice; embed failures become [`PanelEmbed::Unavailable`].
pub fn render(
    items: &[MediaItem],
    config: &SectionConfig,
    open: &AccordionState,
    embed: &dyn EmbedDelegate,
) -> SectionView {
    SectionView {
        heading: config.heading.clone(),
        description: config.description.clone(),
        panels: items
            .iter()
            .enumerate()
            .map(|(index, item)| panel(index, item, config, open, embed))
            .collect(),
        add_label: config.add_label.clone(),
    }
}

impl fmt::Display for SectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "{}", self.description)?;
        for p in &self.panels {
            let marker = if p.open { 'v' } else { '>' };
            writeln!(f)?;
            writeln!(f, "{} [{}] {}", marker, p.index, p.trigger)?;
            if !p.open {
                continue;
            }
            writeln!(f, "    {} ({}): {}", p.input.label, p.input.id, p.input.placeholder)?;
            writeln!(f, "    {}", p.input.hint)?;
            match &p.embed {
                Some(PanelEmbed::Frame(frame)) => {
                    writeln!(f, "    preview: {} ({}px)", frame.src, frame.height)?
                }
                Some(PanelEmbed::Unavailable(reason)) => {
                    writeln!(f, "    preview unavailable: {}", reason)?
                }
                None => {}
            }
            writeln!(f, "    [{}]", p.remove_label)?;
        }
        writeln!(f)?;
        write!(f, "[+ {}]", self.add_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::{EmbedError, IframeEmbed};
    use crate::media_item::MediaKind;

    struct FailingEmbed;

    impl EmbedDelegate for FailingEmbed {
        fn embed(&self, _item: &MediaItem) -> Result<EmbedFrame, EmbedError> {
            Err(EmbedError::InvalidUrl("x".to_string()))
        }
    }

    #[test]
    fn empty_list_renders_only_add_control() {
        let cfg = SectionConfig::default();
        let view = render(&[], &cfg, &AccordionState::default(), &IframeEmbed::default());
        assert!(view.panels.is_empty());
        assert_eq!(view.add_label, "Add Media");
        assert_eq!(view.to_string(), "Media\nShare your music, videos, and playlists from YouTube, SoundCloud, Spotify, and Apple Music.\n\n[+ Add Media]");
    }

    #[test]
    fn new_entry_uses_placeholder_and_has_no_preview() {
        let cfg = SectionConfig::default();
        let items = [MediaItem::new_empty()];
        let view = render(&items, &cfg, &AccordionState::default(), &IframeEmbed::default());
        let p = &view.panels[0];
        assert_eq!(p.trigger, "New Media");
        assert_eq!(p.value, "media-0");
        assert_eq!(p.input.id, "media-url-0");
        assert_eq!(p.input.value, "");
        assert!(p.embed.is_none());
        assert_eq!(p.remove_label, "Remove Media");
    }

    #[test]
    fn title_wins_over_derived_name() {
        let cfg = SectionConfig::default();
        let mut titled = MediaItem::with_url(
            "https://soundcloud.com/artist/night-drive",
            MediaKind::Soundcloud,
        );
        titled.title = Some("Late set".to_string());
        let untitled = MediaItem::with_url(
            "https://soundcloud.com/artist/night-drive",
            MediaKind::Soundcloud,
        );
        let items = [titled, untitled];
        let view = render(&items, &cfg, &AccordionState::default(), &IframeEmbed::default());
        assert_eq!(view.panels[0].trigger, "Late set");
        assert_eq!(view.panels[1].trigger, "SoundCloud Track: night drive");
        assert!(matches!(view.panels[1].embed, Some(PanelEmbed::Frame(_))));
    }

    #[test]
    fn embed_failure_is_shown_not_propagated() {
        let cfg = SectionConfig::default();
        let items = [MediaItem::with_url("https://youtu.be/x", MediaKind::Youtube)];
        let view = render(&items, &cfg, &AccordionState::default(), &FailingEmbed);
        assert_eq!(
            view.panels[0].embed,
            Some(PanelEmbed::Unavailable("invalid media URL: x".to_string()))
        );
    }

    #[test]
    fn open_panel_shows_body() {
        let cfg = SectionConfig::default();
        let items = [
            MediaItem::new_empty(),
            MediaItem::with_url("https://youtu.be/xyz", MediaKind::Youtube),
        ];
        let mut open = AccordionState::default();
        open.toggle(1);
        let text = render(&items, &cfg, &open, &IframeEmbed::default()).to_string();
        assert!(text.contains("> [0] New Media"));
        assert!(text.contains("v [1] YouTube Video"));
        assert!(text.contains("preview: https://www.youtube.com/embed/xyz (315px)"));
        assert!(text.contains("[Remove Media]"));
        assert!(text.ends_with("[+ Add Media]"));
    }
}
