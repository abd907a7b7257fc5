//! `mediasec render [URL]...` – paste URLs into a fresh list and print the section.

use anyhow::Result;
use media_core::config::SectionConfig;
use media_core::embed::IframeEmbed;
use media_core::media_item::MediaField;
use media_core::media_list::MediaList;
use media_core::section::{AccordionState, MediaSection, MediaSectionHandler, MediaUrlInput};

/// Edits to replay against an empty list, in order: paste, title, remove, open.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub urls: Vec<String>,
    pub titles: Vec<(usize, String)>,
    pub removals: Vec<usize>,
    pub open: Option<usize>,
}

/// Replays `req` the way a user would drive the form.
pub fn build_list(section: &MediaSection<'_>, req: &RenderRequest) -> (MediaList, AccordionState) {
    let mut list = MediaList::new();
    let mut accordion = AccordionState::default();

    for url in &req.urls {
        section.add_media(&mut list);
        let mut input = MediaUrlInput::new(list.len() - 1);
        input.focus();
        input.change(section, &mut list, url);
    }

    // Titles belong to the parent; the section only forwards URL edits.
    for (index, title) in &req.titles {
        list.on_media_change(*index, MediaField::Title, title.clone());
    }

    let mut removals = req.removals.clone();
    removals.sort_unstable_by(|a, b| b.cmp(a));
    removals.dedup();
    for index in removals {
        section.remove_media(&mut list, index);
        accordion.on_removed(index);
    }

    if let Some(index) = req.open {
        accordion.toggle(index);
    }
    (list, accordion)
}

pub fn run_render(cfg: &SectionConfig, req: &RenderRequest, json: bool) -> Result<()> {
    let section = MediaSection::new(cfg);
    let (list, accordion) = build_list(&section, req);
    tracing::info!(entries = list.len(), "rendering media section");

    if json {
        println!("{}", serde_json::to_string_pretty(list.items())?);
    } else {
        let view = section.render(list.items(), &accordion, &IframeEmbed::new(cfg));
        println!("{view}");
    }
    Ok(())
}
