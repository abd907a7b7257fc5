//! URL text field of a panel.

use super::{MediaSection, MediaSectionHandler};
use crate::media_item::MediaField;
use crate::url_model::strip_input_prefix;

/// Text field state for one panel. Starts empty and is cleared on focus so a
/// stale URL never gets edited into a doubled prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaUrlInput {
    index: usize,
    value: String,
}

impl MediaUrlInput {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            value: String::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn focus(&mut self) {
        self.value.clear();
    }

    /// Records the typed text, drops stray leading `h`s and hands the result to
    /// the section normalizer.
    pub fn change(
        &mut self,
        section: &MediaSection<'_>,
        handler: &mut dyn MediaSectionHandler,
        typed: &str,
    ) {
        self.value = typed.to_string();
        let stripped = strip_input_prefix(typed);
        section.handle_media_change(handler, self.index, MediaField::Id, &stripped);
    }
}
