/// Single-open, collapsible panel state. Transient UI state; the list itself
/// stays with the parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn value_for(index: usize) -> String {
        format!("media-{index}")
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, closing any other panel; toggling the open panel collapses it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Keeps the open panel pointing at the same entry after `index` was removed.
    pub fn on_removed(&mut self, index: usize) {
        self.open = match self.open {
            Some(o) if o == index => None,
            Some(o) if o > index => Some(o - 1),
            other => other,
        };
    }
}
