//! Parent-side owner of the media list.
//!
//! Applies the section's callbacks to a `Vec<MediaItem>`; the section itself
//! only ever sees `&[MediaItem]`.

use crate::media_item::{MediaField, MediaItem, MediaKind};
use crate::section::MediaSectionHandler;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaList {
    items: Vec<MediaItem>,
}

impl MediaList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<MediaItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // `value` arrives normalized, so `raw_url` holds the forwarded form, not the paste.
    fn apply_url(item: &mut MediaItem, value: String) {
        if let Some(kind) = MediaKind::detect(&value) {
            item.kind = kind;
        }
        item.embed_url = None;
        item.raw_url = if value.is_empty() {
            None
        } else {
            Some(value.clone())
        };
        item.id = value;
    }
}

impl MediaSectionHandler for MediaList {
    fn on_media_change(&mut self, index: usize, field: MediaField, value: String) {
        let Some(item) = self.items.get_mut(index) else {
            tracing::warn!(index, %field, "media change for missing entry ignored");
            return;
        };
        match field {
            MediaField::Id => Self::apply_url(item, value),
            MediaField::Title => item.title = Some(value).filter(|t| !t.is_empty()),
            MediaField::EmbedUrl => item.embed_url = Some(value).filter(|u| !u.is_empty()),
            MediaField::RawUrl => item.raw_url = Some(value).filter(|u| !u.is_empty()),
            MediaField::Type => match MediaKind::from_str(&value) {
                Some(kind) => item.kind = kind,
                None => tracing::warn!(index, value = %value, "unknown media type ignored"),
            },
        }
        tracing::debug!(index, %field, "media entry updated");
    }

    fn on_add_media(&mut self) {
        self.items.push(MediaItem::new_empty());
        tracing::debug!(len = self.items.len(), "media entry added");
    }

    fn on_remove_media(&mut self, index: usize) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "remove for missing entry ignored");
            return;
        }
        self.items.remove(index);
        tracing::debug!(index, len = self.items.len(), "media entry removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::{media_display_name, normalize_media_url};

    #[test]
    fn add_then_set_url_detects_kind() {
        let mut list = MediaList::new();
        list.on_add_media();
        list.on_media_change(
            0,
            MediaField::Id,
            "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M".to_string(),
        );
        let item = &list.items()[0];
        assert_eq!(item.kind, MediaKind::SpotifyPlaylist);
        assert_eq!(item.raw_url.as_deref(), Some(item.id.as_str()));
    }

    #[test]
    fn apple_music_raw_url_is_forwarded_embed_form() {
        let mut list = MediaList::new();
        list.on_add_media();
        let forwarded = normalize_media_url("music.apple.com/us/album/blue-train/1");
        list.on_media_change(0, MediaField::Id, forwarded.clone());

        let item = &list.items()[0];
        assert_eq!(forwarded, "https://embed.music.apple.com/us/album/blue-train/1");
        assert_eq!(item.raw_url.as_deref(), Some(forwarded.as_str()));
        assert_eq!(item.kind, MediaKind::AppleMusicAlbum);
        assert_eq!(
            media_display_name(item.raw_url.as_deref().unwrap_or(""), item.kind),
            "Apple Music Album: blue train"
        );
    }

    #[test]
    fn unknown_url_keeps_previous_kind() {
        let mut list = MediaList::from_items(vec![MediaItem::with_url(
            "https://soundcloud.com/a/b",
            MediaKind::Soundcloud,
        )]);
        list.on_media_change(0, MediaField::Id, "https://vimeo.com/1".to_string());
        assert_eq!(list.items()[0].kind, MediaKind::Soundcloud);
        assert_eq!(list.items()[0].id, "https://vimeo.com/1");

        list.on_media_change(0, MediaField::Id, String::new());
        assert!(!list.items()[0].has_url());
        assert!(list.items()[0].raw_url.is_none());
    }

    #[test]
    fn other_fields_update_in_place() {
        let mut list = MediaList::new();
        list.on_add_media();
        list.on_media_change(0, MediaField::Title, "Mix".to_string());
        list.on_media_change(0, MediaField::Type, "apple-music-station".to_string());
        list.on_media_change(0, MediaField::Type, "cassette".to_string());
        list.on_media_change(0, MediaField::EmbedUrl, "https://x.test/e".to_string());
        let item = &list.items()[0];
        assert_eq!(item.title.as_deref(), Some("Mix"));
        assert_eq!(item.kind, MediaKind::AppleMusicStation);
        assert_eq!(item.embed_url.as_deref(), Some("https://x.test/e"));
    }

    #[test]
    fn remove_in_and_out_of_range() {
        let mut list = MediaList::new();
        list.on_add_media();
        list.on_add_media();
        list.on_media_change(1, MediaField::Id, "https://youtu.be/b".to_string());
        list.on_remove_media(0);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, "https://youtu.be/b");

        list.on_remove_media(5);
        list.on_media_change(5, MediaField::Id, "https://youtu.be/c".to_string());
        assert_eq!(list.len(), 1);
    }
}
