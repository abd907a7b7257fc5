//! Integration test: a parent-owned list driven through the section's callbacks,
//! re-rendered after each event the way a form would.

use media_core::config::SectionConfig;
use media_core::embed::IframeEmbed;
use media_core::media_item::{MediaField, MediaKind};
use media_core::media_list::MediaList;
use media_core::section::{AccordionState, MediaSection, MediaUrlInput, PanelEmbed};
use media_core::url_model::transform_apple_music_url;

#[test]
fn add_paste_and_remove_entries() {
    let cfg = SectionConfig::default();
    let section = MediaSection::new(&cfg);
    let embed = IframeEmbed::new(&cfg);
    let mut list = MediaList::new();
    let mut open = AccordionState::default();

    let view = section.render(list.items(), &open, &embed);
    assert!(view.panels.is_empty());

    section.add_media(&mut list);
    section.add_media(&mut list);
    let view = section.render(list.items(), &open, &embed);
    assert_eq!(view.panels.len(), 2);
    assert!(view.panels.iter().all(|p| p.trigger == "New Media"));

    let mut first = MediaUrlInput::new(0);
    first.focus();
    first.change(&section, &mut list, "hhttps://youtu.be/xyz");

    let mut second = MediaUrlInput::new(1);
    second.focus();
    second.change(
        &section,
        &mut list,
        "  https://music.apple.com/us/playlist/late-night-jazz/pl.abc  ",
    );

    assert_eq!(list.items()[0].id, "https://youtu.be/xyz");
    assert_eq!(list.items()[0].kind, MediaKind::Youtube);
    assert_eq!(
        list.items()[1].id,
        transform_apple_music_url("https://music.apple.com/us/playlist/late-night-jazz/pl.abc")
    );
    assert_eq!(list.items()[1].kind, MediaKind::AppleMusicPlaylist);

    open.toggle(1);
    let view = section.render(list.items(), &open, &embed);
    assert_eq!(view.panels[0].trigger, "YouTube Video");
    assert_eq!(
        view.panels[1].trigger,
        "Apple Music Playlist: late night jazz"
    );
    assert!(view.panels[1].open);
    match &view.panels[1].embed {
        Some(PanelEmbed::Frame(frame)) => assert_eq!(
            frame.src,
            "https://embed.music.apple.com/us/playlist/late-night-jazz/pl.abc"
        ),
        other => panic!("expected frame, got {other:?}"),
    }

    section.remove_media(&mut list, 0);
    open.on_removed(0);
    let view = section.render(list.items(), &open, &embed);
    assert_eq!(view.panels.len(), 1);
    assert_eq!(view.panels[0].index, 0);
    assert!(view.panels[0].open);
    assert_eq!(list.items()[0].kind, MediaKind::AppleMusicPlaylist);
}

#[test]
fn scheme_less_apple_music_paste_renders_a_frame() {
    let cfg = SectionConfig::default();
    let section = MediaSection::new(&cfg);
    let embed = IframeEmbed::new(&cfg);
    let mut list = MediaList::new();
    let mut open = AccordionState::default();

    section.add_media(&mut list);
    let mut input = MediaUrlInput::new(0);
    input.focus();
    input.change(&section, &mut list, "music.apple.com/us/album/a/1");

    assert_eq!(list.items()[0].kind, MediaKind::AppleMusicAlbum);
    assert_eq!(list.items()[0].id, "https://embed.music.apple.com/us/album/a/1");

    open.toggle(0);
    let view = section.render(list.items(), &open, &embed);
    match &view.panels[0].embed {
        Some(PanelEmbed::Frame(frame)) => {
            assert_eq!(frame.src, "https://embed.music.apple.com/us/album/a/1")
        }
        other => panic!("expected frame, got {other:?}"),
    }
}

#[test]
fn render_does_not_touch_the_list() {
    let cfg = SectionConfig::default();
    let section = MediaSection::new(&cfg);
    let mut list = MediaList::new();
    section.add_media(&mut list);
    section.handle_media_change(&mut list, 0, MediaField::Id, "https://youtu.be/a");
    section.handle_media_change(&mut list, 0, MediaField::Title, "ignored");

    let before = list.clone();
    let _ = section.render(list.items(), &AccordionState::default(), &IframeEmbed::default());
    assert_eq!(list, before);
    assert!(list.items()[0].title.is_none());
}

#[test]
fn items_round_trip_through_parent_json() {
    let cfg = SectionConfig::default();
    let section = MediaSection::new(&cfg);
    let mut list = MediaList::new();
    section.add_media(&mut list);
    section.handle_media_change(
        &mut list,
        0,
        MediaField::Id,
        "https://soundcloud.com/artist/sets/summer-mix",
    );

    let json = serde_json::to_string(list.items()).unwrap();
    assert!(json.contains("\"type\":\"soundcloud-playlist\""));
    let back: Vec<media_core::media_item::MediaItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list.items());
}
