//! Tests for the app wiring: mount, scripted drags, container resize and
//! the card explorer.

use std::rc::Rc;

use sash_common::{ElementRef, Event, EventBus, PaneSize, SashError};
use sash_config::SashConfig;
use sash_explorer::{ExplorerEntry, FsFileSource};
use sash_splitter::{GeometryProvider, HostEvent};

use super::SashApp;

fn percent(size: PaneSize) -> f64 {
    match size {
        PaneSize::Percent(p) => p,
        other => panic!("expected a percentage, got {other}"),
    }
}

fn two_pane_config() -> SashConfig {
    let mut config = SashConfig::default();
    config.splitter.panes = 2;
    config
}

fn build_app(config: SashConfig) -> SashApp {
    SashApp::new(config, Rc::new(EventBus::new(64))).unwrap()
}

#[test]
fn new_mounts_with_even_split() {
    let app = build_app(SashConfig::default());
    let sizes = app.pane_sizes();
    assert_eq!(sizes.len(), 3);
    let expected = (600.0 - 8.0) / 3.0 / 600.0 * 100.0;
    for size in sizes {
        assert!((percent(size) - expected).abs() < 1e-9);
    }
    assert_eq!(app.take_published().len(), 1);
    assert!(app.splitter().attachment().is_some());
}

#[test]
fn new_honours_configured_initial_sizes() {
    let mut config = two_pane_config();
    config.splitter.divider_size = 6.0;
    config.splitter.initial_sizes = vec![PaneSize::Percent(29.0), PaneSize::Percent(70.0)];
    let app = build_app(config);
    let sizes = app.pane_sizes();
    assert!((percent(sizes[0]) - 29.0).abs() < 1e-9);
    assert!((percent(sizes[1]) - 70.0).abs() < 1e-9);
}

#[test]
fn new_scales_initial_sizes_to_fill_the_container() {
    let mut config = two_pane_config();
    config.splitter.initial_sizes = vec![PaneSize::Pixels(100.0), PaneSize::Pixels(300.0)];
    let app = build_app(config);
    let sizes = app.pane_sizes();
    let first = percent(sizes[0]) * 6.0;
    let second = percent(sizes[1]) * 6.0;
    assert!((first + second + 4.0 - 600.0).abs() < 1e-9);
    assert!((second / first - 3.0).abs() < 1e-9);
}

#[test]
fn new_rejects_unknown_orientation() {
    let mut config = SashConfig::default();
    config.splitter.orientation = Some("diagonal".into());
    let result = SashApp::new(config, Rc::new(EventBus::new(4)));
    assert!(matches!(result, Err(SashError::Config(_))));
}

#[test]
fn mount_publishes_on_the_bus() {
    let bus = Rc::new(EventBus::new(16));
    let mut rx = bus.subscribe();
    let _app = SashApp::new(two_pane_config(), Rc::clone(&bus)).unwrap();
    match rx.try_recv().unwrap() {
        Event::PaneSizesChanged(sizes) => assert_eq!(sizes.len(), 2),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn drag_moves_the_boundary_to_the_pointer() {
    let mut app = build_app(two_pane_config());
    app.take_published();

    let report = app.drag_divider(0, 150.0, 1).unwrap();
    assert!((report.from - 300.0).abs() < 1e-9);
    assert_eq!(report.frames.len(), 1);
    assert!((percent(report.sizes[0]) - 25.0).abs() < 1e-9);
    assert!((percent(report.sizes[1]) - 446.0 / 6.0).abs() < 1e-6);
    assert!(!app.splitter().is_resizing());

    let pane = app.geometry().bounds(ElementRef::Pane(0)).unwrap();
    assert!((pane.height - 150.0).abs() < 1e-9);
}

#[test]
fn drag_in_steps_publishes_each_move() {
    let mut app = build_app(two_pane_config());
    let report = app.drag_divider(0, 400.0, 4).unwrap();
    assert_eq!(report.frames.len(), 4);
    let primaries: Vec<f64> = report.frames.iter().map(|f| percent(f[0])).collect();
    assert!(primaries.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(report.frames.last().unwrap(), &report.sizes);
}

#[test]
fn drag_past_the_end_collapses_the_secondary() {
    let mut app = build_app(two_pane_config());
    let report = app.drag_divider(0, 10_000.0, 1).unwrap();
    assert_eq!(report.sizes[1], PaneSize::Percent(0.0));
    assert!((percent(report.sizes[0]) - 596.0 / 6.0).abs() < 1e-6);
}

#[test]
fn drag_leaves_other_panes_alone() {
    let mut app = build_app(SashConfig::default());
    let before = app.pane_sizes();
    let report = app.drag_divider(1, 500.0, 2).unwrap();
    assert_eq!(report.sizes[0], before[0]);
    assert_ne!(report.sizes[1], before[1]);
}

#[test]
fn drag_unknown_divider_is_an_error() {
    let mut app = build_app(two_pane_config());
    assert!(app.drag_divider(5, 100.0, 1).is_err());
}

#[test]
fn vertical_drag_follows_x() {
    let mut config = two_pane_config();
    config.splitter.orientation = Some("vertical".into());
    let mut app = build_app(config);
    let report = app.drag_divider(0, 200.0, 1).unwrap();
    assert!((percent(report.sizes[0]) - 25.0).abs() < 1e-9);
}

#[test]
fn container_resize_keeps_percentages() {
    let mut app = build_app(two_pane_config());
    let before = app.pane_sizes();
    app.take_published();

    assert!(!app.resize_container(800.0, 1200.0));
    assert_eq!(app.pane_sizes(), before);
    assert!(app.take_published().is_empty());

    let pane = app.geometry().bounds(ElementRef::Pane(0)).unwrap();
    assert!((pane.height - 596.0).abs() < 1e-6);
}

#[test]
fn layout_report_lists_render_items() {
    let app = build_app(SashConfig::default());
    let report = app.layout();
    assert_eq!(report.sizes.len(), 3);
    assert_eq!(report.items.len(), 5);
    assert!((report.container_extent - 600.0).abs() < f64::EPSILON);
    assert!(report.to_string().contains("3 panes"));
}

#[test]
fn shutdown_releases_listeners() {
    let mut app = build_app(two_pane_config());
    app.shutdown();
    assert!(app.splitter().attachment().is_none());
    assert!(!app.handle_host_event(HostEvent::PointerUp));
}

#[test]
fn lists_and_opens_cards() {
    let dir = tempfile::tempdir().unwrap();
    let cards = dir.path().join("cards");
    std::fs::create_dir(&cards).unwrap();
    std::fs::write(cards.join("welcome.json"), r#"{"type":"AdaptiveCard"}"#).unwrap();
    std::fs::write(cards.join("hero.json"), "").unwrap();
    std::fs::write(cards.join("notes.txt"), "skip me").unwrap();

    let mut app = build_app(SashConfig::default());
    let report = app
        .list_cards(Some(dir.path()), &FsFileSource, Some("welcome.json"))
        .unwrap();

    assert_eq!(report.section, "Cards");
    assert!(report.expanded);
    let names: Vec<&str> = report
        .entries
        .iter()
        .filter_map(|e| match e {
            ExplorerEntry::File { file_name, .. } => Some(file_name.as_str()),
            ExplorerEntry::Placeholder { .. } => None,
        })
        .collect();
    assert_eq!(names, vec!["hero.json", "welcome.json"]);

    let opened = report.opened.unwrap();
    assert!(report.entries.iter().any(|e| matches!(
        e,
        ExplorerEntry::File { card_id, file_name } if *card_id == opened && file_name == "welcome.json"
    )));
}

#[test]
fn empty_folder_shows_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_app(SashConfig::default());
    let report = app.list_cards(Some(dir.path()), &FsFileSource, None).unwrap();
    assert_eq!(
        report.entries,
        vec![ExplorerEntry::Placeholder {
            text: "No cards found...".into()
        }]
    );
    assert!(report.to_string().contains("No cards found..."));
}

#[test]
fn cards_folder_falls_back_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SashConfig::default();
    config.explorer.folder = Some(dir.path().to_path_buf());
    let mut app = build_app(config);
    let report = app.list_cards(None, &FsFileSource, None).unwrap();
    assert_eq!(report.folder, dir.path());
}

#[test]
fn cards_without_any_folder_is_an_error() {
    let mut app = build_app(SashConfig::default());
    assert!(app.list_cards(None, &FsFileSource, None).is_err());
}

#[test]
fn opening_an_unlisted_card_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = build_app(SashConfig::default());
    let err = app
        .list_cards(Some(dir.path()), &FsFileSource, Some("missing.json"))
        .unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}
