//! Drop zone lifecycle tests
//!
//! Settings merge, filtering, rendering, drag state and drop handling
//! against a mounted document.

use std::cell::RefCell;
use std::rc::Rc;

use editkit_ui::{
    Document, DragEvent, DragState, DropZone, EventType, File, Selection, Settings, Widget,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn files(names: &[&str]) -> Vec<File> {
    names.iter().map(|n| File::named(n)).collect()
}

fn names(files: &[File]) -> Vec<&str> {
    files.iter().map(|f| f.name.as_str()).collect()
}

/// Mount a zone and record the events its `change` callbacks receive
fn mounted(settings: Settings) -> (DropZone, Document, Rc<RefCell<Vec<DragEvent>>>) {
    init_tracing();

    let mut doc = Document::new();
    let mut zone = DropZone::new(settings);
    let changes = Rc::new(RefCell::new(Vec::new()));
    zone.on_change({
        let changes = changes.clone();
        move |event| changes.borrow_mut().push(event.clone())
    });
    zone.render_to(&mut doc).unwrap();
    (zone, doc, changes)
}

fn send(zone: &mut DropZone, doc: &mut Document, event_type: EventType) -> DragEvent {
    let mut event = DragEvent::empty(event_type, zone.id());
    zone.dispatch(doc, &mut event).unwrap();
    event
}

fn drop_on(zone: &mut DropZone, doc: &mut Document, names: &[&str]) -> DragEvent {
    let mut event = DragEvent::drop_files(zone.id(), files(names));
    zone.dispatch(doc, &mut event).unwrap();
    event
}

fn class_attr(zone: &DropZone, doc: &Document) -> String {
    doc.get_element_by_id(zone.id())
        .map(|elm| elm.class_name().to_string())
        .unwrap_or_default()
}

// ============================================================================
// SETTINGS
// ============================================================================

#[test]
fn test_missing_keys_take_defaults() {
    let zone = DropZone::new(Settings::new().multiple(true));
    let config = zone.config();

    assert!(config.multiple);
    assert_eq!(config.text, "Drop an image here");
    assert_eq!(config.height.as_ref().map(|h| h.to_css()).as_deref(), Some("100px"));
    assert_eq!(config.accept, None);
}

#[test]
fn test_settings_from_json() {
    let settings = Settings::from_json(
        r#"{"id": "upload", "name": "image", "text": "Drop here", "accept": "png", "width": 240}"#,
    )
    .unwrap();
    let zone = DropZone::new(settings);

    assert_eq!(zone.id(), "upload");
    assert_eq!(zone.name(), Some("image"));
    assert_eq!(zone.config().text, "Drop here");
    assert_eq!(names(&zone.filter(files(&["a.png", "b.jpg"]))), ["a.png"]);
}

// ============================================================================
// FILTERING
// ============================================================================

#[test]
fn test_filter_identity_without_string_accept() {
    let input = files(&["a.exe", "b.png", "c"]);

    for settings in [
        Settings::new(),
        Settings::new().accept(serde_json::Value::Null),
        Settings::new().accept(7),
        Settings::from_json(r#"{"accept": 3.5}"#).unwrap(),
    ] {
        let zone = DropZone::new(settings);
        assert_eq!(zone.filter(input.clone()), input);
    }
}

#[test]
fn test_filter_case_insensitive_order_preserving() {
    let zone = DropZone::new(Settings::new().accept("jpg, png"));
    let filtered = zone.filter(files(&["a.JPG", "b.gif", "c.png"]));
    assert_eq!(names(&filtered), ["a.JPG", "c.png"]);
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_render_markup() {
    let zone = DropZone::new(Settings::new().id("dz").width(320).multiple(true));
    assert_eq!(
        zone.render_html(),
        r#"<div id="dz" hidefocus="1" style="width: 320px; height: 100px;" class="dropzone multiple"><span>Drop an image here</span></div>"#
    );
}

#[test]
fn test_render_to_mounts_and_binds() {
    let (zone, doc, _) = mounted(Settings::new());

    assert!(doc.contains(zone.id()));
    assert!(zone.control().is_rendered());
    for event_type in EventType::DRAG_AND_DROP {
        assert!(doc.listeners().has_listener(zone.id(), event_type));
    }
    assert!(!doc.listeners().has_listener(zone.id(), EventType::Change));
}

// ============================================================================
// DRAG STATE
// ============================================================================

#[test]
fn test_dragenter_dragleave_toggle_class() {
    let (mut zone, mut doc, _) = mounted(Settings::new());

    let event = send(&mut zone, &mut doc, EventType::DragEnter);
    assert!(event.is_default_prevented());
    assert_eq!(zone.drag_state(), DragState::Dragging);
    assert_eq!(class_attr(&zone, &doc), "dropzone dragenter");

    let event = send(&mut zone, &mut doc, EventType::DragLeave);
    assert!(event.is_default_prevented());
    assert_eq!(zone.drag_state(), DragState::Idle);
    assert_eq!(class_attr(&zone, &doc), "dropzone");
}

#[test]
fn test_unbalanced_enter_leave_stays_in_sync() {
    let (mut zone, mut doc, _) = mounted(Settings::new());

    // Nested children fire enter twice before a single leave
    send(&mut zone, &mut doc, EventType::DragEnter);
    send(&mut zone, &mut doc, EventType::DragEnter);
    assert_eq!(class_attr(&zone, &doc), "dropzone dragenter");

    send(&mut zone, &mut doc, EventType::DragLeave);
    assert_eq!(zone.drag_state(), DragState::Idle);
    assert_eq!(class_attr(&zone, &doc), "dropzone");

    send(&mut zone, &mut doc, EventType::DragLeave);
    assert_eq!(class_attr(&zone, &doc), "dropzone");
}

#[test]
fn test_dragover_only_prevents_default() {
    let (mut zone, mut doc, changes) = mounted(Settings::new());

    let event = send(&mut zone, &mut doc, EventType::DragOver);
    assert!(event.is_default_prevented());
    assert_eq!(zone.drag_state(), DragState::Idle);
    assert_eq!(class_attr(&zone, &doc), "dropzone");
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_drop_ends_drag() {
    let (mut zone, mut doc, _) = mounted(Settings::new());

    send(&mut zone, &mut doc, EventType::DragEnter);
    drop_on(&mut zone, &mut doc, &["a.png"]);
    assert_eq!(zone.drag_state(), DragState::Idle);
    assert_eq!(class_attr(&zone, &doc), "dropzone");
}

// ============================================================================
// DROP HANDLING
// ============================================================================

#[test]
fn test_drop_without_matches() {
    let (mut zone, mut doc, changes) = mounted(Settings::new().accept("png"));

    let event = drop_on(&mut zone, &mut doc, &["a.jpg", "b.gif"]);
    assert!(event.is_default_prevented());
    assert_eq!(zone.value(), Selection::None);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_drop_single_keeps_first_match() {
    let (mut zone, mut doc, changes) = mounted(Settings::new().accept("png"));

    drop_on(&mut zone, &mut doc, &["a.gif", "b.png", "c.png"]);
    match zone.value() {
        Selection::Single(file) => assert_eq!(file.name, "b.png"),
        other => panic!("expected single selection, got {:?}", other),
    }

    let changes = changes.borrow();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].event_type, EventType::Drop);
    assert_eq!(names(&changes[0].data_transfer.files), ["a.gif", "b.png", "c.png"]);
}

#[test]
fn test_drop_multiple_keeps_all_matches() {
    let (mut zone, mut doc, changes) = mounted(Settings::new().multiple(true).accept("png"));

    drop_on(&mut zone, &mut doc, &["b.png", "x.txt", "a.PNG"]);
    match zone.value() {
        Selection::Multiple(files) => assert_eq!(names(files), ["b.png", "a.PNG"]),
        other => panic!("expected multiple selection, got {:?}", other),
    }
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn test_value_rederived_per_drop() {
    let (mut zone, mut doc, changes) = mounted(Settings::new().accept("png"));

    drop_on(&mut zone, &mut doc, &["a.png"]);
    assert_eq!(names(zone.value().files()), ["a.png"]);

    drop_on(&mut zone, &mut doc, &["a.txt"]);
    assert!(zone.value().is_none());
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn test_drop_while_disabled() {
    let (mut zone, mut doc, changes) = mounted(Settings::new().disabled(true));

    let event = drop_on(&mut zone, &mut doc, &["a.png", "b.png"]);
    assert!(event.is_default_prevented());
    assert!(zone.value().is_none());
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_disable_after_drop_keeps_selection() {
    let (mut zone, mut doc, changes) = mounted(Settings::new());

    drop_on(&mut zone, &mut doc, &["a.png"]);
    zone.set_disabled(&mut doc, true).unwrap();
    drop_on(&mut zone, &mut doc, &["b.png"]);

    assert_eq!(names(zone.value().files()), ["a.png"]);
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn test_set_disabled_updates_mounted_class() {
    let (mut zone, mut doc, _) = mounted(Settings::new());

    zone.set_disabled(&mut doc, true).unwrap();
    assert!(zone.is_disabled());
    assert_eq!(class_attr(&zone, &doc), "dropzone disabled");
    assert!(!zone.config().disabled);

    zone.set_disabled(&mut doc, false).unwrap();
    assert_eq!(class_attr(&zone, &doc), "dropzone");
}

#[test]
fn test_set_disabled_before_mount() {
    let mut doc = Document::new();
    let mut zone = DropZone::new(Settings::new().id("later"));

    zone.set_disabled(&mut doc, true).unwrap();
    assert!(zone.render_html().contains(r#"class="dropzone disabled""#));
}

#[test]
fn test_events_for_other_targets_ignored() {
    let (mut zone, mut doc, changes) = mounted(Settings::new());

    let mut event = DragEvent::drop_files("elsewhere", files(&["a.png"]));
    assert!(!zone.dispatch(&mut doc, &mut event).unwrap());
    assert!(!event.is_default_prevented());
    assert!(changes.borrow().is_empty());
}

// ============================================================================
// TEARDOWN
// ============================================================================

#[test]
fn test_remove_before_render() {
    let mut doc = Document::new();
    let mut zone = DropZone::new(Settings::new());

    zone.remove(&mut doc).unwrap();
    assert_eq!(doc.listeners().listener_count(zone.id()), 0);
    assert!(doc.is_empty());
}

#[test]
fn test_remove_detaches_listeners() {
    let (mut zone, mut doc, changes) = mounted(Settings::new());
    zone.remove(&mut doc).unwrap();

    assert!(!doc.contains(zone.id()));
    assert_eq!(doc.listeners().listener_count(zone.id()), 0);

    let mut event = DragEvent::drop_files(zone.id(), files(&["a.png"]));
    assert!(!zone.dispatch(&mut doc, &mut event).unwrap());
    assert!(zone.value().is_none());
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_events_before_post_render_ignored() {
    let mut doc = Document::new();
    let mut zone = DropZone::new(Settings::new());
    doc.mount(zone.render_element()).unwrap();

    let event = send(&mut zone, &mut doc, EventType::DragEnter);
    assert!(!event.is_default_prevented());
    assert_eq!(zone.drag_state(), DragState::Idle);
}

#[test]
fn test_remove_mid_drag_then_render_again() {
    let (mut zone, mut doc, _) = mounted(Settings::new());

    send(&mut zone, &mut doc, EventType::DragEnter);
    assert_eq!(class_attr(&zone, &doc), "dropzone dragenter");

    zone.remove(&mut doc).unwrap();
    assert_eq!(zone.drag_state(), DragState::Idle);
    assert!(!zone.control().classes().contains("dragenter"));

    zone.render_to(&mut doc).unwrap();
    assert_eq!(zone.drag_state(), DragState::Idle);
    assert_eq!(class_attr(&zone, &doc), "dropzone");
    assert!(!zone.render_html().contains("dragenter"));

    let event = send(&mut zone, &mut doc, EventType::DragEnter);
    assert!(event.is_default_prevented());
    assert_eq!(class_attr(&zone, &doc), "dropzone dragenter");
}
