//! Drop Zone
//!
//! Droppable surface that filters dropped files against an accept policy
//! and exposes the accepted files as its value.

use editkit_dom::{Document, DragEvent, Element, EventType, File, HandlerId};

use crate::accept::AcceptPolicy;
use crate::settings::{Dimension, DropZoneConfig, Settings};
use crate::widget::{Control, Widget};
use crate::UiError;

/// Handler id the drop zone binds its drag listeners under
const DRAG_HANDLER: HandlerId = HandlerId(0);

/// Whether a drag gesture carrying files is over the zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

impl DragState {
    /// `dragenter` starts dragging, `dragleave` and `drop` end it.
    /// Repeated events land in the same state.
    pub fn transition(self, event_type: EventType) -> Self {
        match event_type {
            EventType::DragEnter => DragState::Dragging,
            EventType::DragLeave | EventType::Drop => DragState::Idle,
            EventType::DragOver | EventType::Change => self,
        }
    }
}

/// Current value of a drop zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    None,
    Single(&'a File),
    Multiple(&'a [File]),
}

impl<'a> Selection<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Selected files in drop order
    pub fn files(&self) -> &'a [File] {
        match *self {
            Selection::None => &[],
            Selection::Single(file) => std::slice::from_ref(file),
            Selection::Multiple(files) => files,
        }
    }
}

/// Drag-and-drop file intake control
#[derive(Debug)]
pub struct DropZone {
    control: Control,
    config: DropZoneConfig,
    accept: AcceptPolicy,
    drag_state: DragState,
    files: Vec<File>,
}

impl DropZone {
    pub fn new(settings: Settings) -> Self {
        let config = DropZoneConfig::merge(settings);
        let accept = AcceptPolicy::from_setting(config.accept.as_deref());

        let mut control = Control::new(config.id.clone());
        for class in &config.classes {
            control.classes_mut().add(class);
        }
        control.classes_mut().add("dropzone");
        if config.multiple {
            control.classes_mut().add("multiple");
        }
        if config.disabled {
            control.set_disabled(true);
        }

        Self {
            control,
            config,
            accept,
            drag_state: DragState::Idle,
            files: Vec::new(),
        }
    }

    /// Configuration as merged at construction. Runtime state such as
    /// the disabled flag lives on the control.
    pub fn config(&self) -> &DropZoneConfig {
        &self.config
    }

    /// Form field name
    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag_state
    }

    pub fn is_disabled(&self) -> bool {
        self.control.is_disabled()
    }

    /// Set the disabled flag; a mounted element gets the class change at once
    pub fn set_disabled(&mut self, doc: &mut Document, disabled: bool) -> Result<(), UiError> {
        self.control.set_disabled(disabled);
        if doc.contains(self.control.id()) {
            self.control.sync_classes(doc)?;
        }
        Ok(())
    }

    /// Keep the files accepted by the `accept` setting, in order.
    /// Without a string `accept` setting the input comes back unchanged.
    pub fn filter(&self, files: Vec<File>) -> Vec<File> {
        self.accept.filter(files)
    }

    /// Derived from the files captured by the last accepted drop:
    /// nothing, the first file, or all of them when `multiple` is set.
    pub fn value(&self) -> Selection<'_> {
        match self.files.as_slice() {
            [] => Selection::None,
            files if self.config.multiple => Selection::Multiple(files),
            [first, ..] => Selection::Single(first),
        }
    }

    /// Register a `change` callback, fired after a drop with accepted files
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&DragEvent) + 'static,
    {
        self.control.on(EventType::Change, callback)
    }

    /// Deliver an event to the zone. Returns whether a bound listener
    /// handled it; nothing happens for events not bound on the element.
    pub fn dispatch(&mut self, doc: &mut Document, event: &mut DragEvent) -> Result<bool, UiError> {
        let id = self.control.id();
        if event.target != id || !doc.listeners().handlers(id, event.event_type).contains(&DRAG_HANDLER) {
            return Ok(false);
        }

        event.prevent_default();
        match event.event_type {
            EventType::DragOver | EventType::Change => {}
            EventType::DragEnter | EventType::DragLeave => self.update_drag_state(doc, event.event_type)?,
            EventType::Drop => self.handle_drop(doc, event)?,
        }
        Ok(true)
    }

    fn update_drag_state(&mut self, doc: &mut Document, event_type: EventType) -> Result<(), UiError> {
        let next = self.drag_state.transition(event_type);
        if next != self.drag_state {
            tracing::trace!("#{} {:?} -> {:?}", self.control.id(), self.drag_state, next);
        }
        self.drag_state = next;

        self.control
            .classes_mut()
            .toggle("dragenter", Some(next == DragState::Dragging));
        self.control.sync_classes(doc)
    }

    fn handle_drop(&mut self, doc: &mut Document, event: &DragEvent) -> Result<(), UiError> {
        self.update_drag_state(doc, EventType::Drop)?;

        if self.control.is_disabled() {
            tracing::debug!("#{} disabled, drop ignored", self.control.id());
            return Ok(());
        }

        let dropped = event.data_transfer.files.len();
        self.files = self.filter(event.data_transfer.files.clone());
        tracing::debug!(
            "#{} accepted {} of {} dropped files",
            self.control.id(),
            self.files.len(),
            dropped
        );

        if !self.files.is_empty() {
            self.control.fire(EventType::Change, event);
        }
        Ok(())
    }
}

impl Widget for DropZone {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn render_element(&self) -> Element {
        let cfg = &self.config;

        // Label text is trusted markup
        let mut elm = Element::create(
            "div",
            &[("id", self.control.id()), ("hidefocus", "1")],
            &format!("<span>{}</span>", cfg.text),
        );

        elm.css([
            ("width", cfg.width.as_ref().map(Dimension::to_css)),
            ("height", cfg.height.as_ref().map(Dimension::to_css)),
        ]);
        elm.set_class_name(self.control.classes());
        elm
    }

    fn post_render(&mut self, doc: &mut Document) -> Result<(), UiError> {
        self.control.post_render(doc)?;

        let id = self.control.id();
        let listeners = doc.listeners_mut();
        for event_type in EventType::DRAG_AND_DROP {
            listeners.add_listener(id, event_type, DRAG_HANDLER);
        }
        tracing::debug!("#{} drag listeners bound", id);
        Ok(())
    }

    fn remove(&mut self, doc: &mut Document) -> Result<(), UiError> {
        let unbound = doc.listeners_mut().remove_all(self.control.id());
        tracing::debug!("#{} unbound {} listeners", self.control.id(), unbound);

        self.drag_state = DragState::Idle;
        self.control.classes_mut().toggle("dragenter", Some(false));
        self.control.remove(doc)
    }
}
