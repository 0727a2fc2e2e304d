//! Widget Lifecycle
//!
//! Controls compose a [`Control`] (id, class tags, state store, event
//! emitter) and implement [`Widget`] on top of it. The lifecycle is
//! construct → render → mount → post-render → remove.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use editkit_dom::{ClassList, Document, DragEvent, Element, EventType};

use crate::UiError;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique element id for a control without a configured one
pub fn generate_id() -> String {
    format!("ui_{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Readable control state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub disabled: bool,
    pub rendered: bool,
}

type Callback = Box<dyn FnMut(&DragEvent)>;

/// Shared base of every control
pub struct Control {
    id: String,
    classes: ClassList,
    state: ControlState,
    callbacks: Vec<(EventType, Callback)>,
}

impl Control {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_else(generate_id),
            classes: ClassList::new(),
            state: ControlState::default(),
            callbacks: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    /// Set the disabled flag and mirror it as the `disabled` class tag.
    /// A mounted element picks the tag up on the next [`Control::sync_classes`].
    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.disabled = disabled;
        self.classes.toggle("disabled", Some(disabled));
    }

    pub fn is_rendered(&self) -> bool {
        self.state.rendered
    }

    /// Write the class list to the mounted element's `class` attribute
    pub fn sync_classes(&self, doc: &mut Document) -> Result<(), UiError> {
        let element = doc
            .get_element_by_id_mut(&self.id)
            .ok_or_else(|| UiError::NotMounted(self.id.clone()))?;
        element.set_class_name(&self.classes);
        Ok(())
    }

    /// Base post-render step; the element must already be mounted
    pub fn post_render(&mut self, doc: &mut Document) -> Result<(), UiError> {
        self.sync_classes(doc)?;
        self.state.rendered = true;
        Ok(())
    }

    /// Base removal: unmount the element if it is mounted
    pub fn remove(&mut self, doc: &mut Document) -> Result<(), UiError> {
        if doc.contains(&self.id) {
            doc.unmount(&self.id)?;
        }
        self.state.rendered = false;
        Ok(())
    }

    /// Register a callback for an event fired by this control
    pub fn on<F>(&mut self, event_type: EventType, callback: F)
    where
        F: FnMut(&DragEvent) + 'static,
    {
        self.callbacks.push((event_type, Box::new(callback)));
    }

    /// Invoke callbacks for `event_type` in registration order,
    /// returns how many ran
    pub fn fire(&mut self, event_type: EventType, event: &DragEvent) -> usize {
        let mut fired = 0;
        for (ty, callback) in self.callbacks.iter_mut() {
            if *ty == event_type {
                callback(event);
                fired += 1;
            }
        }
        fired
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("state", &self.state)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// Lifecycle capabilities of a UI control
pub trait Widget {
    fn control(&self) -> &Control;

    fn control_mut(&mut self) -> &mut Control;

    fn id(&self) -> &str {
        self.control().id()
    }

    /// Build the control's detached element
    fn render_element(&self) -> Element;

    /// Markup of the control; no behavior attached
    fn render_html(&self) -> String {
        self.render_element().outer_html()
    }

    /// Called once the element is mounted
    fn post_render(&mut self, doc: &mut Document) -> Result<(), UiError> {
        self.control_mut().post_render(doc)
    }

    /// Mount the rendered element into `doc` and run post-render
    fn render_to(&mut self, doc: &mut Document) -> Result<(), UiError> {
        doc.mount(self.render_element())?;
        self.post_render(doc)
    }

    fn remove(&mut self, doc: &mut Document) -> Result<(), UiError> {
        self.control_mut().remove(doc)
    }
}
