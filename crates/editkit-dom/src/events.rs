//! Drag and Drop Events
//!
//! Event types, dropped file handles and the drag event carrying them.

use std::fmt;

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    DragOver,
    DragEnter,
    DragLeave,
    Drop,
    Change,
}

impl EventType {
    pub const DRAG_AND_DROP: [EventType; 4] = [
        EventType::DragOver,
        EventType::DragEnter,
        EventType::DragLeave,
        EventType::Drop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::DragOver => "dragover",
            EventType::DragEnter => "dragenter",
            EventType::DragLeave => "dragleave",
            EventType::Drop => "drop",
            EventType::Change => "change",
        }
    }

    /// Whether the default action can be prevented
    pub fn cancelable(&self) -> bool {
        !matches!(self, EventType::Change)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a dropped file. Contents are never read here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl File {
    pub fn new(name: &str, size: u64, mime_type: &str) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// File with only a name known
    pub fn named(name: &str) -> Self {
        Self::new(name, 0, "")
    }
}

/// Payload of a drag gesture
#[derive(Debug, Clone, Default)]
pub struct DataTransfer {
    pub files: Vec<File>,
}

impl DataTransfer {
    pub fn new(files: Vec<File>) -> Self {
        Self { files }
    }
}

/// Drag event delivered to an element
#[derive(Debug, Clone)]
pub struct DragEvent {
    pub event_type: EventType,
    pub target: String,
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(event_type: EventType, target: &str, data_transfer: DataTransfer) -> Self {
        Self {
            event_type,
            target: target.to_string(),
            data_transfer,
            default_prevented: false,
        }
    }

    /// Event with no files attached
    pub fn empty(event_type: EventType, target: &str) -> Self {
        Self::new(event_type, target, DataTransfer::default())
    }

    /// Drop event carrying `files`
    pub fn drop_files(target: &str, files: Vec<File>) -> Self {
        Self::new(EventType::Drop, target, DataTransfer::new(files))
    }

    /// Prevent the default action (opening the dropped file)
    pub fn prevent_default(&mut self) {
        if self.event_type.cancelable() {
            self.default_prevented = true;
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
