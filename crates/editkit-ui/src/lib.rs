//! editkit UI - Editor Controls
//!
//! Widget lifecycle and the drop zone file-intake control.

pub mod accept;
pub mod drop_zone;
pub mod settings;
pub mod tools;
pub mod widget;

pub use accept::AcceptPolicy;
pub use drop_zone::{DragState, DropZone, Selection};
pub use settings::{Dimension, DropZoneConfig, Settings};
pub use widget::{Control, ControlState, Widget};

pub use editkit_dom::{Document, DragEvent, EventType, File};

/// UI layer errors
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    Dom(#[from] editkit_dom::DomError),

    #[error("Control #{0} is not mounted")]
    NotMounted(String),

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
