//! editkit DOM - Element Layer
//!
//! The slice of a document model that editkit controls render into:
//! element construction, style and class manipulation, markup
//! serialization, a mount surface and per-element event listeners.

mod attributes;
mod classlist;
mod document;
mod element;
mod events;
mod listeners;
mod style;

pub use attributes::{Attr, AttributeMap};
pub use classlist::ClassList;
pub use document::Document;
pub use element::Element;
pub use events::{DataTransfer, DragEvent, EventType, File};
pub use listeners::{HandlerId, ListenerRegistry};
pub use style::StyleDeclaration;

/// DOM layer errors
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    #[error("Element has no id attribute")]
    MissingId,
}

pub type Result<T> = std::result::Result<T, DomError>;
