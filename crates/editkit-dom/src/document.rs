//! Document - Mount Surface
//!
//! Holds mounted elements by id together with their listener bindings.

use std::collections::HashMap;

use crate::{DomError, Element, ListenerRegistry, Result};

/// Host document controls are mounted into
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
    listeners: ListenerRegistry,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an element under its `id` attribute, returns the id
    pub fn mount(&mut self, element: Element) -> Result<String> {
        let id = element.id().ok_or(DomError::MissingId)?.to_string();
        if self.elements.contains_key(&id) {
            return Err(DomError::DuplicateId(id));
        }

        tracing::debug!("mounted <{}> #{}", element.tag_name(), id);
        self.elements.insert(id.clone(), element);
        Ok(id)
    }

    /// Detach an element from the document
    pub fn unmount(&mut self, id: &str) -> Result<Element> {
        let element = self
            .elements
            .remove(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))?;
        tracing::debug!("unmounted #{}", id);
        Ok(element)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut ListenerRegistry {
        &mut self.listeners
    }
}
