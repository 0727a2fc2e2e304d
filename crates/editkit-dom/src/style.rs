//! Inline Style
//!
//! Ordered `property: value` declarations of a `style` attribute.

/// Inline style declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    properties: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property. An empty value removes it, like assigning `""`
    /// through `element.style`.
    pub fn set(&mut self, property: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.remove(property);
            return;
        }

        match self.properties.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self.properties.push((property.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, property: &str) {
        self.properties.retain(|(p, _)| p != property);
    }

    /// Serialized `style` attribute value
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
