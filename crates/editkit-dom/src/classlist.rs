//! Class List
//!
//! Ordered set of class tags backing an element's `class` attribute.

use std::fmt;

/// Space-separated class tags, insertion ordered, no duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tags: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a `class` attribute value
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for tag in value.split_whitespace() {
            list.add(tag);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag; empty and already present tags are ignored
    pub fn add(&mut self, tag: &str) -> &mut Self {
        if !tag.is_empty() && !self.contains(tag) {
            self.tags.push(tag.to_string());
        }
        self
    }

    pub fn remove(&mut self, tag: &str) -> &mut Self {
        self.tags.retain(|t| t != tag);
        self
    }

    /// Toggle a tag, returns whether it is present afterwards.
    /// With `force` the tag is set or cleared unconditionally.
    pub fn toggle(&mut self, tag: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or_else(|| !self.contains(tag));
        if present {
            self.add(tag);
        } else {
            self.remove(tag);
        }
        present
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Serialized attribute value
    pub fn value(&self) -> String {
        self.tags.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}
