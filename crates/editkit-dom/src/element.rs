//! Element Construction and Serialization
//!
//! `create`, `css` and `outer_html`: the element helpers controls use to
//! build their markup.

use crate::{AttributeMap, ClassList, StyleDeclaration};

/// A detached or mounted element
#[derive(Debug, Clone)]
pub struct Element {
    tag_name: String,
    attributes: AttributeMap,
    style: StyleDeclaration,
    inner_html: String,
}

impl Element {
    /// Create an element from a tag name, attributes and inner markup.
    /// Inner markup is taken verbatim.
    pub fn create(tag_name: &str, attrs: &[(&str, &str)], inner_html: &str) -> Self {
        let mut attributes = AttributeMap::new();
        for (name, value) in attrs {
            attributes.set(name, *value);
        }

        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes,
            style: StyleDeclaration::new(),
            inner_html: inner_html.to_string(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id")
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    pub fn style(&self) -> &StyleDeclaration {
        &self.style
    }

    /// Apply a property map to the inline style. `None` values are skipped.
    pub fn css<'a, I>(&mut self, properties: I)
    where
        I: IntoIterator<Item = (&'a str, Option<String>)>,
    {
        for (property, value) in properties {
            if let Some(value) = value {
                self.style.set(property, &value);
            }
        }
    }

    pub fn class_name(&self) -> &str {
        self.attributes.get("class").unwrap_or("")
    }

    /// Replace the `class` attribute with the serialized class list
    pub fn set_class_name(&mut self, classes: &ClassList) {
        self.attributes.set("class", classes.value());
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Serialize the element including itself. The style attribute is
    /// emitted where `style` was first touched, after the creation
    /// attributes.
    pub fn outer_html(&self) -> String {
        let mut html = String::with_capacity(64 + self.inner_html.len());
        html.push('<');
        html.push_str(&self.tag_name);

        let mut style_written = false;
        for attr in self.attributes.iter() {
            if attr.name == "class" && !style_written {
                self.write_style(&mut html);
                style_written = true;
            }
            write_attr(&mut html, &attr.name, &attr.value);
        }
        if !style_written {
            self.write_style(&mut html);
        }

        html.push('>');
        html.push_str(&self.inner_html);
        html.push_str("</");
        html.push_str(&self.tag_name);
        html.push('>');
        html
    }

    fn write_style(&self, html: &mut String) {
        if !self.style.is_empty() {
            write_attr(html, "style", &self.style.css_text());
        }
    }
}

fn write_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '"' => html.push_str("&quot;"),
            _ => html.push(c),
        }
    }
    html.push('"');
}
