//! Accept Policy
//!
//! Filename suffix filter built from an `accept` setting such as
//! `"jpg, png"`. Entries are regular expression fragments and are not
//! escaped: `"jpe?g"` works, and so does a stray `.` matching any character.

use regex::{Regex, RegexBuilder};

use editkit_dom::File;

use crate::tools;

/// Compiled accept filter; `Any` keeps every file
#[derive(Debug, Clone, Default)]
pub enum AcceptPolicy {
    #[default]
    Any,
    Suffixes(Regex),
}

impl AcceptPolicy {
    /// Compile `(p1|p2|...)$`, case-insensitive, from a comma separated list
    pub fn parse(accept: &str) -> Result<Self, regex::Error> {
        let separator = Regex::new(r"\s*,\s*")?;
        let alternation = separator.split(accept).collect::<Vec<_>>().join("|");

        let pattern = RegexBuilder::new(&format!("({})$", alternation))
            .case_insensitive(true)
            .build()?;
        Ok(AcceptPolicy::Suffixes(pattern))
    }

    /// Policy for an optional setting. A pattern that fails to compile
    /// falls back to accepting every file.
    pub fn from_setting(accept: Option<&str>) -> Self {
        let Some(accept) = accept else {
            return AcceptPolicy::Any;
        };

        match Self::parse(accept) {
            Ok(policy) => policy,
            Err(err) => {
                tracing::warn!("ignoring accept setting {:?}: {}", accept, err);
                AcceptPolicy::Any
            }
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            AcceptPolicy::Any => true,
            AcceptPolicy::Suffixes(pattern) => pattern.is_match(name),
        }
    }

    /// Keep matching files in their original order
    pub fn filter(&self, files: Vec<File>) -> Vec<File> {
        match self {
            AcceptPolicy::Any => files,
            AcceptPolicy::Suffixes(_) => tools::grep(files, |file| self.matches(&file.name)),
        }
    }
}
