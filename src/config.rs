use std::rc::Rc;

use log::{warn, Level};
use serde::Deserialize;

use crate::error::Result;
use crate::reveal::section::SectionSpec;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Engine transitions are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const REVEAL_PRESETS: &str = include_str!("reveal.json");

/// Reveal presets for every section on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub sections: Vec<SectionSpec>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The embedded presets, or the compiled-in ones if those fail to parse.
    pub fn load() -> Self {
        Self::from_json(REVEAL_PRESETS).unwrap_or_else(|e| {
            warn!("Falling back to built-in reveal presets: {}", e);
            Self::builtin()
        })
    }

    pub fn builtin() -> Self {
        Self {
            sections: vec![
                SectionSpec::contact(),
                SectionSpec::services(),
                SectionSpec::testimonials(),
            ],
        }
    }

    /// A section's spec. Unknown ids get a spec with no groups, which
    /// arms normally and plays instantly.
    pub fn section(&self, id: &str) -> Rc<SectionSpec> {
        let spec = self
            .sections
            .iter()
            .find(|spec| spec.id == id)
            .cloned()
            .or_else(|| SectionSpec::preset(id))
            .unwrap_or_else(|| {
                warn!("No reveal preset for section {}", id);
                SectionSpec::empty(id)
            });
        Rc::new(spec)
    }
}
