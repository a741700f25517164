//! Render configuration.
//!
//! Options are plain serde types so they can live in an application's config
//! file:
//!
//! ```rust
//! use standout_table::TableOptions;
//!
//! let options = TableOptions::from_yaml("border: false\nsequence: true\n").unwrap();
//! assert!(!options.border);
//! assert!(options.sequence);
//! assert_eq!(options.sequence_title, "Seq");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::width::WidthMode;

/// Glyphs used to draw borders.
///
/// The defaults produce the classic `+---+` / `| x |` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderGlyphs {
    /// Fill for separator lines.
    pub horizontal: char,
    /// Boundary between cells on header and data lines.
    pub vertical: char,
    /// Boundary between cells on separator lines.
    pub joint: char,
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        BorderGlyphs {
            horizontal: '-',
            vertical: '|',
            joint: '+',
        }
    }
}

/// Options that affect how a table is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Draw borders and separator lines.
    pub border: bool,
    /// Prepend a 1-based row number column when rendering.
    pub sequence: bool,
    /// Title of the row number column. While sequencing is on, no table
    /// column may share this name.
    pub sequence_title: String,
    pub glyphs: BorderGlyphs,
    /// Width rule for names and cells. Fixed once the table is built.
    pub width_mode: WidthMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            border: true,
            sequence: false,
            sequence_title: "Seq".to_string(),
            glyphs: BorderGlyphs::default(),
            width_mode: WidthMode::Han,
        }
    }
}

impl TableOptions {
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn sequence(mut self, sequence: bool) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn sequence_title(mut self, title: impl Into<String>) -> Self {
        self.sequence_title = title.into();
        self
    }

    pub fn glyphs(mut self, glyphs: BorderGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn width_mode(mut self, mode: WidthMode) -> Self {
        self.width_mode = mode;
        self
    }
}
