//! Column definitions and alignment.

use serde::{Deserialize, Serialize};

use crate::width::{display_width_with, WidthMode};

/// Text alignment within a column.
///
/// The discriminants are the legacy integer codes accepted by
/// [`Align::from_code`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    Left = 0,
    /// Pad on both sides, extra space on the right.
    #[default]
    Center = 1,
    /// Pad on the left.
    Right = 2,
}

impl Align {
    /// Maps an integer code to an alignment.
    ///
    /// Only `0` (left) and `2` (right) are recognised; anything else is
    /// [`Align::Center`].
    ///
    /// ```rust
    /// use standout_table::Align;
    ///
    /// assert_eq!(Align::from_code(0), Align::Left);
    /// assert_eq!(Align::from_code(2), Align::Right);
    /// assert_eq!(Align::from_code(99), Align::Center);
    /// ```
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Align::Left,
            2 => Align::Right,
            _ => Align::Center,
        }
    }

    /// The integer code of this alignment.
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// A named table column.
///
/// The name and its display width are fixed at creation. Alignment and the
/// default value can change over the column's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    name: String,
    default_value: String,
    align: Align,
    width: usize,
}

impl Column {
    /// Creates a centered column with an empty default.
    pub fn new(name: impl Into<String>, mode: WidthMode) -> Self {
        let name = name.into();
        let width = display_width_with(&name, mode);
        Column {
            name,
            default_value: String::new(),
            align: Align::Center,
            width,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value substituted for omitted cells and the `__DEFAULT__` sentinel.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn set_default(&mut self, value: impl Into<String>) {
        self.default_value = value.into();
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Display width of the column name.
    pub fn width(&self) -> usize {
        self.width
    }
}
