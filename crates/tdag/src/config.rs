//! Visual constants shared by the layering pass and the router.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Horizontal clearance kept around bends and between spans sharing a row.
    pub gap: f64,
    /// Height of a node box.
    pub line_height: f64,
    /// Vertical space between two rows.
    pub line_space: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 20.0,
            line_height: 10.0,
            line_space: 4.0,
        }
    }
}

impl LayoutConfig {
    /// Parses a (possibly partial) JSON object; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn row_pitch(&self) -> f64 {
        self.line_height + self.line_space
    }
}
