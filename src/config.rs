//! Configuration types for parsing and chart rendering.
//!
//! Game rules (keywords, target minute) live in [`crate::classify`];
//! this module only holds the mechanical knobs.

use serde::{Deserialize, Serialize};

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use vostats::config::ParserConfig;
///
/// let config = ParserConfig::new().with_strict(true);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Fail on the first malformed line instead of skipping it
    /// (default: false).
    pub strict: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Canvas geometry and font sizes for rendered charts.
///
/// Defaults match the 2000x1000 canvas the charts were originally
/// designed for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Caption font size.
    pub caption_size: u32,

    /// Axis label font size.
    pub label_size: u32,

    /// Value label font size (the number above each bar).
    pub value_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 1000,
            caption_size: 50,
            label_size: 28,
            value_size: 24,
        }
    }
}

impl ChartStyle {
    /// Creates a style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
