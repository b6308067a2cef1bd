//! Font descriptors and glyph measurement strategies.
//!
//! The resolver needs the pixel box of a rendered glyph to size the
//! terminal's character grid. How that box is obtained is a pluggable
//! strategy behind [`GlyphMeasurer`]: [`FontdueMeasurer`] rasterizes real
//! font data, [`HeuristicMeasurer`] estimates from the font size alone.

use std::collections::HashMap;

use crate::constants::{GOLDEN_LINE_HEIGHT_RATIO, HEURISTIC_WIDTH_RATIO};
use crate::error::ConfigError;

/// Resolved terminal font, including the measured glyph cell.
///
/// Produced fresh on every resolution; nothing is cached across
/// configuration changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    pub family: String,
    /// Font size in pixels.
    pub size: u32,
    /// Line height in pixels. Never zero after resolution.
    pub line_height: u32,
    /// Measured glyph cell width in pixels, rounded up.
    pub glyph_width: u32,
    /// Measured glyph cell height in pixels, rounded up.
    pub glyph_height: u32,
}

/// Measures the rendered box of a single glyph for a font configuration.
///
/// The resolver owns exactly one measurer and calls it from the thread that
/// owns the display. Implementations may keep lazily-created handles across
/// calls but need no internal locking.
pub trait GlyphMeasurer {
    /// Returns the rendered `(width, height)` of `sample` in
    /// device-independent pixels for the given family, size and line
    /// height.
    fn measure(
        &mut self,
        family: &str,
        size: u32,
        line_height: u32,
        sample: char,
    ) -> Result<(f32, f32), ConfigError>;
}

/// Rasterizer-backed glyph measurement via [`fontdue`].
///
/// Font data is registered per family up front but parsed lazily: the
/// [`fontdue::Font`] handle for a family is created on the first
/// measurement that needs it and reused for every call after that.
pub struct FontdueMeasurer {
    sources: HashMap<String, Vec<u8>>,
    fallback: Option<Vec<u8>>,
    loaded: HashMap<String, fontdue::Font>,
}

impl FontdueMeasurer {
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
            fallback: None,
            loaded: HashMap::new(),
        }
    }

    /// Registers raw font data (TTF/OTF bytes) for a family name.
    pub fn register(&mut self, family: impl Into<String>, data: Vec<u8>) {
        self.sources.insert(family.into(), data);
    }

    /// Sets the font data used for families with no registered entry.
    pub fn set_fallback(&mut self, data: Vec<u8>) {
        self.fallback = Some(data);
    }

    /// Returns the parsed font for a family, creating it on first use.
    fn font_for(&mut self, family: &str) -> Result<&fontdue::Font, ConfigError> {
        if !self.loaded.contains_key(family) {
            let data = self
                .sources
                .get(family)
                .or(self.fallback.as_ref())
                .ok_or_else(|| ConfigError::FontUnavailable {
                    family: family.to_string(),
                    reason: "no font data registered".to_string(),
                })?;
            let font = fontdue::Font::from_bytes(data.as_slice(), fontdue::FontSettings::default())
                .map_err(|reason| ConfigError::FontUnavailable {
                    family: family.to_string(),
                    reason: reason.to_string(),
                })?;
            log::debug!("parsed font data for family {family:?}");
            self.loaded.insert(family.to_string(), font);
        }
        Ok(&self.loaded[family])
    }
}

impl Default for FontdueMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphMeasurer for FontdueMeasurer {
    fn measure(
        &mut self,
        family: &str,
        size: u32,
        line_height: u32,
        sample: char,
    ) -> Result<(f32, f32), ConfigError> {
        let font = self.font_for(family)?;
        let px = size as f32;
        let metrics = font.metrics(sample, px);
        let width = metrics.advance_width;
        // The cell is as tall as the line box; the font's own line metrics
        // only apply when no line height was resolved upstream.
        let height = if line_height > 0 {
            line_height as f32
        } else {
            font.horizontal_line_metrics(px)
                .map(|m| m.new_line_size)
                .unwrap_or(px)
        };
        Ok((width, height))
    }
}

/// Headless estimation for hosts with no font data at hand.
///
/// Approximates a monospace glyph as `width_ratio * size` wide; the cell
/// height is the resolved line height.
pub struct HeuristicMeasurer {
    width_ratio: f32,
}

impl HeuristicMeasurer {
    pub fn new() -> Self {
        Self {
            width_ratio: HEURISTIC_WIDTH_RATIO,
        }
    }

    pub fn with_ratio(width_ratio: f32) -> Self {
        Self { width_ratio }
    }
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphMeasurer for HeuristicMeasurer {
    fn measure(
        &mut self,
        _family: &str,
        size: u32,
        line_height: u32,
        _sample: char,
    ) -> Result<(f32, f32), ConfigError> {
        let width = self.width_ratio * size as f32;
        let height = if line_height > 0 {
            line_height as f32
        } else {
            GOLDEN_LINE_HEIGHT_RATIO * size as f32
        };
        Ok((width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_width_ratio() {
        let mut measurer = HeuristicMeasurer::with_ratio(0.5);
        let (w, h) = measurer.measure("monospace", 14, 21, 'X').unwrap();
        assert_eq!(w, 7.0);
        assert_eq!(h, 21.0);
    }

    #[test]
    fn test_heuristic_derives_height_when_line_height_zero() {
        let mut measurer = HeuristicMeasurer::new();
        let (_, h) = measurer.measure("monospace", 10, 0, 'X').unwrap();
        assert_eq!(h, 15.0);
    }

    #[test]
    fn test_fontdue_unregistered_family_errors() {
        let mut measurer = FontdueMeasurer::new();
        let err = measurer.measure("Nonexistent Mono", 14, 21, 'X').unwrap_err();
        assert!(matches!(err, ConfigError::FontUnavailable { .. }));
    }

    #[test]
    fn test_fontdue_garbage_bytes_error() {
        let mut measurer = FontdueMeasurer::new();
        measurer.register("Broken Mono", vec![0u8; 64]);
        let err = measurer.measure("Broken Mono", 14, 21, 'X').unwrap_err();
        assert!(matches!(
            err,
            ConfigError::FontUnavailable { ref family, .. } if family == "Broken Mono"
        ));
    }
}
