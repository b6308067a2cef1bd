//! Display configuration resolution for the terminal panel.
//!
//! [`ConfigResolver`] merges terminal-specific settings with editor-wide
//! fallbacks, selects the shell executable for the host platform, and maps
//! the current theme to its fixed ANSI palette. Every call re-reads the
//! settings snapshot; nothing is cached across calls.

use crate::constants::{GOLDEN_LINE_HEIGHT_RATIO, MEASURE_SAMPLE_GLYPH};
use crate::error::ConfigError;
use crate::font::{FontDescriptor, GlyphMeasurer};
use crate::palette::{self, AnsiPalette};
use crate::platform::Platform;
use crate::settings::{Settings, SettingsProvider, ThemeProvider};
use crate::theme::ThemeKind;

/// Resolves the terminal panel's display configuration.
///
/// Holds no mutable state of its own; the only state mutated across calls
/// lives inside the attached [`GlyphMeasurer`] (its lazily-created font
/// handles). Must be used from the thread that owns the display.
pub struct ConfigResolver {
    platform: Platform,
    settings: Box<dyn SettingsProvider>,
    theme: Box<dyn ThemeProvider>,
    measurer: Option<Box<dyn GlyphMeasurer>>,
}

impl ConfigResolver {
    /// Creates a resolver without glyph measurement.
    ///
    /// [`ConfigResolver::font`] fails with
    /// [`ConfigError::MeasurerUnavailable`] until a measurer is attached
    /// via [`ConfigResolver::with_measurer`].
    pub fn new(
        platform: Platform,
        settings: Box<dyn SettingsProvider>,
        theme: Box<dyn ThemeProvider>,
    ) -> Self {
        Self {
            platform,
            settings,
            theme,
            measurer: None,
        }
    }

    /// Attaches the glyph measurement strategy used by [`Self::font`].
    pub fn with_measurer(mut self, measurer: Box<dyn GlyphMeasurer>) -> Self {
        self.measurer = Some(measurer);
        self
    }

    /// Returns the 16-color ANSI palette for the current theme.
    pub fn palette(&self) -> Result<&'static AnsiPalette, ConfigError> {
        let id = self.theme.theme_id();
        let kind = ThemeKind::from_theme_id(&id)?;
        log::debug!("theme {id:?} normalized to {}", kind.base_id());
        Ok(palette::palette_for(kind))
    }

    /// Resolves the terminal font and measures its glyph cell.
    ///
    /// Family, size and line height fall back from the terminal settings
    /// to the editor settings; a line height that is still zero derives
    /// from the font size via [`GOLDEN_LINE_HEIGHT_RATIO`]. The measured
    /// box is rounded up so a glyph never overflows its cell.
    pub fn font(&mut self) -> Result<FontDescriptor, ConfigError> {
        let settings = self.settings.settings()?;
        let (family, size, line_height) = resolve_font_values(&settings);

        let measurer = self
            .measurer
            .as_mut()
            .ok_or(ConfigError::MeasurerUnavailable)?;
        let (width, height) = measurer.measure(&family, size, line_height, MEASURE_SAMPLE_GLYPH)?;
        log::debug!("measured {family:?} at {size}px: {width}x{height}");

        Ok(FontDescriptor {
            family,
            size,
            line_height,
            glyph_width: width.ceil() as u32,
            glyph_height: height.ceil() as u32,
        })
    }

    /// Returns the configured shell path for the resolver's platform.
    ///
    /// The path is returned as configured; whether it exists or is
    /// executable is the spawner's concern.
    pub fn shell(&self) -> Result<String, ConfigError> {
        let shell = self.settings.settings()?.terminal.shell;
        Ok(match self.platform {
            Platform::Windows => shell.windows,
            Platform::Mac => shell.osx,
            Platform::Linux => shell.linux,
        })
    }
}

/// Applies the terminal-over-editor fallback chain to the font settings.
fn resolve_font_values(settings: &Settings) -> (String, u32, u32) {
    let terminal = &settings.terminal;
    let editor = &settings.editor;

    let family = match terminal.font_family {
        Some(ref f) if !f.is_empty() => f.clone(),
        _ => editor.font_family.clone(),
    };

    let mut size = terminal
        .font_size
        .as_ref()
        .map(|v| v.to_integer(0))
        .unwrap_or(0) as u32;
    if size == 0 {
        size = editor.font_size;
    }

    let mut line_height = terminal
        .line_height
        .as_ref()
        .map(|v| v.to_integer(0))
        .unwrap_or(0) as u32;
    if line_height == 0 {
        line_height = editor.line_height;
    }
    if line_height == 0 {
        line_height = (GOLDEN_LINE_HEIGHT_RATIO * size as f32).round() as u32;
    }

    (family, size, line_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{LooseInt, StaticSettings, StaticTheme};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Measurer returning a fixed box regardless of input.
    struct FixedMeasurer(f32, f32);

    impl GlyphMeasurer for FixedMeasurer {
        fn measure(
            &mut self,
            _family: &str,
            _size: u32,
            _line_height: u32,
            _sample: char,
        ) -> Result<(f32, f32), ConfigError> {
            Ok((self.0, self.1))
        }
    }

    /// Measurer that records every call and scales the box with the size,
    /// so stale styling would show up in the result.
    struct RecordingMeasurer {
        calls: Rc<RefCell<Vec<(String, u32, u32, char)>>>,
    }

    impl GlyphMeasurer for RecordingMeasurer {
        fn measure(
            &mut self,
            family: &str,
            size: u32,
            line_height: u32,
            sample: char,
        ) -> Result<(f32, f32), ConfigError> {
            self.calls
                .borrow_mut()
                .push((family.to_string(), size, line_height, sample));
            Ok((size as f32 * 0.5, line_height as f32))
        }
    }

    /// Settings provider serving a different snapshot on each call.
    struct SeqSettings(RefCell<VecDeque<Settings>>);

    impl SettingsProvider for SeqSettings {
        fn settings(&self) -> Result<Settings, ConfigError> {
            Ok(self.0.borrow_mut().pop_front().expect("snapshot available"))
        }
    }

    fn resolver_with(settings: Settings) -> ConfigResolver {
        ConfigResolver::new(
            Platform::Linux,
            Box::new(StaticSettings(settings)),
            Box::new(StaticTheme("vs-dark".to_string())),
        )
    }

    #[test]
    fn test_font_size_string_zero_falls_back_to_editor() {
        let mut settings = Settings::default();
        settings.terminal.font_size = Some(LooseInt::Text("0".into()));
        settings.editor.font_size = 14;

        let mut resolver =
            resolver_with(settings).with_measurer(Box::new(FixedMeasurer(7.0, 21.0)));
        let font = resolver.font().unwrap();
        assert_eq!(font.size, 14);
    }

    #[test]
    fn test_font_size_non_numeric_falls_back_to_editor() {
        let mut settings = Settings::default();
        settings.terminal.font_size = Some(LooseInt::Text("abc".into()));
        settings.editor.font_size = 16;

        let mut resolver =
            resolver_with(settings).with_measurer(Box::new(FixedMeasurer(8.0, 24.0)));
        let font = resolver.font().unwrap();
        assert_eq!(font.size, 16);
    }

    #[test]
    fn test_line_height_derives_from_size_when_both_unset() {
        let mut settings = Settings::default();
        settings.terminal.font_size = Some(LooseInt::Int(10));
        settings.editor.line_height = 0;

        let mut resolver =
            resolver_with(settings).with_measurer(Box::new(FixedMeasurer(6.0, 15.0)));
        let font = resolver.font().unwrap();
        assert_eq!(font.size, 10);
        assert_eq!(font.line_height, 15); // round(1.5 * 10)
    }

    #[test]
    fn test_terminal_line_height_wins_over_editor() {
        let mut settings = Settings::default();
        settings.terminal.line_height = Some(LooseInt::Int(22));
        settings.editor.line_height = 18;

        let mut resolver =
            resolver_with(settings).with_measurer(Box::new(FixedMeasurer(7.0, 22.0)));
        assert_eq!(resolver.font().unwrap().line_height, 22);
    }

    #[test]
    fn test_empty_family_falls_back_to_editor() {
        let mut settings = Settings::default();
        settings.terminal.font_family = Some(String::new());
        settings.editor.font_family = "Editor Mono".to_string();

        let mut resolver =
            resolver_with(settings).with_measurer(Box::new(FixedMeasurer(7.0, 21.0)));
        assert_eq!(resolver.font().unwrap().family, "Editor Mono");
    }

    #[test]
    fn test_measured_box_rounds_up() {
        let settings = Settings::default();
        let mut resolver =
            resolver_with(settings).with_measurer(Box::new(FixedMeasurer(7.2, 16.1)));
        let font = resolver.font().unwrap();
        assert_eq!(font.glyph_width, 8);
        assert_eq!(font.glyph_height, 17);
    }

    #[test]
    fn test_consecutive_calls_remeasure_with_fresh_settings() {
        let mut first = Settings::default();
        first.terminal.font_family = Some("First Mono".to_string());
        first.terminal.font_size = Some(LooseInt::Int(10));
        first.terminal.line_height = Some(LooseInt::Int(16));

        let mut second = Settings::default();
        second.terminal.font_family = Some("Second Mono".to_string());
        second.terminal.font_size = Some(LooseInt::Int(20));
        second.terminal.line_height = Some(LooseInt::Int(30));

        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut resolver = ConfigResolver::new(
            Platform::Linux,
            Box::new(SeqSettings(RefCell::new(VecDeque::from([first, second])))),
            Box::new(StaticTheme("vs".to_string())),
        )
        .with_measurer(Box::new(RecordingMeasurer {
            calls: Rc::clone(&calls),
        }));

        let a = resolver.font().unwrap();
        let b = resolver.font().unwrap();

        assert_eq!(a.family, "First Mono");
        assert_eq!(a.glyph_width, 5);
        assert_eq!(a.glyph_height, 16);
        assert_eq!(b.family, "Second Mono");
        assert_eq!(b.glyph_width, 10);
        assert_eq!(b.glyph_height, 30);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("First Mono".to_string(), 10, 16, 'X'));
        assert_eq!(calls[1], ("Second Mono".to_string(), 20, 30, 'X'));
    }

    #[test]
    fn test_font_without_measurer_fails_fast() {
        let mut resolver = resolver_with(Settings::default());
        assert!(matches!(
            resolver.font(),
            Err(ConfigError::MeasurerUnavailable)
        ));
        // The other operations still work without one.
        assert!(resolver.palette().is_ok());
        assert!(resolver.shell().is_ok());
    }

    #[test]
    fn test_shell_selection_by_platform() {
        let mut settings = Settings::default();
        settings.terminal.shell.windows = "cmd.exe".to_string();
        settings.terminal.shell.osx = "/bin/zsh".to_string();
        settings.terminal.shell.linux = "/usr/bin/fish".to_string();

        for (platform, expected) in [
            (Platform::Windows, "cmd.exe"),
            (Platform::Mac, "/bin/zsh"),
            (Platform::Linux, "/usr/bin/fish"),
        ] {
            let resolver = ConfigResolver::new(
                platform,
                Box::new(StaticSettings(settings.clone())),
                Box::new(StaticTheme("vs".to_string())),
            );
            assert_eq!(resolver.shell().unwrap(), expected);
        }
    }

    #[test]
    fn test_palette_per_theme() {
        for (id, first_bright_black) in [
            ("hc-black", "#7f7f7f"),
            ("vs light-plus", "#666666"),
            ("vs-dark dark-plus", "#666666"),
        ] {
            let resolver = ConfigResolver::new(
                Platform::Linux,
                Box::new(StaticSettings(Settings::default())),
                Box::new(StaticTheme(id.to_string())),
            );
            let palette = resolver.palette().unwrap();
            assert_eq!(palette.len(), 16);
            assert_eq!(palette[8], first_bright_black);
        }
    }

    #[test]
    fn test_palette_unknown_theme_errors() {
        let resolver = ConfigResolver::new(
            Platform::Linux,
            Box::new(StaticSettings(Settings::default())),
            Box::new(StaticTheme("gruvbox".to_string())),
        );
        assert!(matches!(
            resolver.palette(),
            Err(ConfigError::UnknownTheme { .. })
        ));
    }
}
