use crate::config::{ColorMode, Config};
use crate::presentation::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::widgets::catalog_tree::RenderStyle;

/// Resolved presentation settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = if json {
            false
        } else {
            match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config.output.color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => caps.supports_color && !caps.is_ci,
                },
            }
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
        }
    }

    /// Style for the full-screen browser
    pub fn interactive_style(&self) -> RenderStyle {
        RenderStyle::interactive(self.unicode, self.color)
    }

    /// Style for one-shot output
    pub fn print_style(&self) -> RenderStyle {
        RenderStyle {
            unicode: self.unicode,
            color: self.color,
            show_cursor: false,
        }
    }
}
