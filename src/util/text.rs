//! This module provides facilities for coloring and styling strings.

// Source for ANSI codes: https://gist.github.com/fnky/458719343aabd01cfb17a3a4f7296797

/// A trait to provide text styling capability to strings.
pub trait FancyText {
	/// Stylize a string with the provided options.
	///
	/// # Parameters
	/// *style* - The text style to use, such as bold.
	/// *foreground* - The color of the text itself.
    fn stylize(&self, style: Option<TextStyle>, foreground: Option<TextColor>) -> String;
}

/// The ANSI escape code to reset all styles and colors.
const ANSI_RESET: &str = "\x1B[0m";

/// Various styles of text.
/// Only the styles used by notices are here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextStyle {
    Bold,
}

/// The colors used to tell notices apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl FancyText for str {
    fn stylize(&self, style: Option<TextStyle>, foreground: Option<TextColor>) -> String {
		let style_code = style.map_or("", |s| s.ansi());
		let fg_code = foreground.map_or("", |c| c.ansi_fg());

		format!("{style_code}{fg_code}{self}{ANSI_RESET}")
    }
}

impl TextStyle {
	/// Returns this style's associated ANSI escape code.
    pub fn ansi(&self) -> &'static str {
        match self {
            TextStyle::Bold => "\x1B[1m",
        }
    }
}

impl TextColor {
	/// Returns the ANSI escape code that sets the text's foreground to this color.
    pub fn ansi_fg(&self) -> &'static str {
		match self {
            TextColor::Red => "\x1B[31m",
            TextColor::Green => "\x1B[32m",
            TextColor::Yellow => "\x1B[33m",
            TextColor::Cyan => "\x1B[36m",
        }
    }
}
