//! Status badges and text styles.

use owo_colors::{OwoColorize, Style};

/// Marker printed before a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
    Info,
}

impl Badge {
    pub fn label(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, false) => "[OK]",
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Err, false) => "[ERR]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Info, false) => "[INFO]",
            (Self::Info, true) => "[\u{2139}]",
        }
    }

    pub fn style(self) -> Style {
        match self {
            Self::Ok => Style::new().green().bold(),
            Self::Err => Style::new().red().bold(),
            Self::Info => Style::new().cyan(),
        }
    }
}

pub fn dim() -> Style {
    Style::new().dimmed()
}

pub fn bold() -> Style {
    Style::new().bold()
}

/// `text` in `style`, or unchanged when color is off.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
