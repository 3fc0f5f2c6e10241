//! Maps a [`ScrollState`] to the classes and inline styles the page renders.

use super::engine::ScrollState;

/// Past this progress the hero's main block stops following the scroll.
pub const MAIN_CONTENT_HOLD: f64 = 0.7;
/// The quote starts fading in after this progress.
pub const QUOTE_REVEAL: f64 = 0.2;

const QUOTE_FADE_RATE: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// White text and borders, for dark backgrounds.
    Light,
    /// Brand blue.
    Brand,
    /// Black text and borders.
    Ink,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Light => "text-white",
            Tone::Brand => "text-brand",
            Tone::Ink => "text-ink",
        }
    }

    pub fn outline_class(self) -> &'static str {
        match self {
            Tone::Light => "outline-white",
            Tone::Brand => "outline-brand",
            Tone::Ink => "outline-ink",
        }
    }
}

pub fn nav_tone(state: &ScrollState) -> Tone {
    if state.nav_over_dark {
        Tone::Light
    } else {
        Tone::Brand
    }
}

pub fn login_tone(state: &ScrollState) -> Tone {
    if state.bottom_bar_over_dark {
        Tone::Light
    } else {
        Tone::Brand
    }
}

/// Tone of the ASK and APPLY buttons.
pub fn action_tone(state: &ScrollState) -> Tone {
    if state.bottom_bar_over_dark {
        Tone::Light
    } else {
        Tone::Ink
    }
}

/// Vertical offset of the hero's main block, in `vh`.
pub fn main_content_offset(progress: f64) -> f64 {
    if progress <= MAIN_CONTENT_HOLD {
        -(progress * 10.0)
    } else {
        -20.0
    }
}

/// Vertical offset of the quote block, in `vh`.
pub fn quote_offset(progress: f64) -> f64 {
    if progress > QUOTE_REVEAL {
        (1.0 - progress) * 20.0 - 10.0
    } else {
        15.0
    }
}

pub fn quote_opacity(progress: f64) -> f64 {
    if progress > QUOTE_REVEAL {
        (progress - QUOTE_REVEAL) * QUOTE_FADE_RATE
    } else {
        0.0
    }
}

pub fn main_content_style(state: &ScrollState) -> String {
    format!(
        "transform: translateY({}vh); padding-top: 30vh; justify-content: flex-start;",
        main_content_offset(state.hero_progress)
    )
}

pub fn quote_style(state: &ScrollState) -> String {
    format!(
        "transform: translateY({}vh); opacity: {};",
        quote_offset(state.hero_progress),
        quote_opacity(state.hero_progress)
    )
}
