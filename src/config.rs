use log::Level;

/// Class carried by every section with a dark background.
pub const DARK_SECTION_CLASS: &str = "section-dark";

/// Anchor id of the hero section.
pub const HERO_ANCHOR: &str = "home";

/// Log level baked in at build time through `IBX_LOG_LEVEL`.
pub fn get_log_level() -> Level {
    option_env!("IBX_LOG_LEVEL")
        .and_then(parse_level)
        .unwrap_or(if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        })
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Probe positions and tuning used when deriving the scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Nav bar probe line, in pixels from the viewport top.
    pub nav_probe: f64,
    /// Bottom bar probe line, in pixels up from the viewport bottom.
    pub bottom_probe_inset: f64,
    /// Share of the hero's scrollable range after which the intro animation is done.
    pub hero_completion_ratio: f64,
    pub dark_class: &'static str,
    pub hero_anchor: &'static str,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_probe: 64.0,
            bottom_probe_inset: 60.0,
            hero_completion_ratio: 0.3,
            dark_class: DARK_SECTION_CLASS,
            hero_anchor: HERO_ANCHOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert_eq!(config.nav_probe, 64.0);
        assert_eq!(config.bottom_probe_inset, 60.0);
        assert_eq!(config.hero_completion_ratio, 0.3);
        assert_eq!(config.hero_anchor, "home");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("INFO"), Some(Level::Info));
        assert_eq!(parse_level(" warn "), Some(Level::Warn));
        assert_eq!(parse_level("loud"), None);
    }
}
