use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::Callback;

use super::layout::{self, LayoutError};

/// Sections reachable from the nav bar, the action bar and in-page links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    AboutUs,
    Projects,
    Team,
    IdeaBank,
    AskBar,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::AboutUs,
        Section::Projects,
        Section::Team,
        Section::IdeaBank,
        Section::AskBar,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::AboutUs => "about-us",
            Section::Projects => "projects",
            Section::Team => "team",
            Section::IdeaBank => "idea-bank",
            Section::AskBar => "ask-bar",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let anchor = anchor.trim_start_matches('#');
        Section::ALL.into_iter().find(|section| section.anchor() == anchor)
    }
}

/// Smooth-scrolls so the section's top lines up with the document top.
pub fn scroll_to_section(section: Section) {
    match layout::section_offset(section.anchor()) {
        Ok(Some(top)) => {
            debug!("Scrolling to #{} at {}px", section.anchor(), top);
            if let Err(e) = smooth_scroll_to(top) {
                warn!("Failed to scroll to #{}: {}", section.anchor(), e);
            }
        }
        Ok(None) => debug!("No element for #{}, not scrolling", section.anchor()),
        Err(e) => warn!("Failed to locate #{}: {}", section.anchor(), e),
    }
}

fn smooth_scroll_to(top: f64) -> Result<(), LayoutError> {
    let window = web_sys::window().ok_or(LayoutError::NoWindow)?;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Click handler that scrolls to `section`.
pub fn scroll_callback<E: 'static>(section: Section) -> Callback<E> {
    Callback::from(move |_: E| scroll_to_section(section))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_are_distinct() {
        let mut anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn test_from_anchor_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("#idea-bank"), Some(Section::IdeaBank));
        assert_eq!(Section::from_anchor("pricing"), None);
    }

    #[test]
    fn test_hero_anchor_matches_config() {
        assert_eq!(Section::Home.anchor(), crate::config::HERO_ANCHOR);
    }
}
