//! Derives the page's scroll-linked visual state from measured geometry.
//!
//! Everything here is pure: the caller measures the layout, hands it over as a
//! [`LayoutSnapshot`], and gets a whole new [`ScrollState`] back.

use crate::config::ScrollConfig;

/// Vertical extent of an element, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f64,
    pub bottom: f64,
}

impl Region {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line at `y` crosses this region, edges included.
    pub fn contains_line(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroRegion {
    /// Viewport-relative top, negative once scrolled past.
    pub top: f64,
    /// Full rendered height of the hero, independent of the viewport.
    pub content_height: f64,
}

/// Geometry read from the page for one recomputation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSnapshot {
    pub viewport_height: f64,
    pub dark_regions: Vec<Region>,
    /// `None` while the hero is not mounted.
    pub hero: Option<HeroRegion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub nav_over_dark: bool,
    pub bottom_bar_over_dark: bool,
    /// Always within `[0, 1]`.
    pub hero_progress: f64,
}

impl ScrollState {
    /// Builds the state that follows `previous` for the given layout.
    ///
    /// Both dark flags are recomputed from scratch. Hero progress is carried
    /// over from `previous` when the snapshot has no hero.
    pub fn derive(previous: &ScrollState, snapshot: &LayoutSnapshot, config: &ScrollConfig) -> Self {
        let nav_line = config.nav_probe;
        let bottom_line = snapshot.viewport_height - config.bottom_probe_inset;

        let nav_over_dark = any_crosses(&snapshot.dark_regions, nav_line);
        let bottom_bar_over_dark = any_crosses(&snapshot.dark_regions, bottom_line);

        let hero_progress = snapshot
            .hero
            .map(|hero| hero_progress(&hero, snapshot.viewport_height, config.hero_completion_ratio))
            .unwrap_or(previous.hero_progress);

        Self {
            nav_over_dark,
            bottom_bar_over_dark,
            hero_progress,
        }
    }
}

fn any_crosses(regions: &[Region], y: f64) -> bool {
    regions
        .iter()
        .fold(false, |hit, region| hit | region.contains_line(y))
}

/// Fraction of the hero's animation range that has been scrolled through.
///
/// The animation completes after `completion_ratio` of the hero's scrollable
/// height. A hero no taller than the viewport never animates.
pub fn hero_progress(hero: &HeroRegion, viewport_height: f64, completion_ratio: f64) -> f64 {
    let scrolled = (-hero.top).max(0.0);
    let max_scroll = hero.content_height - viewport_height;
    let denom = max_scroll * completion_ratio;
    if denom.is_nan() || denom <= 0.0 {
        return 0.0;
    }
    let ratio = scrolled / denom;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(viewport_height: f64, dark: &[(f64, f64)], hero: Option<(f64, f64)>) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport_height,
            dark_regions: dark.iter().map(|&(t, b)| Region::new(t, b)).collect(),
            hero: hero.map(|(top, content_height)| HeroRegion { top, content_height }),
        }
    }

    #[test]
    fn test_default_state() {
        let state = ScrollState::default();
        assert!(!state.nav_over_dark);
        assert!(!state.bottom_bar_over_dark);
        assert_eq!(state.hero_progress, 0.0);
    }

    #[test]
    fn test_region_edges_are_inclusive() {
        let region = Region::new(64.0, 200.0);
        assert!(region.contains_line(64.0));
        assert!(region.contains_line(200.0));
        assert!(!region.contains_line(200.5));
        assert!(!region.contains_line(63.9));
    }

    #[test]
    fn test_no_dark_regions_clears_both_flags() {
        let previous = ScrollState {
            nav_over_dark: true,
            bottom_bar_over_dark: true,
            hero_progress: 0.4,
        };
        let state = ScrollState::derive(&previous, &snapshot(800.0, &[], None), &ScrollConfig::default());
        assert!(!state.nav_over_dark);
        assert!(!state.bottom_bar_over_dark);
        assert_eq!(state.hero_progress, 0.4);
    }

    #[test]
    fn test_later_region_still_counts() {
        // first region misses both lines, second one hits the nav line
        let snap = snapshot(800.0, &[(300.0, 400.0), (0.0, 100.0)], None);
        let state = ScrollState::derive(&ScrollState::default(), &snap, &ScrollConfig::default());
        assert!(state.nav_over_dark);
        assert!(!state.bottom_bar_over_dark);
    }

    #[test]
    fn test_bottom_line_follows_viewport_height() {
        let config = ScrollConfig::default();
        let snap = snapshot(900.0, &[(830.0, 1500.0)], None);
        assert!(ScrollState::derive(&ScrollState::default(), &snap, &config).bottom_bar_over_dark);

        let snap = snapshot(1000.0, &[(830.0, 1500.0)], None);
        assert!(ScrollState::derive(&ScrollState::default(), &snap, &config).bottom_bar_over_dark);

        let snap = snapshot(800.0, &[(830.0, 1500.0)], None);
        assert!(!ScrollState::derive(&ScrollState::default(), &snap, &config).bottom_bar_over_dark);
    }

    #[test]
    fn test_hero_progress_at_rest_is_zero() {
        let hero = HeroRegion { top: 0.0, content_height: 1200.0 };
        assert_eq!(hero_progress(&hero, 800.0, 0.3), 0.0);
        // below the viewport top, still nothing scrolled
        let hero = HeroRegion { top: 250.0, content_height: 1200.0 };
        assert_eq!(hero_progress(&hero, 800.0, 0.3), 0.0);
    }

    #[test]
    fn test_hero_shorter_than_viewport() {
        let hero = HeroRegion { top: -400.0, content_height: 600.0 };
        assert_eq!(hero_progress(&hero, 800.0, 0.3), 0.0);
        let hero = HeroRegion { top: -400.0, content_height: 800.0 };
        assert_eq!(hero_progress(&hero, 800.0, 0.3), 0.0);
    }

    #[test]
    fn test_hero_progress_is_monotonic() {
        let mut last = 0.0;
        for step in 0..200 {
            let hero = HeroRegion { top: -(step as f64) * 5.0, content_height: 1000.0 };
            let progress = hero_progress(&hero, 500.0, 0.3);
            assert!(progress >= last);
            assert!((0.0..=1.0).contains(&progress));
            last = progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_nan_geometry_does_not_leak() {
        let hero = HeroRegion { top: f64::NAN, content_height: 1000.0 };
        assert_eq!(hero_progress(&hero, 500.0, 0.3), 0.0);
        let hero = HeroRegion { top: -10.0, content_height: f64::NAN };
        assert_eq!(hero_progress(&hero, 500.0, 0.3), 0.0);
    }

    #[test]
    fn test_hero_reappearing_replaces_carried_progress() {
        let config = ScrollConfig::default();
        let first = ScrollState::derive(
            &ScrollState::default(),
            &snapshot(500.0, &[], Some((-75.0, 1000.0))),
            &config,
        );
        let gone = ScrollState::derive(&first, &snapshot(500.0, &[], None), &config);
        assert_eq!(gone.hero_progress, 0.5);
        let back = ScrollState::derive(&gone, &snapshot(500.0, &[], Some((0.0, 1000.0))), &config);
        assert_eq!(back.hero_progress, 0.0);
    }
}
