pub mod anchor;
pub mod engine;
pub mod hook;
pub mod layout;
pub mod presentation;

pub use anchor::{scroll_callback, scroll_to_section, Section};
pub use engine::{HeroRegion, LayoutSnapshot, Region, ScrollState};
pub use hook::use_scroll_state;
