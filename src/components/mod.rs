pub mod action_bar;
pub mod nav_bar;
