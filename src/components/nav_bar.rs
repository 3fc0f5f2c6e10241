use yew::prelude::*;

use crate::scroll::presentation::nav_tone;
use crate::scroll::{scroll_callback, ScrollState, Section};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub state: ScrollState,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let tone = nav_tone(&props.state).text_class();
    let links = [
        (Section::Projects, "PROJECTS"),
        (Section::Team, "TEAM"),
        (Section::IdeaBank, "IDEA BANK"),
        (Section::AskBar, "ASK BAR"),
    ];

    html! {
        <nav class="top-nav">
            <div class="nav-brand">
                <button
                    class={classes!("nav-logo", "font-rca", tone)}
                    onclick={scroll_callback::<MouseEvent>(Section::Home)}
                >
                    {"IBX"}
                </button>
            </div>
            <div class={classes!("nav-links", tone)}>
                { for links.iter().map(|(section, label)| html! {
                    <button class="nav-link" onclick={scroll_callback::<MouseEvent>(*section)}>
                        {*label}
                    </button>
                }) }
            </div>
        </nav>
    }
}
