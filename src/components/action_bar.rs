use yew::prelude::*;

use crate::scroll::presentation::{action_tone, login_tone, Tone};
use crate::scroll::{scroll_callback, ScrollState, Section};

#[derive(Properties, PartialEq)]
pub struct BottomBarProps {
    pub state: ScrollState,
}

fn pill(tone: Tone) -> Classes {
    classes!("pill-button", tone.text_class(), tone.outline_class())
}

#[function_component(LoginButton)]
pub fn login_button(props: &BottomBarProps) -> Html {
    html! {
        <div class="login-dock">
            <button class={pill(login_tone(&props.state))}>{"LOGIN"}</button>
        </div>
    }
}

/// IDEA THROW, ASK and APPLY, pinned to the bottom center.
#[function_component(ActionBar)]
pub fn action_bar(props: &BottomBarProps) -> Html {
    let tone = action_tone(&props.state);
    html! {
        <div class="action-dock">
            <div class="action-row">
                <button
                    class={classes!("pill-button", "text-idea", "outline-idea")}
                    onclick={scroll_callback::<MouseEvent>(Section::IdeaBank)}
                >
                    {"IDEA THROW"}
                </button>
                <button class={pill(tone)} onclick={scroll_callback::<MouseEvent>(Section::AskBar)}>
                    {"ASK"}
                </button>
                <button class={pill(tone)}>{"APPLY"}</button>
            </div>
        </div>
    }
}
