use crate::components::action_bar::{ActionBar, LoginButton};
use crate::components::nav_bar::NavBar;
use crate::config::{ScrollConfig, DARK_SECTION_CLASS};
use crate::content::{Align, SiteContent, TeamMember};
use crate::scroll::presentation::{main_content_style, quote_style};
use crate::scroll::{scroll_callback, use_scroll_state, Section};
use log::{error, info};
use yew::prelude::*;

fn project_card(project: &crate::content::Project) -> Html {
    let right = project.align == Align::Right;
    let logo = match &project.logo {
        Some(src) => html! {
            <div class="project-logo">
                <img src={src.clone()} alt={format!("{} Logo", project.name)} width="160" height="160" />
            </div>
        },
        None => html! { <div class="project-logo placeholder"></div> },
    };
    html! {
        <div class={classes!("project-row", right.then_some("align-right"))}>
            <div class="project-card">
                {logo}
                <div class={classes!("project-body", if right { "rule-right" } else { "rule-left" })}>
                    <div class="project-heading">
                        <h4>{&project.name}</h4>
                        <span class="project-date">{&project.date}</span>
                    </div>
                    { for project.lines.iter().map(|line| html! { <p class="project-line">{line}</p> }) }
                    <a href={project.link.clone()} class="project-link">{"Go to Website"}</a>
                </div>
            </div>
        </div>
    }
}

fn team_row(members: &[TeamMember]) -> Html {
    html! {
        <div class="team-row">
            { for members.iter().map(|member| html! {
                <div class="team-member">
                    <div class="team-photo"></div>
                    <div class="team-info">
                        <h3>{&member.name}</h3>
                        <p>{&member.role}</p>
                        <a href={member.guide.clone()}>{"User Guide"}</a>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_state(|| match SiteContent::embedded() {
        Ok(content) => {
            info!(
                "Loaded site content: {} projects, {} team members",
                content.projects.len(),
                content.team.len()
            );
            Some(content)
        }
        Err(e) => {
            error!("Failed to load site content: {}", e);
            None
        }
    });
    let state = use_scroll_state(ScrollConfig::default());

    let Some(content) = (*content).clone() else {
        return html! { <main class="landing-page"></main> };
    };

    let dark = DARK_SECTION_CLASS;
    let scattered = ["q-left", "q-right", "q-center"];

    html! {
        <main class="landing-page">
            <NavBar state={state} />
            <LoginButton state={state} />
            <ActionBar state={state} />

            <section id={Section::Home.anchor()} class="hero">
                <div class="hero-main" style={main_content_style(&state)}>
                    <div class="hero-inner">
                        <h1 class="hero-title font-rca">
                            <span>{"I"}</span>
                            <span>
                                <span>{"B"}</span>
                                <span class="outlined">{"UILD"}</span>
                            </span>
                            <span>{"X"}</span>
                        </h1>
                        <p class="hero-tagline">
                            { for content.tagline.iter().enumerate().map(|(i, line)| html! {
                                <>
                                    if i > 0 { <br/> }
                                    {line}
                                </>
                            }) }
                        </p>
                        <button class="about-link" onclick={scroll_callback::<MouseEvent>(Section::AboutUs)}>
                            {"ABOUT US"}
                        </button>
                    </div>
                </div>
                <div class="hero-quote" style={quote_style(&state)}>
                    <p>{&content.quote}</p>
                </div>
            </section>

            <section id={Section::Projects.anchor()} class={classes!("page-section", "tall", dark)}>
                <div class="section-inner wide">
                    <h2 class="section-title">{"PROJECTS"}</h2>
                    <div class="stack">
                        { for content.projects.iter().map(project_card) }
                    </div>
                    <div class="spacer-sm"></div>
                </div>
            </section>

            <section id={Section::Team.anchor()} class={classes!("page-section", "tall", "light")}>
                <div class="section-inner">
                    <h2 class="section-title brand">{"TEAM"}</h2>
                    <div class="stack">
                        { for content.team_rows().map(team_row) }
                    </div>
                    <div class="spacer-lg"></div>
                </div>
            </section>

            <section id={Section::IdeaBank.anchor()} class={classes!("page-section", dark)}>
                <div class="section-inner narrow">
                    <h2 class="section-title">{"IDEA BANK"}</h2>
                    <p class="idea-prompt">{&content.idea_prompt}</p>
                    <div class="input-row">
                        <input class="throw-input" placeholder="Throw Us Any Ideas" />
                        <button class="submit-button on-dark">{"SUBMIT"}</button>
                    </div>
                    <div class="idea-steps">
                        { for content.idea_steps.iter().enumerate().map(|(i, step)| html! {
                            <p>{format!("Step {} : {}", i + 1, step)}</p>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::AskBar.anchor()} class={classes!("page-section", "tall", "light")}>
                <div class="section-inner ask-bar">
                    <h2 class="section-title brand">{"ASK BAR"}</h2>
                    <div class="pinned-question">
                        <p>{format!("Q - {}", content.questions.pinned)}</p>
                    </div>
                    <div class="input-row">
                        <input class="ask-input" placeholder="Ask Anything" />
                        <button class="submit-button on-light">{"SUBMIT"}</button>
                    </div>
                    <div class="scattered-questions">
                        { for content.questions.scattered.iter().zip(scattered.iter().cycle()).map(|(question, slot)| html! {
                            <div class={classes!("scattered", *slot)}>
                                <p>{format!("Q - {}", question)}</p>
                            </div>
                        }) }
                    </div>
                    <div class="spacer-md"></div>
                </div>
            </section>

            <footer id={Section::AboutUs.anchor()} class="page-footer">
                <div class="footer-inner">
                    <h1 class="font-rca">{"I BUILD X"}</h1>
                    <h2 class="font-rca brand">{"IBX"}</h2>
                    <div class="footer-legal">
                        <p class="company">{&content.footer.company}</p>
                        <p class="copyright">{&content.footer.copyright}</p>
                    </div>
                </div>
            </footer>
            <style>
                {r#"
    .landing-page {
        min-height: 100vh;
        font-family: 'Nunito Sans', sans-serif;
    }
    .font-rca {
        font-family: 'Orbitron', sans-serif;
    }
    .brand, .text-brand {
        color: #1D4BA9;
    }
    .text-white {
        color: #fff;
    }
    .text-ink {
        color: #000;
    }
    .text-idea {
        color: #E0312B;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem;
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(12px);
    }
    .nav-logo {
        font-size: 1.25rem;
        font-weight: 700;
        background: none;
        border: none;
        cursor: pointer;
    }
    .nav-logo:hover {
        opacity: 0.8;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 1rem;
        font-size: 0.75rem;
    }
    .nav-link {
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
    }
    .nav-link:hover {
        text-decoration: underline;
    }
    .login-dock {
        position: fixed;
        bottom: 1rem;
        right: 1rem;
        z-index: 50;
    }
    .action-dock {
        position: fixed;
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 50;
    }
    .action-row {
        display: flex;
        gap: 1rem;
    }
    .pill-button {
        font-size: 0.75rem;
        border-radius: 9999px;
        padding: 0.4rem 1.5rem;
        background: transparent;
        border: 1px solid currentColor;
        cursor: pointer;
        transition: background 0.2s ease, color 0.2s ease;
    }
    .outline-white:hover {
        background: #fff;
        color: #000;
    }
    .outline-brand:hover {
        background: #1D4BA9;
        color: #fff;
    }
    .outline-ink:hover {
        background: #000;
        color: #fff;
    }
    .outline-idea:hover {
        background: #E0312B;
        color: #fff;
    }
    .hero {
        position: relative;
        height: 120vh;
        background: #fff;
        text-align: center;
        overflow: hidden;
    }
    .hero-main {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 1.5rem;
        transition: transform 0.3s ease-out;
    }
    .hero-inner {
        max-width: 64rem;
        margin: 0 auto;
    }
    .hero-title {
        font-size: 6rem;
        font-weight: 700;
        margin-bottom: 2rem;
        letter-spacing: 0.05em;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        color: #1D4BA9;
    }
    .hero-title .outlined {
        -webkit-text-stroke: 3px #1D4BA9;
        -webkit-text-fill-color: transparent;
        color: transparent;
    }
    .hero-tagline {
        font-size: 1.5rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin-bottom: 4rem;
        color: #1D4BA9;
        font-weight: 300;
        line-height: 1.6;
    }
    .about-link {
        font-size: 1.125rem;
        color: #1D4BA9;
        font-weight: 500;
        background: none;
        border: none;
        cursor: pointer;
    }
    .about-link:hover {
        text-decoration: underline;
    }
    .hero-quote {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 0.5rem;
        transition: all 0.3s ease-out;
    }
    .hero-quote p {
        max-width: 64rem;
        font-size: 1.875rem;
        color: #1D4BA9;
        font-weight: 500;
    }
    .page-section {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        padding: 4rem 1.5rem 1.5rem;
        background: #fff;
    }
    .page-section.tall {
        min-height: 150vh;
    }
    .section-dark {
        background: #000;
        color: #fff;
    }
    .section-inner {
        max-width: 72rem;
        margin: 0 auto;
        width: 100%;
        position: relative;
    }
    .section-inner.wide {
        max-width: 80rem;
    }
    .section-inner.narrow {
        max-width: 56rem;
    }
    .section-title {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 5rem;
        text-align: center;
    }
    .stack > * + * {
        margin-top: 4rem;
    }
    .project-row {
        display: flex;
        justify-content: flex-start;
    }
    .project-row.align-right {
        justify-content: flex-end;
    }
    .project-card {
        width: 100%;
        max-width: 42rem;
        display: flex;
        gap: 2rem;
        align-items: flex-start;
    }
    .align-right .project-card {
        flex-direction: row-reverse;
        text-align: right;
    }
    .project-logo {
        width: 10rem;
        height: 10rem;
        flex-shrink: 0;
        border-radius: 0.5rem;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .project-logo.placeholder {
        background: #4b5563;
        border-radius: 0;
    }
    .project-logo img {
        width: 100%;
        height: 100%;
        object-fit: contain;
    }
    .project-body {
        flex: 1;
    }
    .rule-left {
        border-left: 2px solid #fff;
        padding-left: 2rem;
    }
    .rule-right {
        border-right: 2px solid #fff;
        padding-right: 2rem;
    }
    .project-heading {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .align-right .project-heading {
        flex-direction: row-reverse;
        justify-content: flex-start;
    }
    .project-heading h4 {
        font-size: 1.875rem;
        font-weight: 700;
    }
    .project-date {
        font-size: 0.875rem;
        color: #9ca3af;
    }
    .project-line {
        font-size: 1.125rem;
        margin-bottom: 0.5rem;
    }
    .project-link {
        display: inline-block;
        margin-top: 1.5rem;
        font-size: 1.125rem;
        color: #1D4BA9;
        text-decoration: none;
    }
    .project-link:hover {
        text-decoration: underline;
    }
    .team-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
    }
    .team-member {
        display: flex;
        gap: 2rem;
        align-items: flex-start;
    }
    .team-photo {
        width: 10rem;
        height: 10rem;
        background: #d1d5db;
        flex-shrink: 0;
    }
    .team-info {
        padding-top: 0.5rem;
    }
    .team-info h3 {
        font-size: 1.875rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
        color: #000;
    }
    .team-info p {
        font-size: 1.125rem;
        color: #4b5563;
        margin-bottom: 1rem;
    }
    .team-info a {
        color: #1D4BA9;
        text-decoration: none;
    }
    .team-info a:hover {
        text-decoration: underline;
    }
    .idea-prompt {
        text-align: center;
        margin-bottom: 3rem;
        font-size: 1.125rem;
    }
    .input-row {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin: 0 auto 4rem;
        max-width: 56rem;
    }
    .input-row input {
        flex: 1;
        font-size: 1.125rem;
        padding: 1rem;
        height: 3.5rem;
        border-radius: 0.5rem;
        background: transparent;
    }
    .throw-input {
        border: 2px solid #fff;
        color: #fff;
    }
    .throw-input::placeholder {
        color: #9ca3af;
    }
    .ask-input {
        border: 2px solid #d1d5db;
    }
    .ask-input:focus {
        border-color: #1D4BA9;
        outline: none;
    }
    .submit-button {
        padding: 1rem 2rem;
        height: 3.5rem;
        border-radius: 0.5rem;
        background: transparent;
        cursor: pointer;
    }
    .submit-button.on-dark {
        color: #fff;
        border: 1px solid #fff;
    }
    .submit-button.on-dark:hover {
        background: #fff;
        color: #000;
    }
    .submit-button.on-light {
        color: #1D4BA9;
        border: 1px solid #1D4BA9;
    }
    .submit-button.on-light:hover {
        background: #1D4BA9;
        color: #fff;
    }
    .idea-steps {
        max-width: 48rem;
        margin: 0 auto 5rem;
    }
    .idea-steps p {
        font-size: 1.125rem;
        color: #1D4BA9;
        margin-bottom: 1.5rem;
    }
    .pinned-question {
        margin-bottom: 4rem;
    }
    .pinned-question p, .scattered p {
        font-size: 1.125rem;
        color: #374151;
        max-width: 42rem;
    }
    .scattered-questions {
        position: relative;
    }
    .scattered {
        position: absolute;
    }
    .q-left {
        left: 0;
        top: 0;
    }
    .q-right {
        right: 0;
        top: 4rem;
    }
    .q-center {
        left: 50%;
        transform: translateX(-50%);
        top: 8rem;
    }
    .spacer-sm {
        height: 8rem;
    }
    .spacer-md {
        height: 16rem;
    }
    .spacer-lg {
        height: 24rem;
    }
    .page-footer {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        background: #fff;
        text-align: center;
        padding: 1.5rem 1.5rem 8rem;
    }
    .footer-inner h1 {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
        letter-spacing: 0.05em;
    }
    .footer-inner h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 3rem;
    }
    .footer-legal {
        margin-bottom: 4rem;
    }
    .footer-legal .company {
        font-size: 0.875rem;
        color: #4b5563;
    }
    .footer-legal .copyright {
        font-size: 0.75rem;
        color: #9ca3af;
    }
                "#}
            </style>
        </main>
    }
}
