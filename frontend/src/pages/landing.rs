use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{contact::Contact, hero::Hero, process::Process, why_choose_us::WhyChooseUs};
use crate::projects::portfolio::Portfolio;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{SHARED_CSS}</style>
            <Hero />
            <Portfolio />
            <Process />
            <WhyChooseUs />
            <Contact />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="landing-page not-found">
            <style>{SHARED_CSS}</style>
            <h1>{"Page introuvable"}</h1>
            <Link<Route> to={Route::Home} classes="pill-cta">
                {"Retour à l'accueil"}
            </Link<Route>>
        </div>
    }
}

// Pieces every section uses.
const SHARED_CSS: &str = r#"
    body {
        margin: 0;
        background: #000;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page {
        background: #000;
        min-height: 100vh;
    }
    .gradient-text {
        background: linear-gradient(90deg, #22d3ee, #c084fc);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-header h2 {
        color: #fff;
        font-size: clamp(1.875rem, 4vw, 3.5rem);
        margin-bottom: 1.5rem;
    }
    .section-header p {
        color: #9ca3af;
        font-size: 1.125rem;
        max-width: 48rem;
        margin: 0 auto;
    }
    .section-badge {
        display: inline-block;
        margin-bottom: 1rem;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        border: 1px solid rgba(6, 182, 212, 0.2);
        background: rgba(6, 182, 212, 0.1);
        color: #22d3ee;
        font-size: 0.875rem;
    }
    .pill-cta {
        display: inline-block;
        padding: 1rem 2.5rem;
        border: none;
        border-radius: 9999px;
        color: #fff;
        font-weight: 700;
        font-size: 1.125rem;
        text-decoration: none;
        cursor: pointer;
        background: linear-gradient(90deg, #06b6d4, #a855f7);
        transition: transform 0.3s ease;
    }
    .pill-cta:hover {
        transform: scale(1.05);
    }
    .not-found {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 2rem;
        color: #fff;
    }
"#;
