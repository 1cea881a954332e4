use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod components {
    pub mod dom;
}
mod projects {
    pub mod models;
    pub mod source;
    pub mod carousel;
    pub mod modal;
    pub mod scroll_lock;
    pub mod detail;
    pub mod portfolio;
}
mod pages {
    pub mod landing;
    pub mod hero;
    pub mod process;
    pub mod why_choose_us;
    pub mod contact;
}

use components::dom::{scroll_to_section, WindowListener};
use pages::landing::{Landing, NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const NAV_SECTIONS: [(&str, &str); 5] = [
    ("#home", "Accueil"),
    ("#portfolio", "Réalisations"),
    ("#process", "Méthode"),
    ("#why-choose-us", "Pourquoi nous"),
    ("#contact", "Contact"),
];

// Past the hero the bar gets a solid background.
const SCROLLED_THRESHOLD: f64 = 80.0;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = WindowListener::new("scroll", move |_| {
                if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                }
            });

            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"lOS Studio"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|(selector, label)| {
                        let menu_open = menu_open.clone();
                        let selector = *selector;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            menu_open.set(false);
                            scroll_to_section(selector);
                        });
                        html! {
                            <a href={selector} class="nav-link" {onclick}>{*label}</a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 40;
        transition: background 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(0, 0, 0, 0.85);
        backdrop-filter: blur(10px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        color: #fff;
        font-weight: 700;
        font-size: 1.25rem;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        color: #d1d5db;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .nav-link:hover {
        color: #22d3ee;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: #fff;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
        }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            padding: 1.5rem 2rem;
            background: rgba(0, 0, 0, 0.95);
        }
    }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
