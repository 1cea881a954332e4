use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
    let year = Utc::now().year();

    html! {
        <section id="contact" class="contact">
            <style>{CONTACT_CSS}</style>
            <div class="contact-panel">
                <h2>{"Parlons de "}<span class="gradient-text">{"votre projet"}</span></h2>
                <p>
                    {"Réservez un appel découverte gratuit de 30 minutes. Nous analysons vos besoins et vous proposons une solution adaptée à votre activité."}
                </p>
                <div class="contact-actions">
                    <a class="pill-cta" href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Réserver un appel"}
                    </a>
                    <a class="contact-mail" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        {config::CONTACT_EMAIL}
                    </a>
                </div>
            </div>
            <footer class="site-footer">
                {format!("© {} Leonce Ouattara Studio · Abidjan, Côte d'Ivoire", year)}
            </footer>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact {
        padding: 5rem 2rem 2rem;
    }
    .contact-panel {
        max-width: 48rem;
        margin: 0 auto;
        text-align: center;
        padding: 3rem;
        border-radius: 1.5rem;
        border: 1px solid rgba(6, 182, 212, 0.2);
        background: linear-gradient(90deg, rgba(6, 182, 212, 0.1), rgba(168, 85, 247, 0.1));
    }
    .contact-panel h2 {
        color: #fff;
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .contact-panel p {
        color: #9ca3af;
        margin-bottom: 2rem;
    }
    .contact-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
        justify-content: center;
        align-items: center;
    }
    .contact-mail {
        color: #22d3ee;
    }
    .site-footer {
        margin-top: 4rem;
        text-align: center;
        color: #6b7280;
        font-size: 0.875rem;
    }
"#;
