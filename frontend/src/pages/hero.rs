use yew::prelude::*;

use crate::components::dom::scroll_to_section;
use crate::config;

const SECTORS: [&str; 5] = [
    "Restaurants",
    "Hôtels",
    "Magasin de vêtements",
    "E-commerce",
    "Coach & Formateur en ligne",
];

fn scroll_to(selector: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        scroll_to_section(selector);
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">
                        <span>{"Création de portail web sur Mesure"}</span>
                    </div>

                    <h1>
                        <span>{"CRÉONS VOTRE"}</span>
                        <span class="gradient-text">{"RÉUSSITE"}</span>
                        <span>{"EN LIGNE"}</span>
                    </h1>

                    <p class="hero-subtitle">
                        {"Opération Votre site sur mesure, Des sites au design professionnel pour générer plus de prospects, de ventes et de fans !"}
                    </p>

                    <div class="hero-sectors">
                        <span class="hero-sectors-label">{"Spécialisés pour :"}</span>
                        { for SECTORS.iter().enumerate().map(|(i, sector)| html! {
                            <span class={classes!("hero-chip", (i == 1).then(|| "purple"))}>{*sector}</span>
                        }) }
                    </div>

                    <div class="hero-actions">
                        <button class="hero-primary" onclick={scroll_to("#contact")}>
                            {"Demander un devis"}
                            <span class="arrow">{"→"}</span>
                        </button>
                        <button class="hero-secondary" onclick={scroll_to("#portfolio")}>
                            {"Nos réalisations"}
                        </button>
                    </div>

                    <div class="hero-credibility">
                        <div class="hero-credential">
                            <div class="hero-credential-icon cyan">{"🏆"}</div>
                            <div>
                                <div class="hero-stars">{ for (0..5).map(|_| html! { <span>{"★"}</span> }) }</div>
                                <p>{"+10 ans d'expertise"}</p>
                            </div>
                        </div>
                        <div class="hero-divider"></div>
                        <div class="hero-credential">
                            <div class="hero-credential-icon purple">{"📈"}</div>
                            <div>
                                <p class="hero-credential-value">{"50+"}</p>
                                <p>{"Projets réussis"}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="hero-photo">
                    <img src={config::FOUNDER_PHOTO} alt="Leonce Ouattara - Fondateur lOS" />
                    <div class="hero-glow one"></div>
                    <div class="hero-glow two"></div>
                </div>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        overflow: hidden;
        background: #000;
    }
    .hero-grid {
        max-width: 80rem;
        margin: 0 auto;
        padding: 6rem 2rem 4rem;
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 4rem;
        align-items: center;
    }
    .hero-copy {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .hero-badge {
        display: inline-flex;
        align-self: flex-start;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        border: 1px solid rgba(6, 182, 212, 0.3);
        background: rgba(6, 182, 212, 0.1);
        color: #22d3ee;
        font-size: 0.875rem;
    }
    .hero h1 {
        color: #fff;
        font-weight: 700;
        line-height: 0.9;
        letter-spacing: -0.025em;
        font-size: clamp(2.25rem, 6vw, 4.5rem);
    }
    .hero h1 span {
        display: block;
    }
    .hero-subtitle {
        color: #d1d5db;
        font-size: 1.5rem;
        font-weight: 300;
        max-width: 36rem;
    }
    .hero-sectors {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        align-items: center;
        color: #9ca3af;
    }
    .hero-chip {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        border: 1px solid rgba(6, 182, 212, 0.2);
        background: rgba(255, 255, 255, 0.05);
        color: #22d3ee;
        font-size: 0.875rem;
    }
    .hero-chip.purple {
        border-color: rgba(168, 85, 247, 0.2);
        color: #c084fc;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        padding-top: 1rem;
    }
    .hero-primary,
    .hero-secondary {
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        font-weight: 600;
        font-size: 1.125rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .hero-primary {
        border: none;
        color: #fff;
        background: linear-gradient(90deg, #06b6d4, #a855f7);
    }
    .hero-primary:hover {
        transform: scale(1.05);
    }
    .hero-secondary {
        color: #fff;
        background: transparent;
        border: 2px solid rgba(255, 255, 255, 0.2);
    }
    .hero-credibility {
        display: flex;
        gap: 1.5rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        color: #9ca3af;
        font-size: 0.75rem;
    }
    .hero-credential {
        display: flex;
        gap: 0.75rem;
        align-items: center;
    }
    .hero-credential-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .hero-credential-icon.cyan { background: linear-gradient(135deg, #06b6d4, #0891b2); }
    .hero-credential-icon.purple { background: linear-gradient(135deg, #a855f7, #9333ea); }
    .hero-credential-value {
        color: #fff;
        font-size: 1.125rem;
        font-weight: 700;
    }
    .hero-stars { color: #facc15; }
    .hero-divider {
        width: 1px;
        background: rgba(255, 255, 255, 0.1);
    }
    .hero-photo {
        position: relative;
        height: 700px;
    }
    .hero-photo img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .hero-photo img:hover {
        transform: scale(1.03);
    }
    .hero-glow {
        position: absolute;
        border-radius: 1.5rem;
        opacity: 0.1;
        filter: blur(40px);
        animation: float 6s ease-in-out infinite;
    }
    .hero-glow.one {
        top: 5rem;
        right: 8rem;
        width: 6rem;
        height: 6rem;
        background: #22d3ee;
    }
    .hero-glow.two {
        bottom: 8rem;
        left: 5rem;
        width: 8rem;
        height: 8rem;
        background: #c084fc;
        animation-delay: 1s;
    }
    @keyframes float {
        0%, 100% { transform: translateY(0px); }
        50% { transform: translateY(-20px); }
    }
    @media (max-width: 1024px) {
        .hero-grid { grid-template-columns: 1fr; }
        .hero-photo { display: none; }
    }
    @media (max-width: 640px) {
        .hero-actions,
        .hero-credibility { flex-direction: column; }
    }
"#;
