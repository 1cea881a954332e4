use yew::prelude::*;

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub highlights: [&'static str; 4],
}

pub static STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Analyse & Stratégie",
        description: "Nous analysons vos objectifs business, votre cible et votre positionnement pour définir une stratégie web gagnante.",
        icon: "🔍",
        accent: "cyan",
        highlights: [
            "Étude de vos objectifs et de votre marché",
            "Analyse de votre audience cible",
            "Définition du positionnement digital",
            "Cahier des charges personnalisé",
        ],
    },
    Step {
        number: "02",
        title: "Design & Expérience Utilisateur",
        description: "Création d'une interface moderne et intuitive qui reflète votre image de marque et convertit vos visiteurs en clients.",
        icon: "💡",
        accent: "purple",
        highlights: [
            "Design moderne et responsive",
            "Parcours utilisateur optimisé",
            "Identité visuelle cohérente",
            "Maquettes interactives pour validation",
        ],
    },
    Step {
        number: "03",
        title: "Développement & Intégration",
        description: "Construction d'un site web rapide, sécurisé et optimisé pour le SEO avec les technologies les plus performantes.",
        icon: "</>",
        accent: "cyan-purple",
        highlights: [
            "Code propre et performant",
            "Site 100% responsive (mobile-first)",
            "Optimisation SEO avancée",
            "Sécurité et conformité RGPD",
        ],
    },
    Step {
        number: "04",
        title: "Lancement & Optimisation",
        description: "Mise en ligne professionnelle de votre site avec formation, suivi des performances et optimisation continue.",
        icon: "🚀",
        accent: "purple-pink",
        highlights: [
            "Déploiement sécurisé et sans interruption",
            "Formation à la gestion de votre site",
            "Suivi des performances (analytics)",
            "Support et évolutions continues",
        ],
    },
];

/// Hovering a step activates it; leaving any step clears the selection.
pub fn hover_step(entered: Option<usize>) -> Option<usize> {
    entered.filter(|index| *index < STEPS.len())
}

#[function_component(Process)]
pub fn process() -> Html {
    let active_step = use_state(|| None::<usize>);

    html! {
        <section id="process" class="process">
            <style>{PROCESS_CSS}</style>
            <div class="process-inner">
                <div class="section-header">
                    <div class="section-badge">{"Notre Méthodologie"}</div>
                    <h2>{"Comment Nous "}<span class="gradient-text">{"Créons Votre Site"}</span></h2>
                    <p>
                        {"Un processus éprouvé en 4 étapes pour transformer votre vision en un site web professionnel qui génère des résultats"}
                    </p>
                </div>

                <div class="process-grid">
                    { for STEPS.iter().enumerate().map(|(index, step)| {
                        let is_active = *active_step == Some(index);
                        let on_enter = {
                            let active_step = active_step.clone();
                            Callback::from(move |_: MouseEvent| {
                                active_step.set(hover_step(Some(index)));
                            })
                        };
                        let on_leave = {
                            let active_step = active_step.clone();
                            Callback::from(move |_: MouseEvent| {
                                active_step.set(hover_step(None));
                            })
                        };

                        html! {
                            <div class="process-step" onmouseenter={on_enter} onmouseleave={on_leave}>
                                {
                                    if index < STEPS.len() - 1 {
                                        html! { <div class="process-connector"></div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class={classes!("process-card", is_active.then(|| "active"))}>
                                    <div class="process-number">{step.number}</div>
                                    <div class={classes!("process-icon", step.accent)}>{step.icon}</div>
                                    <h3>{step.title}</h3>
                                    <p class="process-description">{step.description}</p>
                                    <div class={classes!("process-highlights", is_active.then(|| "shown"))}>
                                        { for step.highlights.iter().map(|highlight| html! {
                                            <div class="process-highlight">
                                                <span class="check">{"✓"}</span>
                                                <span>{*highlight}</span>
                                            </div>
                                        }) }
                                    </div>
                                    <div class={classes!("process-more", is_active.then(|| "shown"))}>
                                        {"En savoir plus →"}
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="process-cta">
                    <p>{"Prêt à lancer votre site web professionnel ?"}</p>
                    <a href="#contact" class="pill-cta">{"Discutons-en →"}</a>
                </div>
            </div>
        </section>
    }
}

const PROCESS_CSS: &str = r#"
    .process {
        position: relative;
        overflow: hidden;
        padding: 5rem 0;
        background: linear-gradient(180deg, transparent, rgba(6, 182, 212, 0.05), transparent);
    }
    .process-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .process-grid {
        display: grid;
        grid-template-columns: repeat(4, minmax(0, 1fr));
        gap: 2rem;
    }
    .process-step {
        position: relative;
    }
    .process-connector {
        position: absolute;
        top: 4rem;
        left: 100%;
        width: 2rem;
        height: 2px;
        background: linear-gradient(90deg, rgba(6, 182, 212, 0.3), transparent);
    }
    .process-card {
        position: relative;
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        transition: all 0.5s ease-out;
    }
    .process-card.active {
        border-color: rgba(6, 182, 212, 0.5);
        background: rgba(255, 255, 255, 0.1);
        transform: scale(1.05);
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.2);
    }
    .process-number {
        position: absolute;
        top: -1rem;
        left: -1rem;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        border: 2px solid #06b6d4;
        background: #111827;
        color: #22d3ee;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .process-icon {
        width: 3.5rem;
        height: 3.5rem;
        margin-bottom: 1.5rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        transition: transform 0.3s ease;
    }
    .process-card.active .process-icon { transform: scale(1.1) rotate(6deg); }
    .process-icon.cyan { background: linear-gradient(135deg, #06b6d4, #0891b2); }
    .process-icon.purple { background: linear-gradient(135deg, #a855f7, #9333ea); }
    .process-icon.cyan-purple { background: linear-gradient(135deg, #06b6d4, #a855f7); }
    .process-icon.purple-pink { background: linear-gradient(135deg, #a855f7, #ec4899); }
    .process-card h3 {
        color: #fff;
        font-size: 1.25rem;
        margin-bottom: 0.75rem;
        transition: color 0.3s ease;
    }
    .process-card.active h3 { color: #22d3ee; }
    .process-description {
        color: #9ca3af;
        font-size: 0.875rem;
        line-height: 1.6;
        margin-bottom: 1rem;
    }
    .process-highlights {
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        transition: all 0.5s ease;
    }
    .process-highlights.shown {
        max-height: 24rem;
        opacity: 1;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        padding-top: 1rem;
    }
    .process-highlight {
        display: flex;
        gap: 0.5rem;
        margin-bottom: 0.5rem;
        color: #d1d5db;
        font-size: 0.75rem;
    }
    .process-highlight .check { color: #22d3ee; }
    .process-more {
        margin-top: 1rem;
        color: #22d3ee;
        font-size: 0.875rem;
        opacity: 0;
        transform: translateX(-0.5rem);
        transition: all 0.3s ease;
    }
    .process-more.shown {
        opacity: 1;
        transform: translateX(0);
    }
    .process-cta {
        margin-top: 4rem;
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 1.5rem;
        color: #d1d5db;
    }
    @media (max-width: 1024px) {
        .process-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
        .process-connector { display: none; }
    }
    @media (max-width: 640px) {
        .process-grid { grid-template-columns: 1fr; }
        .process-cta { flex-direction: column; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_numbered_steps() {
        let numbers: Vec<&str> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04"]);
    }

    #[test]
    fn hover_keeps_only_real_steps() {
        assert_eq!(hover_step(Some(2)), Some(2));
        assert_eq!(hover_step(None), None);
        assert_eq!(hover_step(Some(STEPS.len())), None);
    }
}
