use yew::prelude::*;

use crate::components::dom::scroll_to_section;

pub struct Sector {
    pub icon: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub accent: &'static str,
    pub challenges: [&'static str; 4],
    pub solutions: [&'static str; 4],
}

struct Reason {
    number: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    highlights: [&'static str; 4],
    accent: &'static str,
    stat: &'static str,
    stat_label: &'static str,
}

struct Differentiator {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

pub static SECTORS: [Sector; 4] = [
    Sector {
        icon: "🏨",
        name: "Restaurants & Hôtels",
        short_name: "Resto",
        accent: "cyan",
        challenges: [
            "Réservations gérées manuellement",
            "Faible visibilité en ligne locale",
            "Absence de présentation attractive",
            "Site non optimisé pour mobile",
        ],
        solutions: [
            "Site vitrine avec système de réservation",
            "Référencement local Google Maps",
            "Galerie photos professionnelle",
            "Menu et carte digitalisés responsive",
        ],
    },
    Sector {
        icon: "👗",
        name: "Magasins de Vêtements",
        short_name: "Mode",
        accent: "blue",
        challenges: [
            "Image de marque peu différenciée",
            "Difficulté à attirer du trafic",
            "Catalogue non accessible en ligne",
            "Concurrence des grandes enseignes",
        ],
        solutions: [
            "Site vitrine élégant et moderne",
            "Présentation collections et lookbooks",
            "Stratégie SEO locale ciblée",
            "Intégration réseaux sociaux",
        ],
    },
    Sector {
        icon: "🛒",
        name: "E-commerce",
        short_name: "E-commerce",
        accent: "purple",
        challenges: [
            "Tunnel de conversion inefficace",
            "Site lent et peu performant",
            "Faible visibilité dans Google",
            "Expérience utilisateur complexe",
        ],
        solutions: [
            "Boutique en ligne optimisée conversion",
            "Performance et rapidité garanties",
            "SEO produits et catégories",
            "Parcours client simplifié et fluide",
        ],
    },
    Sector {
        icon: "🎓",
        name: "Coachs & Formateurs",
        short_name: "Coaching",
        accent: "pink",
        challenges: [
            "Manque de crédibilité en ligne",
            "Peu de leads qualifiés",
            "Processus de vente manuel",
            "Absence de tunnel automatisé",
        ],
        solutions: [
            "Site professionnel qui convertit",
            "Pages de vente optimisées",
            "Formulaires et automatisation",
            "Stratégie de contenu et témoignages",
        ],
    },
];

static REASONS: [Reason; 4] = [
    Reason {
        number: "01",
        icon: "🛡",
        title: "Expertise Web & Stratégie Digitale",
        description: "Plus de 6 années d'expérience en développement web et marketing digital. Nous comprenons les enjeux business de votre secteur et créons des sites qui génèrent des résultats concrets : plus de clients, plus de ventes, plus de visibilité. Notre approche allie technique, design et stratégie pour transformer votre site en véritable outil de croissance.",
        highlights: ["+6 ans d'expérience web", "Stratégie digitale", "ROI mesurable", "Résultats concrets"],
        accent: "cyan",
        stat: "+6 ans",
        stat_label: "Expérience web",
    },
    Reason {
        number: "02",
        icon: "🔒",
        title: "Sites Rapides & Sécurisés",
        description: "Tous nos sites sont construits avec les technologies les plus modernes pour garantir rapidité, sécurité et performance optimale. Certificat SSL inclus, hébergement fiable, sauvegardes automatiques, temps de chargement ultra-rapide. Votre site sera conforme aux standards web actuels et optimisé pour le référencement Google.",
        highlights: ["HTTPS sécurisé", "Performance optimale", "SEO technique", "Sauvegardes auto"],
        accent: "blue",
        stat: "100%",
        stat_label: "Sécurité garantie",
    },
    Reason {
        number: "03",
        icon: "⚡",
        title: "Agilité & Réactivité Locale",
        description: "Basé à Abidjan, nous sommes disponibles pour des échanges en présentiel ou en ligne avec une collaboration étroite. Notre approche agile nous permet de vous livrer rapidement un site fonctionnel et professionnel, avec des ajustements continus selon vos retours pour garantir votre satisfaction totale.",
        highlights: ["Basé Abidjan", "Disponible", "Livraison rapide", "Suivi personnalisé"],
        accent: "purple",
        stat: "4-6 sem",
        stat_label: "Livraison",
    },
    Reason {
        number: "04",
        icon: "👥",
        title: "Accompagnement Complet",
        description: "Nous vous offrons un accompagnement sur mesure de A à Z : de la définition de votre stratégie digitale jusqu'à la formation pour gérer votre site en autonomie. Un interlocuteur unique vous guide à chaque étape. Documentation claire, formation pratique, support réactif : nous restons à vos côtés pour assurer le succès de votre projet web.",
        highlights: ["Contact direct", "Formation incluse", "Documentation", "Support continu"],
        accent: "pink",
        stat: "1",
        stat_label: "Interlocuteur unique",
    },
];

static DIFFERENTIATORS: [Differentiator; 3] = [
    Differentiator {
        icon: "🌍",
        title: "Présence Locale",
        description: "Basé à Abidjan, rencontres en présentiel possibles",
        accent: "cyan",
    },
    Differentiator {
        icon: "📈",
        title: "Partenariat Durable",
        description: "Accompagnement long terme, nous grandissons avec votre projet",
        accent: "blue",
    },
    Differentiator {
        icon: "🏅",
        title: "Qualité Professionnelle",
        description: "Technologies modernes, design soigné, performance optimale",
        accent: "purple",
    },
];

/// Index of the sector tab to show; out of range picks the last one.
pub fn select_sector(index: usize) -> usize {
    index.min(SECTORS.len() - 1)
}

fn sector_details(sector: &Sector) -> Html {
    html! {
        <div class="sector-details">
            <div>
                <h4><span class={classes!("sector-dot", sector.accent)}></span>{"Vos Défis"}</h4>
                { for sector.challenges.iter().map(|challenge| html! {
                    <div class="sector-line">
                        <span class="sector-cross">{"✕"}</span>
                        <p>{*challenge}</p>
                    </div>
                }) }
            </div>
            <div>
                <h4><span class={classes!("sector-dot", sector.accent)}></span>{"Nos Solutions"}</h4>
                { for sector.solutions.iter().map(|solution| html! {
                    <div class="sector-line">
                        <span class="sector-check">{"✓"}</span>
                        <p>{*solution}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn reason_card(reason: &Reason) -> Html {
    html! {
        <div class="reason-card">
            <div class="reason-number">{reason.number}</div>
            <div class={classes!("reason-icon", reason.accent)}>{reason.icon}</div>
            <h3>{reason.title}</h3>
            <p class="reason-description">{reason.description}</p>
            <div class="reason-highlights">
                { for reason.highlights.iter().map(|highlight| html! {
                    <span class="reason-chip">{*highlight}</span>
                }) }
            </div>
            <div class="reason-stat">
                <div>
                    <div class={classes!("reason-stat-value", reason.accent)}>{reason.stat}</div>
                    <div class="reason-stat-label">{reason.stat_label}</div>
                </div>
                <span class="reason-arrow">{"→"}</span>
            </div>
        </div>
    }
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let active_sector = use_state(|| 0usize);
    let current = &SECTORS[select_sector(*active_sector)];

    html! {
        <section id="why-choose-us" class="why">
            <style>{WHY_CSS}</style>
            <div class="why-inner">
                <div class="section-header">
                    <div class="section-badge">{"✨ Votre partenaire web en Côte d'Ivoire"}</div>
                    <h2>
                        {"Pourquoi "}
                        <span class="gradient-text">{"Leonce Ouattara Studio"}</span>
                        <br />
                        {"Pour votre site web ?"}
                    </h2>
                    <p>{"Sites web professionnels et performants pour entreprises en Côte d'Ivoire"}</p>
                </div>

                <div class="sector-block">
                    <h3>{"Nos Domaines d'Intervention"}</h3>
                    <div class="sector-tabs">
                        { for SECTORS.iter().enumerate().map(|(index, sector)| {
                            let selected = select_sector(*active_sector) == index;
                            let onclick = {
                                let active_sector = active_sector.clone();
                                Callback::from(move |_: MouseEvent| active_sector.set(select_sector(index)))
                            };
                            html! {
                                <button class={classes!("sector-tab", selected.then(|| sector.accent), selected.then(|| "selected"))}
                                    {onclick}>
                                    <div class={classes!("sector-icon", sector.accent)}>{sector.icon}</div>
                                    <h4>{sector.short_name}</h4>
                                    <p>{sector.name}</p>
                                </button>
                            }
                        }) }
                    </div>
                    { sector_details(current) }
                </div>

                <div class="reason-grid">
                    { for REASONS.iter().map(reason_card) }
                </div>

                <div class="differentiator-grid">
                    { for DIFFERENTIATORS.iter().map(|diff| html! {
                        <div class={classes!("differentiator", diff.accent)}>
                            <div class="differentiator-icon">{diff.icon}</div>
                            <div>
                                <h4>{diff.title}</h4>
                                <p>{diff.description}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="why-cta">
                    <button class="pill-cta" onclick={Callback::from(|_: MouseEvent| {
                        scroll_to_section("#contact");
                    })}>
                        {"Discutons de Votre Projet →"}
                    </button>
                </div>
            </div>
        </section>
    }
}

const WHY_CSS: &str = r#"
    .why {
        position: relative;
        overflow: hidden;
        padding: 5rem 0;
    }
    .why-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .sector-block {
        margin-bottom: 4rem;
    }
    .sector-block > h3 {
        color: #fff;
        text-align: center;
        font-size: 1.5rem;
        margin-bottom: 2rem;
    }
    .sector-tabs {
        display: grid;
        grid-template-columns: repeat(4, minmax(0, 1fr));
        gap: 1rem;
        margin-bottom: 3rem;
    }
    .sector-tab {
        position: relative;
        padding: 1.5rem;
        border-radius: 1rem;
        border: 2px solid rgba(55, 65, 81, 0.5);
        background: rgba(255, 255, 255, 0.05);
        cursor: pointer;
        transition: all 0.3s ease;
        text-align: center;
    }
    .sector-tab.selected {
        transform: scale(1.05);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
    }
    .sector-tab.cyan { background: rgba(6, 182, 212, 0.1); border-color: rgba(6, 182, 212, 0.3); }
    .sector-tab.blue { background: rgba(59, 130, 246, 0.1); border-color: rgba(59, 130, 246, 0.3); }
    .sector-tab.purple { background: rgba(168, 85, 247, 0.1); border-color: rgba(168, 85, 247, 0.3); }
    .sector-tab.pink { background: rgba(236, 72, 153, 0.1); border-color: rgba(236, 72, 153, 0.3); }
    .sector-tab h4 { color: #fff; margin-bottom: 0.5rem; }
    .sector-tab p { color: #9ca3af; font-size: 0.75rem; }
    .sector-icon,
    .reason-icon,
    .differentiator-icon {
        width: 3rem;
        height: 3rem;
        margin: 0 auto 1rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(135deg, #06b6d4, #a855f7);
    }
    .sector-details {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 3rem;
        padding: 3rem;
        border-radius: 1.5rem;
        border: 1px solid rgba(55, 65, 81, 0.5);
        background: rgba(255, 255, 255, 0.05);
    }
    .sector-details h4 {
        color: #fff;
        font-size: 1.5rem;
        margin-bottom: 1.5rem;
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .sector-dot {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 50%;
        background: #22d3ee;
    }
    .sector-dot.blue { background: #3b82f6; }
    .sector-dot.purple { background: #a855f7; }
    .sector-dot.pink { background: #ec4899; }
    .sector-line {
        display: flex;
        gap: 0.75rem;
        margin-bottom: 1rem;
        color: #d1d5db;
    }
    .sector-cross { color: #f87171; }
    .sector-check { color: #4ade80; }
    .reason-grid {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 2rem;
        margin-bottom: 4rem;
    }
    .reason-card {
        position: relative;
        padding: 2rem;
        border-radius: 1.5rem;
        border: 1px solid rgba(55, 65, 81, 0.5);
        background: rgba(255, 255, 255, 0.05);
        transition: all 0.5s ease;
    }
    .reason-card:hover {
        background: rgba(255, 255, 255, 0.1);
        border-color: rgba(6, 182, 212, 0.5);
        transform: scale(1.03);
    }
    .reason-number {
        position: absolute;
        top: -1rem;
        left: -1rem;
        width: 3rem;
        height: 3rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-weight: 700;
        background: linear-gradient(135deg, #06b6d4, #a855f7);
    }
    .reason-icon { margin: 0 0 1.5rem; width: 4rem; height: 4rem; }
    .reason-card h3 { color: #fff; font-size: 1.5rem; margin-bottom: 1rem; }
    .reason-description { color: #9ca3af; line-height: 1.6; margin-bottom: 1.5rem; }
    .reason-highlights {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin-bottom: 1.5rem;
    }
    .reason-chip {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        border: 1px solid rgba(6, 182, 212, 0.3);
        background: rgba(6, 182, 212, 0.1);
        color: #22d3ee;
        font-size: 0.75rem;
    }
    .reason-stat {
        display: flex;
        align-items: center;
        padding-top: 1.5rem;
        border-top: 1px solid rgba(55, 65, 81, 0.5);
    }
    .reason-stat-value {
        font-size: 1.875rem;
        font-weight: 700;
        color: #22d3ee;
    }
    .reason-stat-value.blue { color: #60a5fa; }
    .reason-stat-value.purple { color: #c084fc; }
    .reason-stat-value.pink { color: #f472b6; }
    .reason-stat-label { color: #9ca3af; font-size: 0.875rem; }
    .reason-arrow { margin-left: auto; color: #22d3ee; }
    .differentiator-grid {
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 1.5rem;
    }
    .differentiator {
        display: flex;
        gap: 1rem;
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid rgba(6, 182, 212, 0.3);
        background: rgba(6, 182, 212, 0.1);
        transition: transform 0.3s ease;
    }
    .differentiator:hover { transform: scale(1.05); }
    .differentiator.blue { border-color: rgba(59, 130, 246, 0.3); background: rgba(59, 130, 246, 0.1); }
    .differentiator.purple { border-color: rgba(168, 85, 247, 0.3); background: rgba(168, 85, 247, 0.1); }
    .differentiator-icon { margin: 0; flex-shrink: 0; }
    .differentiator h4 { color: #fff; margin-bottom: 0.5rem; }
    .differentiator p { color: #9ca3af; font-size: 0.875rem; }
    .why-cta {
        margin-top: 4rem;
        text-align: center;
    }
    @media (max-width: 1024px) {
        .reason-grid { grid-template-columns: 1fr; }
    }
    @media (max-width: 768px) {
        .sector-tabs { grid-template-columns: repeat(2, minmax(0, 1fr)); }
        .sector-details,
        .differentiator-grid { grid-template-columns: 1fr; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_index_is_clamped() {
        assert_eq!(select_sector(0), 0);
        assert_eq!(select_sector(3), 3);
        assert_eq!(select_sector(42), SECTORS.len() - 1);
    }

    #[test]
    fn every_sector_pairs_challenges_with_solutions() {
        for sector in &SECTORS {
            assert_eq!(sector.challenges.len(), sector.solutions.len());
            assert!(!sector.short_name.is_empty());
        }
    }
}
