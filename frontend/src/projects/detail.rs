use std::rc::Rc;

use yew::prelude::*;

use super::models::{ProjectRecord, Technologies};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub project: Rc<ProjectRecord>,
    /// True while entering or shown, false during the exit transition.
    pub entering: bool,
    pub on_close: Callback<MouseEvent>,
}

fn tech_column(title: &str, accent: &str, items: &[String]) -> Html {
    html! {
        <div class="detail-tech-column">
            <h3 class={classes!("detail-tech-title", accent.to_string())}>{title}</h3>
            <div class="detail-tech-tags">
                { for items.iter().map(|tech| html! {
                    <span class={classes!("detail-tech-tag", accent.to_string())}>{tech}</span>
                }) }
            </div>
        </div>
    }
}

fn tech_breakdown(technologies: &Technologies) -> Html {
    html! {
        <div class="detail-tech-grid">
            { tech_column("Frontend", "accent-cyan", &technologies.frontend) }
            { tech_column("Backend", "accent-purple", &technologies.backend) }
            { tech_column("Infrastructure", "accent-orange", &technologies.infrastructure) }
        </div>
    }
}

/// Full-screen case study for one project. Renders nothing when the project
/// carries no detail payload.
#[function_component(ProjectDetailView)]
pub fn project_detail_view(props: &ProjectDetailProps) -> Html {
    let project = &props.project;
    let Some(detail) = project.detail() else {
        return html! {};
    };

    let backdrop_style = format!("background-image: url({});", project.image);

    html! {
        <div class={classes!("project-detail", props.entering.then(|| "entering"))}
            role="dialog" aria-modal="true">
            <style>{DETAIL_CSS}</style>
            <div class="detail-backdrop" style={backdrop_style}></div>
            <div class="detail-shade"></div>

            <div class="detail-body">
                <div class="detail-hero">
                    <button class="detail-close" onclick={props.on_close.clone()} aria-label="Fermer">
                        {"✕"}
                    </button>

                    <div class="detail-breadcrumb">
                        <span>{"Home"}</span>
                        <span>{"›"}</span>
                        <span>{"Projets"}</span>
                        <span>{"›"}</span>
                        <span class="current">{&project.title}</span>
                    </div>

                    <h1>{&detail.hero_title}</h1>
                    <p class="detail-subtitle">{&detail.hero_subtitle}</p>

                    <div class="detail-headline-features">
                        { for detail.headline_features().into_iter().map(|feature| html! {
                            <div class="detail-headline-feature">
                                <span class="dot"></span>
                                <span>{feature}</span>
                            </div>
                        }) }
                    </div>

                    <a href={detail.demo_link.clone()} target="_blank" rel="noopener noreferrer" class="detail-demo">
                        <span>{&detail.cta_text}</span>
                        <span class="arrow">{"↗"}</span>
                    </a>

                    <div class="detail-stat-row">
                        { for detail.headline_metrics().iter().map(|metric| html! {
                            <div class="detail-stat">
                                <div class="value">{&metric.value}</div>
                                <div class="label">{&metric.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="detail-content">
                    <p class="detail-description">{&detail.description}</p>

                    <section>
                        <h2>{&detail.challenge.title}</h2>
                        <p>{&detail.challenge.description}</p>
                    </section>

                    <section>
                        <h2>{&detail.solution.title}</h2>
                        <p>{&detail.solution.description}</p>
                        <div class="detail-feature-grid">
                            { for detail.solution.features.iter().map(|feature| html! {
                                <div class="detail-feature">
                                    <span class="check">{"✓"}</span>
                                    <span>{feature}</span>
                                </div>
                            }) }
                        </div>
                    </section>

                    <section>
                        <h2>{"Résultats & Impact"}</h2>
                        <div class="detail-metric-grid">
                            { for detail.metrics.iter().map(|metric| html! {
                                <div class="detail-metric">
                                    <div class="value">{&metric.value}</div>
                                    <div class="label">{&metric.label}</div>
                                    <div class="description">{&metric.description}</div>
                                </div>
                            }) }
                        </div>

                        {
                            if let Some(testimonial) = &detail.testimonial {
                                html! {
                                    <blockquote class="detail-testimonial">
                                        <p>{&testimonial.quote}</p>
                                        <footer>
                                            <div class="avatar">{testimonial.initial()}</div>
                                            <div>
                                                <div class="author">{&testimonial.author}</div>
                                                <div class="role">
                                                    {format!("{} · {}", testimonial.role, testimonial.company)}
                                                </div>
                                            </div>
                                        </footer>
                                    </blockquote>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </section>

                    <section>
                        <h2>{"Stack Technique"}</h2>
                        { tech_breakdown(&detail.technologies) }
                    </section>

                    <div class="detail-cta">
                        <h3>{"Un projet similaire en tête ?"}</h3>
                        <p>{"Discutons de vos objectifs et créons ensemble une solution sur-mesure"}</p>
                        {
                            if detail.has_demo() {
                                html! {
                                    <a href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer" class="detail-booking">
                                        {"Planifier un RDV pour ce projet"}
                                    </a>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

const DETAIL_CSS: &str = r#"
    .project-detail {
        position: fixed;
        inset: 0;
        z-index: 50;
        overflow-y: auto;
        background: #000;
        opacity: 0;
        transform: scale(0.98);
        transition: opacity 0.3s ease, transform 0.3s ease;
    }
    .project-detail.entering {
        opacity: 1;
        transform: scale(1);
    }
    .detail-backdrop {
        position: fixed;
        inset: 0;
        opacity: 0.2;
        background-size: cover;
        background-position: center;
        background-attachment: fixed;
    }
    .detail-shade {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
    }
    .detail-body {
        position: relative;
        min-height: 100vh;
    }
    .detail-hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 5rem 1.5rem;
        text-align: center;
        color: #fff;
    }
    .detail-hero h1 {
        font-size: clamp(2rem, 6vw, 5.5rem);
        max-width: 72rem;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .detail-subtitle {
        color: #d1d5db;
        font-size: clamp(1rem, 2vw, 1.5rem);
        max-width: 56rem;
        margin-bottom: 3rem;
    }
    .detail-close {
        position: fixed;
        top: 1.5rem;
        right: 1.5rem;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.1);
        color: #fff;
        font-size: 1.25rem;
        cursor: pointer;
        z-index: 51;
        transition: transform 0.3s ease;
    }
    .detail-close:hover {
        transform: rotate(90deg);
    }
    .detail-breadcrumb {
        display: flex;
        gap: 0.5rem;
        color: #9ca3af;
        font-size: 0.875rem;
        margin-bottom: 2rem;
    }
    .detail-breadcrumb .current {
        color: #fff;
    }
    .detail-headline-features {
        max-width: 48rem;
        width: 100%;
        text-align: left;
        margin-bottom: 3rem;
    }
    .detail-headline-feature {
        display: flex;
        gap: 1rem;
        align-items: flex-start;
        font-size: 1.125rem;
        margin-bottom: 1rem;
    }
    .detail-headline-feature .dot {
        width: 0.5rem;
        height: 0.5rem;
        margin-top: 0.5rem;
        border-radius: 50%;
        background: linear-gradient(90deg, #22d3ee, #c084fc);
        flex-shrink: 0;
    }
    .detail-demo {
        display: inline-flex;
        gap: 0.75rem;
        padding: 1rem 2.5rem;
        border: 2px solid #22d3ee;
        border-radius: 0.5rem;
        color: #fff;
        text-decoration: none;
        font-weight: 600;
    }
    .detail-stat-row {
        display: grid;
        grid-template-columns: repeat(4, minmax(0, 1fr));
        gap: 1.5rem;
        width: 100%;
        max-width: 80rem;
        margin-top: 4rem;
    }
    .detail-stat .value {
        font-size: 2.25rem;
        font-weight: 700;
    }
    .detail-stat .label {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .detail-content {
        position: relative;
        background: rgba(0, 0, 0, 0.8);
        padding: 5rem 2rem;
        color: #d1d5db;
    }
    .detail-content section {
        max-width: 80rem;
        margin: 0 auto 5rem;
    }
    .detail-content h2 {
        color: #fff;
        font-size: 2.25rem;
        margin-bottom: 2rem;
    }
    .detail-description {
        max-width: 56rem;
        margin: 0 auto 5rem;
        font-size: 1.5rem;
    }
    .detail-feature-grid,
    .detail-tech-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 1.5rem;
        margin-top: 2rem;
    }
    .detail-feature {
        display: flex;
        gap: 1rem;
        padding: 1.5rem;
        border: 1px solid rgba(55, 65, 81, 0.5);
        border-radius: 0.75rem;
        background: rgba(255, 255, 255, 0.05);
    }
    .detail-feature .check {
        color: #22d3ee;
    }
    .detail-metric-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1.5rem;
    }
    .detail-metric {
        padding: 1.5rem;
        border: 1px solid rgba(6, 182, 212, 0.2);
        border-radius: 0.75rem;
        background: linear-gradient(135deg, rgba(6, 182, 212, 0.1), rgba(168, 85, 247, 0.1));
    }
    .detail-metric .value {
        font-size: 3rem;
        font-weight: 700;
        background: linear-gradient(90deg, #22d3ee, #c084fc);
        -webkit-background-clip: text;
        color: transparent;
    }
    .detail-metric .description {
        color: #6b7280;
        font-size: 0.75rem;
    }
    .detail-testimonial {
        margin-top: 4rem;
        padding: 3rem;
        border-left: 4px solid #22d3ee;
        background: rgba(255, 255, 255, 0.05);
        font-style: italic;
        font-size: 1.5rem;
    }
    .detail-testimonial footer {
        display: flex;
        gap: 1rem;
        align-items: center;
        margin-top: 2rem;
        font-style: normal;
        font-size: 1rem;
    }
    .detail-testimonial .avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-weight: 700;
        background: linear-gradient(90deg, #06b6d4, #a855f7);
    }
    .detail-testimonial .author {
        color: #fff;
        font-weight: 600;
    }
    .detail-tech-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
    }
    .detail-tech-tag {
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid currentColor;
        font-size: 0.875rem;
    }
    .accent-cyan { color: #22d3ee; }
    .accent-purple { color: #c084fc; }
    .accent-orange { color: #fb923c; }
    .detail-tech-title { font-size: 1.25rem; margin-bottom: 1.5rem; }
    .detail-cta {
        text-align: center;
        padding: 4rem 0;
        border-top: 1px solid rgba(55, 65, 81, 0.5);
    }
    .detail-cta h3 {
        color: #fff;
        font-size: 1.875rem;
    }
    .detail-booking {
        display: inline-block;
        margin-top: 2rem;
        padding: 1rem 2.5rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.1);
        color: #fff;
        text-decoration: none;
        font-weight: 600;
    }
    @media (max-width: 768px) {
        .detail-stat-row {
            grid-template-columns: repeat(2, minmax(0, 1fr));
        }
    }
"#;
