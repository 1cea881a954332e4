use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use super::carousel::{self, CarouselState};
use super::detail::ProjectDetailView;
use super::modal::{Deferred, ModalMachine};
use super::models::ProjectRecord;
use super::scroll_lock::page_scroll_lock;
use super::source::use_projects;
use crate::components::dom::{open_in_new_tab, scroll_to_section, AnimationFrame, WindowListener};

pub enum ShowcaseMsg {
    Frame,
    PointerEnter(usize),
    PointerLeave(usize),
    Activate(usize),
    Close,
    Key(String),
    TransitionElapsed(u64),
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub projects: Rc<Vec<ProjectRecord>>,
    pub loading: bool,
}

/// Auto-scrolling project strip plus the case-study overlay it opens.
pub struct ProjectShowcase {
    carousel: CarouselState,
    modal: ModalMachine<Rc<ProjectRecord>>,
    strip: NodeRef,
    frame: Option<AnimationFrame>,
    // At most one pending transition; replacing it cancels the old timer.
    transition: Option<Timeout>,
    escape: Option<WindowListener>,
}

/// The project behind a rendered card, if it has a case study to open.
fn openable(projects: &[ProjectRecord], render_index: usize) -> Option<&ProjectRecord> {
    carousel::resolve(projects, render_index).filter(|project| project.detail().is_some())
}

impl ProjectShowcase {
    fn animates(ctx: &Context<Self>) -> bool {
        let props = ctx.props();
        carousel::should_animate(props.projects.len(), props.loading)
    }

    fn request_frame(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.frame = AnimationFrame::request(move || link.send_message(ShowcaseMsg::Frame));
    }

    fn schedule(&mut self, ctx: &Context<Self>, step: Deferred) {
        let link = ctx.link().clone();
        self.transition = Some(Timeout::new(step.delay_ms, move || {
            link.send_message(ShowcaseMsg::TransitionElapsed(step.ticket));
        }));
    }

    fn sync_escape_listener(&mut self, ctx: &Context<Self>) {
        if self.modal.is_open() {
            if self.escape.is_none() {
                let on_key = ctx.link().callback(ShowcaseMsg::Key);
                self.escape = WindowListener::keydown(move |key| on_key.emit(key));
            }
        } else {
            self.escape = None;
        }
    }

    fn advance(&mut self) {
        let Some(strip) = self.strip.cast::<Element>() else {
            return;
        };
        if let Some(offset) = self.carousel.tick(f64::from(strip.scroll_width())) {
            strip.scroll_to_with_x_and_y(offset, 0.0);
        }
    }

    fn card(&self, ctx: &Context<Self>, index: usize, project: &ProjectRecord) -> Html {
        let link = ctx.link();
        let external_link = if project.has_external_link() {
            let external = project.link.clone();
            html! {
                <button onclick={Callback::from(move |_: MouseEvent| open_in_new_tab(&external))}>
                    {"↗"}
                </button>
            }
        } else {
            html! {}
        };

        html! {
            <div key={format!("{}-{}", project.id, index)}
                class="project-card"
                onmouseenter={link.callback(move |_| ShowcaseMsg::PointerEnter(index))}
                onmouseleave={link.callback(move |_| ShowcaseMsg::PointerLeave(index))}>
                <div class="project-cover">
                    <img src={project.image.clone()} alt={project.title.clone()} />
                    <div class="project-cover-shade"></div>
                    <div class="project-cover-actions">
                        { external_link }
                    </div>
                </div>

                <div class="project-card-body">
                    <h3>{&project.title}</h3>
                    <p class="project-summary">{&project.description}</p>

                    <div class="project-panel">
                        <h4>{"Stack Technique"}</h4>
                        <div class="project-tags">
                            { for project.tech.iter().map(|tech| html! {
                                <span class="project-tag">{tech}</span>
                            }) }
                        </div>
                    </div>

                    <div class="project-panel results">
                        <h4>{"Résultats Obtenus"}</h4>
                        <div class="project-results">
                            { for project.results.iter().map(|result| html! {
                                <div class="project-result">{result}</div>
                            }) }
                        </div>
                    </div>

                    <div class="project-actions">
                        <button class="project-open" onclick={link.callback(move |_| ShowcaseMsg::Activate(index))}>
                            {"Voir le projet"}
                        </button>
                        <button class="project-similar" onclick={Callback::from(|_: MouseEvent| {
                            scroll_to_section("#contact");
                        })}>
                            {"Projet similaire ?"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn overlay(&self, ctx: &Context<Self>) -> Html {
        match self.modal.selected() {
            Some(project) => html! {
                <ProjectDetailView
                    project={project.clone()}
                    entering={self.modal.is_open() && self.modal.is_animating()}
                    on_close={ctx.link().callback(|_| ShowcaseMsg::Close)}
                />
            },
            None => html! {},
        }
    }
}

impl Component for ProjectShowcase {
    type Message = ShowcaseMsg;
    type Properties = ShowcaseProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut showcase = Self {
            carousel: CarouselState::default(),
            modal: ModalMachine::new(page_scroll_lock()),
            strip: NodeRef::default(),
            frame: None,
            transition: None,
            escape: None,
        };
        if Self::animates(ctx) {
            showcase.request_frame(ctx);
        }
        showcase
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if !Rc::ptr_eq(&ctx.props().projects, &old_props.projects) {
            self.carousel.reset();
        }
        if Self::animates(ctx) {
            if self.frame.is_none() {
                self.request_frame(ctx);
            }
        } else {
            self.frame = None;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ShowcaseMsg::Frame => {
                self.frame = None;
                if !Self::animates(ctx) {
                    return false;
                }
                self.advance();
                self.request_frame(ctx);
                false
            }
            ShowcaseMsg::PointerEnter(index) => {
                if !self.carousel.is_paused() {
                    log::debug!("carousel paused at {:.1}", self.carousel.offset());
                }
                self.carousel.on_pointer_enter(index);
                false
            }
            ShowcaseMsg::PointerLeave(index) => {
                self.carousel.on_pointer_leave(index);
                false
            }
            ShowcaseMsg::Activate(index) => {
                let Some(project) = openable(ctx.props().projects.as_slice(), index) else {
                    log::debug!("card {} has no case study to show", index);
                    return false;
                };
                log::info!("opening project {}", project.id);
                let step = self.modal.open(Rc::new(project.clone()));
                self.schedule(ctx, step);
                true
            }
            ShowcaseMsg::Close => match self.modal.close() {
                Some(step) => {
                    self.schedule(ctx, step);
                    true
                }
                None => false,
            },
            ShowcaseMsg::Key(key) => match self.modal.on_key(&key) {
                Some(step) => {
                    self.schedule(ctx, step);
                    true
                }
                None => false,
            },
            ShowcaseMsg::TransitionElapsed(ticket) => {
                let changed = self.modal.elapsed(ticket);
                if changed {
                    self.transition = None;
                    log::debug!(
                        "project overlay {:?}, holds scroll lock: {}, page locked: {}",
                        self.modal.phase(),
                        self.modal.holds_scroll_lock(),
                        page_scroll_lock().is_held()
                    );
                }
                self.sync_escape_listener(ctx);
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let cards: Html = if props.loading {
            html! {}
        } else {
            carousel::looped(props.projects.as_slice())
                .map(|(index, project)| self.card(ctx, index, project))
                .collect()
        };

        html! {
            <section id="portfolio" class="portfolio">
                <style>{PORTFOLIO_CSS}</style>
                <div class="portfolio-header">
                    <h2>{"Portfolio "}<span class="gradient-text">{"Projets"}</span></h2>
                    <p>{"Découvrez quelques-unes de nos réalisations les plus impactantes"}</p>
                </div>

                <div class="portfolio-strip-wrapper">
                    <div class="portfolio-strip" ref={self.strip.clone()}>
                        { cards }
                    </div>
                    <div class="portfolio-fade left"></div>
                    <div class="portfolio-fade right"></div>
                </div>

                <div class="portfolio-cta">
                    <h3>{"Prêt à lancer votre projet ?"}</h3>
                    <p>
                        {"Transformons ensemble vos idées en réalité digitale. Discutons de votre vision et créons quelque chose d'exceptionnel."}
                    </p>
                    <button class="pill-cta" onclick={Callback::from(|_: MouseEvent| {
                        scroll_to_section("#contact");
                    })}>
                        {"Démarrer maintenant"}
                    </button>
                </div>

                { self.overlay(ctx) }
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.frame = None;
        self.transition = None;
        self.escape = None;
        self.modal.reset();
    }
}

/// Portfolio section wired to the project data source.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let projects = use_projects();

    html! {
        <ProjectShowcase projects={projects.data.clone()} loading={projects.loading} />
    }
}

const PORTFOLIO_CSS: &str = r#"
    .portfolio {
        position: relative;
        overflow: hidden;
        padding: 5rem 0;
    }
    .portfolio-header {
        text-align: center;
        margin-bottom: 4rem;
        padding: 0 1rem;
    }
    .portfolio-header h2 {
        color: #fff;
        font-size: clamp(1.875rem, 4vw, 3rem);
        margin-bottom: 1.5rem;
    }
    .portfolio-header p {
        color: #9ca3af;
        font-size: 1.25rem;
        max-width: 48rem;
        margin: 0 auto;
    }
    .portfolio-strip-wrapper {
        position: relative;
        margin-bottom: 4rem;
    }
    .portfolio-strip {
        display: flex;
        gap: 1.5rem;
        overflow-x: hidden;
        scrollbar-width: none;
    }
    .portfolio-fade {
        pointer-events: none;
        position: absolute;
        top: 0;
        bottom: 0;
        width: 8rem;
        z-index: 10;
    }
    .portfolio-fade.left {
        left: 0;
        background: linear-gradient(90deg, #000, transparent);
    }
    .portfolio-fade.right {
        right: 0;
        background: linear-gradient(270deg, #000, transparent);
    }
    .project-card {
        flex-shrink: 0;
        width: 32vw;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(55, 65, 81, 0.5);
        border-radius: 1.5rem;
        overflow: hidden;
        transition: all 0.5s ease;
    }
    .project-card:hover {
        border-color: rgba(6, 182, 212, 0.5);
        background: rgba(255, 255, 255, 0.1);
        transform: scale(1.03);
    }
    .project-cover {
        position: relative;
        height: 16rem;
        overflow: hidden;
    }
    .project-cover img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .project-card:hover .project-cover img {
        transform: scale(1.1);
    }
    .project-cover-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(0deg, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.2), transparent);
    }
    .project-cover-actions {
        position: absolute;
        top: 1rem;
        right: 1rem;
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .project-card:hover .project-cover-actions {
        opacity: 1;
    }
    .project-cover-actions button {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        border: 1px solid rgba(255, 255, 255, 0.3);
        background: rgba(255, 255, 255, 0.2);
        color: #fff;
        cursor: pointer;
    }
    .project-card-body {
        padding: 2rem;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .project-card-body h3 {
        color: #fff;
        font-size: 1.5rem;
    }
    .project-summary {
        color: #9ca3af;
        line-height: 1.6;
    }
    .project-panel {
        padding: 1rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(55, 65, 81, 0.5);
        background: rgba(255, 255, 255, 0.05);
    }
    .project-panel.results {
        border-color: rgba(168, 85, 247, 0.2);
    }
    .project-panel h4 {
        color: #fff;
        font-size: 0.875rem;
        margin-bottom: 0.75rem;
    }
    .project-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .project-tag {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        border: 1px solid rgba(6, 182, 212, 0.3);
        color: #22d3ee;
        font-size: 0.75rem;
    }
    .project-results {
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 1rem;
    }
    .project-result {
        text-align: center;
        padding: 0.75rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.05);
        color: #c084fc;
        font-weight: 700;
        font-size: 0.875rem;
    }
    .project-actions {
        display: flex;
        gap: 0.75rem;
    }
    .project-actions button {
        flex: 1;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        font-weight: 600;
        cursor: pointer;
    }
    .project-open {
        border: none;
        color: #fff;
        background: linear-gradient(90deg, #06b6d4, #a855f7);
    }
    .project-similar {
        background: transparent;
        border: 2px solid #22d3ee;
        color: #22d3ee;
    }
    .portfolio-cta {
        text-align: center;
        margin: 4rem 2rem 0;
        padding: 3rem;
        border-radius: 1rem;
        border: 1px solid rgba(6, 182, 212, 0.2);
        background: linear-gradient(90deg, rgba(6, 182, 212, 0.1), rgba(168, 85, 247, 0.1));
    }
    .portfolio-cta h3 {
        color: #fff;
        font-size: 1.875rem;
        margin-bottom: 1rem;
    }
    .portfolio-cta p {
        color: #9ca3af;
        max-width: 42rem;
        margin: 0 auto 2rem;
    }
    @media (max-width: 1024px) {
        .project-card { width: 45vw; }
    }
    @media (max-width: 640px) {
        .project-card { width: 90vw; }
        .project-results { grid-template-columns: 1fr; }
        .project-actions { flex-direction: column; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u32, detail: serde_json::Value) -> ProjectRecord {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Projet {}", id),
            "content_project_modal": detail,
        }))
        .unwrap()
    }

    fn case_study() -> serde_json::Value {
        json!({
            "hero_title": "Une table, un clic",
            "hero_subtitle": "Réservations en ligne",
            "challenge": { "title": "Le défi", "description": "Téléphone" },
            "solution": { "title": "La solution", "description": "Un site" }
        })
    }

    #[test]
    fn cards_without_case_study_do_not_open() {
        let projects = vec![
            record(1, case_study()),
            record(2, serde_json::Value::Null),
            record(3, json!({ "hero_title": 3 })),
        ];
        assert_eq!(openable(&projects, 0).map(|p| p.id.as_str()), Some("1"));
        assert!(openable(&projects, 1).is_none());
        assert!(openable(&projects, 2).is_none());
        assert_eq!(openable(&projects, 3).map(|p| p.id.as_str()), Some("1"));
        assert!(openable(&projects, 4).is_none());
        assert!(openable(&[], 0).is_none());
    }
}
