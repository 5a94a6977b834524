//! Portfolio page - the whole site in one scroll container.
//!
//! The section components are pure; this page owns the interactive state and
//! drives it from DOM events and timers:
//!
//! - Scroll and resize events on `#page` schedule at most one frame update at
//!   a time. A frame restyles the navbar and runs a visibility pass.
//! - A visibility pass measures every observed element and feeds the results
//!   to the [`AnimationEngine`]; the returned effects become signal writes,
//!   some of them delayed.
//! - In-page anchors scroll `#page` smoothly to the mounted section.

use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::animation::COUNTER_TICK;
use folio_core::interaction::{anchor_target, scroll_destination, FRAME_INTERVAL};
use folio_core::{
    AnimationEngine, ContactField, ContactForm, Effect, ElementId, ElementKey, MenuState,
    Presentation, Rect, ScrollThrottle, Section, VisibilityEntry,
};
use folio_ui::{About, Contact, Footer, Hero, Navbar, Projects, Skills, TrackedNode};

use crate::context::use_app;

/// Id of the scroll container.
pub const PAGE_ID: &str = "page";

#[component]
pub fn Portfolio() -> Element {
    let app = use_app();
    let content = app.content.clone();
    let mut theme = app.theme;

    let mut menu = use_signal(MenuState::default);
    let throttle = use_signal(ScrollThrottle::default);
    let scrolled = use_signal(|| false);
    let form = use_signal(ContactForm::default);
    let mut engine = use_signal(AnimationEngine::default);
    let presentation = use_signal(Presentation::default);

    // Mounted nodes: the scroll container, anchor targets, observed elements
    let mut page = use_signal(|| None::<Rc<MountedData>>);
    let mut anchors = use_signal(HashMap::<Section, Rc<MountedData>>::new);
    let mut observed = use_signal(HashMap::<ElementId, Rc<MountedData>>::new);

    let request_frame = use_callback(move |_: ()| {
        schedule_frame(throttle, scrolled, async move {
            let Some(container) = page.peek().clone() else {
                return None;
            };
            let scroll_top = container
                .get_scroll_offset()
                .await
                .map(|offset| offset.y)
                .unwrap_or(0.0);
            visibility_pass(&container, engine, observed, presentation).await;
            Some(scroll_top)
        });
    });

    let on_mount = use_callback({
        let content = content.clone();
        move |tracked: TrackedNode| {
            if let ElementKey::Section(section) = tracked.key {
                anchors.write().insert(section, tracked.node.clone());
            }
            if let Some(id) = engine.write().observe_key(tracked.key, &content) {
                observed.write().insert(id, tracked.node);
            }
            request_frame.call(());
        }
    });

    let on_anchor = use_callback(move |href: String| {
        let Some(id) = anchor_target(&href) else {
            return;
        };
        let Some(section) = Section::from_id(id) else {
            tracing::debug!(anchor = id, "Anchor target not on page");
            return;
        };
        let (Some(container), Some(target)) =
            (page.peek().clone(), anchors.peek().get(&section).cloned())
        else {
            return;
        };
        spawn(async move {
            smooth_scroll(&container, &target).await;
        });
    });

    let on_nav = use_callback(move |href: String| {
        menu.write().close();
        on_anchor.call(href);
    });

    let current_theme = theme.read().current();

    rsx! {
        Navbar {
            nav_items: content.nav_items.clone(),
            initials: content.initials(),
            year: content.personal.year,
            theme: current_theme,
            menu_open: menu().is_open(),
            scrolled: scrolled(),
            on_toggle_menu: move |_| menu.write().toggle(),
            on_toggle_theme: move |_| {
                theme.write().toggle();
            },
            on_nav: on_nav,
        }

        div {
            id: PAGE_ID,
            class: "page",
            onscroll: move |_| request_frame.call(()),
            onresize: move |_| request_frame.call(()),
            onmounted: move |evt| {
                page.set(Some(evt.data()));
                request_frame.call(());
            },

            Hero {
                personal: content.personal.clone(),
                social_links: content.social_links.clone(),
                on_anchor: on_anchor,
                on_mount: on_mount,
            }
            for section in [Section::About, Section::Skills, Section::Projects, Section::Contact] {
                LiveSection {
                    key: "{section.id()}",
                    section: section,
                    presentation: presentation,
                    form: form,
                    on_anchor: on_anchor,
                    on_mount: on_mount,
                }
            }
            Footer {
                personal: content.personal.clone(),
                links: content.footer_links().to_vec(),
                on_anchor: on_anchor,
            }
        }
    }
}

/// An animated section. It subscribes to its own slice of the presentation
/// state, so a counter tick re-renders the about section and nothing else.
#[component]
fn LiveSection(
    section: Section,
    presentation: Signal<Presentation>,
    form: Signal<ContactForm>,
    on_anchor: EventHandler<String>,
    on_mount: EventHandler<TrackedNode>,
) -> Element {
    let content = use_app().content;
    let view = use_memo(move || presentation.read().for_section(section));
    let mut form = form;

    match section {
        Section::About => rsx! {
            About {
                bio: content.personal.bio.clone(),
                stats: content.stats.clone(),
                presentation: view(),
                on_mount: on_mount,
            }
        },
        Section::Skills => rsx! {
            Skills {
                skills: content.skills.clone(),
                presentation: view(),
                on_mount: on_mount,
            }
        },
        Section::Projects => rsx! {
            Projects {
                projects: content.projects.clone(),
                presentation: view(),
                on_anchor: on_anchor,
                on_mount: on_mount,
            }
        },
        Section::Contact => rsx! {
            Contact {
                personal: content.personal.clone(),
                phone_href: content.phone_href(),
                form: form(),
                presentation: view(),
                on_input: move |(field, value): (ContactField, String)| form.write().set(field, value),
                on_submit: move |_| submit_contact(form),
                on_mount: on_mount,
            }
        },
        Section::Home => rsx! {},
    }
}

/// Run `frame` one frame interval from now unless a frame is already
/// pending. `frame` yields the container's scroll offset, or `None` when
/// there is no container to measure.
fn schedule_frame(
    mut throttle: Signal<ScrollThrottle>,
    mut scrolled: Signal<bool>,
    frame: impl Future<Output = Option<f64>> + 'static,
) {
    if !throttle.write().request_frame() {
        return;
    }
    spawn(async move {
        tokio::time::sleep(FRAME_INTERVAL).await;
        let scroll_top = frame.await.unwrap_or(0.0);
        let is_scrolled = throttle.write().complete_frame(scroll_top);
        if *scrolled.peek() != is_scrolled {
            scrolled.set(is_scrolled);
        }
    });
}

/// Show the confirmation, then clear and re-enable the form once it expires.
fn submit_contact(mut form: Signal<ContactForm>) {
    let Some(wait) = form.write().submit() else {
        return;
    };
    tracing::info!("Contact form submitted; nothing was sent");
    spawn(async move {
        tokio::time::sleep(wait).await;
        form.write().restore();
    });
}

async fn measure(node: &MountedData) -> Option<Rect> {
    let rect = node.get_client_rect().await.ok()?;
    Some(Rect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    ))
}

/// Measure every element still observed against the container's viewport
/// and run the effects of whatever triggered. Elements that can no longer be
/// measured are skipped.
async fn visibility_pass(
    container: &MountedData,
    mut engine: Signal<AnimationEngine>,
    observed: Signal<HashMap<ElementId, Rc<MountedData>>>,
    presentation: Signal<Presentation>,
) {
    let Some(viewport) = measure(container).await else {
        return;
    };

    let (policy, targets) = {
        let engine = engine.peek();
        let nodes = observed.peek();
        let targets: Vec<(ElementId, Rc<MountedData>)> = engine
            .observing()
            .into_iter()
            .filter_map(|id| nodes.get(&id).map(|node| (id, node.clone())))
            .collect();
        (*engine.policy(), targets)
    };

    let mut entries = Vec::with_capacity(targets.len());
    for (element, node) in targets {
        if let Some(rect) = measure(&node).await {
            entries.push(VisibilityEntry {
                element,
                is_visible: policy.is_visible(rect, viewport),
            });
        }
    }

    let effects = engine.write().process(entries);
    for effect in effects {
        run_effect(effect, presentation);
    }
}

fn run_effect(effect: Effect, mut presentation: Signal<Presentation>) {
    match effect {
        Effect::Reveal(section) => presentation.write().reveal(section),
        Effect::FillSkillBar {
            skill,
            percent,
            delay,
        } => {
            spawn(async move {
                tokio::time::sleep(delay).await;
                presentation.write().fill_bar(skill, percent);
            });
        }
        Effect::StartCounter { stat, mut counter } => {
            spawn(async move {
                while !counter.is_finished() {
                    tokio::time::sleep(COUNTER_TICK).await;
                    counter.advance();
                    presentation.write().set_counter(stat, counter.text());
                }
            });
        }
    }
}

async fn smooth_scroll(container: &MountedData, target: &MountedData) {
    let Ok(offset) = container.get_scroll_offset().await else {
        return;
    };
    let (Some(viewport), Some(rect)) = (measure(container).await, measure(target).await) else {
        return;
    };

    let top = scroll_destination(offset.y, rect.y, viewport.y);
    document::eval(&format!(
        "document.getElementById('{}').scrollTo({{ top: {}, behavior: 'smooth' }});",
        PAGE_ID, top
    ));
}
