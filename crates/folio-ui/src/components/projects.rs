//! Projects section - featured projects first, then the rest.

use dioxus::prelude::*;
use folio_core::content::display_order;
use folio_core::{Presentation, Project, Section};

use super::{PageLink, PageSection, TrackedNode};

#[component]
pub fn Projects(
    projects: Vec<Project>,
    #[props(default)] presentation: Presentation,
    #[props(default)] on_anchor: Option<EventHandler<String>>,
    #[props(default)] on_mount: Option<EventHandler<TrackedNode>>,
) -> Element {
    let ordered = display_order(&projects);

    rsx! {
        PageSection {
            section: Section::Projects,
            badge: "Portfolio".to_string(),
            title: "Featured Projects".to_string(),
            revealed: presentation.is_revealed(Section::Projects),
            on_mount: on_mount,
            div { class: "projects-grid", id: "projectsGrid",
                for project in ordered.into_iter() {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        on_anchor: on_anchor,
                    }
                }
            }
        }
    }
}

/// Card for one project. Every card uses the same template, badge
/// included; missing live/source links render nothing.
#[component]
pub fn ProjectCard(
    project: Project,
    #[props(!optional)] on_anchor: Option<EventHandler<String>>,
) -> Element {
    let live = project.link.clone().map(|href| {
        rsx! {
            PageLink {
                href: href,
                class: "project-link".to_string(),
                on_anchor: on_anchor,
                i { class: "fas fa-external-link-alt" }
                " Live"
            }
        }
    });
    let source = project.github.clone().map(|href| {
        rsx! {
            PageLink {
                href: href,
                class: "project-link".to_string(),
                on_anchor: on_anchor,
                i { class: "fab fa-github" }
                " Code"
            }
        }
    });

    rsx! {
        div { class: "project-card", "data-project-id": "{project.id}",
            div { class: "project-header",
                div { class: "project-icon", "{project.image}" }
                div { class: "project-badge", "Featured" }
            }
            div { class: "project-content",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                div { class: "project-technologies",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                }
                div { class: "project-links",
                    {live}
                    {source}
                }
            }
        }
    }
}
