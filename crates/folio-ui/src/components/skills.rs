//! Skills section - categorized progress bars.

use dioxus::prelude::*;
use folio_core::content::group_skills;
use folio_core::{ElementKey, Presentation, Section, Skill, SkillCategory};

use super::{PageSection, TrackedNode};

#[component]
pub fn Skills(
    skills: Vec<Skill>,
    #[props(default)] presentation: Presentation,
    #[props(default)] on_mount: Option<EventHandler<TrackedNode>>,
) -> Element {
    let groups = group_skills(&skills);

    rsx! {
        PageSection {
            section: Section::Skills,
            badge: "Skills".to_string(),
            title: "Technologies & Expertise".to_string(),
            revealed: presentation.is_revealed(Section::Skills),
            on_mount: on_mount,
            div { class: "skills-grid",
                for group in groups.iter() {
                    SkillCategoryBlock {
                        key: "{group.category.title()}",
                        category: group.category,
                        skills: group
                            .skills
                            .iter()
                            .map(|(index, skill)| (*index, (*skill).clone(), presentation.bar_width(*index)))
                            .collect::<Vec<_>>(),
                        on_mount: on_mount,
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCategoryBlock(
    category: SkillCategory,
    /// (repository index, skill, current bar width)
    skills: Vec<(usize, Skill, u8)>,
    #[props(!optional)] on_mount: Option<EventHandler<TrackedNode>>,
) -> Element {
    rsx! {
        div { class: "skill-category",
            h3 { class: "skill-category-title",
                i { class: "fas fa-{category.icon()}" }
                " {category.title()}"
            }
            div { class: "skill-items",
                for (index, skill, width) in skills.iter() {
                    SkillItem {
                        key: "{index}",
                        index: *index,
                        skill: skill.clone(),
                        width: *width,
                        on_mount: on_mount,
                    }
                }
            }
        }
    }
}

#[component]
fn SkillItem(
    index: usize,
    skill: Skill,
    /// Current bar width in percent, 0 until the bar is filled
    width: u8,
    #[props(!optional)] on_mount: Option<EventHandler<TrackedNode>>,
) -> Element {
    rsx! {
        div { class: "skill-item",
            div { class: "skill-header",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-percentage", "{skill.level}%" }
            }
            div { class: "skill-bar",
                div {
                    class: "skill-progress",
                    "data-width": "{skill.level}",
                    style: "width: {width}%",
                    onmounted: move |evt| {
                        if let Some(handler) = on_mount {
                            handler.call(TrackedNode {
                                key: ElementKey::SkillBar(index),
                                node: evt.data(),
                            });
                        }
                    },
                }
            }
        }
    }
}
