//! Scroll-driven animation engine.
//!
//! The engine watches three kinds of elements with one visibility policy:
//!
//! - **Sections** gain a permanent reveal state the first time they become
//!   visible. They stay observed; a repeat trigger changes nothing.
//! - **Skill bars** fill to their level after [`SKILL_FILL_DELAY`]. One-shot.
//! - **Counters** start a [`Counter`] run. One-shot.
//!
//! The engine itself is a plain value. The host measures elements, feeds
//! [`VisibilityEntry`] values to [`AnimationEngine::process`] and executes
//! the returned [`Effect`]s (timers included).
//!
//! ```ignore
//! let mut engine = AnimationEngine::default();
//! let id = engine.observe(Target::SkillBar { skill: 0, percent: 95 });
//!
//! let visible = engine.policy().is_visible(bar_rect, viewport);
//! for effect in engine.process([VisibilityEntry { element: id, is_visible: visible }]) {
//!     host.run(effect);
//! }
//! ```

mod arena;
pub mod counter;
pub mod presentation;
pub mod visibility;

use std::time::Duration;

use crate::content::{ContentRepository, Section};

use arena::ElementArena;
pub use arena::{ElementId, ElementState};
pub use counter::{Counter, COUNTER_STEPS, COUNTER_TICK};
pub use presentation::Presentation;
pub use visibility::{Rect, VisibilityPolicy};

/// Delay between a skill bar becoming visible and its width changing.
pub const SKILL_FILL_DELAY: Duration = Duration::from_millis(300);

/// Identity of an animated element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKey {
    Section(Section),
    /// Index into the repository's skills
    SkillBar(usize),
    /// Index into the repository's stats
    Counter(usize),
}

/// What an observed element animates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Section(Section),
    SkillBar { skill: usize, percent: u8 },
    Counter { stat: usize, target: u32, suffix: String },
}

impl Target {
    pub fn key(&self) -> ElementKey {
        match self {
            Target::Section(section) => ElementKey::Section(*section),
            Target::SkillBar { skill, .. } => ElementKey::SkillBar(*skill),
            Target::Counter { stat, .. } => ElementKey::Counter(*stat),
        }
    }

    /// Build the target for `key` from the content. `None` when the key does
    /// not name an animated element.
    pub fn resolve(key: ElementKey, content: &ContentRepository) -> Option<Target> {
        match key {
            ElementKey::Section(section) if section.reveals_on_scroll() => {
                Some(Target::Section(section))
            }
            ElementKey::Section(_) => None,
            ElementKey::SkillBar(skill) => content.skills.get(skill).map(|s| Target::SkillBar {
                skill,
                percent: s.level,
            }),
            ElementKey::Counter(stat) => content.stats.get(stat).map(|s| Target::Counter {
                stat,
                target: s.value,
                suffix: s.suffix().to_string(),
            }),
        }
    }

    /// One-shot targets stop being observed once triggered.
    fn is_one_shot(&self) -> bool {
        !matches!(self, Target::Section(_))
    }

    fn effect(&self) -> Effect {
        match self {
            Target::Section(section) => Effect::Reveal(*section),
            Target::SkillBar { skill, percent } => Effect::FillSkillBar {
                skill: *skill,
                percent: *percent,
                delay: SKILL_FILL_DELAY,
            },
            Target::Counter {
                stat,
                target,
                suffix,
            } => Effect::StartCounter {
                stat: *stat,
                counter: Counter::new(*target, suffix.clone()),
            },
        }
    }
}

/// One visibility measurement of an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub element: ElementId,
    pub is_visible: bool,
}

/// Work for the host to perform after a trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add the permanent `animate` state to a section
    Reveal(Section),
    /// After `delay`, set the bar width to `percent`
    FillSkillBar {
        skill: usize,
        percent: u8,
        delay: Duration,
    },
    /// Tick `counter` every [`COUNTER_TICK`] until it finishes
    StartCounter { stat: usize, counter: Counter },
}

#[derive(Debug, Clone, Default)]
pub struct AnimationEngine {
    policy: VisibilityPolicy,
    elements: ElementArena,
}

impl AnimationEngine {
    pub fn new(policy: VisibilityPolicy) -> Self {
        Self {
            policy,
            elements: ElementArena::default(),
        }
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    /// Start observing `target`. Observing an already known element returns
    /// its existing id and keeps its state.
    pub fn observe(&mut self, target: Target) -> ElementId {
        self.elements.insert(target)
    }

    /// Resolve `key` against the content and observe it.
    pub fn observe_key(&mut self, key: ElementKey, content: &ContentRepository) -> Option<ElementId> {
        Target::resolve(key, content).map(|target| self.observe(target))
    }

    pub fn id_of(&self, key: &ElementKey) -> Option<ElementId> {
        self.elements.id_of(key)
    }

    pub fn state(&self, id: ElementId) -> Option<ElementState> {
        self.elements.get(id).map(|slot| slot.state)
    }

    pub fn is_observing(&self, id: ElementId) -> bool {
        self.elements.get(id).is_some_and(|slot| slot.observing)
    }

    /// Elements still under observation, in registration order.
    pub fn observing(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, slot)| slot.observing)
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of elements ever observed
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.len() == 0
    }

    /// Apply a batch of visibility entries in delivery order and return the
    /// effects of every trigger that fired.
    pub fn process(&mut self, entries: impl IntoIterator<Item = VisibilityEntry>) -> Vec<Effect> {
        let mut effects = Vec::new();

        for entry in entries {
            if !entry.is_visible {
                continue;
            }
            let Some(slot) = self.elements.get_mut(entry.element) else {
                continue;
            };
            if !slot.observing || slot.state == ElementState::Triggered {
                continue;
            }

            slot.state = ElementState::Triggered;
            if slot.target.is_one_shot() {
                slot.observing = false;
            }

            tracing::debug!(element = ?slot.target.key(), "Animation triggered");
            effects.push(slot.target.effect());
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(element: ElementId) -> VisibilityEntry {
        VisibilityEntry {
            element,
            is_visible: true,
        }
    }

    fn hidden(element: ElementId) -> VisibilityEntry {
        VisibilityEntry {
            element,
            is_visible: false,
        }
    }

    #[test]
    fn test_skill_bar_fires_once() {
        let mut engine = AnimationEngine::default();
        let bar = engine.observe(Target::SkillBar {
            skill: 2,
            percent: 88,
        });

        let effects = engine.process([visible(bar)]);
        assert_eq!(
            effects,
            vec![Effect::FillSkillBar {
                skill: 2,
                percent: 88,
                delay: Duration::from_millis(300),
            }]
        );
        assert!(!engine.is_observing(bar));

        for _ in 0..5 {
            assert!(engine.process([hidden(bar), visible(bar)]).is_empty());
        }
        assert_eq!(engine.state(bar), Some(ElementState::Triggered));
    }

    #[test]
    fn test_counter_fires_once() {
        let mut engine = AnimationEngine::default();
        let counter = engine.observe(Target::Counter {
            stat: 0,
            target: 45,
            suffix: "+".to_string(),
        });

        let effects = engine.process([visible(counter), visible(counter)]);
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::StartCounter { stat, counter } => {
                assert_eq!(*stat, 0);
                assert_eq!(counter.target(), 45);
                assert_eq!(counter.text(), "0+");
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_section_stays_observed() {
        let mut engine = AnimationEngine::default();
        let about = engine.observe(Target::Section(Section::About));

        assert_eq!(engine.process([visible(about)]), vec![Effect::Reveal(Section::About)]);
        assert!(engine.is_observing(about));
        assert!(engine.process([hidden(about), visible(about)]).is_empty());
    }

    #[test]
    fn test_hidden_entries_leave_state_pending() {
        let mut engine = AnimationEngine::default();
        let bar = engine.observe(Target::SkillBar {
            skill: 0,
            percent: 95,
        });
        assert!(engine.process([hidden(bar)]).is_empty());
        assert_eq!(engine.state(bar), Some(ElementState::Pending));
        assert!(engine.is_observing(bar));
    }

    #[test]
    fn test_reobserve_keeps_state() {
        let mut engine = AnimationEngine::default();
        let target = Target::SkillBar {
            skill: 1,
            percent: 90,
        };
        let first = engine.observe(target.clone());
        engine.process([visible(first)]);

        let second = engine.observe(target);
        assert_eq!(first, second);
        assert_eq!(engine.len(), 1);
        assert!(engine.process([visible(second)]).is_empty());
    }

    #[test]
    fn test_entries_processed_in_delivery_order() {
        let mut engine = AnimationEngine::default();
        let skills = engine.observe(Target::Section(Section::Skills));
        let about = engine.observe(Target::Section(Section::About));

        let effects = engine.process([visible(skills), visible(about)]);
        assert_eq!(
            effects,
            vec![Effect::Reveal(Section::Skills), Effect::Reveal(Section::About)]
        );
    }

    #[test]
    fn test_resolve_against_content() {
        let content = ContentRepository::builtin();
        assert_eq!(Target::resolve(ElementKey::Section(Section::Home), &content), None);
        assert_eq!(
            Target::resolve(ElementKey::Counter(3), &content),
            Some(Target::Counter {
                stat: 3,
                target: 100,
                suffix: "+ \u{2615}".to_string(),
            })
        );
        assert_eq!(
            Target::resolve(ElementKey::SkillBar(12), &content),
            Some(Target::SkillBar {
                skill: 12,
                percent: 95,
            })
        );
        assert_eq!(Target::resolve(ElementKey::SkillBar(99), &content), None);
    }

    #[test]
    fn test_observing_lists_only_pending_one_shots_and_sections() {
        let content = ContentRepository::builtin();
        let mut engine = AnimationEngine::default();
        let about = engine.observe_key(ElementKey::Section(Section::About), &content).unwrap();
        let bar = engine.observe_key(ElementKey::SkillBar(0), &content).unwrap();
        let stat = engine.observe_key(ElementKey::Counter(0), &content).unwrap();

        engine.process([visible(about), visible(bar)]);
        assert_eq!(engine.observing(), vec![about, stat]);
        assert_eq!(engine.id_of(&ElementKey::Counter(0)), Some(stat));
    }
}
