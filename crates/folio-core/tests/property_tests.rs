//! Property-based tests for content ordering, counters and one-shot triggers
//!
//! Uses proptest to verify the invariants the page relies on.

use proptest::prelude::*;
use folio_core::animation::{AnimationEngine, Effect, Target, VisibilityEntry};
use folio_core::content::display_order;
use folio_core::interaction::ScrollThrottle;
use folio_core::{Counter, Project};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Featured flags for a project list; ids are assigned by position
fn featured_flags_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..40)
}

fn projects_from_flags(flags: &[bool]) -> Vec<Project> {
    flags
        .iter()
        .enumerate()
        .map(|(i, &featured)| Project {
            id: i as u32,
            title: format!("Project {}", i),
            description: String::new(),
            technologies: vec![],
            image: "*".to_string(),
            link: None,
            github: None,
            featured,
        })
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Featured projects come first and each partition keeps declaration order
    #[test]
    fn display_order_is_stable_partition(flags in featured_flags_strategy()) {
        let projects = projects_from_flags(&flags);
        let ordered = display_order(&projects);

        prop_assert_eq!(ordered.len(), projects.len());

        let first_other = ordered.iter().position(|p| !p.featured).unwrap_or(ordered.len());
        prop_assert!(ordered[first_other..].iter().all(|p| !p.featured));

        let featured_ids: Vec<u32> = ordered[..first_other].iter().map(|p| p.id).collect();
        let other_ids: Vec<u32> = ordered[first_other..].iter().map(|p| p.id).collect();
        prop_assert!(featured_ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(other_ids.windows(2).all(|w| w[0] < w[1]));
    }

    /// Display order is deterministic
    #[test]
    fn display_order_is_deterministic(flags in featured_flags_strategy()) {
        let projects = projects_from_flags(&flags);
        let a: Vec<u32> = display_order(&projects).iter().map(|p| p.id).collect();
        let b: Vec<u32> = display_order(&projects).iter().map(|p| p.id).collect();
        prop_assert_eq!(a, b);
    }

    /// Every counter ends exactly on its target without overshooting
    #[test]
    fn counter_lands_on_target(target in 0u32..100_000) {
        let frames: Vec<u32> = Counter::new(target, "").collect();

        prop_assert!(!frames.is_empty());
        prop_assert!(frames.len() <= 51);
        prop_assert_eq!(*frames.last().unwrap(), target);
        prop_assert!(frames.iter().all(|&v| v <= target));
        prop_assert!(frames.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Any number of scroll events inside one frame schedules one update
    #[test]
    fn throttle_schedules_once_per_frame(bursts in prop::collection::vec(1usize..50, 1..20)) {
        let mut throttle = ScrollThrottle::default();
        for (frame, events) in bursts.iter().enumerate() {
            let scheduled = (0..*events).filter(|_| throttle.request_frame()).count();
            prop_assert_eq!(scheduled, 1);
            throttle.complete_frame(frame as f64 * 40.0);
        }
        prop_assert_eq!(throttle.frames(), bursts.len() as u64);
    }

    /// Skill bars trigger at most once however visibility flips
    #[test]
    fn skill_bar_triggers_at_most_once(visibility in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut engine = AnimationEngine::default();
        let bar = engine.observe(Target::SkillBar { skill: 0, percent: 80 });

        let fills = visibility
            .iter()
            .flat_map(|&is_visible| engine.process([VisibilityEntry { element: bar, is_visible }]))
            .filter(|effect| matches!(effect, Effect::FillSkillBar { .. }))
            .count();

        let expected = usize::from(visibility.iter().any(|&v| v));
        prop_assert_eq!(fills, expected);
    }
}
