use std::collections::{BTreeMap, BTreeSet};

use crate::content::{Section, Stat};

/// Visual state produced by the animation engine's effects.
///
/// The renderer reads this to decide which sections carry `animate`, how
/// wide each skill bar is and what each counter shows. The default value is
/// the freshly rendered page: nothing revealed, bars at 0%, counters at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    revealed: BTreeSet<Section>,
    bar_widths: BTreeMap<usize, u8>,
    counters: BTreeMap<usize, String>,
}

impl Presentation {
    pub fn reveal(&mut self, section: Section) {
        self.revealed.insert(section);
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    pub fn fill_bar(&mut self, skill: usize, percent: u8) {
        self.bar_widths.insert(skill, percent);
    }

    /// Current width of a skill bar in percent
    pub fn bar_width(&self, skill: usize) -> u8 {
        self.bar_widths.get(&skill).copied().unwrap_or(0)
    }

    pub fn set_counter(&mut self, stat: usize, text: impl Into<String>) {
        self.counters.insert(stat, text.into());
    }

    /// Counter text, `0` plus suffix until the counter starts.
    pub fn counter_text(&self, index: usize, stat: &Stat) -> String {
        match self.counters.get(&index) {
            Some(text) => text.clone(),
            None => format!("0{}", stat.suffix()),
        }
    }

    /// The part of the state `section` renders from: its reveal flag, plus
    /// the bar widths for skills and the counter texts for about.
    pub fn for_section(&self, section: Section) -> Presentation {
        let mut view = Presentation::default();
        if self.is_revealed(section) {
            view.reveal(section);
        }
        match section {
            Section::Skills => view.bar_widths = self.bar_widths.clone(),
            Section::About => view.counters = self.counters.clone(),
            _ => {}
        }
        view
    }
}
