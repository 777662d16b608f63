//! Per-player progress: which counties have been guessed, and in what order.
use crate::constants::COUNTY_COUNT;
use crate::data::{CountyDataset, CountyId};
use crate::locale::Locale;
use crate::resolver::{GuessOutcome, resolve_guess};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What applying an outcome did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordEffect {
    /// The session was mutated and should be persisted.
    pub changed: bool,
    /// This mutation brought the session to [`COUNTY_COUNT`].
    pub completed: bool,
}

/// Guessed counties keyed by id. `correct` keeps guess order and always holds
/// exactly the ids in `selected`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuessSession {
    selected: BTreeSet<CountyId>,
    correct: Vec<CountyId>,
}

impl GuessSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from independently persisted parts. Order comes from
    /// `correct`; ids only present in `selected` are appended, ids missing
    /// from `selected` and repeats are dropped.
    #[must_use]
    pub fn from_parts(selected: BTreeSet<CountyId>, correct: Vec<CountyId>) -> Self {
        let mut ordered = Vec::with_capacity(selected.len());
        let mut seen = BTreeSet::new();
        for id in correct {
            if selected.contains(&id) && seen.insert(id.clone()) {
                ordered.push(id);
            }
        }
        for id in &selected {
            if !seen.contains(id) {
                ordered.push(id.clone());
            }
        }
        Self {
            selected,
            correct: ordered,
        }
    }

    /// Drop ids the dataset does not know about.
    #[must_use]
    pub fn rehydrate(self, dataset: &CountyDataset) -> Self {
        let (known, unknown): (Vec<_>, Vec<_>) =
            self.correct.into_iter().partition(|id| dataset.contains(id));
        if !unknown.is_empty() {
            log::warn!("dropping {} saved ids absent from the dataset", unknown.len());
        }
        Self {
            selected: known.iter().cloned().collect(),
            correct: known,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<CountyId> {
        &self.selected
    }

    /// Ids in the order they were guessed.
    #[must_use]
    pub fn correct(&self) -> &[CountyId] {
        &self.correct
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, id: &CountyId) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selected.len() >= COUNTY_COUNT
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        COUNTY_COUNT.saturating_sub(self.selected.len())
    }

    /// Whole-number completion percentage, capped at 100.
    #[must_use]
    pub fn progress_pct(&self) -> u8 {
        let pct = (self.selected.len().min(COUNTY_COUNT) * 100) / COUNTY_COUNT;
        u8::try_from(pct).unwrap_or(100)
    }

    /// Resolve a guess against this session's selection.
    #[must_use]
    pub fn resolve(&self, guess: &str, locale: Locale, dataset: &CountyDataset) -> GuessOutcome {
        resolve_guess(guess, locale, dataset, &self.selected)
    }

    /// Apply an outcome. Only [`GuessOutcome::NewMatch`] mutates.
    pub fn record(&mut self, outcome: &GuessOutcome) -> RecordEffect {
        let GuessOutcome::NewMatch { id, .. } = outcome else {
            return RecordEffect::default();
        };
        if !self.selected.insert(id.clone()) {
            return RecordEffect::default();
        }
        if !self.correct.contains(id) {
            self.correct.push(id.clone());
        }
        RecordEffect {
            changed: true,
            completed: self.selected.len() == COUNTY_COUNT,
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.correct.clear();
    }

    /// Display names of guessed counties in guess order, in `locale`.
    #[must_use]
    pub fn correct_names(&self, dataset: &CountyDataset, locale: Locale) -> Vec<String> {
        self.correct
            .iter()
            .filter_map(|id| dataset.get(id))
            .map(|county| county.display_name(locale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_match(id: u32) -> GuessOutcome {
        GuessOutcome::NewMatch {
            id: CountyId::Numeric(id),
            normalized: format!("county-{id}"),
        }
    }

    #[test]
    fn record_only_mutates_on_new_match() {
        let mut session = GuessSession::new();
        assert_eq!(session.record(&GuessOutcome::NoMatch), RecordEffect::default());
        let repeat = GuessOutcome::AlreadySelected {
            id: CountyId::Numeric(1),
            input: "Antrim".to_string(),
        };
        assert_eq!(session.record(&repeat), RecordEffect::default());
        assert!(session.is_empty());

        let effect = session.record(&new_match(1));
        assert!(effect.changed);
        assert!(!effect.completed);
        assert_eq!(session.len(), 1);
        assert_eq!(session.record(&new_match(1)), RecordEffect::default());
        assert_eq!(session.correct(), &[CountyId::Numeric(1)]);
    }

    #[test]
    fn completion_fires_exactly_once_at_full_count() {
        let mut session = GuessSession::new();
        let total = u32::try_from(COUNTY_COUNT).unwrap();
        for id in 1..total {
            assert!(!session.record(&new_match(id)).completed, "early at {id}");
        }
        assert_eq!(session.remaining(), 1);
        assert!(session.record(&new_match(total)).completed);
        assert!(session.is_complete());
        assert_eq!(session.progress_pct(), 100);
        assert!(!session.record(&new_match(total)).completed);
        assert!(!session.record(&new_match(total + 1)).completed);
    }

    #[test]
    fn clear_resets_both_collections() {
        let mut session = GuessSession::new();
        session.record(&new_match(1));
        session.record(&new_match(2));
        session.clear();
        assert!(session.is_empty());
        assert!(session.correct().is_empty());
        assert!(session.record(&new_match(1)).changed);
    }

    #[test]
    fn from_parts_reconciles_drifted_storage() {
        let selected = BTreeSet::from([CountyId::Numeric(2), CountyId::Numeric(3)]);
        let correct = vec![
            CountyId::Numeric(3),
            CountyId::Numeric(9),
            CountyId::Numeric(3),
        ];
        let session = GuessSession::from_parts(selected, correct);
        assert_eq!(
            session.correct(),
            &[CountyId::Numeric(3), CountyId::Numeric(2)]
        );
        assert_eq!(session.len(), session.correct().len());
    }

    #[test]
    fn progress_pct_rounds_down() {
        let mut session = GuessSession::new();
        assert_eq!(session.progress_pct(), 0);
        for id in 1..=8 {
            session.record(&new_match(id));
        }
        assert_eq!(session.progress_pct(), 25);
    }
}
