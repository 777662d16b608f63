//! Guess resolution: one free-text guess against the dataset and the current
//! selection, classified into one of three outcomes.
//!
//! Resolution is pure. Callers apply the outcome to a
//! [`GuessSession`](crate::session::GuessSession) and persist it.
use crate::data::{CountyDataset, CountyId, CountyRecord};
use crate::locale::Locale;
use crate::normalize::{normalize_guess, normalize_name};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// No county matched.
    NoMatch,
    /// Matched a county that was already guessed. `input` is the text as typed.
    AlreadySelected { id: CountyId, input: String },
    /// Matched a county not guessed yet.
    NewMatch { id: CountyId, normalized: String },
}

impl GuessOutcome {
    #[must_use]
    pub const fn county_id(&self) -> Option<&CountyId> {
        match self {
            Self::NoMatch => None,
            Self::AlreadySelected { id, .. } | Self::NewMatch { id, .. } => Some(id),
        }
    }

    #[must_use]
    pub const fn is_new_match(&self) -> bool {
        matches!(self, Self::NewMatch { .. })
    }
}

/// Find the county whose locale-appropriate name equals an already-normalized guess.
#[must_use]
pub fn find_county<'a>(
    normalized: &str,
    locale: Locale,
    dataset: &'a CountyDataset,
) -> Option<&'a CountyRecord> {
    if normalized.is_empty() {
        return None;
    }
    dataset
        .iter()
        .find(|county| normalize_name(county.comparison_name(locale), locale) == normalized)
}

/// Resolve `guess` against `dataset` given the ids already in `selected`.
#[must_use]
pub fn resolve_guess(
    guess: &str,
    locale: Locale,
    dataset: &CountyDataset,
    selected: &BTreeSet<CountyId>,
) -> GuessOutcome {
    let normalized = normalize_guess(guess, locale);
    let Some(county) = find_county(&normalized, locale, dataset) else {
        log::debug!("guess {guess:?} ({locale}) matched nothing");
        return GuessOutcome::NoMatch;
    };
    let id = county.id().clone();
    if selected.contains(&id) {
        log::debug!("guess {guess:?} repeats county {id}");
        GuessOutcome::AlreadySelected {
            id,
            input: guess.to_string(),
        }
    } else {
        log::debug!("guess {guess:?} matched county {id}");
        GuessOutcome::NewMatch { id, normalized }
    }
}
