//! County Guess Engine
//!
//! Platform-agnostic core logic for the County Guess map game: the county
//! dataset, guess normalization and resolution, and session progress.
//! This crate has no UI or browser dependencies.

pub mod constants;
pub mod data;
pub mod locale;
pub mod normalize;
pub mod resolver;
pub mod session;

// Re-export commonly used types
pub use constants::{COUNTY_COUNT, DATASET_ASSET, DERRY_ALIASES, DERRY_CANONICAL};
pub use data::{CountyDataset, CountyId, CountyRecord, DatasetError};
pub use locale::Locale;
pub use normalize::{normalize_guess, strip_diacritics};
pub use resolver::{GuessOutcome, find_county, resolve_guess};
pub use session::{GuessSession, RecordEffect};

/// Trait for abstracting dataset loading
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the county dataset from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or parsed.
    fn load_dataset(&self) -> Result<CountyDataset, Self::Error>;
}

/// Loads the dataset compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataLoader;

impl DataLoader for StaticDataLoader {
    type Error = DatasetError;

    fn load_dataset(&self) -> Result<CountyDataset, Self::Error> {
        CountyDataset::load_from_static()
    }
}

/// Trait for abstracting progress persistence
/// Platform-specific implementations should provide this
pub trait ProgressStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load saved progress; `Ok(None)` when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_progress(&self) -> Result<Option<GuessSession>, Self::Error>;

    /// Overwrite saved progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save_progress(&self, session: &GuessSession) -> Result<(), Self::Error>;
}

/// Result of submitting one guess through the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub effect: RecordEffect,
}

/// Main engine tying a dataset source to progress persistence
pub struct GuessEngine<L, S>
where
    L: DataLoader,
    S: ProgressStorage,
{
    data_loader: L,
    storage: S,
}

impl<L, S> GuessEngine<L, S>
where
    L: DataLoader,
    S: ProgressStorage,
{
    /// Create a new engine with the provided data loader and storage
    pub const fn new(data_loader: L, storage: S) -> Self {
        Self {
            data_loader,
            storage,
        }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the county dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails.
    pub fn load_dataset(&self) -> Result<CountyDataset, L::Error> {
        self.data_loader.load_dataset()
    }

    /// Load saved progress and drop ids the dataset does not know.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub fn restore_session(&self, dataset: &CountyDataset) -> Result<GuessSession, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        let saved = self.storage.load_progress().map_err(Into::into)?;
        Ok(saved.map_or_else(GuessSession::new, |session| session.rehydrate(dataset)))
    }

    /// Saved progress, or an empty session when it cannot be read.
    pub fn start_session(&self, dataset: &CountyDataset) -> GuessSession
    where
        S::Error: Into<anyhow::Error>,
    {
        self.restore_session(dataset).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable saved progress: {err:#}");
            GuessSession::new()
        })
    }

    /// Resolve a guess, record it, and persist when the session changed.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the changed session fails. The session
    /// is updated in memory either way.
    pub fn submit_guess(
        &self,
        session: &mut GuessSession,
        guess: &str,
        locale: Locale,
        dataset: &CountyDataset,
    ) -> Result<GuessReport, S::Error> {
        let outcome = session.resolve(guess, locale, dataset);
        let effect = session.record(&outcome);
        if effect.changed {
            self.storage.save_progress(session)?;
        }
        if effect.completed {
            log::info!("all {COUNTY_COUNT} counties guessed");
        }
        Ok(GuessReport { outcome, effect })
    }

    /// Reset progress and persist the empty session.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub fn clear_progress(&self, session: &mut GuessSession) -> Result<(), S::Error> {
        session.clear();
        self.storage.save_progress(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        saved: Rc<RefCell<Option<GuessSession>>>,
        writes: Rc<RefCell<usize>>,
    }

    impl ProgressStorage for MemoryStorage {
        type Error = Infallible;

        fn load_progress(&self) -> Result<Option<GuessSession>, Self::Error> {
            Ok(self.saved.borrow().clone())
        }

        fn save_progress(&self, session: &GuessSession) -> Result<(), Self::Error> {
            *self.saved.borrow_mut() = Some(session.clone());
            *self.writes.borrow_mut() += 1;
            Ok(())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("storage offline")]
    struct Offline;

    struct BrokenStorage;

    impl ProgressStorage for BrokenStorage {
        type Error = Offline;

        fn load_progress(&self) -> Result<Option<GuessSession>, Self::Error> {
            Err(Offline)
        }

        fn save_progress(&self, _session: &GuessSession) -> Result<(), Self::Error> {
            Err(Offline)
        }
    }

    #[test]
    fn engine_persists_only_on_mutation() {
        let storage = MemoryStorage::default();
        let engine = GuessEngine::new(StaticDataLoader, storage.clone());
        let dataset = engine.load_dataset().unwrap();
        let mut session = engine.start_session(&dataset);
        assert!(session.is_empty());

        let report = engine
            .submit_guess(&mut session, "Dublin", Locale::En, &dataset)
            .unwrap();
        assert!(report.outcome.is_new_match());
        assert_eq!(*storage.writes.borrow(), 1);

        engine
            .submit_guess(&mut session, "dublin", Locale::En, &dataset)
            .unwrap();
        engine
            .submit_guess(&mut session, "Atlantis", Locale::En, &dataset)
            .unwrap();
        assert_eq!(*storage.writes.borrow(), 1);

        let restored = engine.start_session(&dataset);
        assert_eq!(restored, session);

        engine.clear_progress(&mut session).unwrap();
        assert_eq!(*storage.writes.borrow(), 2);
        assert!(engine.start_session(&dataset).is_empty());
    }

    #[test]
    fn restore_drops_ids_missing_from_dataset() {
        let storage = MemoryStorage::default();
        let stale = GuessSession::from_parts(
            [CountyId::Numeric(1), CountyId::Numeric(99)].into(),
            vec![CountyId::Numeric(99), CountyId::Numeric(1)],
        );
        *storage.saved.borrow_mut() = Some(stale);
        let engine = GuessEngine::new(StaticDataLoader, storage);
        let dataset = engine.load_dataset().unwrap();
        let session = engine.restore_session(&dataset).unwrap();
        assert_eq!(session.correct(), &[CountyId::Numeric(1)]);
    }

    #[test]
    fn unreadable_storage_starts_empty() {
        let engine = GuessEngine::new(StaticDataLoader, BrokenStorage);
        let dataset = engine.load_dataset().unwrap();
        assert!(engine.restore_session(&dataset).is_err());
        assert!(engine.start_session(&dataset).is_empty());

        let mut session = GuessSession::new();
        assert!(
            engine
                .submit_guess(&mut session, "Cork", Locale::En, &dataset)
                .is_err()
        );
        assert_eq!(session.len(), 1, "in-memory progress survives a failed write");
    }
}
