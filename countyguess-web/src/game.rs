//! Web-specific game engine implementation
//!
//! This module provides the browser implementations of the countyguess-game
//! traits and re-exports the core game logic types.

use std::collections::BTreeSet;

// Re-export all types from countyguess-game
pub use countyguess_game::*;

pub const SELECTED_KEY: &str = "countyguess.selected";
pub const CORRECT_KEY: &str = "countyguess.correct";

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Fetch and parse the county dataset from the static assets.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a valid dataset.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_dataset() -> Result<CountyDataset, WebDataError> {
    let url = crate::paths::dataset_url();
    let body = crate::dom::fetch_text(&url)
        .await
        .map_err(|e| WebDataError::Network(crate::dom::js_error_message(&e)))?;
    Ok(CountyDataset::from_geojson(&body)?)
}

/// Web-specific progress storage using localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct WebProgressStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Parse one persisted entry, treating anything unreadable as empty.
fn decode_entry<T>(key: &str, raw: Option<&str>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::warn!("discarding unreadable {key}: {err}");
        T::default()
    })
}

/// Rebuild a session from the two stored entries. `None` when neither exists.
#[must_use]
pub fn decode_progress(selected: Option<&str>, correct: Option<&str>) -> Option<GuessSession> {
    if selected.is_none() && correct.is_none() {
        return None;
    }
    let selected: BTreeSet<CountyId> = decode_entry(SELECTED_KEY, selected);
    let correct: Vec<CountyId> = decode_entry(CORRECT_KEY, correct);
    Some(GuessSession::from_parts(selected, correct))
}

/// Serialize a session into the `(selected, correct)` entry values.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_progress(session: &GuessSession) -> Result<(String, String), serde_json::Error> {
    Ok((
        serde_json::to_string(session.selected())?,
        serde_json::to_string(session.correct())?,
    ))
}

impl ProgressStorage for WebProgressStorage {
    type Error = WebStorageError;

    fn load_progress(&self) -> Result<Option<GuessSession>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = crate::dom::local_storage()
                .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))?;
            let selected = storage.get_item(SELECTED_KEY).ok().flatten();
            let correct = storage.get_item(CORRECT_KEY).ok().flatten();
            Ok(decode_progress(selected.as_deref(), correct.as_deref()))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(None)
        }
    }

    fn save_progress(&self, session: &GuessSession) -> Result<(), Self::Error> {
        let (selected, correct) = encode_progress(session)?;
        #[cfg(target_arch = "wasm32")]
        {
            let storage = crate::dom::local_storage()
                .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))?;
            storage
                .set_item(SELECTED_KEY, &selected)
                .and_then(|()| storage.set_item(CORRECT_KEY, &correct))
                .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))?;
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (selected, correct);
        }
        Ok(())
    }
}

/// Create a web-compatible engine with the bundled dataset loader and `WebProgressStorage`
#[must_use]
pub const fn create_web_engine() -> GuessEngine<StaticDataLoader, WebProgressStorage> {
    GuessEngine::new(StaticDataLoader, WebProgressStorage)
}
