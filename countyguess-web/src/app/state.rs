use crate::game::{CountyDataset, GuessSession, Locale};
use std::rc::Rc;
use yew::prelude::*;

/// Where the dataset fetch stands. The form stays usable in every state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetStatus {
    Loading,
    Ready,
    Failed,
}

/// Message shown under the guess form for the last submission.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    NotFound,
    AlreadyGuessed(String),
    Correct(String),
}

#[derive(Clone)]
pub struct AppState {
    pub dataset: UseStateHandle<Rc<CountyDataset>>,
    pub dataset_status: UseStateHandle<DatasetStatus>,
    pub session: UseStateHandle<GuessSession>,
    pub locale: UseStateHandle<Locale>,
    pub feedback: UseStateHandle<Feedback>,
    pub show_clear: UseStateHandle<bool>,
    pub show_correct: UseStateHandle<bool>,
    pub celebrate: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        dataset: use_state(|| Rc::new(CountyDataset::empty())),
        dataset_status: use_state(|| DatasetStatus::Loading),
        session: use_state(GuessSession::new),
        locale: use_state(crate::i18n::current_locale),
        feedback: use_state(Feedback::default),
        show_clear: use_state(|| false),
        show_correct: use_state(|| false),
        celebrate: use_state(|| false),
    }
}

impl AppState {
    #[must_use]
    pub fn data_ready(&self) -> bool {
        *self.dataset_status == DatasetStatus::Ready && !self.dataset.is_empty()
    }
}
