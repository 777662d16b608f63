mod guess;
mod prefs;
mod progress;

use crate::app::state::AppState;
use crate::game::Locale;
use yew::prelude::*;

pub use guess::{build_clear_feedback, build_submit_guess, feedback_for};
pub use prefs::build_locale_change;
pub use progress::{build_clear_progress, build_toggle_clear_dialog, build_toggle_correct_list};

#[derive(Clone)]
pub struct AppHandlers {
    pub submit_guess: Callback<String>,
    pub clear_feedback: Callback<()>,
    pub locale_change: Callback<Locale>,
    pub open_clear: Callback<()>,
    pub close_clear: Callback<()>,
    pub confirm_clear: Callback<()>,
    pub toggle_correct: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            submit_guess: build_submit_guess(state),
            clear_feedback: build_clear_feedback(state),
            locale_change: build_locale_change(state),
            open_clear: build_toggle_clear_dialog(state, true),
            close_clear: build_toggle_clear_dialog(state, false),
            confirm_clear: build_clear_progress(state),
            toggle_correct: build_toggle_correct_list(state),
        }
    }
}
