use crate::app::state::AppState;
use crate::game::Locale;
use yew::prelude::*;

pub fn build_locale_change(state: &AppState) -> Callback<Locale> {
    let locale = state.locale.clone();
    let feedback = state.feedback.clone();
    Callback::from(move |next: Locale| {
        crate::i18n::set_locale(next);
        log::debug!("locale switched to {next}");
        // Recorded guesses are kept; only the pending message is stale.
        feedback.set(crate::app::state::Feedback::None);
        locale.set(next);
    })
}
