use crate::app::state::{AppState, Feedback};
use crate::game::{CountyDataset, GuessOutcome, Locale, create_web_engine};
use yew::prelude::*;

/// Map an outcome to the message shown under the form.
#[must_use]
pub fn feedback_for(outcome: &GuessOutcome, dataset: &CountyDataset, locale: Locale) -> Feedback {
    match outcome {
        GuessOutcome::NoMatch => Feedback::NotFound,
        GuessOutcome::AlreadySelected { input, .. } => Feedback::AlreadyGuessed(input.clone()),
        GuessOutcome::NewMatch { id, normalized } => Feedback::Correct(
            dataset
                .get(id)
                .map_or_else(|| normalized.clone(), |county| county.display_name(locale)),
        ),
    }
}

pub fn build_submit_guess(state: &AppState) -> Callback<String> {
    let dataset = state.dataset.clone();
    let session_handle = state.session.clone();
    let locale = state.locale.clone();
    let feedback = state.feedback.clone();
    let celebrate = state.celebrate.clone();
    Callback::from(move |guess: String| {
        let mut session = (*session_handle).clone();
        let pending = session.resolve(&guess, *locale, &dataset);
        match create_web_engine().submit_guess(&mut session, &guess, *locale, &dataset) {
            Ok(report) => {
                feedback.set(feedback_for(&report.outcome, &dataset, *locale));
                if report.effect.completed {
                    celebrate.set(true);
                }
                if report.effect.changed {
                    session_handle.set(session);
                }
            }
            Err(err) => {
                log::error!("Failed to save progress: {err}");
                feedback.set(feedback_for(&pending, &dataset, *locale));
                if pending.is_new_match() {
                    celebrate.set(session.is_complete());
                    session_handle.set(session);
                }
            }
        }
    })
}

pub fn build_clear_feedback(state: &AppState) -> Callback<()> {
    let feedback = state.feedback.clone();
    Callback::from(move |()| {
        if *feedback != Feedback::None {
            feedback.set(Feedback::None);
        }
    })
}
