use crate::app::state::AppState;
use crate::game::create_web_engine;
use yew::prelude::*;

pub fn build_toggle_clear_dialog(state: &AppState, open: bool) -> Callback<()> {
    let show_clear = state.show_clear.clone();
    Callback::from(move |()| show_clear.set(open))
}

pub fn build_toggle_correct_list(state: &AppState) -> Callback<()> {
    let show_correct = state.show_correct.clone();
    Callback::from(move |()| show_correct.set(!*show_correct))
}

pub fn build_clear_progress(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let feedback = state.feedback.clone();
    let celebrate = state.celebrate.clone();
    let show_clear = state.show_clear.clone();
    Callback::from(move |()| {
        let mut session = (*session_handle).clone();
        if let Err(err) = create_web_engine().clear_progress(&mut session) {
            log::error!("Failed to clear saved progress: {err}");
        }
        session_handle.set(session);
        feedback.set(crate::app::state::Feedback::None);
        celebrate.set(false);
        show_clear.set(false);
    })
}
