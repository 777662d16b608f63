mod handlers;

pub use handlers::{AppHandlers, feedback_for};

use crate::app::state::AppState;
use crate::components::{
    correct_list::CorrectList, county_board::CountyBoard, footer::Footer, guess_form::GuessForm,
    header::Header, modal::Modal, progress_banner::ProgressBanner,
};
use crate::i18n::t;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let session = (*state.session).clone();

    let open_clear = {
        let cb = handlers.open_clear.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let confirm_clear = {
        let cb = handlers.confirm_clear.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let cancel_clear = {
        let cb = handlers.close_clear.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <>
            <Header locale={*state.locale} on_locale_change={handlers.locale_change.clone()} />
            <main id="main" role="main" data-status={format!("{:?}", *state.dataset_status)}>
                <p class="welcome">{ t("app.welcome") }</p>
                <ProgressBanner
                    found={session.len()}
                    percent={session.progress_pct()}
                    celebrate={*state.celebrate}
                />
                <GuessForm
                    feedback={(*state.feedback).clone()}
                    on_submit={handlers.submit_guess.clone()}
                    on_edit={handlers.clear_feedback.clone()}
                />
                <CountyBoard
                    dataset={(*state.dataset).clone()}
                    session={session.clone()}
                    status={*state.dataset_status}
                    locale={*state.locale}
                />
                <CorrectList
                    dataset={(*state.dataset).clone()}
                    session={session}
                    locale={*state.locale}
                    open={*state.show_correct}
                    on_toggle={handlers.toggle_correct.clone()}
                />
                <button type="button" class="clear-btn" onclick={open_clear}>{ t("clear.open") }</button>
                <Modal
                    open={*state.show_clear}
                    title={AttrValue::from(t("clear.title"))}
                    description={Some(AttrValue::from(t("clear.description")))}
                    on_close={handlers.close_clear.clone()}
                >
                    <div class="modal__actions">
                        <button type="button" class="clear-confirm" onclick={confirm_clear}>{ t("clear.confirm") }</button>
                        <button type="button" onclick={cancel_clear}>{ t("clear.cancel") }</button>
                    </div>
                </Modal>
            </main>
            <Footer />
        </>
    }
}
