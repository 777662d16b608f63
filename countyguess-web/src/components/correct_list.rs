use crate::game::{CountyDataset, GuessSession, Locale};
use crate::i18n::t;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub dataset: Rc<CountyDataset>,
    pub session: GuessSession,
    pub locale: Locale,
    pub open: bool,
    pub on_toggle: Callback<()>,
}

/// Collapsible list of correct guesses in the order they were made.
#[function_component(CorrectList)]
pub fn correct_list(p: &Props) -> Html {
    let names = p.session.correct_names(&p.dataset, p.locale);
    let on_toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <section class="correct-list">
            <button
                type="button"
                aria-expanded={p.open.to_string()}
                aria-controls="correct-guesses"
                onclick={on_toggle}
            >
                { t("correct.title") }
            </button>
            if p.open {
                if names.is_empty() {
                    <p id="correct-guesses" class="correct-list__empty">{ t("correct.empty") }</p>
                } else {
                    <ol id="correct-guesses">
                        { for names.into_iter().map(|name| html! { <li>{ name }</li> }) }
                    </ol>
                }
            }
        </section>
    }
}
