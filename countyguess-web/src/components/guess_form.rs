use crate::app::state::Feedback;
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub feedback: Feedback,
    pub on_submit: Callback<String>,
    /// Fired when the player edits the input, so stale feedback can be hidden.
    #[prop_or_default]
    pub on_edit: Callback<()>,
}

#[must_use]
pub fn feedback_message(feedback: &Feedback) -> Option<(String, &'static str)> {
    match feedback {
        Feedback::None => None,
        Feedback::NotFound => Some((t("guess.not_found"), "feedback feedback--miss")),
        Feedback::AlreadyGuessed(guess) => {
            let mut args = BTreeMap::new();
            args.insert("guess", guess.as_str());
            Some((tr("guess.already", Some(&args)), "feedback feedback--repeat"))
        }
        Feedback::Correct(county) => {
            let mut args = BTreeMap::new();
            args.insert("county", county.as_str());
            Some((tr("guess.correct", Some(&args)), "feedback feedback--hit"))
        }
    }
}

#[function_component(GuessForm)]
pub fn guess_form(p: &Props) -> Html {
    let value = use_state(String::new);

    let oninput = {
        let value = value.clone();
        let on_edit = p.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                value.set(input.value());
                on_edit.emit(());
            }
        })
    };

    let onsubmit = {
        let value = value.clone();
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*value).clone());
            value.set(String::new());
        })
    };

    html! {
        <form class="guess-form" onsubmit={onsubmit}>
            <label for="guess-input">{ t("guess.label") }</label>
            <input
                id="guess-input"
                type="text"
                autocomplete="off"
                placeholder={t("guess.placeholder")}
                value={(*value).clone()}
                oninput={oninput}
            />
            <button type="submit">{ t("guess.submit") }</button>
            <p class="feedback-region" role="status" aria-live="polite">
                { feedback_message(&p.feedback).map(|(text, class)| html! {
                    <span class={class}>{ text }</span>
                }).unwrap_or_default() }
            </p>
        </form>
    }
}
