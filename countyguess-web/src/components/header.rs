use crate::game::Locale;
use crate::i18n::{locales, t};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub locale: Locale,
    pub on_locale_change: Callback<Locale>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_locale_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>()
                && let Some(locale) = Locale::from_code(&sel.value())
            {
                cb.emit(locale);
            }
        })
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <h1 class="header-left">{ t("app.title") }</h1>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option
                                value={meta.locale.code()}
                                selected={meta.locale == p.locale}
                                lang={meta.locale.code()}
                            >
                                { meta.name }
                            </option>
                        }) }
                    </select>
                </nav>
            </div>
        </header>
    }
}
