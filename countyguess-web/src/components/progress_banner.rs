use crate::i18n::tr;
use countyguess_game::COUNTY_COUNT;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct Props {
    pub found: usize,
    pub percent: u8,
    #[prop_or_default]
    pub celebrate: bool,
}

#[function_component(ProgressBanner)]
pub fn progress_banner(p: &Props) -> Html {
    let found = p.found.to_string();
    let total = COUNTY_COUNT.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", found.as_str());
    args.insert("total", total.as_str());
    let summary = tr("progress.count", Some(&args));

    html! {
        <section class="progress" aria-label={summary.clone()}>
            <p class="progress__count">{ summary }</p>
            <div
                class="progress__bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={p.percent.to_string()}
            >
                <div class="progress__fill" style={format!("width: {}%", p.percent)} />
            </div>
            if p.celebrate {
                <p class="progress__complete" role="alert">{ tr("progress.complete", Some(&args)) }</p>
            }
        </section>
    }
}
