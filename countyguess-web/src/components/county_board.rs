//! Tile board standing in for the county map: one tile per county, revealed
//! once guessed.
use crate::app::state::DatasetStatus;
use crate::game::{CountyDataset, GuessSession, Locale};
use crate::i18n::t;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub dataset: Rc<CountyDataset>,
    pub session: GuessSession,
    pub status: DatasetStatus,
    pub locale: Locale,
}

#[function_component(CountyBoard)]
pub fn county_board(p: &Props) -> Html {
    match p.status {
        DatasetStatus::Loading => {
            return html! { <p class="board board--loading" role="status">{ t("board.loading") }</p> };
        }
        DatasetStatus::Failed => {
            return html! { <p class="board board--error" role="alert">{ t("board.error") }</p> };
        }
        DatasetStatus::Ready => {}
    }

    let unknown = t("board.unknown");
    html! {
        <ul class="board" aria-label={t("board.label")}>
            { for p.dataset.iter().map(|county| {
                let selected = p.session.is_selected(county.id());
                let class = classes!(
                    "board__tile",
                    selected.then_some("selected"),
                    county.is_partitioned().then_some("board__tile--partitioned"),
                );
                html! {
                    <li key={county.id().to_string()} class={class} data-county={county.id().to_string()}>
                        if selected {
                            { county.display_name(p.locale) }
                        } else {
                            <span aria-label={unknown.clone()}>{"?"}</span>
                        }
                    </li>
                }
            }) }
        </ul>
    }
}
