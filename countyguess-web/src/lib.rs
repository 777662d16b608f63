#![forbid(unsafe_code)]
//! Browser front end for County Guess.
//!
//! Yew components over the platform-agnostic `countyguess-game` crate, with
//! localStorage persistence and English/Irish string tables.

pub mod app;
pub mod components;
pub mod dom;
pub mod game;
pub mod i18n;
pub mod logging;
pub mod paths;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    i18n::set_locale(i18n::current_locale());
    yew::Renderer::<app::App>::new().render();
}
