#![cfg(target_arch = "wasm32")]

use countyguess_web::dom;
use countyguess_web::game::{
    CORRECT_KEY, CountyDataset, Locale, ProgressStorage, SELECTED_KEY, WebProgressStorage,
    create_web_engine,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn reset_storage() {
    let storage = dom::local_storage().expect("localStorage");
    let _ = storage.remove_item(SELECTED_KEY);
    let _ = storage.remove_item(CORRECT_KEY);
}

#[wasm_bindgen_test]
fn progress_survives_a_reload() {
    reset_storage();
    let data = CountyDataset::load_from_static().expect("bundled dataset");
    let engine = create_web_engine();
    let mut session = engine.start_session(&data);
    engine
        .submit_guess(&mut session, "Kerry", Locale::En, &data)
        .expect("save");

    let restored = engine.start_session(&data);
    assert_eq!(restored, session);
    let stored = dom::local_storage()
        .expect("localStorage")
        .get_item(CORRECT_KEY)
        .expect("read")
        .expect("correct list saved");
    assert!(stored.starts_with('['));

    engine.clear_progress(&mut session).expect("clear");
    assert!(engine.start_session(&data).is_empty());
}

#[wasm_bindgen_test]
fn corrupt_entries_start_empty() {
    reset_storage();
    let storage = dom::local_storage().expect("localStorage");
    storage.set_item(SELECTED_KEY, "not json").expect("write");
    let session = WebProgressStorage
        .load_progress()
        .expect("load")
        .expect("entry present");
    assert!(session.is_empty());
    reset_storage();
}

#[wasm_bindgen_test]
fn locale_choice_is_persisted() {
    countyguess_web::i18n::set_locale(Locale::Ga);
    let saved = dom::local_storage()
        .expect("localStorage")
        .get_item("countyguess.locale")
        .expect("read");
    assert_eq!(saved.as_deref(), Some("ga"));
    countyguess_web::i18n::set_locale(Locale::En);
}
