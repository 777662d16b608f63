use countyguess_web::app::Feedback;
use countyguess_web::app::view::feedback_for;
use countyguess_web::game::{
    CORRECT_KEY, CountyDataset, GuessOutcome, Locale, ProgressStorage, SELECTED_KEY,
    WebProgressStorage, create_web_engine, decode_progress, encode_progress,
};
use countyguess_web::{i18n, paths};
use std::collections::BTreeMap;

#[test]
fn i18n_switches_between_english_and_irish() {
    i18n::set_locale(Locale::Ga);
    assert_eq!(i18n::current_locale(), Locale::Ga);
    assert_ne!(i18n::t("guess.submit"), i18n::t("missing.key"));
    let irish = i18n::t("app.title");

    i18n::set_locale(Locale::En);
    assert_eq!(i18n::t("app.title"), "County Guess");
    assert_ne!(irish, "County Guess");

    let mut vars = BTreeMap::new();
    vars.insert("county", "Kerry");
    assert_eq!(i18n::tr("guess.correct", Some(&vars)), "Correct! Kerry");
    assert_eq!(i18n::t("missing.key"), "missing.key");
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert_eq!(metas.len(), 2);
    assert!(metas.iter().any(|m| m.locale == Locale::Ga && m.name == "Gaeilge"));
}

#[test]
fn dataset_url_points_into_assets() {
    assert!(paths::dataset_url().ends_with("assets/data/ireland-counties.geojson"));
}

#[test]
fn storage_keys_are_namespaced() {
    assert_eq!(SELECTED_KEY, "countyguess.selected");
    assert_eq!(CORRECT_KEY, "countyguess.correct");
}

#[test]
fn feedback_uses_display_names_in_the_active_locale() {
    let data = CountyDataset::load_from_static().expect("bundled dataset");
    let engine = create_web_engine();
    let mut session = engine.start_session(&data);

    let report = engine
        .submit_guess(&mut session, "baile atha cliath", Locale::Ga, &data)
        .expect("native storage never fails");
    assert!(report.effect.changed);
    assert_eq!(
        feedback_for(&report.outcome, &data, Locale::Ga),
        Feedback::Correct("Baile Átha Cliath".into())
    );

    let repeat = session.resolve("  DUBLIN ", Locale::En, &data);
    assert_eq!(
        feedback_for(&repeat, &data, Locale::En),
        Feedback::AlreadyGuessed("  DUBLIN ".into())
    );
    assert_eq!(
        feedback_for(&GuessOutcome::NoMatch, &data, Locale::En),
        Feedback::NotFound
    );
}

#[test]
fn native_storage_has_nothing_saved() {
    let storage = WebProgressStorage;
    assert!(storage.load_progress().expect("native load").is_none());
}

#[test]
fn stored_ids_keep_guess_order() {
    let data = CountyDataset::load_from_static().expect("bundled dataset");
    let engine = create_web_engine();
    let mut session = engine.start_session(&data);
    for guess in ["Wicklow", "Antrim", "Carlow"] {
        engine
            .submit_guess(&mut session, guess, Locale::En, &data)
            .expect("native storage never fails");
    }
    let (selected, correct) = encode_progress(&session).expect("encode");
    let restored = decode_progress(Some(&selected), Some(&correct)).expect("restored");
    assert_eq!(
        restored.correct_names(&data, Locale::En),
        vec!["Wicklow", "Antrim", "Carlow"]
    );
}
