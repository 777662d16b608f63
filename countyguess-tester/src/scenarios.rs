use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use countyguess_game::{
    COUNTY_COUNT, CountyDataset, CountyId, DERRY_ALIASES, DataLoader, DatasetError, GuessEngine,
    GuessOutcome, GuessSession, Locale, ProgressStorage, StaticDataLoader, strip_diacritics,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub checks_run: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_ms")]
    pub duration: Duration,
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64() * 1000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(ms.max(0.0) / 1000.0))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Reads a GeoJSON dataset from disk, or the bundled one when no path is given.
#[derive(Debug, Clone, Default)]
pub struct FileDataLoader {
    path: Option<PathBuf>,
}

impl FileDataLoader {
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl DataLoader for FileDataLoader {
    type Error = LoadError;

    fn load_dataset(&self) -> Result<CountyDataset, Self::Error> {
        let Some(path) = &self.path else {
            return Ok(StaticDataLoader.load_dataset()?);
        };
        log::debug!("loading dataset from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Ok(CountyDataset::from_geojson(&json)?)
    }
}

/// Keeps the serialized session in memory, the way the browser keeps it in
/// localStorage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    saved: RefCell<Option<String>>,
}

impl ProgressStorage for MemoryStorage {
    type Error = serde_json::Error;

    fn load_progress(&self) -> Result<Option<GuessSession>, Self::Error> {
        self.saved
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
    }

    fn save_progress(&self, session: &GuessSession) -> Result<(), Self::Error> {
        *self.saved.borrow_mut() = Some(serde_json::to_string(session)?);
        Ok(())
    }
}

/// Collects check outcomes for one scenario.
#[derive(Debug, Default)]
pub struct Checks {
    run: usize,
    failures: Vec<String>,
}

impl Checks {
    fn check(&mut self, ok: bool, failure: impl FnOnce() -> String) {
        self.run += 1;
        if !ok {
            self.failures.push(failure());
        }
    }
}

type ScenarioFn = fn(&CountyDataset, &mut Checks);

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

impl Scenario {
    pub fn execute(&self, dataset: &CountyDataset) -> ScenarioResult {
        let started = Instant::now();
        let mut checks = Checks::default();
        (self.run)(dataset, &mut checks);
        ScenarioResult {
            scenario_name: self.key.to_string(),
            passed: checks.failures.is_empty(),
            checks_run: checks.run,
            failures: checks.failures,
            duration: started.elapsed(),
        }
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "smoke",
        description: "Dataset shape plus one hit, one repeat and one miss",
        run: smoke,
    },
    Scenario {
        key: "full-sweep-en",
        description: "Every English name, case-flipped, matches once then repeats",
        run: full_sweep_en,
    },
    Scenario {
        key: "full-sweep-ga",
        description: "Every Irish name, case-flipped, matches once then repeats",
        run: full_sweep_ga,
    },
    Scenario {
        key: "derry-aliases",
        description: "All Derry spellings resolve to one county",
        run: derry_aliases,
    },
    Scenario {
        key: "irish-fadas",
        description: "Irish guesses typed without fadas still match",
        run: irish_fadas,
    },
    Scenario {
        key: "completion",
        description: "Completion fires exactly once, on the 32nd county",
        run: completion,
    },
    Scenario {
        key: "clear-reset",
        description: "Clearing empties progress and re-opens every county",
        run: clear_reset,
    },
    Scenario {
        key: "persistence",
        description: "Saved progress restores in guess order",
        run: persistence,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description))
}

pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

fn flip_case(name: &str) -> String {
    name.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let upper = i % 2 == 0;
            let mapped: Vec<char> = if upper {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            mapped
        })
        .collect()
}

fn guess(session: &mut GuessSession, text: &str, locale: Locale, data: &CountyDataset) -> GuessOutcome {
    let outcome = session.resolve(text, locale, data);
    session.record(&outcome);
    outcome
}

fn smoke(data: &CountyDataset, checks: &mut Checks) {
    checks.check(data.len() == COUNTY_COUNT, || {
        format!("expected {COUNTY_COUNT} counties, found {}", data.len())
    });
    let partitioned = data.iter().filter(|c| c.is_partitioned()).count();
    checks.check(partitioned == 6, || {
        format!("expected 6 partitioned counties, found {partitioned}")
    });

    let mut session = GuessSession::new();
    let first = guess(&mut session, "Dublin", Locale::En, data);
    checks.check(first.is_new_match(), || format!("Dublin: {first:?}"));
    let repeat = guess(&mut session, "dublin", Locale::En, data);
    checks.check(
        matches!(repeat, GuessOutcome::AlreadySelected { ref input, .. } if input == "dublin"),
        || format!("dublin: {repeat:?}"),
    );
    let miss = guess(&mut session, "Atlantis", Locale::En, data);
    checks.check(miss == GuessOutcome::NoMatch, || format!("Atlantis: {miss:?}"));
    checks.check(session.len() == 1, || {
        format!("expected one county recorded, found {}", session.len())
    });
}

fn sweep(data: &CountyDataset, locale: Locale, checks: &mut Checks) {
    let mut session = GuessSession::new();
    for county in data.iter() {
        let text = flip_case(county.comparison_name(locale));
        let first = guess(&mut session, &text, locale, data);
        checks.check(first.county_id() == Some(county.id()) && first.is_new_match(), || {
            format!("{text}: expected new match for {}, got {first:?}", county.id())
        });
        let before = session.len();
        for _ in 0..3 {
            let repeat = guess(&mut session, &text, locale, data);
            checks.check(
                matches!(repeat, GuessOutcome::AlreadySelected { .. }),
                || format!("{text}: expected repeat, got {repeat:?}"),
            );
        }
        checks.check(session.len() == before, || {
            format!("{text}: repeats changed the selection")
        });
    }
    checks.check(session.is_complete(), || {
        format!("sweep ended with {} of {COUNTY_COUNT}", session.len())
    });
}

fn full_sweep_en(data: &CountyDataset, checks: &mut Checks) {
    sweep(data, Locale::En, checks);
}

fn full_sweep_ga(data: &CountyDataset, checks: &mut Checks) {
    sweep(data, Locale::Ga, checks);
}

fn derry_aliases(data: &CountyDataset, checks: &mut Checks) {
    let mut ids: BTreeSet<CountyId> = BTreeSet::new();
    for alias in DERRY_ALIASES {
        for locale in Locale::ALL {
            let outcome = GuessSession::new().resolve(alias, locale, data);
            match outcome.county_id() {
                Some(id) => {
                    ids.insert(id.clone());
                }
                None => checks.check(false, || format!("{alias} ({locale}) matched nothing")),
            }
        }
    }
    checks.check(ids.len() == 1, || format!("aliases resolved to {ids:?}"));

    let mut session = GuessSession::new();
    let derry = guess(&mut session, "Derry", Locale::En, data);
    let londonderry = guess(&mut session, "Londonderry", Locale::En, data);
    checks.check(derry.is_new_match(), || format!("Derry: {derry:?}"));
    checks.check(
        matches!(londonderry, GuessOutcome::AlreadySelected { .. })
            && londonderry.county_id() == derry.county_id(),
        || format!("Londonderry after Derry: {londonderry:?}"),
    );
}

fn irish_fadas(data: &CountyDataset, checks: &mut Checks) {
    let mut accented = 0;
    for county in data.iter() {
        let name = county.comparison_name(Locale::Ga);
        let plain = strip_diacritics(name);
        if plain == name {
            continue;
        }
        accented += 1;
        let outcome = GuessSession::new().resolve(&plain, Locale::Ga, data);
        checks.check(outcome.county_id() == Some(county.id()), || {
            format!("{plain} should match {name}, got {outcome:?}")
        });
    }
    checks.check(accented > 0, || "dataset has no accented Irish names".to_string());
}

fn completion(data: &CountyDataset, checks: &mut Checks) {
    let mut session = GuessSession::new();
    let mut fired_at = Vec::new();
    for county in data.iter() {
        let outcome = session.resolve(&county.display_name(Locale::En), Locale::En, data);
        if session.record(&outcome).completed {
            fired_at.push(session.len());
        }
    }
    let again = session.resolve("Dublin", Locale::En, data);
    checks.check(!session.record(&again).completed, || {
        "a repeat after completion fired again".to_string()
    });
    checks.check(fired_at == [COUNTY_COUNT], || {
        format!("completion fired at {fired_at:?}")
    });
}

fn clear_reset(data: &CountyDataset, checks: &mut Checks) {
    let mut session = GuessSession::new();
    for text in ["Dublin", "Kerry", "Derry"] {
        guess(&mut session, text, Locale::En, data);
    }
    session.clear();
    checks.check(session.is_empty() && session.correct().is_empty(), || {
        format!("clear left {} counties", session.len())
    });
    for text in ["Dublin", "Kerry", "Derry"] {
        let outcome = guess(&mut session, text, Locale::En, data);
        checks.check(outcome.is_new_match(), || {
            format!("{text} after clear: {outcome:?}")
        });
    }
}

fn persistence(data: &CountyDataset, checks: &mut Checks) {
    let engine = GuessEngine::new(StaticDataLoader, MemoryStorage::default());
    let mut session = engine.start_session(data);
    let order = ["Wicklow", "Fermanagh", "Cork"];
    for text in order {
        if let Err(err) = engine.submit_guess(&mut session, text, Locale::En, data) {
            checks.check(false, || format!("saving {text} failed: {err}"));
        }
    }
    match engine.restore_session(data) {
        Ok(restored) => {
            let names = restored.correct_names(data, Locale::En);
            checks.check(names == order, || format!("restored order {names:?}"));
        }
        Err(err) => checks.check(false, || format!("restore failed: {err:#}")),
    }
    if let Err(err) = engine.clear_progress(&mut session) {
        checks.check(false, || format!("clear failed: {err}"));
    }
    checks.check(engine.start_session(data).is_empty(), || {
        "cleared progress came back".to_string()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_on_bundled_dataset() {
        let data = FileDataLoader::default().load_dataset().unwrap();
        for key in all_scenario_keys() {
            let result = get_scenario(&key).unwrap().execute(&data);
            assert!(result.passed, "{key}: {:?}", result.failures);
            assert!(result.checks_run > 0, "{key} ran no checks");
        }
    }

    #[test]
    fn smoke_fails_on_partial_dataset() {
        let full = CountyDataset::load_from_static().unwrap();
        let partial =
            CountyDataset::from_records(full.iter().take(5).cloned().collect()).unwrap();
        let result = get_scenario("smoke").unwrap().execute(&partial);
        assert!(!result.passed);
        assert!(result.failures[0].contains("expected 32 counties"));
    }

    #[test]
    fn missing_dataset_file_is_an_io_error() {
        let loader = FileDataLoader::new(Some(PathBuf::from("/nonexistent/counties.geojson")));
        assert!(matches!(loader.load_dataset(), Err(LoadError::Io(_))));
    }

    #[test]
    fn flip_case_alternates() {
        assert_eq!(flip_case("dublin"), "DuBlIn");
    }
}
