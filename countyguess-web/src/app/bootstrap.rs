use crate::app::state::{AppState, DatasetStatus};
use crate::game::{CountyDataset, GuessSession};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
struct BootstrapHandles {
    dataset: UseStateHandle<Rc<CountyDataset>>,
    dataset_status: UseStateHandle<DatasetStatus>,
    session: UseStateHandle<GuessSession>,
    celebrate: UseStateHandle<bool>,
}

fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        dataset: app_state.dataset.clone(),
        dataset_status: app_state.dataset_status.clone(),
        session: app_state.session.clone(),
        celebrate: app_state.celebrate.clone(),
    }
}

/// Install a loaded dataset and the saved progress that matches it.
fn apply_dataset(handles: &BootstrapHandles, dataset: CountyDataset) {
    let session = crate::game::create_web_engine().start_session(&dataset);
    log::info!(
        "county dataset ready: {} counties, {} already guessed",
        dataset.len(),
        session.len()
    );
    handles.celebrate.set(session.is_complete());
    handles.session.set(session);
    handles.dataset.set(Rc::new(dataset));
    handles.dataset_status.set(DatasetStatus::Ready);
}

fn apply_failure(handles: &BootstrapHandles, err: &dyn std::fmt::Display) {
    log::error!("Error loading county dataset: {err}");
    handles.dataset_status.set(DatasetStatus::Failed);
}

#[cfg(not(target_arch = "wasm32"))]
fn bootstrap_load(handles: &BootstrapHandles) {
    match crate::game::create_web_engine().load_dataset() {
        Ok(dataset) => apply_dataset(handles, dataset),
        Err(err) => apply_failure(handles, &err),
    }
}

#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            match crate::game::fetch_dataset().await {
                Ok(dataset) => apply_dataset(&handles, dataset),
                Err(err) => apply_failure(&handles, &err),
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        bootstrap_load(&handles);
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let handles = handles_from_state(&app_state);
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            bootstrap_load(&handles);
        }
        html! { <div data-status={format!("{:?}", *app_state.dataset_status)} /> }
    }

    #[test]
    fn bootstrap_loads_bundled_dataset_for_tests() {
        let html = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
        assert!(html.contains("data-status"));
    }
}
