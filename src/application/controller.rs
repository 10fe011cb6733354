use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use crate::config::FormDefaults;
use crate::domain::{
    logging::LogComponent,
    replay::{
        FilterForm, FilterParameters, FilterValidationService, ReplayRepository, ReplayRequest,
        ReplayResponse,
    },
};
use crate::view_state::ViewState;
use crate::{log_debug, log_error, log_info, log_warn};

const COMPONENT: LogComponent = LogComponent::Application("ReplayController");

/// The five form inputs the controller reads from
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub exchange: RwSignal<String>,
    pub from_date: RwSignal<String>,
    pub to_date: RwSignal<String>,
    pub symbols: RwSignal<String>,
    pub limit: RwSignal<String>,
}

impl FormSignals {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            exchange: create_rw_signal(defaults.exchange.clone()),
            from_date: create_rw_signal(defaults.from_date.clone()),
            to_date: create_rw_signal(defaults.to_date.clone()),
            symbols: create_rw_signal(defaults.symbols.clone()),
            limit: create_rw_signal(defaults.limit.to_string()),
        }
    }

    /// Current values, read without subscribing
    pub fn snapshot(&self) -> FilterForm {
        FilterForm {
            exchange: self.exchange.get_untracked(),
            from_date: self.from_date.get_untracked(),
            to_date: self.to_date.get_untracked(),
            symbols: self.symbols.get_untracked(),
            limit: self.limit.get_untracked(),
        }
    }
}

/// The output regions the controller writes to
#[derive(Clone, Copy)]
pub struct ResultsView {
    pub state: RwSignal<ViewState>,
    pub fetch_enabled: RwSignal<bool>,
}

impl ResultsView {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(ViewState::Idle),
            fetch_enabled: create_rw_signal(true),
        }
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-enables the trigger when an invocation ends, whichever way it ends.
struct InFlightGuard {
    in_flight: Rc<Cell<bool>>,
    fetch_enabled: RwSignal<bool>,
}

impl InFlightGuard {
    fn acquire(in_flight: Rc<Cell<bool>>, fetch_enabled: RwSignal<bool>) -> Self {
        in_flight.set(true);
        fetch_enabled.set(false);
        Self { in_flight, fetch_enabled }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.set(false);
        self.fetch_enabled.set(true);
    }
}

/// Reads the form, sends one replay request and renders the outcome.
pub struct ReplayRequestController<R: ReplayRepository> {
    repository: Rc<R>,
    form: FormSignals,
    view: ResultsView,
    validation: FilterValidationService,
    in_flight: Rc<Cell<bool>>,
}

impl<R: ReplayRepository> Clone for ReplayRequestController<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Rc::clone(&self.repository),
            form: self.form,
            view: self.view,
            validation: self.validation.clone(),
            in_flight: Rc::clone(&self.in_flight),
        }
    }
}

impl<R: ReplayRepository + 'static> ReplayRequestController<R> {
    pub fn new(repository: R, form: FormSignals, view: ResultsView) -> Self {
        Self {
            repository: Rc::new(repository),
            form,
            view,
            validation: FilterValidationService::new(),
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    pub fn form(&self) -> FormSignals {
        self.form
    }

    pub fn view(&self) -> ResultsView {
        self.view
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Run [`execute`](Self::execute) on the browser event loop.
    pub fn trigger(&self) {
        let controller = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.execute().await;
        });
    }

    /// One full invocation. Never fails; every outcome ends up in the view.
    pub async fn execute(&self) {
        if self.is_in_flight() {
            log_warn!(COMPONENT, "Replay request already outstanding, ignoring trigger");
            return;
        }

        let form = self.form.snapshot();
        log_info!(COMPONENT, "Fetching data with params: {:?}", form);

        self.view.state.set(ViewState::Loading);
        let _guard = InFlightGuard::acquire(Rc::clone(&self.in_flight), self.view.fetch_enabled);

        let next = self.run(&form).await;
        self.view.state.set(next);
    }

    async fn run(&self, form: &FilterForm) -> ViewState {
        let params = match self.collect(form) {
            Ok(params) => params,
            Err(message) => return ViewState::Error(message),
        };

        let request = ReplayRequest::from(params);
        log_debug!(COMPONENT, "Sending request to replay service: {:?}", request);

        match self.repository.replay(&request).await {
            Ok(ReplayResponse::Success { count, data }) => {
                log_info!(COMPONENT, "Retrieved {} messages", count);
                if count == 0 {
                    log_warn!(COMPONENT, "No data returned");
                }
                ViewState::from_success(count, data)
            }
            Ok(ReplayResponse::Failure { error }) => {
                log_error!(COMPONENT, "Replay service returned error: {}", error);
                ViewState::Error(error)
            }
            Err(e) => {
                log_error!(COMPONENT, "Replay request failed: {}", e);
                ViewState::Error(e.message().to_string())
            }
        }
    }

    fn collect(&self, form: &FilterForm) -> Result<FilterParameters, String> {
        let params = form.to_parameters().map_err(|e| e.to_string())?;
        self.validation.validate(&params).map_err(|e| {
            log_warn!(COMPONENT, "Rejected replay parameters: {}", e);
            e.to_string()
        })?;
        Ok(params)
    }
}
