use std::cell::RefCell;

use chrono::NaiveDate;

use crate::domain::chart::{ChartAssembler, ChartDescription, SeriesId, VisibilitySelection};
use crate::domain::errors::DashboardError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{
    CompanyCode, DateRange, Transaction, TransactionHistory,
};
use crate::{log_error, log_info};

/// Where the dashboard currently stands with respect to data loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing fetched yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// History loaded and non-empty
    Ready,
    /// History loaded but the endpoint returned no records
    Empty,
    /// Last fetch failed; prior history is retained
    Failed,
}

/// Epoch-stamped handle for one fetch. A completion is accepted only while
/// its ticket is still the newest fetch for the still-selected company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    company: CompanyCode,
    epoch: u64,
}

impl FetchTicket {
    pub fn company(&self) -> &CompanyCode {
        &self.company
    }
}

/// Application state owner: company selection, history, filter bounds and
/// series visibility.
///
/// Every mutation replaces collections wholesale; the pipeline stages run
/// synchronously from here, and the async fetch reports back through the
/// ticket protocol so stale responses can never clobber a newer selection.
pub struct DashboardController {
    companies: Vec<CompanyCode>,
    selected: Option<CompanyCode>,
    history: TransactionHistory,
    visible: Vec<Transaction>,
    range: DateRange,
    visibility: VisibilitySelection,
    fetch_epoch: u64,
    status: LoadStatus,
    last_error: Option<String>,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardController {
    pub fn new() -> Self {
        Self {
            companies: Vec::new(),
            selected: None,
            history: TransactionHistory::new(),
            visible: Vec::new(),
            range: DateRange::unbounded(),
            visibility: VisibilitySelection::default(),
            fetch_epoch: 0,
            status: LoadStatus::Idle,
            last_error: None,
        }
    }

    // --- company selection -------------------------------------------------

    pub fn set_companies(&mut self, codes: Vec<String>) {
        self.companies =
            codes.into_iter().filter_map(|code| CompanyCode::new(code).ok()).collect();
    }

    pub fn companies(&self) -> &[CompanyCode] {
        &self.companies
    }

    /// Record the selection; fetching stays an explicit action.
    /// An empty code clears the selection.
    pub fn set_company(&mut self, code: &str) {
        self.selected = CompanyCode::new(code.to_string()).ok();
    }

    pub fn selected(&self) -> Option<&CompanyCode> {
        self.selected.as_ref()
    }

    // --- fetch lifecycle ---------------------------------------------------

    /// Start a fetch for the selected company. Rejected synchronously with
    /// `EmptySelection` when nothing is selected - no network call happens.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, DashboardError> {
        let company = self.selected.clone().ok_or(DashboardError::EmptySelection)?;
        self.fetch_epoch += 1;
        self.status = LoadStatus::Loading;
        log_info!(
            LogComponent::Application("Dashboard"),
            "📡 Fetching transactions for {}",
            company.value()
        );
        Ok(FetchTicket { company, epoch: self.fetch_epoch })
    }

    /// Apply a fetch outcome. Returns false when the result was discarded
    /// by the stale-response guard: the ticket is no longer the newest
    /// fetch, or its company is no longer the selected one.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Transaction>, DashboardError>,
    ) -> bool {
        let still_current = ticket.epoch == self.fetch_epoch
            && self.selected.as_ref() == Some(&ticket.company);
        if !still_current {
            get_logger().info(
                LogComponent::Application("Dashboard"),
                &format!("Discarding stale response for {}", ticket.company.value()),
            );
            return false;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                self.history = TransactionHistory::from_records(records);
                self.refresh_view();
                self.status =
                    if self.history.is_empty() { LoadStatus::Empty } else { LoadStatus::Ready };
                self.last_error = None;
                get_logger().info(
                    LogComponent::Application("Dashboard"),
                    &format!("✅ Loaded {count} transactions for {}", ticket.company.value()),
                );
            }
            Err(error) => {
                // Prior history stays; only the status reflects the failure
                self.status = LoadStatus::Failed;
                self.last_error = Some(error.to_string());
                log_error!(
                    LogComponent::Application("Dashboard"),
                    "❌ Fetch failed for {}: {error}",
                    ticket.company.value()
                );
            }
        }
        true
    }

    // --- filtering and visibility ------------------------------------------

    /// Re-filter only; no fetch
    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.range = DateRange::new(from, to);
        self.refresh_view();
    }

    pub fn date_range(&self) -> &DateRange {
        &self.range
    }

    /// Restore the full ordered sequence and clear the bounds; visibility
    /// toggles survive a filter reset.
    pub fn reset_filter(&mut self) {
        self.range = DateRange::unbounded();
        self.refresh_view();
    }

    pub fn toggle_series(&mut self, id: SeriesId) {
        self.visibility.toggle(id);
    }

    pub fn visibility(&self) -> &VisibilitySelection {
        &self.visibility
    }

    fn refresh_view(&mut self) {
        self.visible = self.history.restrict(&self.range);
    }

    // --- derived views -----------------------------------------------------

    /// Rows for the table, same order as the chart's category axis
    pub fn visible_transactions(&self) -> &[Transaction] {
        &self.visible
    }

    pub fn full_history(&self) -> &TransactionHistory {
        &self.history
    }

    /// Recomputed on every call; never cached across state changes
    pub fn chart_description(&self) -> ChartDescription {
        ChartAssembler::assemble(&self.visible, &self.visibility)
    }

    pub fn has_data(&self) -> bool {
        !self.visible.is_empty()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Empty-state text mirrors the original client; absence of data is an
    /// explicit message, never a blank region.
    pub fn status_message(&self) -> String {
        match self.status {
            LoadStatus::Idle => "Select a company.".to_string(),
            LoadStatus::Loading => "Loading transactions...".to_string(),
            LoadStatus::Failed => match &self.last_error {
                Some(error) => format!("No transactions found. ({error})"),
                None => "No transactions found.".to_string(),
            },
            LoadStatus::Empty => "No transactions found.".to_string(),
            LoadStatus::Ready => {
                if self.visible.is_empty() {
                    // Filter excluded everything
                    "No transactions found.".to_string()
                } else {
                    format!("{} transactions", self.visible.len())
                }
            }
        }
    }
}

// Global controller instance (thread-local: WASM runs single-threaded)
thread_local! {
    static CONTROLLER: RefCell<DashboardController> = RefCell::new(DashboardController::new());
}

/// Read access to the global controller
pub fn with_controller<F, R>(f: F) -> R
where
    F: FnOnce(&DashboardController) -> R,
{
    CONTROLLER.with(|controller| f(&controller.borrow()))
}

/// Mutable access to the global controller
pub fn with_controller_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut DashboardController) -> R,
{
    CONTROLLER.with(|controller| f(&mut controller.borrow_mut()))
}

/// Full reload: everything back to defaults, visibility included
pub fn reset_controller() {
    CONTROLLER.with(|controller| *controller.borrow_mut() = DashboardController::new());
}
