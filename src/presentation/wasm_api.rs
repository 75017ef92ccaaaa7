use js_sys::Promise;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::dashboard::{reset_controller, with_controller, with_controller_mut};
use crate::application::use_cases::{LoadCompaniesUseCase, LoadTransactionsUseCase};
use crate::domain::chart::SeriesId;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::StockApiClient;
use chrono::NaiveDate;

/// JS-facing dashboard API - a thin bridge between UI events and the
/// application layer. The chart engine and the table view consume plain
/// JSON strings; all state lives in the controller.
#[wasm_bindgen]
pub struct DashboardApi {
    client: StockApiClient,
}

#[wasm_bindgen]
impl DashboardApi {
    /// `base_url` defaults to the local backend when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>) -> Self {
        let client = match base_url {
            Some(url) => StockApiClient::with_base_url(url),
            None => StockApiClient::new(),
        };
        Self { client }
    }

    /// Fetch the tradable company list and cache it in the controller.
    /// Resolves to the JSON array of company codes.
    #[wasm_bindgen(js_name = loadCompanies)]
    pub fn load_companies(&self) -> Promise {
        let client = self.client.clone();
        future_to_promise(async move {
            let use_case = LoadCompaniesUseCase::new(client);
            match use_case.execute().await {
                Ok(companies) => {
                    with_controller_mut(|controller| controller.set_companies(companies.clone()));
                    serde_json::to_string(&companies)
                        .map(|json| JsValue::from_str(&json))
                        .map_err(|e| JsValue::from_str(&e.to_string()))
                }
                Err(error) => Err(JsValue::from_str(&error.to_string())),
            }
        })
    }

    #[wasm_bindgen(js_name = setCompany)]
    pub fn set_company(&self, code: String) {
        with_controller_mut(|controller| controller.set_company(&code));
    }

    /// Run the fetch → normalize → filter pipeline for the selected
    /// company. Resolves to the visible row count; rejects synchronously
    /// when no company is selected. Stale responses are discarded by the
    /// controller, not surfaced as errors.
    #[wasm_bindgen(js_name = fetchTransactions)]
    pub fn fetch_transactions(&self) -> Promise {
        let client = self.client.clone();
        future_to_promise(async move {
            let ticket = match with_controller_mut(|controller| controller.begin_fetch()) {
                Ok(ticket) => ticket,
                Err(error) => return Err(JsValue::from_str(&error.to_string())),
            };

            let use_case = LoadTransactionsUseCase::new(client);
            let result = use_case.execute(ticket.company()).await;

            let applied =
                with_controller_mut(|controller| controller.complete_fetch(&ticket, result));
            if !applied {
                get_logger().info(
                    LogComponent::Presentation("DashboardApi"),
                    "Fetch result discarded (selection changed mid-flight)",
                );
            }

            let rows = with_controller(|controller| controller.visible_transactions().len());
            Ok(JsValue::from_f64(rows as f64))
        })
    }

    /// Synchronous re-filter; empty strings mean "no bound". Filtering
    /// kicks in only when both bounds parse.
    #[wasm_bindgen(js_name = setDateRange)]
    pub fn set_date_range(&self, from: Option<String>, to: Option<String>) {
        let from = from.as_deref().and_then(parse_iso_date);
        let to = to.as_deref().and_then(parse_iso_date);
        with_controller_mut(|controller| controller.set_date_range(from, to));
    }

    /// Drop both bounds without touching the company or visibility state
    #[wasm_bindgen(js_name = clearDateRange)]
    pub fn clear_date_range(&self) {
        with_controller_mut(|controller| controller.set_date_range(None, None));
    }

    /// Toggle one series by its wire name (e.g. "sma20", "buySignal").
    /// Returns false for an unknown id.
    #[wasm_bindgen(js_name = toggleSeries)]
    pub fn toggle_series(&self, id: String) -> bool {
        match SeriesId::from_str(&id) {
            Ok(series) => {
                with_controller_mut(|controller| controller.toggle_series(series));
                true
            }
            Err(_) => {
                get_logger().warn(
                    LogComponent::Presentation("DashboardApi"),
                    &format!("Unknown series id: {id}"),
                );
                false
            }
        }
    }

    /// Restore the full ordered sequence and clear the date bounds;
    /// no re-fetch, visibility toggles survive
    #[wasm_bindgen(js_name = resetFilter)]
    pub fn reset_filter(&self) {
        with_controller_mut(|controller| controller.reset_filter());
    }

    /// Serialized ChartDescription for the external chart engine
    #[wasm_bindgen(js_name = getChartDescription)]
    pub fn get_chart_description(&self) -> String {
        with_controller(|controller| controller.chart_description().to_json())
    }

    /// Filtered rows for the table view, same order as the category axis
    #[wasm_bindgen(js_name = getVisibleTransactions)]
    pub fn get_visible_transactions(&self) -> String {
        with_controller(|controller| {
            serde_json::to_string(controller.visible_transactions())
                .unwrap_or_else(|_| "[]".to_string())
        })
    }

    #[wasm_bindgen(js_name = hasData)]
    pub fn has_data(&self) -> bool {
        with_controller(|controller| controller.has_data())
    }

    /// Empty-state / progress text for the UI shell
    #[wasm_bindgen(js_name = statusMessage)]
    pub fn status_message(&self) -> String {
        with_controller(|controller| controller.status_message())
    }

    /// Full reload: drops all state, visibility back to defaults
    pub fn reload(&self) {
        reset_controller();
    }
}

/// HTML date inputs emit ISO `yyyy-mm-dd`; anything else means no bound
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
