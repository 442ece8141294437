use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use log::*;
use time::PrimitiveDateTime;

use pricing::{analyze, PriceAnalysis};

use crate::display::PriceDisplay;
use crate::feed;
use crate::guard::FetchGuard;

/// Price source seam; implementations own the actual transport.
pub trait ApiClient {
    fn fetch_json(&self, url: &str) -> Result<String>;
}

/// Runs the fetch→decode→analyze cycle and keeps the result of the last
/// one.
///
/// At most one cycle is in flight at a time; `is_fetching` mirrors the
/// busy flag for the display side. Nothing here locks out a concurrent
/// caller — the single-threaded main loop cannot produce one, and a
/// multi-threaded embedding must add its own mutual exclusion.
pub struct PriceMonitor<C, D> {
    client: C,
    display: D,
    url: String,
    last_analysis: PriceAnalysis,
    last_scheduled_minute: Option<u8>,
    fetching: AtomicBool,
}

impl<C: ApiClient, D: PriceDisplay> PriceMonitor<C, D> {
    pub fn new(client: C, display: D, url: impl Into<String>) -> Self {
        PriceMonitor {
            client,
            display,
            url: url.into(),
            last_analysis: PriceAnalysis::default(),
            last_scheduled_minute: None,
            fetching: AtomicBool::new(false),
        }
    }

    /// Run one guarded fetch cycle against the price API.
    ///
    /// Transport and decode failures report through the display and leave
    /// the previous analysis in place; a completed analysis supersedes the
    /// previous one wholesale, valid or not.
    pub fn fetch_and_analyze(&mut self, now: PrimitiveDateTime) -> bool {
        let _guard = FetchGuard::hold(&self.fetching);

        if self.last_analysis.valid {
            self.display.show_loading();
        }

        let payload = match self.client.fetch_json(&self.url) {
            Ok(payload) => payload,
            Err(err) => {
                error!("Price fetch failed: {err:#}");
                self.display.show_message("FETCH FAILED", &err.to_string());
                return false;
            }
        };

        let prices = match feed::parse_entries(&payload) {
            Ok(prices) => prices,
            Err(err) => {
                error!("Feed decode failed: {err:#}");
                self.display.show_message("FEED ERROR", &err.to_string());
                return false;
            }
        };
        info!("Parsed {} price entries", prices.len());

        self.last_analysis = analyze(&prices, now);
        if !self.last_analysis.valid {
            warn!("Analysis produced no usable result");
            self.display.show_message("ANALYSIS FAILED", "");
            return false;
        }

        info!(
            "Next 90 min avg: {:.2} c/kWh",
            self.last_analysis.next_window_avg * 100.0
        );
        info!(
            "Cheapest 90 min: {:.2} c/kWh @ {}",
            self.last_analysis.cheapest_window_avg * 100.0,
            self.last_analysis.cheapest_window_start
        );
        true
    }

    pub fn show_last_analysis(&mut self) {
        self.display.show_analysis(&self.last_analysis);
    }

    pub fn last_analysis(&self) -> &PriceAnalysis {
        &self.last_analysis
    }

    /// Read-only probe of the busy flag, for a loading indicator.
    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::Acquire)
    }

    /// True at most once per quarter-hour boundary minute.
    ///
    /// The wake-up timer can fire slightly off the boundary or more than
    /// once around it; remembering the last boundary minute that fired
    /// keeps the refresh rate at one per boundary.
    pub fn is_scheduled_update_time(&mut self, now: PrimitiveDateTime) -> bool {
        let minute = now.minute();
        if minute % 15 != 0 {
            return false;
        }
        if self.last_scheduled_minute == Some(minute) {
            return false;
        }
        self.last_scheduled_minute = Some(minute);
        info!("Scheduled update at {:02}:{:02}", now.hour(), minute);
        true
    }
}
