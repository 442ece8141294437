use time::ext::NumericalDuration;
use time::macros::time;
use time::{PrimitiveDateTime, Time};

use crate::data::{hhmm_label, CheapestWindow, PriceAnalysis, PriceEntry, PRICE_SENTINEL};

/// Six 15-minute periods make up the 90-minute horizon everything below
/// works in.
pub const WINDOW_PERIODS: usize = 6;

const PERIOD_MINUTES: u8 = 15;

// The appliance window: may not start before 07:00 and may not run past
// 23:00, with no rollover past midnight.
const EARLIEST_START: Time = time!(07:00);
const LATEST_END: Time = time!(23:00);

/// Analyze a price series against the current wall-clock reading.
///
/// Total over any input: an empty series, a series that does not cover
/// `now`, or a series too short for a full window all degrade to a result
/// with `valid == false` and sentinel fields.
pub fn analyze(prices: &[PriceEntry], now: PrimitiveDateTime) -> PriceAnalysis {
    let mut result = PriceAnalysis::default();

    let Some(current) = find_current_index(prices, now) else {
        return result;
    };

    result.current_period_start = hhmm_label(prices[current].timestamp);
    result.next_window_avg = average_from(prices, current);

    let Some(cheapest) = find_cheapest_window(prices) else {
        return result;
    };
    let cheapest_start = prices[cheapest.start_index].timestamp;
    result.cheapest_window_avg = cheapest.average;
    result.cheapest_window_start = hhmm_label(cheapest_start);
    result.cheapest_is_later = cheapest_start.date() != prices[current].timestamp.date();

    result.valid = result.next_window_avg >= 0.0;
    result
}

/// Index of the entry for the quarter-hour period containing `now`.
///
/// The minute is rounded down to the 15-minute grid and compared at minute
/// resolution; seconds never participate. Entries are scanned in caller
/// order and the first match wins.
pub fn find_current_index(prices: &[PriceEntry], now: PrimitiveDateTime) -> Option<usize> {
    let period_minute = now.minute() - now.minute() % PERIOD_MINUTES;

    prices.iter().position(|entry| {
        entry.timestamp.date() == now.date()
            && entry.timestamp.hour() == now.hour()
            && entry.timestamp.minute() == period_minute
    })
}

/// Mean of the six consecutive prices starting at `start_index`, or the
/// sentinel when the series does not hold a full window from there.
pub fn average_from(prices: &[PriceEntry], start_index: usize) -> f32 {
    let end = start_index.saturating_add(WINDOW_PERIODS);
    let Some(window) = prices.get(start_index..end) else {
        return PRICE_SENTINEL;
    };

    let sum: f32 = window.iter().map(|entry| entry.price).sum();
    sum / WINDOW_PERIODS as f32
}

/// Slide a six-entry window across the whole series and keep the cheapest
/// admissible one. Ties keep the earliest start; windows whose average is
/// negative or undefined are never selected.
///
/// The scan trusts the caller's ordering and the 15-minute grid; gapped or
/// unsorted input yields an index-defined answer without complaint.
pub fn find_cheapest_window(prices: &[PriceEntry]) -> Option<CheapestWindow> {
    if prices.len() < WINDOW_PERIODS {
        return None;
    }

    let mut cheapest: Option<CheapestWindow> = None;
    for start_index in 0..=prices.len() - WINDOW_PERIODS {
        if !window_is_admissible(prices[start_index].timestamp) {
            continue;
        }
        let average = average_from(prices, start_index);
        if average < 0.0 {
            continue;
        }
        match cheapest {
            Some(best) if average >= best.average => {}
            _ => {
                cheapest = Some(CheapestWindow {
                    average,
                    start_index,
                })
            }
        }
    }

    cheapest
}

fn window_is_admissible(start: PrimitiveDateTime) -> bool {
    let Some(end) = start.checked_add(90.minutes()) else {
        return false;
    };
    start.time() >= EARLIEST_START && end.date() == start.date() && end.time() <= LATEST_END
}
