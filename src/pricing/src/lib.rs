mod analysis;
mod data;
mod schedule;

pub use analysis::{
    analyze, average_from, find_cheapest_window, find_current_index, WINDOW_PERIODS,
};
pub use data::{
    hhmm_label, parse_timestamp, CheapestWindow, PriceAnalysis, PriceEntry, PRICE_SENTINEL,
};
pub use schedule::seconds_until_next_update;
