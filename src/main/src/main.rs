use anyhow::Result;
use log::*;
use std::sync::mpsc;

mod clock;
mod config;
mod display;
mod events;
mod feed;
mod guard;
mod http;
mod monitor;
mod timer;

use config::Config;
use display::{ConsoleDisplay, PriceDisplay};
use events::InputEvent;
use http::HttpClient;
use monitor::{ApiClient, PriceMonitor};
use timer::UpdateTimer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::read();

    let (events_tx, events_rx) = mpsc::channel();
    events::spawn_button_watcher(events_tx.clone());
    let timer = UpdateTimer::new(events_tx);

    let client = HttpClient::new(config.http_timeout)?;
    let mut monitor = PriceMonitor::new(client, ConsoleDisplay, config.price_api_url);

    info!("Fetching initial prices...");
    if monitor.fetch_and_analyze(clock::now()) {
        monitor.show_last_analysis();
    }
    arm_next_update(&timer);

    loop {
        match events_rx.recv() {
            Ok(InputEvent::ButtonPressed) => {
                // The monitor does not lock out reentrant cycles itself;
                // the loop is the one place that could start a second one.
                if monitor.is_fetching() {
                    continue;
                }
                info!("Button pressed, fetching prices...");
                refresh(&mut monitor);
            }
            Ok(InputEvent::TimerElapsed) => {
                if monitor.is_scheduled_update_time(clock::now()) {
                    refresh(&mut monitor);
                }
                arm_next_update(&timer);
            }
            Err(_) => break,
        }
    }

    Ok(())
}

fn refresh<C: ApiClient, D: PriceDisplay>(monitor: &mut PriceMonitor<C, D>) {
    let refreshed = monitor.fetch_and_analyze(clock::now());
    // A failed refresh falls back to the previous analysis if one exists.
    if refreshed || monitor.last_analysis().valid {
        monitor.show_last_analysis();
    }
}

fn arm_next_update(timer: &UpdateTimer) {
    let now = clock::now();
    timer.arm(pricing::seconds_until_next_update(now.minute(), now.second()));
}
