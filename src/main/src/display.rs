use pricing::PriceAnalysis;

/// Presentation seam. The monitor pushes state through this trait and
/// places no constraint on how it is rendered.
pub trait PriceDisplay {
    fn show_analysis(&mut self, analysis: &PriceAnalysis);
    fn show_message(&mut self, heading: &str, detail: &str);
    fn show_loading(&mut self);
}

/// Console renderer for running on a workstation instead of the device.
pub struct ConsoleDisplay;

impl PriceDisplay for ConsoleDisplay {
    fn show_analysis(&mut self, analysis: &PriceAnalysis) {
        if !analysis.valid {
            println!("NO DATA");
            return;
        }

        let later = if analysis.cheapest_is_later {
            " (tomorrow)"
        } else {
            ""
        };
        println!(
            "NOW {}  next 90 min {:.2} c/kWh",
            analysis.current_period_start,
            analysis.next_window_avg * 100.0
        );
        println!(
            "CHEAPEST {}{}  {:.2} c/kWh",
            analysis.cheapest_window_start,
            later,
            analysis.cheapest_window_avg * 100.0
        );
    }

    fn show_message(&mut self, heading: &str, detail: &str) {
        if detail.is_empty() {
            println!("{heading}");
        } else {
            println!("{heading}  {detail}");
        }
    }

    fn show_loading(&mut self) {
        println!("updating...");
    }
}
