use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use log::*;

use crate::events::InputEvent;

/// One-shot wake-up timer, the host stand-in for a hardware alarm.
pub struct UpdateTimer {
    events: Sender<InputEvent>,
}

impl UpdateTimer {
    pub fn new(events: Sender<InputEvent>) -> Self {
        UpdateTimer { events }
    }

    /// Arm for `seconds` from now. Re-arming does not cancel an earlier
    /// one-shot; the monitor deduplicates per boundary minute instead.
    pub fn arm(&self, seconds: u64) {
        info!("Timer set for {seconds} seconds");
        let events = self.events.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(seconds));
            let _ = events.send(InputEvent::TimerElapsed);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_elapsed_timer_sends_one_event() {
        let (tx, rx) = mpsc::channel();
        UpdateTimer::new(tx).arm(0);

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(2)).unwrap(),
            InputEvent::TimerElapsed
        );
        assert!(rx.try_recv().is_err());
    }
}
