use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::thread;

/// Wake-up sources feeding the main loop.
///
/// The device raises these from a button interrupt and a one-shot timer
/// interrupt; on a host they arrive as messages on one channel owned by
/// the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    ButtonPressed,
    TimerElapsed,
}

/// The "button": one press per line read from stdin.
pub fn spawn_button_watcher(events: Sender<InputEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() {
                break;
            }
            if events.send(InputEvent::ButtonPressed).is_err() {
                break;
            }
        }
    });
}
