/// Whole seconds until the wall clock next crosses a quarter-hour boundary
/// (:00, :15, :30, :45).
///
/// A reading exactly on a boundary returns the full distance to the
/// following one, so a wake-up at :15 arms the next timer for :30. The
/// result is clamped to at least one minute if the arithmetic ever lands at
/// or below zero, so the caller can never arm an expired timer.
pub fn seconds_until_next_update(minute: u8, second: u8) -> u64 {
    let next_minute: i32 = if minute < 15 {
        15
    } else if minute < 30 {
        30
    } else if minute < 45 {
        45
    } else {
        60
    };

    let mut minutes_until_next = next_minute - i32::from(minute);
    if minutes_until_next <= 0 {
        minutes_until_next += 60;
    }

    let seconds_until_next = minutes_until_next * 60 - i32::from(second);
    if seconds_until_next <= 0 {
        60
    } else {
        seconds_until_next as u64
    }
}
