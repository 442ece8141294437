use time::{OffsetDateTime, PrimitiveDateTime};

/// Current wall-clock reading, in local time where the platform exposes
/// an offset and UTC otherwise. The analysis only ever sees this value;
/// it never reads the clock itself.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}
