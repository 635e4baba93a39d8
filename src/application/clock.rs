// Wall-clock source used to anchor generated samples
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};

pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Local UTC offset in effect at `instant`. Varies across DST transitions.
    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset;

    fn local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset_at(instant))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        *instant.with_timezone(&Local).offset()
    }
}

/// Always reports the same instant, in a zone with a constant offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: now.with_timezone(&Utc),
            offset: *now.offset(),
        }
    }

    /// Fixed clock in UTC, reading `now` as UTC wall time.
    pub fn utc(now: NaiveDateTime) -> Self {
        Self {
            now: now.and_utc(),
            offset: Utc.fix(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn offset_at(&self, _instant: DateTime<Utc>) -> FixedOffset {
        self.offset
    }
}
