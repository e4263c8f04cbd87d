use chrono::{Local, NaiveTime, Timelike};

/// Format a wall-clock time as `HH:MM:SS:mmm`, zero-padded.
pub fn format_timestamp(time: NaiveTime) -> String {
    // chrono encodes a leap second as nanos >= 1_000_000_000
    let millis = (time.nanosecond() / 1_000_000).min(999);
    format!(
        "{:02}:{:02}:{:02}:{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        millis
    )
}

/// Source of entry timestamps.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at one instant, for headless replays and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    pub fn at(hour: u32, minute: u32, second: u32, milli: u32) -> Self {
        Self(NaiveTime::from_hms_milli_opt(hour, minute, second, milli).unwrap_or(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
