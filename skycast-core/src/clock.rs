use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, Utc};

/// Which wall clock to display: the device's own, or a remote location's
/// fixed UTC offset taken from the last weather report.
///
/// Pure fixed-offset arithmetic; daylight-saving transitions at the remote
/// location are not tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockState {
    offset_secs: Option<i32>,
}

impl ClockState {
    /// Device-local time.
    pub fn local() -> Self {
        Self { offset_secs: None }
    }

    /// Remote-location time at a fixed offset in seconds east of UTC.
    pub fn with_offset(offset_secs: i32) -> Self {
        Self { offset_secs: Some(offset_secs) }
    }

    pub fn offset_secs(&self) -> Option<i32> {
        self.offset_secs
    }

    /// Wall-clock time to display for the instant `utc_now`. `device_offset`
    /// is the device's own UTC offset and only matters in the local case.
    pub fn wall_time(&self, utc_now: DateTime<Utc>, device_offset: FixedOffset) -> NaiveDateTime {
        match self.offset_secs {
            Some(secs) => (utc_now + Duration::seconds(i64::from(secs))).naive_utc(),
            None => utc_now.with_timezone(&device_offset).naive_local(),
        }
    }

    /// One clock tick: the wall time right now.
    pub fn now(&self) -> NaiveDateTime {
        self.wall_time(Utc::now(), *Local::now().offset())
    }
}

/// Formatted readout for the clock slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReadout {
    /// 12-hour time with seconds, e.g. "08:05:09 PM".
    pub time: String,
    /// Short date, e.g. "Sat, Aug 30, 2025".
    pub date: String,
}

pub fn readout(wall: NaiveDateTime) -> ClockReadout {
    ClockReadout {
        time: wall.format("%I:%M:%S %p").to_string(),
        date: wall.format("%a, %b %-d, %Y").to_string(),
    }
}
