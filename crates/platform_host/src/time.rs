//! Wall-clock helpers shared by the taskbar clock and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Time of day split into clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Hour in `0..24`.
    pub hour: u8,
    /// Minute in `0..60`.
    pub minute: u8,
    /// Second in `0..60`.
    pub second: u8,
}

impl ClockTime {
    /// Derives the UTC time of day for a unix millisecond timestamp.
    pub const fn from_unix_ms(unix_ms: u64) -> Self {
        let secs_of_day = (unix_ms / 1_000) % 86_400;
        Self {
            hour: (secs_of_day / 3_600) as u8,
            minute: ((secs_of_day / 60) % 60) as u8,
            second: (secs_of_day % 60) as u8,
        }
    }
}

/// Returns the current local time of day.
///
/// Browser builds read the local timezone through `Date`; native builds report UTC.
pub fn local_clock_time_now() -> ClockTime {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        ClockTime {
            hour: date.get_hours() as u8,
            minute: date.get_minutes() as u8,
            second: date.get_seconds() as u8,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ClockTime::from_unix_ms(unix_time_ms_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_ms_splits_into_utc_fields() {
        assert_eq!(
            ClockTime::from_unix_ms(0),
            ClockTime {
                hour: 0,
                minute: 0,
                second: 0
            }
        );
        // 1970-01-02T13:05:09.750Z
        let ms = ((86_400 + 13 * 3_600 + 5 * 60 + 9) * 1_000 + 750) as u64;
        assert_eq!(
            ClockTime::from_unix_ms(ms),
            ClockTime {
                hour: 13,
                minute: 5,
                second: 9
            }
        );
    }
}
