//! Taskbar clock formatting.

use desktop_app_contract::ClockFormat;
use platform_host::ClockTime;

/// Renders a time of day for the taskbar.
pub fn format_clock_time(time: ClockTime, format: ClockFormat) -> String {
    let (hour, suffix) = if format.use_24_hour {
        (time.hour, None)
    } else {
        let hour = match time.hour % 12 {
            0 => 12,
            hour => hour,
        };
        (hour, Some(if time.hour >= 12 { "PM" } else { "AM" }))
    };

    let mut text = format!("{:02}:{:02}", hour, time.minute);
    if format.show_seconds {
        text.push_str(&format!(":{:02}", time.second));
    }
    if let Some(suffix) = suffix {
        text.push(' ');
        text.push_str(suffix);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8, second: u8) -> ClockTime {
        ClockTime {
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn default_format_is_zero_padded_24_hour_with_seconds() {
        assert_eq!(format_clock_time(at(7, 5, 9), ClockFormat::default()), "07:05:09");
        assert_eq!(format_clock_time(at(23, 59, 0), ClockFormat::default()), "23:59:00");
    }

    #[test]
    fn twelve_hour_format_maps_midnight_and_noon_to_twelve() {
        let format = ClockFormat {
            use_24_hour: false,
            show_seconds: false,
        };
        assert_eq!(format_clock_time(at(0, 15, 0), format), "12:15 AM");
        assert_eq!(format_clock_time(at(12, 0, 0), format), "12:00 PM");
        assert_eq!(format_clock_time(at(18, 30, 0), format), "06:30 PM");
    }
}
