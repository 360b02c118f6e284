//! Sort keys for 12-hour display times such as `"9:00 AM"` or `"7:30 PM"`.
//!
//! The key is the clock digits read as one number (`"9:00 AM"` -> `900`), with
//! `1200` added for PM times outside the 12 o'clock hour. `12:xx AM` is not
//! special-cased, so midnight sorts after every other morning time.

use std::sync::OnceLock;

use regex::Regex;

const PM_OFFSET: u32 = 1200;

fn display_time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{1,2}:\d{2} (AM|PM)$").expect("display time pattern is valid")
    })
}

/// Returns `None` when the string carries no digits or the digits overflow a key.
pub fn time_key(time: &str) -> Option<u32> {
    let digits: String = time.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut key: u32 = digits.parse().ok()?;

    if time.contains("PM") && !time.contains("12:") {
        key = key.checked_add(PM_OFFSET)?;
    }

    Some(key)
}

/// Key used for ordering; unparseable times go after everything else.
pub fn sort_key(time: &str) -> u32 {
    time_key(time).unwrap_or(u32::MAX)
}

/// Whether the string has the `H:MM AM` / `HH:MM PM` shape the key assumes.
pub fn is_display_time(time: &str) -> bool {
    display_time_pattern().is_match(time)
}
