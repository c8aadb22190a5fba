use chrono::{DateTime, Local, TimeZone};

pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIME_LAYOUT).to_string()
}

pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}
