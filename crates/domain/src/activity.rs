use chrono::{DateTime, Local, TimeZone};
use std::fmt;

pub const ACTIVITY_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One line of a client's lookup history: `"<timestamp> :: <hostname>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub hostname: String,
}

impl ActivityEntry {
    pub fn now(hostname: impl Into<String>) -> Self {
        Self::at(&Local::now(), hostname)
    }

    pub fn at<Tz: TimeZone>(time: &DateTime<Tz>, hostname: impl Into<String>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            timestamp: time.format(ACTIVITY_TIMESTAMP_FORMAT).to_string(),
            hostname: hostname.into(),
        }
    }

    pub fn parse(line: &str) -> Option<Self> {
        let (timestamp, hostname) = line.split_once(" :: ")?;
        Some(Self {
            timestamp: timestamp.to_string(),
            hostname: hostname.to_string(),
        })
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.timestamp, self.hostname)
    }
}
