/// A single cookie sighting, truncated to its calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub cookie: String,
    pub date: String,
}

impl LogRecord {
    /// Parse a `cookie,timestamp` line. Fields past the second are ignored.
    ///
    /// Returns `None` when either field is missing or empty. The date is the
    /// part of the timestamp before `T`, so time-of-day and offset never
    /// affect bucketing.
    pub fn parse_line(line: &str) -> Option<LogRecord> {
        let mut fields = line.split(',');
        let cookie = fields.next()?.trim();
        let timestamp = fields.next()?.trim();

        if cookie.is_empty() || timestamp.is_empty() {
            return None;
        }

        let date = timestamp.split('T').next().unwrap_or(timestamp).trim();
        if date.is_empty() {
            return None;
        }

        Some(LogRecord {
            cookie: cookie.to_string(),
            date: date.to_string(),
        })
    }
}
