use std::collections::HashMap;

use crate::record::LogRecord;

/// Cookie sightings grouped by date. Duplicates are kept and each bucket
/// preserves input order. Dates are remembered in first-encounter order.
#[derive(Debug, Default, Clone)]
pub struct DateBuckets {
    order: Vec<String>,
    buckets: HashMap<String, Vec<String>>,
}

impl DateBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LogRecord) {
        match self.buckets.get_mut(&record.date) {
            Some(cookies) => cookies.push(record.cookie),
            None => {
                self.order.push(record.date.clone());
                self.buckets.insert(record.date, vec![record.cookie]);
            }
        }
    }

    pub fn get(&self, date: &str) -> Option<&[String]> {
        self.buckets.get(date).map(Vec::as_slice)
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<LogRecord> for DateBuckets {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        let mut buckets = DateBuckets::new();
        for record in iter {
            buckets.push(record);
        }
        buckets
    }
}
