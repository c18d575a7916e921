use std::collections::HashMap;

use crate::bucket::DateBuckets;

/// Count each distinct cookie, keeping first-occurrence order.
pub fn count_occurrences(cookies: &[String]) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for cookie in cookies {
        match index.get(cookie.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(cookie.as_str(), counts.len());
                counts.push((cookie.as_str(), 1));
            }
        }
    }

    counts
}

/// Every cookie tied for the highest count on `date`, in first-occurrence order.
///
/// Returns `None` if the date has no bucket or the bucket is empty. The date is
/// matched as an opaque key, so `2018-12-9` will not find `2018-12-09`.
pub fn most_active(buckets: &DateBuckets, date: &str) -> Option<Vec<String>> {
    let cookies = buckets.get(date).filter(|cookies| !cookies.is_empty())?;
    let counts = count_occurrences(cookies);
    let max = counts.iter().map(|(_, count)| *count).max()?;

    Some(
        counts
            .into_iter()
            .filter(|(_, count)| *count == max)
            .map(|(cookie, _)| cookie.to_string())
            .collect(),
    )
}
