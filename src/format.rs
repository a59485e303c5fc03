use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// "Posted today", "Posted yesterday" or "Posted N days ago", counting whole
/// days since midnight UTC of `posted`. Future dates read as today.
pub fn posted_label(posted: NaiveDate, now: DateTime<Utc>) -> String {
    let posted_at = posted.and_time(NaiveTime::MIN).and_utc();
    match (now - posted_at).num_days().max(0) {
        0 => "Posted today".to_string(),
        1 => "Posted yesterday".to_string(),
        days => format!("Posted {days} days ago"),
    }
}

/// `"mid-level"` -> `"Mid Level"`.
pub fn facet_label(key: &str) -> String {
    if key.is_empty() {
        return "Not Specified".to_string();
    }
    key.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
