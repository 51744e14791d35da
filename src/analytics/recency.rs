use chrono::{DateTime, Duration, Utc};

use crate::contacts::Contact;

pub const RECENT_DAYS: i64 = 7;
pub const RECENT_PREVIEW: usize = 6;

fn cutoff(now: &DateTime<Utc>) -> DateTime<Utc> {
    *now - Duration::days(RECENT_DAYS)
}

/// Created strictly after `now - 7 days`.
pub fn is_recent(contact: &Contact, now: &DateTime<Utc>) -> bool {
    contact.created_at() > &cutoff(now)
}

pub fn recent_count(contacts: &[Contact], now: &DateTime<Utc>) -> usize {
    let since = cutoff(now);
    contacts.iter()
        .filter(|c| c.created_at() > &since)
        .count()
}

/// The first recent contacts in collection order, at most [`RECENT_PREVIEW`].
pub fn recent_preview<'a>(contacts: &'a [Contact], now: &DateTime<Utc>) -> Vec<&'a Contact> {
    let since = cutoff(now);
    contacts.iter()
        .filter(|c| c.created_at() > &since)
        .take(RECENT_PREVIEW)
        .collect()
}
