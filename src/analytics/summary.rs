use std::fmt;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::contacts::Contact;
use super::{
    company::distinct_companies,
    completion::completion_rate,
    recency::recent_count,
};

/// Headline numbers of the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    #[serde(rename = "total")]
    pub total       : usize,
    #[serde(rename = "companies")]
    pub companies   : usize,
    #[serde(rename = "recent")]
    pub recent      : usize,
    #[serde(rename = "completionRate")]
    pub completion  : f64,
}

impl DashboardSummary {
    pub fn from_contacts(contacts: &[Contact], now: &DateTime<Utc>) -> Self {
        Self {
            total       : contacts.len(),
            companies   : distinct_companies(contacts),
            recent      : recent_count(contacts, now),
            completion  : completion_rate(contacts),
        }
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "total:{},companies:{},recent:{},completion:{:.1}%",
            self.total,
            self.companies,
            self.recent,
            self.completion
        )
    }
}
