use std::collections::HashMap;
use std::collections::HashSet;

use crate::contacts::Contact;

pub const NO_COMPANY: &str = "No Company";
pub const TOP_COMPANIES: usize = 5;

/// Contact counts per company in first-seen order. Contacts without a
/// company share the [`NO_COMPANY`] bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDistribution {
    entries : Vec<(String, usize)>,
}

impl CompanyDistribution {
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut entries: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for contact in contacts.iter() {
            let company = contact.company().unwrap_or(NO_COMPANY);
            match index.get(company) {
                Some(&pos) => entries[pos].1 += 1,
                None => {
                    index.insert(company, entries.len());
                    entries.push((company.to_string(), 1));
                }
            }
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, company: &str) -> Option<usize> {
        self.entries.iter()
            .find(|(name, _)| name == company)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Category labels for a chart, aligned with [`Self::values`].
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn values(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }

    /// The `n` largest buckets by count; equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut sorted = self.iter().collect::<Vec<_>>();
        // stable sort keeps first-seen order between equal counts.
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

pub fn company_distribution(contacts: &[Contact]) -> CompanyDistribution {
    CompanyDistribution::from_contacts(contacts)
}

pub fn top_companies(contacts: &[Contact]) -> Vec<(String, usize)> {
    company_distribution(contacts)
        .top(TOP_COMPANIES)
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

/// Number of distinct company values; contacts with no company count as
/// one more value.
pub fn distinct_companies(contacts: &[Contact]) -> usize {
    contacts.iter()
        .map(|c| c.company())
        .collect::<HashSet<_>>()
        .len()
}
