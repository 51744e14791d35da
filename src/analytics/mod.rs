//! Derived views over a contact snapshot. Everything here is recomputed
//! from scratch on each call.

pub mod company;
pub mod completion;
pub mod recency;
pub mod summary;
pub mod query;


pub use self::{
    company::{
        company_distribution,
        distinct_companies,
        top_companies,
        CompanyDistribution,
        NO_COMPANY,
    },
    completion::completion_rate,
    recency::{is_recent, recent_count, recent_preview},
    summary::DashboardSummary,
};
