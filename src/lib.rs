pub mod core;
pub mod contacts;
pub mod analytics;

pub use crate::core::{
    error::{self, Error},
    config::{self, Config},
    default_configuration as configuration,
    logger,
};

pub use crate::contacts::{
    contact::{self, Contact, ContactBuilder, ContactId, ContactInput, ContactInputBuilder},
    contact_listener::{self, ContactListener},
    validation::{self, Field, FieldErrors},
    transport::{self, Transport},
    api_client::{self, APIClient},
    store::{self, ContactStore, Snapshot},
};

pub use crate::analytics::{
    CompanyDistribution,
    DashboardSummary,
};
