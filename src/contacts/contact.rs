use std::fmt;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::Result;
use super::validation;

pub type ContactId = u64;

pub struct ContactBuilder {
    id          : ContactId,
    name        : Option<String>,
    email       : Option<String>,
    phone       : Option<String>,
    company     : Option<String>,
    created_at  : DateTime<Utc>,
    updated_at  : Option<DateTime<Utc>>,
}

impl ContactBuilder {
    pub fn new(id: ContactId) -> Self {
        Self {
            id,
            name        : None,
            email       : None,
            phone       : None,
            company     : None,
            created_at  : DateTime::<Utc>::default(),
            updated_at  : None,
        }
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_email(&mut self, email: &str) -> &mut Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_phone(&mut self, phone: &str) -> &mut Self {
        self.phone = non_blank(phone);
        self
    }

    pub fn with_company(&mut self, company: &str) -> &mut Self {
        self.company = non_blank(company);
        self
    }

    pub fn with_created_at(&mut self, created: DateTime<Utc>) -> &mut Self {
        self.created_at = created;
        self
    }

    pub fn with_updated_at(&mut self, updated: DateTime<Utc>) -> &mut Self {
        self.updated_at = Some(updated);
        self
    }

    pub fn build(&mut self) -> Contact {
        Contact {
            id:         self.id,
            name:       self.name.take().unwrap_or_default(),
            email:      self.email.take().unwrap_or_default(),
            phone:      self.phone.take(),
            company:    self.company.take(),
            created_at: self.created_at,
            updated_at: self.updated_at.unwrap_or(self.created_at),
        }
    }
}

/// One CRM record as the backend stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "id")]
    id:         ContactId,

    #[serde(rename = "name")]
    name:       String,
    #[serde(rename = "email")]
    email:      String,

    #[serde(rename = "phone", default, deserialize_with = "blank_as_none")]
    phone:      Option<String>,
    #[serde(rename = "company", default, deserialize_with = "blank_as_none")]
    company:    Option<String>,

    #[serde(rename = "created_at", deserialize_with = "lenient_timestamp")]
    created_at: DateTime<Utc>,
    #[serde(rename = "updated_at", deserialize_with = "lenient_timestamp")]
    updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    /// Whether every user supplied field equals the given input.
    pub fn matches(&self, input: &ContactInput) -> bool {
        self.name == input.name &&
            self.email == input.email &&
            self.phone == input.phone &&
            self.company == input.company
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} <{}>", self.id, self.name, self.email)?;
        if let Some(company) = self.company.as_ref() {
            write!(f, " @{}", company)?;
        }
        Ok(())
    }
}

/// The fields a caller supplies when creating a contact. Only obtainable
/// through [`ContactInputBuilder::build`], which validates them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInput {
    #[serde(rename = "name")]
    name:       String,
    #[serde(rename = "email")]
    email:      String,
    #[serde(rename = "phone", skip_serializing_if = "Option::is_none")]
    phone:      Option<String>,
    #[serde(rename = "company", skip_serializing_if = "Option::is_none")]
    company:    Option<String>,
}

impl ContactInput {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }
}

#[derive(Default)]
pub struct ContactInputBuilder {
    name    : String,
    email   : String,
    phone   : String,
    company : String,
}

impl ContactInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn with_email(&mut self, email: &str) -> &mut Self {
        self.email = email.to_string();
        self
    }

    pub fn with_phone(&mut self, phone: &str) -> &mut Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_company(&mut self, company: &str) -> &mut Self {
        self.company = company.to_string();
        self
    }

    pub fn build(&self) -> Result<ContactInput> {
        validation::validate(&self.name, &self.email, &self.phone)?;

        Ok(ContactInput {
            name:    self.name.clone(),
            email:   self.email.clone(),
            phone:   non_blank(&self.phone),
            company: non_blank(&self.company),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    match value.is_empty() {
        true => None,
        false => Some(value.to_string()),
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| non_blank(&v)))
}

// Timestamps without an offset are read as UTC.
const NAIVE_FORMATS: [&str; 2] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&value) {
        return Ok(ts.with_timezone(&Utc));
    }

    NAIVE_FORMATS.iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&value, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| serde::de::Error::custom(
            format!("invalid timestamp: {}", value)
        ))
}
