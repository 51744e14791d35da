use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern")
});

// optional leading '+', then 1 to 16 digits with no leading zero.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name  => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field   : Field,
    message : &'static str,
}

impl FieldError {
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn message(&self) -> &str {
        self.message
    }
}

/// Per-field validation failures, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in self.errors.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
            first = false;
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Interior whitespace is ignored, so "+1 555 0100" is accepted.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    PHONE_PATTERN.is_match(&digits)
}

pub(crate) fn validate(name: &str, email: &str, phone: &str) -> Result<(), FieldErrors> {
    let mut errs = FieldErrors::default();

    if name.trim().is_empty() {
        errs.push(Field::Name, "Name is required");
    }

    if email.trim().is_empty() {
        errs.push(Field::Email, "Email is required");
    } else if !is_valid_email(email) {
        errs.push(Field::Email, "Email is invalid");
    }

    if !phone.is_empty() && !is_valid_phone(phone) {
        errs.push(Field::Phone, "Phone number is invalid");
    }

    match errs.is_empty() {
        true => Ok(()),
        false => Err(errs),
    }
}
