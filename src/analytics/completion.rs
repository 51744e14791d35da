use crate::contacts::Contact;

const OPTIONAL_FIELDS: usize = 2;

fn present_fields(contact: &Contact) -> usize {
    contact.phone().is_some() as usize + contact.company().is_some() as usize
}

/// Share of filled optional fields (phone, company) over all contacts, as
/// a percentage in `[0, 100]`. An empty collection yields `0.0`.
pub fn completion_rate(contacts: &[Contact]) -> f64 {
    if contacts.is_empty() {
        return 0.0;
    }

    let present: usize = contacts.iter().map(present_fields).sum();
    let possible = OPTIONAL_FIELDS * contacts.len();
    present as f64 / possible as f64 * 100.0
}
