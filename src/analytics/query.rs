use crate::contacts::Contact;

/// Case-insensitive substring search over name, email and company.
/// An empty term matches every contact. Whitespace is matched literally.
pub fn filter<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return contacts.iter().collect();
    }

    contacts.iter().filter(|c| {
        c.name().to_lowercase().contains(&term) ||
            c.email().to_lowercase().contains(&term) ||
            c.company().map_or(false, |v| v.to_lowercase().contains(&term))
    }).collect()
}

/// Zero-based page of `per_page` items. Pages past the end are empty.
pub fn page<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let Some(start) = page.checked_mul(per_page) else {
        return &[];
    };
    if per_page == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    match per_page {
        0 => 0,
        n => total.div_ceil(n),
    }
}
