use crate::analytics::completion_rate;
use super::contact;

#[test]
fn test_empty_rate() {
    assert_eq!(completion_rate(&[]), 0.0);
}

#[test]
fn test_rate_scenario() {
    let contacts = vec![
        contact(1, "A", Some("123"), Some("Acme")),
        contact(2, "B", None, None),
    ];
    assert_eq!(completion_rate(&contacts), 50.0);
}

#[test]
fn test_rate_bounds() {
    let full = vec![
        contact(1, "A", Some("123"), Some("Acme")),
        contact(2, "B", Some("456"), Some("Globex")),
    ];
    assert_eq!(completion_rate(&full), 100.0);

    let bare = vec![
        contact(1, "A", None, None),
        contact(2, "B", None, None),
    ];
    assert_eq!(completion_rate(&bare), 0.0);
}

#[test]
fn test_rate_partial() {
    let contacts = vec![
        contact(1, "A", Some("123"), None),
        contact(2, "B", None, Some("Acme")),
        contact(3, "C", None, None),
        contact(4, "D", Some("789"), Some("Acme")),
    ];
    // 4 of 8 optional fields present.
    assert_eq!(completion_rate(&contacts), 50.0);

    let contacts = &contacts[..3];
    let rate = completion_rate(contacts);
    assert!((rate - 200.0 / 6.0).abs() < 1e-9);
}
