use super::*;

#[test]
fn token_starts_absent() {
    clear();
    assert_eq!(current(), None);
}

#[test]
fn set_then_current_round_trips() {
    set("abc123");
    assert_eq!(current(), Some("abc123".to_owned()));
    clear();
}

#[test]
fn clear_drops_the_token() {
    set("abc123");
    clear();
    assert_eq!(current(), None);
}
