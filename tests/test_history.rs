use rpawogen::history::PasswordHistory;

#[test]
fn test_append_and_display_order() {
    let mut history = PasswordHistory::new();
    history.append("first");
    history.append("second");
    history.append("third");

    // index 0 is the most recently generated password
    assert_eq!(history.len(), 3);
    assert_eq!(history.get(0).unwrap().password, "third");
    assert_eq!(history.get(1).unwrap().password, "second");
    assert_eq!(history.get(2).unwrap().password, "first");
    assert!(history.get(3).is_none());
    assert_eq!(history.current(), Some("third"));
}

#[test]
fn test_append_ignores_empty_password() {
    let mut history = PasswordHistory::new();
    assert!(history.append("").is_none());
    assert!(history.is_empty());

    history.append("abc123");
    assert!(history.append("").is_none());
    assert_eq!(history.len(), 1);
}

#[test]
fn test_clear_empties_history() {
    let mut history = PasswordHistory::new();
    history.append("one");
    history.append("two");
    history.clear();

    assert!(history.is_empty());
    assert_eq!(history.current(), None);
    assert!(history.get(0).is_none());
}

#[test]
fn test_iter_most_recent_first() {
    let mut history = PasswordHistory::new();
    history.append("p1");
    history.append("p2");

    let passwords: Vec<&str> = history.iter().map(|e| e.password.as_str()).collect();
    assert_eq!(passwords, vec!["p2", "p1"]);
}
