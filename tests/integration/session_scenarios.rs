use workpad::session::{CloseOutcome, Session};

#[test]
fn tab_order_is_first_open_order() {
    let mut session = Session::new();
    assert!(session.open("a.js"));
    assert!(session.open("b.ts"));
    assert!(!session.open("a.js"));
    assert_eq!(session.tabs(), ["a.js".to_string(), "b.ts".to_string()]);
    assert_eq!(session.active(), Some("a.js"));
}

#[test]
fn closing_walks_left_until_empty() {
    let mut session = Session::new();
    for tab in ["a", "b", "c"] {
        session.open(tab);
    }
    assert_eq!(session.close_active(), CloseOutcome::Reselected("b".to_string()));
    assert_eq!(session.close_active(), CloseOutcome::Reselected("a".to_string()));
    assert_eq!(session.close_active(), CloseOutcome::Emptied);
    assert!(session.tabs().is_empty());
    assert_eq!(session.active(), None);
    assert_eq!(session.close_active(), CloseOutcome::NotActive);
}

#[test]
fn inactive_tab_cannot_be_closed() {
    let mut session = Session::new();
    session.open("a");
    session.open("b");
    assert_eq!(session.close("a"), CloseOutcome::NotActive);
    assert_eq!(session.tabs().len(), 2);
    assert!(session.is_active("b"));
}
