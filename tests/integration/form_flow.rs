//! Integration tests for the create/edit flow over a file-backed slot

use super::common::fixtures::TestDataDir;
use super::common::terminal::{render_app, screen_contains};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster::{App, City, EditMode, Field, FormSession, GenderFlag, SaveOutcome, TextField};

fn fill(session: &mut FormSession, name: &str, id: &str, city: &str, flag: GenderFlag) {
    session.update_field(TextField::Name, name);
    session.update_field(TextField::EmployeeId, id);
    session.update_field(TextField::City, city);
    session.toggle_gender(flag);
}

/// Saving survives a restart with the same records in the same order
#[test]
fn test_records_survive_restart() {
    let data = TestDataDir::new();
    let mut store = data.open_store();
    let mut session = FormSession::new();

    fill(&mut session, "Alice", "42", "Tokyo", GenderFlag::Female);
    assert!(session.save(&mut store).unwrap().is_saved());
    fill(&mut session, "Bob", "7", "London", GenderFlag::Male);
    assert!(session.save(&mut store).unwrap().is_saved());

    let restarted = data.open_store();
    assert_eq!(restarted.all(), store.all());
    assert_eq!(restarted.all()[0].name, "Alice");
    assert_eq!(restarted.all()[1].name, "Bob");
}

/// Editing after a restart replaces the record on disk, not appends
#[test]
fn test_edit_after_restart() {
    let data = TestDataDir::new();
    {
        let mut store = data.open_store();
        let mut session = FormSession::new();
        fill(&mut session, "Alice", "42", "Tokyo", GenderFlag::Female);
        session.save(&mut store).unwrap();
    }

    let mut store = data.open_store();
    let mut session = FormSession::new();
    assert!(session.begin_edit(&store, "Alice"));
    assert!(matches!(session.mode(), EditMode::Editing { original_name, .. } if original_name == "Alice"));
    session.update_field(TextField::City, "London");
    let outcome = session.save(&mut store).unwrap();
    assert!(matches!(outcome, SaveOutcome::Updated(_)));

    let reloaded = data.open_store();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.all()[0].city, City::London);
}

/// Data written by the browser version of the form (no ids, placeholder
/// city) still loads
#[test]
fn test_loads_legacy_browser_data() {
    let data = TestDataDir::new();
    data.seed(
        r#"[{"name":"Carol","employeeId":"9","city":"Select City","gender":{"male":false,"female":true}},
            {"name":"Dan","employeeId":"10","city":"New York"}]"#,
    );

    let mut store = data.open_store();
    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].city, City::Unselected);
    assert!(!store.all()[1].gender.male && !store.all()[1].gender.female);

    // A legacy record missing required fields has to be fixed before it saves
    let mut session = FormSession::new();
    session.begin_edit(&store, "Dan");
    assert_eq!(session.save(&mut store).unwrap(), SaveOutcome::Invalid);
    assert_eq!(session.errors().fields().collect::<Vec<_>>(), vec![Field::Gender]);

    session.toggle_gender(GenderFlag::Male);
    session.save(&mut store).unwrap();

    let slot = data.read_slot();
    assert!(slot.contains("\"id\""));
    assert!(data.open_store().all()[1].gender.male);
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let data = TestDataDir::new();
    data.seed("{not json");
    assert!(data.open_store().is_empty());
}

#[test]
fn test_app_over_file_slot() {
    let data = TestDataDir::new();
    let mut app = App::from_config(data.config.clone());

    for c in "Eve".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    for c in "5".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert!(screen_contains(&mut app, "Saved Data (1)"));
    assert!(render_app(&mut app).contains("Name: Eve, Employee ID: 5, City: New York, Gender: Male"));

    let reloaded = data.open_store();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.all()[0].city, City::NewYork);
}
