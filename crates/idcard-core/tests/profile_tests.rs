// Host-side tests for the edit mode.

use idcard_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn field_keys_round_trip() {
    for field in ProfileField::ALL {
        assert_eq!(ProfileField::from_key(field.key()), Some(field));
        assert_eq!(field.to_string(), field.key());
    }
    assert_eq!(ProfileField::from_key("avatar"), None);
}

#[test]
fn edits_report_the_full_record_on_change_only() {
    let seen: Rc<RefCell<Vec<ProfileFields>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut state = EditState::new(ProfileFields::default())
        .with_on_change(move |fields| sink.borrow_mut().push(fields.clone()));

    assert!(state.set_field(ProfileField::Role, "Security Engineer"));
    assert!(!state.set_field(ProfileField::Role, "Security Engineer"));
    assert_eq!(seen.borrow().len(), 1);
    let last = seen.borrow()[0].clone();
    assert_eq!(last.role, "Security Engineer");
    assert_eq!(last.name, ProfileFields::default().name);
    assert_eq!(state.fields().get(ProfileField::Role), "Security Engineer");
}

#[test]
fn edit_toggle_flips_mode() {
    let mut state = EditState::new(ProfileFields::default());
    assert!(!state.is_editing());
    assert!(state.toggle_editing());
    assert!(state.is_editing());
    assert!(!state.toggle_editing());
    state.set_editing(true);
    state.set_editing(true);
    assert!(state.is_editing());
}

#[test]
fn link_fields_produce_hrefs() {
    let mut fields = ProfileFields::default();
    fields.email = "a@b.dev".into();
    fields.github = "github.com/someone".into();
    fields.linkedin = "https://linkedin.com/in/someone".into();
    assert_eq!(fields.href(ProfileField::Email).as_deref(), Some("mailto:a@b.dev"));
    assert_eq!(
        fields.href(ProfileField::Github).as_deref(),
        Some("https://github.com/someone")
    );
    assert_eq!(
        fields.href(ProfileField::Linkedin).as_deref(),
        Some("https://linkedin.com/in/someone")
    );
    assert_eq!(fields.href(ProfileField::Name), None);
    fields.email = "  ".into();
    assert_eq!(fields.href(ProfileField::Email), None);
}
