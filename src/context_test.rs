use super::*;
use crate::test_support::FakePage;

#[test]
fn reads_csrf_token_and_session() {
    let page = FakePage::full();
    let ctx = PageContext::read(&page, SessionState::Anonymous).unwrap();
    assert_eq!(ctx.csrf_token, "csrf-123");
    assert_eq!(ctx.session, SessionState::Anonymous);
}

#[test]
fn missing_login_toggle_aborts() {
    let page = FakePage::full().without(Target::LoginToggle);
    let err = PageContext::read(&page, SessionState::Authenticated).unwrap_err();
    assert_eq!(err, WidgetError::missing("#login-toggle"));
}

#[test]
fn missing_form_aborts_when_anonymous() {
    let page = FakePage::full().without(Target::LoginForm);
    let err = PageContext::read(&page, SessionState::Anonymous).unwrap_err();
    assert_eq!(err, WidgetError::missing("#login-form"));
}

#[test]
fn form_elements_are_optional_when_authenticated() {
    let page = FakePage::full()
        .without(Target::LoginForm)
        .without(Target::LoginFormWrapper)
        .without(Target::LoginError);
    assert!(PageContext::read(&page, SessionState::Authenticated).is_ok());
}

#[test]
fn missing_csrf_meta_aborts() {
    let page = FakePage::full().without_csrf();
    let err = PageContext::read(&page, SessionState::Anonymous).unwrap_err();
    assert_eq!(err, WidgetError::missing("meta[name=\"csrf-token\"]"));
}
