use super::*;

#[test]
fn login_headers_carry_only_csrf() {
    assert_eq!(login_headers("tok-1"), [("X-CSRFToken", "tok-1".to_owned())]);
}

#[test]
fn logout_headers_carry_only_csrf() {
    assert_eq!(logout_headers("tok-2"), [("X-CSRFToken", "tok-2".to_owned())]);
}
