use bigapp_auth::{AllowedSeparators, is_email_address_valid, is_username_valid};

#[test]
fn usernames_follow_separator_rules() {
    assert!(is_username_valid("user.name", AllowedSeparators::DOT));
    assert!(is_username_valid("user123", AllowedSeparators::empty()));
    assert!(is_username_valid("user-name.name", AllowedSeparators::DOT | AllowedSeparators::DASH));

    assert!(!is_username_valid("_user", AllowedSeparators::ALL));
    assert!(!is_username_valid("user.", AllowedSeparators::ALL));
    assert!(!is_username_valid("user_name", AllowedSeparators::DOT | AllowedSeparators::DASH));
    assert!(!is_username_valid("user.name", AllowedSeparators::empty()));
    assert!(!is_username_valid("user name", AllowedSeparators::ALL));
    assert!(!is_username_valid("", AllowedSeparators::ALL));
}

#[test]
fn all_allows_every_separator() {
    for name in ["user.name", "user-name", "user_name", "a.b-c_d"] {
        assert!(is_username_valid(name, AllowedSeparators::ALL), "{name}");
    }
}

#[test]
fn emails() {
    for ok in ["email@example.com", "first.last@sub.example.co.uk", "X+tag@Example.COM"] {
        assert!(is_email_address_valid(ok), "{ok}");
    }
    for bad in ["plainaddress", "@example.com", "email@", "email@-example.com", "a@b.com (Joe)"] {
        assert!(!is_email_address_valid(bad), "{bad}");
    }
}
