use bigapp_auth::{
    PasswordHasher, PasswordStyle, generate_alphanumeric_validator, generate_csrf_token,
    generate_email_validator, generate_password, generate_private_key,
};

#[test]
fn csrf_tokens_are_unique_hex() {
    let a = generate_csrf_token();
    let b = generate_csrf_token();
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn private_key_is_stable_for_a_hook() {
    assert_eq!(generate_private_key(Some("hook")), generate_private_key(Some("hook")));
    assert_eq!(
        generate_private_key(Some("abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(generate_private_key(None).len(), 64);
}

#[test]
fn alphanumeric_validators() {
    let code = generate_alphanumeric_validator(12);
    assert_eq!(code.len(), 12);
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert_eq!(generate_email_validator().len(), 8);
}

#[test]
fn zero_length_validator_is_empty() {
    assert_eq!(generate_alphanumeric_validator(0), "");
    assert_eq!(generate_alphanumeric_validator(1).len(), 1);
}

#[test]
fn generated_password_shape() {
    let password = generate_password(PasswordStyle::Animals, 3);
    let digits: String = password.chars().rev().take_while(char::is_ascii_digit).collect();
    assert_eq!(digits.len(), 3);
    let words = &password[..password.len() - 3];
    assert_eq!(words.split('-').count(), 3);
    assert!(words.split('-').all(|w| w.chars().all(|c| c.is_ascii_alphabetic())));
}

#[test]
fn argon2_round_trip() {
    let hasher = PasswordHasher::new();
    let hash = hasher.hash("s3cret").unwrap();
    assert!(hash.starts_with("$argon2id$"));
    assert!(hasher.verify("s3cret", &hash).unwrap());
    assert!(!hasher.verify("wrong", &hash).unwrap());
    assert!(hasher.verify("s3cret", "not-a-hash").is_err());
}
