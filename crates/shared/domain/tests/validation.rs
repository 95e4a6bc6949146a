use bigapp_domain::validation::AllowedSeparators;

#[test]
fn from_str_maps_names() {
    assert_eq!(AllowedSeparators::from("dot"), AllowedSeparators::DOT);
    assert_eq!(AllowedSeparators::from("-"), AllowedSeparators::DASH);
    assert_eq!(AllowedSeparators::from("all"), AllowedSeparators::ALL);
    assert!(AllowedSeparators::from("comma").is_empty());
}

#[test]
fn chars_follow_flags() {
    let set = AllowedSeparators::DOT | AllowedSeparators::UNDER;
    assert_eq!(set.chars().collect::<String>(), "._");
    assert!(set.allows('_'));
    assert!(!set.allows('-'));
    assert_eq!(AllowedSeparators::empty().chars().count(), 0);
}

#[test]
fn serde_uses_bits() {
    let json = serde_json::to_string(&AllowedSeparators::ALL).unwrap();
    assert_eq!(json, "7");
    let parsed: AllowedSeparators = serde_json::from_str("3").unwrap();
    assert_eq!(parsed, AllowedSeparators::DOT | AllowedSeparators::DASH);
}
