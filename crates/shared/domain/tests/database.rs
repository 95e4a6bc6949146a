use bigapp_domain::database::{DatabaseBinding, Dialect, UnknownDialect};

#[test]
fn dialect_parses_case_insensitively() {
    assert_eq!("SQLite".parse::<Dialect>(), Ok(Dialect::Sqlite));
    assert_eq!(" postgresql ".parse::<Dialect>(), Ok(Dialect::Postgresql));
    assert_eq!("mssql".parse::<Dialect>(), Ok(Dialect::Mssql));
}

#[test]
fn unknown_dialect_lists_allowed_ones() {
    let err = "mongodb".parse::<Dialect>().unwrap_err();
    assert_eq!(err, UnknownDialect("mongodb".to_owned()));
    let msg = err.to_string();
    assert!(msg.contains("mongodb"));
    for dialect in Dialect::ALL {
        assert!(msg.contains(dialect.as_str()), "{msg} should list {dialect}");
    }
}

#[test]
fn only_sqlite_is_local() {
    assert!(!Dialect::Sqlite.is_networked());
    assert!(Dialect::ALL.iter().filter(|d| d.is_networked()).count() == 4);
}

#[test]
fn sqlite_binding_defaults() {
    let binding = DatabaseBinding::sqlite("main", "app");
    assert!(binding.is_main());
    assert!(binding.enabled);
    assert_eq!(binding.extension, ".sqlite");
    assert_eq!(binding.database_name.as_deref(), Some("app"));
    assert!(binding.host.is_none());
}

#[test]
fn debug_output_hides_password() {
    let mut binding = DatabaseBinding::new("reports", Dialect::Mysql);
    binding.password = Some("hunter2".to_owned());
    let debug = format!("{binding:?}");
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("***"));
}

#[test]
fn dialect_serializes_lowercase() {
    let json = serde_json::to_string(&Dialect::Postgresql).unwrap();
    assert_eq!(json, "\"postgresql\"");
}
