use bigapp_derive::bigapp_error;
use std::borrow::Cow;

#[bigapp_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing field{}: {field}", format_context(.context))]
    MissingField { field: &'static str, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    std::fs::read_to_string("/definitely/not/here").context("reading fixture")
}

fn main() {
    let err = read().expect_err("file should be missing");
    assert!(err.to_string().starts_with("IO error (reading fixture): "));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let missing: Result<(), DemoError> =
        Err(DemoError::MissingField { field: "server", context: None });
    let missing = missing.context("database.main").expect_err("still an error");
    assert_eq!(missing.to_string(), "Missing field (database.main): server");
}
