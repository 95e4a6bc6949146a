use std::borrow::Cow;

#[bigapp_derive::bigapp_error]
pub enum GatedError {
    #[cfg(any())]
    #[error("never compiled{}: {source}", format_context(.context))]
    Never { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: GatedError = String::from("gated").into();
    assert!(matches!(err, GatedError::Internal { .. }));
}
