use std::borrow::Cow;

#[bigapp_derive::bigapp_error]
pub enum AuthError {
    #[error("Password hashing failed{}: {message}", format_context(.context))]
    Hash { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid password hash{}: {message}", format_context(.context))]
    InvalidHash { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid password style '{style}', expected animals, colors or mixed{}", format_context(.context))]
    InvalidStyle { style: String, context: Option<Cow<'static, str>> },
}
