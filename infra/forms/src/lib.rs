//! HTML form element builders producing Bootstrap markup.
//!
//! Builders concatenate strings and never escape: labels, values and class names are
//! inserted exactly as given. Render the result with `| safe` in templates.
//!
//! ```rust
//! use bigapp_forms::{Addon, Input};
//!
//! let html = Input::new("Email Address")
//!     .input_type("email")
//!     .label("email address")
//!     .prepend(Addon::label("@"))
//!     .required(true)
//!     .render();
//! assert!(html.as_str().starts_with(r#"<label for="emailaddress" class="mb-2">Email Address</label>"#));
//! ```

mod elements;
mod form_set;
mod input;
mod markup;
mod select;

pub use elements::{Button, ButtonAction, ButtonElement, Switch, hidden};
pub use form_set::{FormEntry, FormSet};
pub use input::{Addon, Input};
pub use markup::{Markup, NULL_MARKER, Wrap};
pub use select::{Select, SelectOptions};

/// `"First Name"` → `"firstname"`, used for `name` and `id` attributes.
pub fn no_space(name: &str) -> String {
    name.replace(' ', "").to_lowercase()
}

/// Capitalizes the first letter of each word and lowercases the rest.
pub fn title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_titles() {
        assert_eq!(no_space("First Name"), "firstname");
        assert_eq!(title("first name"), "First Name");
        assert_eq!(title("e-MAIL address"), "E-Mail Address");
    }
}
