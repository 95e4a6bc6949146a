use serde::Serialize;
use std::fmt;

/// Placeholder replaced by the element name when the element is added to a [`crate::FormSet`].
pub const NULL_MARKER: &str = ":null:";

/// Raw HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Replaces every [`NULL_MARKER`] with `name`.
    #[must_use]
    pub fn replace_marker(&self, name: &str) -> Self {
        Self(self.0.replace(NULL_MARKER, name))
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for Markup {
    fn from(html: &str) -> Self {
        Self(html.to_owned())
    }
}

/// Optional `<div>` wrappers around an element: `class` outermost, `inner_class` inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wrap {
    pub class: Option<String>,
    pub inner_class: Option<String>,
}

impl Wrap {
    pub fn class(class: impl Into<String>) -> Self {
        Self { class: Some(class.into()), inner_class: None }
    }

    #[must_use]
    pub fn inner(mut self, inner_class: impl Into<String>) -> Self {
        self.inner_class = Some(inner_class.into());
        self
    }

    pub(crate) fn apply(&self, html: String) -> String {
        let html = match &self.inner_class {
            Some(inner) => format!(r#"<div class="{inner}">{html}</div>"#),
            None => html,
        };
        match &self.class {
            Some(outer) => format!(r#"<div class="{outer}">{html}</div>"#),
            None => html,
        }
    }
}

/// Space separated attribute list.
#[derive(Debug, Default)]
pub(crate) struct Attrs(Vec<String>);

impl Attrs {
    pub(crate) fn set(&mut self, name: &str, value: &str) -> &mut Self {
        self.0.push(format!(r#"{name}="{value}""#));
        self
    }

    pub(crate) fn flag(&mut self, name: &str, on: bool) -> &mut Self {
        if on {
            self.0.push(name.to_owned());
        }
        self
    }

    pub(crate) fn render(&self) -> String {
        self.0.join(" ")
    }
}

/// `"form-control extra"` or `"form-control"` when `extra` is empty.
pub(crate) fn classes(base: &str, extra: &str) -> String {
    if extra.trim().is_empty() { base.to_owned() } else { format!("{base} {}", extra.trim()) }
}
