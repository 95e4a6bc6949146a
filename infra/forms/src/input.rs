use crate::markup::{Attrs, Markup, NULL_MARKER, Wrap, classes};
use crate::{no_space, title};

/// Text or a button attached to one side of an input group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addon {
    Label(String),
    Button(Markup),
}

impl Addon {
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    pub fn button(button: impl Into<Markup>) -> Self {
        Self::Button(button.into())
    }

    pub(crate) fn render(&self, side: &str) -> String {
        let inner = match self {
            Self::Label(text) => {
                format!(r#"<span class="input-group-text" id="inputGroup-sizing-default">{text}</span>"#)
            },
            Self::Button(button) => button.to_string(),
        };
        format!(r#"<div class="input-group-{side}">{inner}</div>"#)
    }
}

/// Wraps `control` in an input group when either side has an addon.
pub(crate) fn input_group(control: String, prepend: Option<&Addon>, append: Option<&Addon>) -> String {
    if prepend.is_none() && append.is_none() {
        return control;
    }
    let before = prepend.map(|a| a.render("prepend")).unwrap_or_default();
    let after = append.map(|a| a.render("append")).unwrap_or_default();
    format!(r#"<div class="input-group">{before}{control}{after}</div>"#)
}

/// `<input>` with optional label, addons and wrappers.
#[derive(Debug, Clone)]
pub struct Input {
    name: String,
    label: String,
    input_type: String,
    placeholder: String,
    input_class: String,
    value: Option<String>,
    prepend: Option<Addon>,
    append: Option<Addon>,
    required: bool,
    readonly: bool,
    disabled: bool,
    multiple: bool,
    wrap: Wrap,
}

impl Default for Input {
    fn default() -> Self {
        Self::new(NULL_MARKER)
    }
}

impl Input {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            input_type: "text".to_owned(),
            placeholder: String::new(),
            input_class: String::new(),
            value: None,
            prepend: None,
            append: None,
            required: false,
            readonly: false,
            disabled: false,
            multiple: false,
            wrap: Wrap::default(),
        }
    }

    /// Shown title-cased above the input.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn input_class(mut self, class: impl Into<String>) -> Self {
        self.input_class = class.into();
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn prepend(mut self, addon: Addon) -> Self {
        self.prepend = Some(addon);
        self
    }

    #[must_use]
    pub fn append(mut self, addon: Addon) -> Self {
        self.append = Some(addon);
        self
    }

    #[must_use]
    pub const fn required(mut self, on: bool) -> Self {
        self.required = on;
        self
    }

    #[must_use]
    pub const fn readonly(mut self, on: bool) -> Self {
        self.readonly = on;
        self
    }

    #[must_use]
    pub const fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    #[must_use]
    pub const fn multiple(mut self, on: bool) -> Self {
        self.multiple = on;
        self
    }

    #[must_use]
    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn render(&self) -> Markup {
        let name = no_space(&self.name);
        let mut attrs = Attrs::default();
        attrs
            .set("type", &self.input_type)
            .set("name", &name)
            .set("id", &name)
            .set("class", &classes("form-control", &self.input_class));
        if let Some(value) = self.value.as_deref().filter(|v| !v.is_empty()) {
            attrs.set("value", value);
        }
        if !self.placeholder.is_empty() {
            attrs.set("placeholder", &self.placeholder);
        }
        attrs
            .flag("required", self.required)
            .flag("readonly", self.readonly)
            .flag("disabled", self.disabled)
            .flag("multiple", self.multiple);

        let control = format!("<input {} />", attrs.render());
        let mut html = input_group(control, self.prepend.as_ref(), self.append.as_ref());
        if !self.label.is_empty() {
            html = format!(r#"<label for="{name}" class="mb-2">{}</label>{html}"#, title(&self.label));
        }
        Markup::new(self.wrap.apply(html))
    }
}
