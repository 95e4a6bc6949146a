use crate::markup::{Attrs, Markup, NULL_MARKER, Wrap, classes};
use crate::no_space;

/// `<input type="hidden">` whose name and id are `name` without spaces.
pub fn hidden(name: &str, value: &str) -> Markup {
    let name = no_space(name);
    Markup::new(format!(r#"<input type="hidden" name="{name}" id="{name}" value="{value}" />"#))
}

/// Bootstrap switch (a checkbox styled as a toggle).
#[derive(Debug, Clone)]
pub struct Switch {
    name: String,
    label: String,
    input_class: String,
    onclick: String,
    checked: bool,
    disabled: bool,
    required: bool,
    wrap: Wrap,
}

impl Default for Switch {
    fn default() -> Self {
        Self::new(NULL_MARKER)
    }
}

impl Switch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            input_class: String::new(),
            onclick: String::new(),
            checked: false,
            disabled: false,
            required: false,
            wrap: Wrap::default(),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn input_class(mut self, class: impl Into<String>) -> Self {
        self.input_class = class.into();
        self
    }

    #[must_use]
    pub fn onclick(mut self, script: impl Into<String>) -> Self {
        self.onclick = script.into();
        self
    }

    #[must_use]
    pub const fn checked(mut self, on: bool) -> Self {
        self.checked = on;
        self
    }

    #[must_use]
    pub const fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    #[must_use]
    pub const fn required(mut self, on: bool) -> Self {
        self.required = on;
        self
    }

    #[must_use]
    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn render(&self) -> Markup {
        let mut attrs = Attrs::default();
        attrs
            .set("class", &classes("form-check-input", &self.input_class))
            .set("type", "checkbox")
            .set("name", &self.name)
            .set("id", &self.name);
        if !self.onclick.is_empty() {
            attrs.set("onclick", &self.onclick);
        }
        attrs.flag("checked", self.checked).flag("disabled", self.disabled).flag("required", self.required);

        let mut html = format!(r#"<div class="form-check form-switch"><input {}>"#, attrs.render());
        if !self.label.is_empty() {
            html.push_str(&format!(r#"<label class="form-check-label" for="{}">{}</label>"#, self.name, self.label));
        }
        html.push_str("</div>");
        Markup::new(self.wrap.apply(html))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonAction {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonAction {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonElement {
    Button(ButtonAction),
    /// `<a role="button">`.
    Anchor { href: String, target: Option<String> },
}

impl Default for ButtonElement {
    fn default() -> Self {
        Self::Button(ButtonAction::default())
    }
}

/// Bootstrap button, rendered as `<button>` or as a link.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    element: ButtonElement,
    class: Option<String>,
    disabled: bool,
    wrap: Wrap,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            element: ButtonElement::default(),
            class: None,
            disabled: false,
            wrap: Wrap::default(),
        }
    }

    pub fn submit(label: impl Into<String>) -> Self {
        Self::new(label).element(ButtonElement::Button(ButtonAction::Submit))
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(label).element(ButtonElement::Anchor { href: href.into(), target: None })
    }

    #[must_use]
    pub fn element(mut self, element: ButtonElement) -> Self {
        self.element = element;
        self
    }

    /// Extra classes; `btn` is always present.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub const fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    #[must_use]
    pub fn wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    fn class_list(&self) -> String {
        match self.class.as_deref().map(str::trim) {
            Some(class) if class == "btn" || class.starts_with("btn ") => class.to_owned(),
            Some(class) => classes("btn", class),
            None => "btn".to_owned(),
        }
    }

    pub fn render(&self) -> Markup {
        let mut attrs = Attrs::default();
        let html = match &self.element {
            ButtonElement::Anchor { href, target } => {
                let class = if self.disabled { format!("{} disabled", self.class_list()) } else { self.class_list() };
                attrs.set("href", href).set("class", &class);
                if let Some(target) = target {
                    attrs.set("target", target);
                }
                attrs.set("role", "button");
                format!("<a {}>{}</a>", attrs.render(), self.label)
            },
            ButtonElement::Button(action) => {
                attrs.set("type", action.as_str()).set("class", &self.class_list()).flag("disabled", self.disabled);
                format!("<button {}>{}</button>", attrs.render(), self.label)
            },
        };
        Markup::new(self.wrap.apply(html))
    }
}
