use crate::input::{Addon, input_group};
use crate::markup::{Attrs, Markup, NULL_MARKER, Wrap, classes};
use crate::{no_space, title};

/// Options of a `<select>`. Pairs are `(label, value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOptions {
    /// Each value is also its label.
    List(Vec<String>),
    Pairs(Vec<(String, String)>),
    Groups(Vec<(String, Vec<(String, String)>)>),
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl SelectOptions {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn pairs<I, L, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        Self::Pairs(pairs.into_iter().map(|(l, v)| (l.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone)]
pub struct Select {
    name: String,
    label: String,
    input_class: String,
    options: SelectOptions,
    selected: Option<String>,
    prepend: Option<String>,
    append: Option<String>,
    required: bool,
    readonly: bool,
    disabled: bool,
    multiple: bool,
    wrap: Wrap,
}

impl Default for Select {
    fn default() -> Self {
        Self::new(NULL_MARKER)
    }
}

impl Select {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            input_class: String::new(),
            options: SelectOptions::default(),
            selected: None,
            prepend: None,
            append: None,
            required: false,
            readonly: false,
            disabled: false,
            multiple: false,
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
    pub fn options(mut self, options: SelectOptions) -> Self {
        self.options = options;
        self
    }

    /// Value of the option rendered with `selected`.
    #[must_use]
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    #[must_use]
    pub fn prepend_label(mut self, label: impl Into<String>) -> Self {
        self.prepend = Some(label.into());
        self
    }

    #[must_use]
    pub fn append_label(mut self, label: impl Into<String>) -> Self {
        self.append = Some(label.into());
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

    fn option(&self, label: &str, value: &str) -> String {
        let selected = if self.selected.as_deref() == Some(value) { " selected" } else { "" };
        format!(r#"<option value="{value}"{selected}>{label}</option>"#)
    }

    pub fn render(&self) -> Markup {
        let name = no_space(&self.name);
        let mut attrs = Attrs::default();
        attrs
            .set("name", &name)
            .set("id", &name)
            .set("class", &classes("form-control", &self.input_class))
            .flag("required", self.required)
            .flag("readonly", self.readonly)
            .flag("disabled", self.disabled)
            .flag("multiple", self.multiple);

        let options: String = match &self.options {
            SelectOptions::List(values) => values.iter().map(|v| self.option(v, v)).collect(),
            SelectOptions::Pairs(pairs) => pairs.iter().map(|(l, v)| self.option(l, v)).collect(),
            SelectOptions::Groups(groups) => groups
                .iter()
                .map(|(group, pairs)| {
                    let inner: String = pairs.iter().map(|(l, v)| self.option(l, v)).collect();
                    format!(r#"<optgroup label="{group}">{inner}</optgroup>"#)
                })
                .collect(),
        };

        let control = format!("<select {}>{options}</select>", attrs.render());
        let prepend = self.prepend.clone().map(Addon::Label);
        let append = self.append.clone().map(Addon::Label);
        let mut html = input_group(control, prepend.as_ref(), append.as_ref());
        if !self.label.is_empty() {
            html = format!(r#"<label for="{name}">{}</label>{html}"#, title(&self.label));
        }
        Markup::new(self.wrap.apply(html))
    }
}
