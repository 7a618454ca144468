use std::fmt;

use super::escape_html;

pub const DEFAULT_CLASSES: &str = "block text-sm font-medium text-gray-700 mb-2";

/// Caption for a form field, rendered as a `<label>` element.
///
/// Extra classes are appended to the default ones. Attributes are passed through as-is
/// (escaped), and the child content is rendered inside the element.
#[derive(Debug, Clone, Default)]
pub struct Label {
    html_for: Option<String>,
    class_name: String,
    attributes: Vec<(String, String)>,
    children: String,
}

impl Label {
    /// Label with plain-text content.
    pub fn new(text: &str) -> Self {
        Self {
            children: escape_html(text),
            ..Self::default()
        }
    }

    /// Label wrapping already-rendered markup.
    pub fn with_markup(markup: impl Into<String>) -> Self {
        Self {
            children: markup.into(),
            ..Self::default()
        }
    }

    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<label")?;
        if let Some(id) = &self.html_for {
            write!(f, r#" for="{}""#, escape_html(id))?;
        }
        write!(
            f,
            r#" class="{}""#,
            escape_html(format!("{} {}", DEFAULT_CLASSES, self.class_name).trim_end())
        )?;
        for (name, value) in &self.attributes {
            write!(f, r#" {}="{}""#, escape_html(name), escape_html(value))?;
        }
        write!(f, ">{}</label>", self.children)
    }
}
