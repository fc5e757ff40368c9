//! Content resolution
//!
//! Decides, per binding, which source is authoritative for tooltip content:
//! a projected template wins over an inline `content` prop, which wins over
//! the plain content attribute read from the host element at creation.

mod template;

use std::fmt;

use crate::element::{CONTENT_ATTRIBUTE, HostElement};
use crate::props::Props;

pub use template::{Fragment, Template};

/// Renderable content handed to an instance
#[derive(Clone, PartialEq)]
pub enum Content {
    Text(String),
    Html(String),
    Fragment(Fragment),
}

impl Content {
    /// Interpret a string prop, honouring `allowHTML`
    pub fn from_prop(value: &str, allow_html: bool) -> Self {
        if allow_html {
            Content::Html(value.to_string())
        } else {
            Content::Text(value.to_string())
        }
    }

    pub fn empty() -> Self {
        Content::Text(String::new())
    }

    /// Text or markup for display purposes
    pub fn as_markup(&self) -> &str {
        match self {
            Content::Text(text) | Content::Html(text) => text,
            Content::Fragment(fragment) => fragment.markup(),
        }
    }

    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            Content::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Content::Html(html) => f.debug_tuple("Html").field(html).finish(),
            Content::Fragment(fragment) => f.debug_tuple("Fragment").field(fragment).finish(),
        }
    }
}

/// Where a binding's content comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    PlainAttribute { value: String, allow_html: bool },
    InlineProp { value: String, allow_html: bool },
    ProjectedTemplate(Template),
}

impl ContentSource {
    pub fn is_template(&self) -> bool {
        matches!(self, ContentSource::ProjectedTemplate(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentSource::PlainAttribute { .. } => "attribute",
            ContentSource::InlineProp { .. } => "inline",
            ContentSource::ProjectedTemplate(_) => "template",
        }
    }
}

/// Per-binding resolver; remembers what was read at creation
#[derive(Debug, Default)]
pub struct ContentResolver {
    template: Option<Template>,
    attribute: Option<String>,
    source: Option<ContentSource>,
}

impl ContentResolver {
    pub fn new(template: Option<Template>) -> Self {
        Self {
            template,
            attribute: None,
            source: None,
        }
    }

    pub fn source(&self) -> Option<&ContentSource> {
        self.source.as_ref()
    }

    /// Resolve creation-time content from merged `props` and the host element
    pub fn resolve(&mut self, props: &Props, host: &HostElement) -> Content {
        if let Some(template) = &self.template {
            let fragment = template.render();
            self.source = Some(ContentSource::ProjectedTemplate(template.clone()));
            return Content::Fragment(fragment);
        }

        self.attribute = host.attribute(CONTENT_ATTRIBUTE);
        let source = self.inline_or_attribute(props);
        let content = Self::render_source(&source);
        self.source = Some(source);
        content
    }

    /// New content after a props change, or None when nothing visible changed.
    ///
    /// Template mode is fixed at creation and never re-resolves.
    pub fn update(&mut self, props: &Props) -> Option<Content> {
        if self.source.as_ref().is_some_and(ContentSource::is_template) {
            log::debug!("Ignoring content change for template-backed tooltip");
            return None;
        }

        let source = self.inline_or_attribute(props);
        if self.source.as_ref() == Some(&source) {
            return None;
        }

        let content = Self::render_source(&source);
        self.source = Some(source);
        Some(content)
    }

    fn inline_or_attribute(&self, props: &Props) -> ContentSource {
        let allow_html = props.allow_html.unwrap_or(false);
        match &props.content {
            Some(value) => ContentSource::InlineProp {
                value: value.clone(),
                allow_html,
            },
            None => {
                if self.attribute.is_none() {
                    log::debug!("No content source found; tooltip will be empty");
                }
                ContentSource::PlainAttribute {
                    value: self.attribute.clone().unwrap_or_default(),
                    allow_html,
                }
            }
        }
    }

    fn render_source(source: &ContentSource) -> Content {
        match source {
            ContentSource::PlainAttribute { value, allow_html }
            | ContentSource::InlineProp { value, allow_html } => {
                Content::from_prop(value, *allow_html)
            }
            ContentSource::ProjectedTemplate(template) => Content::Fragment(template.render()),
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
