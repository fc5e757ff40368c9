use crate::content::Template;
use crate::element::ElementRef;
use crate::props::Props;

/// Declarative inputs of one binding, as the host framework provides them
#[derive(Debug, Clone, Default)]
pub struct BindingInputs {
    pub props: Props,
    /// Registry name; generated when absent or empty
    pub name: Option<String>,
    /// Space separated classes added to the rendered box
    pub class_names: Option<String>,
    /// Projected content; wins over `props.content` and the content attribute
    pub template: Option<Template>,
    /// Elements generating trigger events instead of the host
    pub trigger_targets: Option<Vec<ElementRef>>,
}

impl BindingInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn class_names(mut self, class_names: impl Into<String>) -> Self {
        self.class_names = Some(class_names.into());
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn trigger_targets(mut self, targets: Vec<ElementRef>) -> Self {
        self.trigger_targets = Some(targets);
        self
    }

    /// Explicit name, ignoring empty strings
    pub(super) fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
