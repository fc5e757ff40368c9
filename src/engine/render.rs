use crate::content::Content;
use crate::props::{AppendTo, Placement, Props};

/// Class every rendered box carries
pub const BOX_CLASS: &str = "tippy-box";

/// What the headless engine would put in the tree for a mounted instance
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBox {
    pub classes: Vec<String>,
    pub themes: Vec<String>,
    pub arrow: bool,
    pub content: Content,
    /// Transition length currently applied, in milliseconds
    pub transition_ms: u64,
    pub placement: Placement,
    pub append_to: AppendTo,
    pub max_width: Option<u32>,
    pub z_index: Option<i32>,
}

impl RenderedBox {
    pub(super) fn build(
        props: &Props,
        content: &Content,
        class_names: &[String],
        showing: bool,
    ) -> Self {
        let mut classes = vec![BOX_CLASS.to_string()];
        classes.extend(class_names.iter().cloned());

        let transition_ms = props
            .duration
            .map(|timing| {
                if showing {
                    timing.show_ms()
                } else {
                    timing.hide_ms()
                }
            })
            .unwrap_or(0);

        Self {
            classes,
            themes: props
                .theme
                .as_deref()
                .map(|theme| theme.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            arrow: props.arrow.unwrap_or(true),
            content: content.clone(),
            transition_ms,
            placement: props.placement.unwrap_or_default(),
            append_to: props.append_to.unwrap_or_default(),
            max_width: props.max_width,
            z_index: props.z_index,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }
}
