//! Tooltip configuration record
//!
//! `Props` carries a fixed set of recognized keys plus a passthrough map for
//! anything the engine understands but this crate does not. Every key is
//! optional so the same type serves as a full record and as a partial update.

mod defaults;
mod types;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use defaults::DefaultProps;
pub use types::{AppendTo, Placement, Timing, Trigger};

macro_rules! recognized_props {
    ($( $(#[$doc:meta])* $field:ident : $ty:ty => $key:literal ),* $(,)?) => {
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct Props {
            $(
                $(#[$doc])*
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            /// Unrecognized keys, forwarded verbatim
            #[serde(flatten)]
            pub extra: BTreeMap<String, Value>,
        }

        impl Props {
            /// Shallow merge: every key set in `over` replaces the key here
            pub fn merge(&mut self, over: &Props) {
                $(
                    if let Some(value) = &over.$field {
                        self.$field = Some(value.clone());
                    }
                )*
                for (key, value) in &over.extra {
                    self.extra.insert(key.clone(), value.clone());
                }
            }

            /// Keys that are set, recognized keys first
            pub fn keys(&self) -> Vec<&str> {
                let mut keys = Vec::new();
                $(
                    if self.$field.is_some() {
                        keys.push($key);
                    }
                )*
                keys.extend(self.extra.keys().map(String::as_str));
                keys
            }

            /// Partial record of what changed going from `previous` to `self`.
            ///
            /// A key dropped from `self` is reported with its `fallback` value;
            /// when the fallback has none the key is left out.
            pub fn changes_from(&self, previous: &Props, fallback: &Props) -> Props {
                let mut changes = Props::default();
                $(
                    changes.$field = match (&previous.$field, &self.$field) {
                        (prev, Some(next)) if prev.as_ref() != Some(next) => Some(next.clone()),
                        (Some(_), None) => fallback.$field.clone(),
                        _ => None,
                    };
                )*
                for (key, value) in &self.extra {
                    if previous.extra.get(key) != Some(value) {
                        changes.extra.insert(key.clone(), value.clone());
                    }
                }
                for key in previous.extra.keys() {
                    if !self.extra.contains_key(key) {
                        if let Some(value) = fallback.extra.get(key) {
                            changes.extra.insert(key.clone(), value.clone());
                        }
                    }
                }
                changes
            }
        }
    };
}

recognized_props! {
    /// Text or HTML (with `allow_html`) shown inside the tooltip
    content: String => "content",
    /// Interpret `content` as HTML
    allow_html: bool => "allowHTML",
    append_to: AppendTo => "appendTo",
    arrow: bool => "arrow",
    /// Delay before a show/hide request starts
    delay: Timing => "delay",
    /// Transition length of show/hide
    duration: Timing => "duration",
    hide_on_click: bool => "hideOnClick",
    /// Keep open while the pointer is over the content
    interactive: bool => "interactive",
    max_width: u32 => "maxWidth",
    placement: Placement => "placement",
    /// Show immediately after creation
    show_on_create: bool => "showOnCreate",
    /// Space separated theme names
    theme: String => "theme",
    /// Space separated trigger list: mouseenter, focus, focusin, click, manual
    trigger: String => "trigger",
    z_index: i32 => "zIndex",
}

impl Props {
    /// Tier-one defaults shipped with the presentation engine
    pub fn library_defaults() -> Self {
        Self {
            allow_html: Some(false),
            append_to: Some(AppendTo::Body),
            arrow: Some(true),
            delay: Some(Timing::Uniform(0)),
            duration: Some(Timing::Split(300, 250)),
            hide_on_click: Some(true),
            interactive: Some(false),
            max_width: Some(350),
            placement: Some(Placement::Top),
            show_on_create: Some(false),
            theme: Some(String::new()),
            trigger: Some("mouseenter focus".to_string()),
            z_index: Some(9999),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// True when applying this record changes what content renders
    pub fn touches_content(&self) -> bool {
        self.content.is_some() || self.allow_html.is_some()
    }

    /// Copy of this record with `content` removed
    pub fn without_content(&self) -> Props {
        Props {
            content: None,
            ..self.clone()
        }
    }

    /// Parsed `trigger` list (empty when unset)
    pub fn triggers(&self) -> Vec<Trigger> {
        self.trigger
            .as_deref()
            .map(Trigger::parse_list)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "props_tests.rs"]
mod props_tests;
