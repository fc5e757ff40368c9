// Scenario file type definitions

use serde::Deserialize;

use crate::props::Props;

fn default_tag() -> String {
    "button".to_string()
}

fn default_connected() -> bool {
    true
}

/// A scripted session: host elements plus the steps applied to them
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Scenario {
    #[serde(default, rename = "element")]
    pub elements: Vec<ElementSpec>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Host element declared up front by id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementSpec {
    pub id: String,
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Value of the content attribute, if any
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default = "default_connected")]
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateSpec {
    pub class_name: String,
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttachStep {
    pub element: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub class_names: Option<String>,
    #[serde(default)]
    pub template: Option<TemplateSpec>,
    /// Element ids that should generate trigger events instead of the host
    #[serde(default)]
    pub trigger_targets: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Attach(AttachStep),
    Update {
        element: String,
        #[serde(default)]
        props: Props,
    },
    Event {
        element: String,
        event: String,
    },
    Advance {
        ms: u64,
    },
    Show {
        name: String,
    },
    Hide {
        name: String,
    },
    ShowAll {
        #[serde(default)]
        exclude: Vec<String>,
    },
    HideAll {
        #[serde(default)]
        exclude: Vec<String>,
    },
    SetDefaults {
        props: Props,
    },
    Connect {
        element: String,
    },
    Disconnect {
        element: String,
    },
    Detach {
        element: String,
    },
    Gc,
    Report,
}
