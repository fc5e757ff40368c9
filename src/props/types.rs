// Value types for recognized props

use serde::{Deserialize, Serialize};

/// Delay or duration in milliseconds, either shared or split into show/hide parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timing {
    Uniform(u64),
    Split(u64, u64),
}

impl Timing {
    pub fn show_ms(self) -> u64 {
        match self {
            Timing::Uniform(ms) => ms,
            Timing::Split(show, _) => show,
        }
    }

    pub fn hide_ms(self) -> u64 {
        match self {
            Timing::Uniform(ms) => ms,
            Timing::Split(_, hide) => hide,
        }
    }
}

/// Where rendered output is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppendTo {
    Parent,
    #[default]
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
    Auto,
    AutoStart,
    AutoEnd,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::Bottom => "bottom",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
            Placement::Left => "left",
            Placement::LeftStart => "left-start",
            Placement::LeftEnd => "left-end",
            Placement::Right => "right",
            Placement::RightStart => "right-start",
            Placement::RightEnd => "right-end",
            Placement::Auto => "auto",
            Placement::AutoStart => "auto-start",
            Placement::AutoEnd => "auto-end",
        }
    }
}

/// One entry of the space separated `trigger` prop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    MouseEnter,
    Focus,
    FocusIn,
    Click,
    Manual,
}

impl Trigger {
    pub fn parse(token: &str) -> Option<Trigger> {
        match token {
            "mouseenter" => Some(Trigger::MouseEnter),
            "focus" => Some(Trigger::Focus),
            "focusin" => Some(Trigger::FocusIn),
            "click" => Some(Trigger::Click),
            "manual" => Some(Trigger::Manual),
            _ => None,
        }
    }

    /// Parse a trigger list, skipping unknown tokens
    pub fn parse_list(list: &str) -> Vec<Trigger> {
        list.split_whitespace()
            .filter_map(|token| {
                let trigger = Trigger::parse(token);
                if trigger.is_none() {
                    log::debug!("Ignoring unknown trigger '{}'", token);
                }
                trigger
            })
            .collect()
    }
}
