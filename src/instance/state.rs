/// Flag snapshot of an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceState {
    /// Show/hide requests are honoured
    pub is_enabled: bool,
    /// A show is in progress or complete
    pub is_visible: bool,
    /// The show transition has finished
    pub is_shown: bool,
    /// Rendered output is in the tree
    pub is_mounted: bool,
    pub is_destroyed: bool,
    /// Has been made visible at least once
    pub has_shown: bool,
}

/// Coarse lifecycle projected from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Shown,
    Hidden,
    Disabled,
    Destroyed,
}

impl Lifecycle {
    pub fn as_str(self) -> &'static str {
        match self {
            Lifecycle::Created => "created",
            Lifecycle::Shown => "shown",
            Lifecycle::Hidden => "hidden",
            Lifecycle::Disabled => "disabled",
            Lifecycle::Destroyed => "destroyed",
        }
    }
}

impl InstanceState {
    pub fn new() -> Self {
        Self {
            is_enabled: true,
            is_visible: false,
            is_shown: false,
            is_mounted: false,
            is_destroyed: false,
            has_shown: false,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.is_destroyed {
            Lifecycle::Destroyed
        } else if !self.is_enabled {
            Lifecycle::Disabled
        } else if self.is_visible {
            Lifecycle::Shown
        } else if self.has_shown {
            Lifecycle::Hidden
        } else {
            Lifecycle::Created
        }
    }
}

impl Default for InstanceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_created() {
        assert_eq!(InstanceState::new().lifecycle(), Lifecycle::Created);
    }

    #[test]
    fn test_visible_is_shown() {
        let state = InstanceState {
            is_visible: true,
            has_shown: true,
            ..InstanceState::new()
        };
        assert_eq!(state.lifecycle(), Lifecycle::Shown);
    }

    #[test]
    fn test_hidden_after_shown() {
        let state = InstanceState {
            has_shown: true,
            ..InstanceState::new()
        };
        assert_eq!(state.lifecycle(), Lifecycle::Hidden);
    }

    #[test]
    fn test_disabled_wins_over_visibility() {
        let state = InstanceState {
            is_enabled: false,
            is_visible: true,
            ..InstanceState::new()
        };
        assert_eq!(state.lifecycle(), Lifecycle::Disabled);
    }

    #[test]
    fn test_destroyed_wins_over_everything() {
        let state = InstanceState {
            is_enabled: false,
            is_destroyed: true,
            ..InstanceState::new()
        };
        assert_eq!(state.lifecycle(), Lifecycle::Destroyed);
        assert_eq!(Lifecycle::Destroyed.as_str(), "destroyed");
    }
}
