use super::Props;

/// Library and globally-set default tiers
///
/// Resolution order, lowest priority first: library defaults, global
/// defaults (`set_default_props`), per-binding props. Each tier overrides
/// individual keys of the one below.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultProps {
    library: Props,
    global: Props,
}

impl DefaultProps {
    pub fn new() -> Self {
        Self::with_library(Props::library_defaults())
    }

    pub fn with_library(library: Props) -> Self {
        Self {
            library,
            global: Props::default(),
        }
    }

    /// Merge `partial` into the global tier
    pub fn set_global(&mut self, partial: &Props) {
        self.global.merge(partial);
    }

    pub fn reset_global(&mut self) {
        self.global = Props::default();
    }

    /// Library defaults overlaid with the global tier
    pub fn merged(&self) -> Props {
        let mut merged = self.library.clone();
        merged.merge(&self.global);
        merged
    }

    /// Full three-tier merge for one binding
    pub fn resolve(&self, binding: &Props) -> Props {
        let mut resolved = self.merged();
        resolved.merge(binding);
        resolved
    }
}

impl Default for DefaultProps {
    fn default() -> Self {
        Self::new()
    }
}
