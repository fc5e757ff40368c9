use std::rc::Rc;

use super::TooltipControl;
use crate::binding::{BindingInputs, TooltipBinding};
use crate::config::Config;
use crate::element::ElementRef;
use crate::instance::TooltipEngine;
use crate::registry::Registry;

/// Registry and engine shared by every binding of one UI session
#[derive(Clone)]
pub struct TooltipContext {
    registry: Rc<Registry>,
    engine: Rc<dyn TooltipEngine>,
}

impl TooltipContext {
    pub fn new(registry: Rc<Registry>, engine: Rc<dyn TooltipEngine>) -> Self {
        Self { registry, engine }
    }

    /// Build a context from config: registry prefix and global defaults
    pub fn from_config(config: &Config, engine: Rc<dyn TooltipEngine>) -> Self {
        let registry = Rc::new(Registry::with_prefix(
            config.registry.auto_name_prefix.clone(),
        ));
        if !config.defaults.is_empty() {
            engine.set_default_props(&config.defaults);
        }
        Self::new(registry, engine)
    }

    pub fn registry(&self) -> &Rc<Registry> {
        &self.registry
    }

    pub fn engine(&self) -> &Rc<dyn TooltipEngine> {
        &self.engine
    }

    /// Unattached binding for `host`
    pub fn bind(&self, host: ElementRef, inputs: BindingInputs) -> TooltipBinding {
        TooltipBinding::new(host, inputs, self.registry.clone(), self.engine.clone())
    }

    pub fn control(&self) -> TooltipControl {
        TooltipControl::new(self.registry.clone(), self.engine.clone())
    }
}
