//! Scripted scenarios
//!
//! Replays a TOML script of binding inputs, host events and facade calls
//! against the headless engine and collects a textual report of the
//! registry. The `tipbind` binary is a thin wrapper around [`run_scenario`].

mod types;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use thiserror::Error;

use crate::binding::{BindingInputs, BindingPhase, TooltipBinding};
use crate::config::Config;
use crate::content::Template;
use crate::control::{TooltipContext, TooltipControl};
use crate::element::{CONTENT_ATTRIBUTE, ElementRef, HostElement};
use crate::engine::{HeadlessEngine, TriggerEvent};
use crate::registry::BulkOptions;

pub use types::{AttachStep, ElementSpec, Scenario, Step, TemplateSpec};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario: {0}")]
    Io(String),

    #[error("Invalid scenario: {0}")]
    Parse(String),

    #[error("Element '{0}' is declared twice")]
    DuplicateElement(String),

    #[error("Unknown element '{0}'")]
    UnknownElement(String),

    #[error("Element '{0}' has no binding")]
    Unbound(String),

    #[error("Unknown event '{0}'")]
    UnknownEvent(String),
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let contents = fs::read_to_string(path).map_err(|e| ScenarioError::Io(e.to_string()))?;
    parse_scenario(&contents)
}

pub fn parse_scenario(content: &str) -> Result<Scenario, ScenarioError> {
    toml::from_str(content).map_err(|e| ScenarioError::Parse(e.to_string()))
}

/// Run `scenario` in a fresh session built from `config`
pub fn run_scenario(scenario: &Scenario, config: &Config) -> Result<Vec<String>, ScenarioError> {
    let mut runner = ScenarioRunner::new(config);
    runner.run(scenario)?;
    Ok(runner.into_output())
}

/// One headless session driven step by step
pub struct ScenarioRunner {
    engine: Rc<HeadlessEngine>,
    context: TooltipContext,
    elements: BTreeMap<String, ElementRef>,
    bindings: BTreeMap<String, TooltipBinding>,
    output: Vec<String>,
}

impl ScenarioRunner {
    pub fn new(config: &Config) -> Self {
        let engine = Rc::new(HeadlessEngine::new());
        let context = TooltipContext::from_config(config, engine.clone());
        Self {
            engine,
            context,
            elements: BTreeMap::new(),
            bindings: BTreeMap::new(),
            output: Vec::new(),
        }
    }

    pub fn engine(&self) -> &HeadlessEngine {
        &self.engine
    }

    pub fn context(&self) -> &TooltipContext {
        &self.context
    }

    pub fn binding(&self, element: &str) -> Option<&TooltipBinding> {
        self.bindings.get(element)
    }

    /// Lines produced so far by `report` steps and failed attaches
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn into_output(mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    pub fn run(&mut self, scenario: &Scenario) -> Result<(), ScenarioError> {
        for spec in &scenario.elements {
            self.declare(spec)?;
        }
        for step in &scenario.steps {
            self.step(step)?;
        }
        Ok(())
    }

    pub fn declare(&mut self, spec: &ElementSpec) -> Result<(), ScenarioError> {
        if self.elements.contains_key(&spec.id) {
            return Err(ScenarioError::DuplicateElement(spec.id.clone()));
        }
        let element = if spec.connected {
            HostElement::new(&spec.tag)
        } else {
            HostElement::detached(&spec.tag)
        };
        if let Some(content) = &spec.content {
            element.set_attribute(CONTENT_ATTRIBUTE, content);
        }
        self.elements.insert(spec.id.clone(), element);
        Ok(())
    }

    pub fn step(&mut self, step: &Step) -> Result<(), ScenarioError> {
        log::debug!("Scenario step: {:?}", step);
        match step {
            Step::Attach(attach) => self.attach(attach)?,
            Step::Update { element, props } => {
                self.binding_mut(element)?.set_props(props.clone());
            }
            Step::Event { element, event } => {
                let parsed = TriggerEvent::parse(event)
                    .ok_or_else(|| ScenarioError::UnknownEvent(event.clone()))?;
                let host = self.element(element)?;
                let reacted = self.engine.dispatch(&host, parsed);
                log::debug!("{} on '{}' reached {} tooltip(s)", event, element, reacted);
            }
            Step::Advance { ms } => {
                self.engine.advance(*ms);
            }
            Step::Show { name } => report_named("show", name, self.control().show(name)),
            Step::Hide { name } => report_named("hide", name, self.control().hide(name)),
            Step::ShowAll { exclude } => {
                self.control()
                    .show_all(&BulkOptions::excluding(exclude.iter().cloned()));
            }
            Step::HideAll { exclude } => {
                self.control()
                    .hide_all(&BulkOptions::excluding(exclude.iter().cloned()));
            }
            Step::SetDefaults { props } => self.control().set_default_props(props),
            Step::Connect { element } => self.element(element)?.connect(),
            Step::Disconnect { element } => self.element(element)?.disconnect(),
            Step::Detach { element } => self.binding_mut(element)?.detach(),
            Step::Gc => {
                let collected = self.context.registry().collect_garbage();
                log::debug!("Garbage collection dropped {} handle(s)", collected);
            }
            Step::Report => {
                let lines = self.report();
                self.output.extend(lines);
            }
        }
        Ok(())
    }

    /// One line per registered handle: `{name} #{id} {lifecycle} {content}`
    pub fn report(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (name, instances) in self.context.registry().get_instances() {
            for handle in instances.iter() {
                let id = handle.id();
                let content = self
                    .engine
                    .instance(id)
                    .map(|instance| instance.content().as_markup().to_string())
                    .unwrap_or_default();
                let line = format!(
                    "{} {} {} {}",
                    name,
                    id,
                    handle.state().lifecycle().as_str(),
                    content
                );
                lines.push(line.trim_end().to_string());
            }
        }
        lines
    }

    // An unattached binding is retried; a detached one is replaced
    fn attach(&mut self, step: &AttachStep) -> Result<(), ScenarioError> {
        let host = self.element(&step.element)?;
        let reuse = self
            .bindings
            .get(&step.element)
            .is_some_and(|binding| binding.phase() != BindingPhase::Detached);
        if !reuse {
            let inputs = self.inputs(step)?;
            let binding = self.context.bind(host, inputs);
            self.bindings.insert(step.element.clone(), binding);
        }

        let binding = self.binding_mut(&step.element)?;
        if let Err(error) = binding.attach() {
            self.output
                .push(format!("{} attach failed: {}", step.element, error));
        }
        Ok(())
    }

    fn inputs(&self, step: &AttachStep) -> Result<BindingInputs, ScenarioError> {
        let mut inputs = BindingInputs::new().props(step.props.clone());
        if let Some(name) = &step.name {
            inputs = inputs.name(name.clone());
        }
        if let Some(class_names) = &step.class_names {
            inputs = inputs.class_names(class_names.clone());
        }
        if let Some(template) = &step.template {
            inputs = inputs.template(Template::new(
                template.class_name.clone(),
                template.markup.clone(),
            ));
        }
        if let Some(ids) = &step.trigger_targets {
            let targets = ids
                .iter()
                .map(|id| self.element(id))
                .collect::<Result<Vec<_>, _>>()?;
            inputs = inputs.trigger_targets(targets);
        }
        Ok(inputs)
    }

    fn element(&self, id: &str) -> Result<ElementRef, ScenarioError> {
        self.elements
            .get(id)
            .cloned()
            .ok_or_else(|| ScenarioError::UnknownElement(id.to_string()))
    }

    fn binding_mut(&mut self, element: &str) -> Result<&mut TooltipBinding, ScenarioError> {
        if !self.elements.contains_key(element) {
            return Err(ScenarioError::UnknownElement(element.to_string()));
        }
        self.bindings
            .get_mut(element)
            .ok_or_else(|| ScenarioError::Unbound(element.to_string()))
    }

    fn control(&self) -> TooltipControl {
        self.context.control()
    }
}

fn report_named(operation: &str, name: &str, result: Option<bool>) {
    match result {
        None => log::warn!("{}: no tooltip named '{}'", operation, name),
        Some(false) => log::debug!("{}: '{}' refused by at least one tooltip", operation, name),
        Some(true) => {}
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod scenario_tests;
