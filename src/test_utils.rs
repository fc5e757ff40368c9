#[cfg(test)]
pub mod test_helpers {
    use std::rc::Rc;

    use crate::content::Content;
    use crate::control::TooltipContext;
    use crate::element::{ElementRef, element_with_content};
    use crate::engine::{HeadlessEngine, HeadlessInstance};
    use crate::instance::{CreateRequest, InstanceHandle, TooltipEngine};
    use crate::props::{Props, Timing};
    use crate::registry::Registry;

    /// Fresh engine + registry + context for one test
    pub struct Harness {
        pub engine: Rc<HeadlessEngine>,
        pub registry: Rc<Registry>,
        pub context: TooltipContext,
    }

    pub fn harness() -> Harness {
        let engine = Rc::new(HeadlessEngine::new());
        let registry = Rc::new(Registry::new());
        let context = TooltipContext::new(registry.clone(), engine.clone());
        Harness {
            engine,
            registry,
            context,
        }
    }

    /// Props with zero-length transitions so show/hide complete synchronously
    pub fn instant() -> Props {
        Props {
            duration: Some(Timing::Uniform(0)),
            ..Props::default()
        }
    }

    pub fn button(content: &str) -> ElementRef {
        element_with_content("button", content)
    }

    /// Create a handle straight through the engine, bypassing bindings
    pub fn create_handle(engine: &HeadlessEngine, host: &ElementRef) -> InstanceHandle {
        let mut props = engine.default_props();
        props.merge(&instant());
        engine
            .create_instance(CreateRequest {
                target: host.clone(),
                props,
                content: Content::Text("Tooltip content".to_string()),
                class_names: Vec::new(),
            })
            .unwrap()
    }

    /// Concrete instance behind a handle
    pub fn headless(engine: &HeadlessEngine, handle: &InstanceHandle) -> Rc<HeadlessInstance> {
        engine.instance(handle.id()).unwrap()
    }
}
