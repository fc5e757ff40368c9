use std::fmt;

use crate::instance::{InstanceHandle, same_instance};

/// Lookup result: one handle, or every handle sharing a name in creation order
#[derive(Clone)]
pub enum Instances {
    One(InstanceHandle),
    Many(Vec<InstanceHandle>),
}

impl Instances {
    pub(super) fn from_vec(mut handles: Vec<InstanceHandle>) -> Option<Self> {
        match handles.len() {
            0 => None,
            1 => handles.pop().map(Instances::One),
            _ => Some(Instances::Many(handles)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Instances::One(_) => 1,
            Instances::Many(handles) => handles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Earliest-created handle
    pub fn first(&self) -> Option<&InstanceHandle> {
        match self {
            Instances::One(handle) => Some(handle),
            Instances::Many(handles) => handles.first(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstanceHandle> {
        let slice = match self {
            Instances::One(handle) => std::slice::from_ref(handle),
            Instances::Many(handles) => handles.as_slice(),
        };
        slice.iter()
    }

    pub fn contains(&self, handle: &InstanceHandle) -> bool {
        self.iter().any(|h| same_instance(h, handle))
    }
}

impl fmt::Debug for Instances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instances::One(handle) => f.debug_tuple("One").field(&handle.id()).finish(),
            Instances::Many(handles) => {
                let ids: Vec<_> = handles.iter().map(|handle| handle.id()).collect();
                f.debug_tuple("Many").field(&ids).finish()
            }
        }
    }
}
