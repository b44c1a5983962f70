use crate::rpc::middleware::Dispatcher;
use log::{debug, warn};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// An API module built on top of a [`Dispatcher`].
///
/// Modules are opaque to the dispatch layer beyond being constructible from
/// a dispatcher and an optional base path override.
pub trait ApiModule: Any + Send + Sync {
    fn new(dispatcher: Dispatcher, base_path: Option<&str>) -> Self
    where
        Self: Sized;

    fn base_path(&self) -> &str;
}

/// Label → module storage with typed lookup
#[derive(Default)]
pub struct ApiRegistry {
    modules: RwLock<HashMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl ApiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `module` under `label`; the last registration for a label wins.
    pub fn insert<M: ApiModule>(&self, label: &str, module: Arc<M>) {
        let base_path = module.base_path().to_string();
        let previous = self
            .modules
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(label.to_string(), module);
        if previous.is_some() {
            warn!("Replaced API module \"{label}\"");
        }
        debug!("Registered API module \"{label}\" at {base_path}");
    }

    /// `None` when nothing is stored under `label` or it is not an `M`
    pub fn get<M: ApiModule>(&self, label: &str) -> Option<Arc<M>> {
        let module = self
            .modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(label)
            .cloned()?;
        module.downcast::<M>().ok()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(label)
    }

    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        labels.sort();
        labels
    }

    pub fn len(&self) -> usize {
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
