//! Demo registry -- an ordered, uniquely keyed collection of demos.
//!
//! Registration happens once during startup, before any run; the registry
//! is read-only afterwards. Default iteration order is registration order,
//! which is what makes the harness output reproducible run to run.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::demo::Demo;

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A demo with this name is already registered. The first
    /// registration stands; the rejected demo is discarded.
    #[error("duplicate demo name: {0:?}")]
    DuplicateName(String),

    /// No demo is registered under this name.
    #[error("no demo registered under name: {0:?}")]
    NotFound(String),
}

/// A collection of registered [`Demo`] implementations, keyed by name.
///
/// # Example
///
/// ```ignore
/// let mut registry = DemoRegistry::new();
/// registry.register(FactoryMethodDemo)?;
/// let demo = registry.get("factory-method")?;
/// ```
#[derive(Default)]
pub struct DemoRegistry {
    // Registration order; `index` maps name -> position in this vec.
    demos: Vec<Arc<dyn Demo>>,
    index: HashMap<String, usize>,
}

impl DemoRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a demo under the name returned by [`Demo::name`].
    ///
    /// Fails with [`RegistryError::DuplicateName`] if the name is already
    /// taken, leaving the registry unchanged.
    pub fn register(&mut self, demo: impl Demo + 'static) -> Result<(), RegistryError> {
        let name = demo.name().to_string();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        self.index.insert(name, self.demos.len());
        self.demos.push(Arc::new(demo));
        Ok(())
    }

    /// Look up a demo by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Demo>, RegistryError> {
        self.index
            .get(name)
            .map(|&i| Arc::clone(&self.demos[i]))
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// All demos, in registration order.
    pub fn list(&self) -> &[Arc<dyn Demo>] {
        &self.demos
    }

    /// Names of all registered demos, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.demos.iter().map(|d| d.name()).collect()
    }

    /// Number of registered demos.
    pub fn len(&self) -> usize {
        self.demos.len()
    }

    /// `true` if no demos are registered.
    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }
}

impl std::fmt::Debug for DemoRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoRegistry")
            .field("demos", &self.names())
            .finish()
    }
}
