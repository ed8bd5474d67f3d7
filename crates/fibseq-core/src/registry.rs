//! Generator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::SeqError;
use crate::generator::SequenceGenerator;
use crate::generator_iterative::IterativeGenerator;
use crate::generator_naive::NaiveRecursiveGenerator;

/// Factory trait for looking up generators by name.
pub trait GeneratorFactory: Send + Sync {
    /// Get or create a generator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn SequenceGenerator>, SeqError>;

    /// List the canonical generator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn SequenceGenerator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_generator(name: &str) -> Result<Arc<dyn SequenceGenerator>, SeqError> {
        match name {
            "iterative" | "iter" => Ok(Arc::new(IterativeGenerator::new())),
            "naive" | "recursive" => Ok(Arc::new(NaiveRecursiveGenerator::new())),
            _ => Err(SeqError::Config(format!("unknown generator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn SequenceGenerator>, SeqError> {
        if let Some(gen) = self.cache.read().get(name) {
            return Ok(Arc::clone(gen));
        }

        let gen = Self::create_generator(name)?;
        self.cache.write().insert(name.to_string(), Arc::clone(&gen));
        Ok(gen)
    }

    fn available(&self) -> Vec<&str> {
        vec!["iterative", "naive"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_iterative() {
        let factory = DefaultFactory::new();
        let gen = factory.get("iterative").unwrap();
        assert_eq!(gen.name(), "Iterative");
        assert_eq!(factory.get("iter").unwrap().name(), "Iterative");
    }

    #[test]
    fn factory_creates_naive() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("naive").unwrap().name(), "NaiveRecursive");
        assert_eq!(factory.get("recursive").unwrap().name(), "NaiveRecursive");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let gen1 = factory.get("iterative").unwrap();
        let gen2 = factory.get("iterative").unwrap();
        assert!(Arc::ptr_eq(&gen1, &gen2));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert!(matches!(factory.get("matrix"), Err(SeqError::Config(_))));
    }

    #[test]
    fn factory_available() {
        let factory = DefaultFactory::new();
        for name in factory.available() {
            assert!(factory.get(name).is_ok(), "{name} should resolve");
        }
    }
}
