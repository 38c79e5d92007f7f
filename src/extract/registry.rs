use std::collections::HashMap;

use super::Extractor;
use crate::engine::SearchError;

/// Holds the built-in extractors in a fixed registration order. Resolution
/// is stable: whatever subset is requested comes back in this order.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn Extractor>>,
    index: HashMap<&'static str, usize>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build the default registry with all built-in extractors.
    pub fn default_registry() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(super::Identifier));
        registry.register(Box::new(super::Name));
        registry.register(Box::new(super::ClassDef));
        registry.register(Box::new(super::FunctionDef));
        registry.register(Box::new(super::Call));
        registry.register(Box::new(super::MethodCall));
        registry.register(Box::new(super::Import));
        registry
    }

    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        let name = extractor.name();
        let idx = self.extractors.len();
        self.extractors.push(extractor);
        self.index.insert(name, idx);
    }

    /// Resolve a set of toggles into extractors. An empty set means "all".
    /// Every toggle is validated up front, so an unknown name fails before
    /// any file is processed.
    pub fn resolve(&self, toggles: &[String]) -> Result<Vec<&dyn Extractor>, SearchError> {
        if toggles.is_empty() {
            return Ok(self.extractors.iter().map(|e| &**e).collect());
        }

        for toggle in toggles {
            if !self.index.contains_key(toggle.as_str()) {
                return Err(SearchError::InvalidConfiguration {
                    name: toggle.clone(),
                });
            }
        }

        Ok(self
            .extractors
            .iter()
            .filter(|e| toggles.iter().any(|t| t == e.name()))
            .map(|e| &**e)
            .collect())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Extractor> {
        self.index.get(name).map(|&idx| &*self.extractors[idx])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::default_registry()
    }
}
