use super::Transform;
use crate::error::Result;
use crate::format::FormatHint;
use crate::operation::TransformOperation;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

pub struct TransformRegistry {
    transforms: HashMap<TransformOperation, Arc<Box<dyn Transform>>>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Initializes the transform registry with one transform per operation
    /// - Beautifier / Minifier: format-sensitive layout transforms
    /// - Case transforms: upper, lower, title, camel and snake case
    /// - Base64 encoder and decoder
    /// - Whitespace collapser
    pub fn init(&mut self) {
        self.register(TransformOperation::Beautify, super::Beautifier::new());
        self.register(TransformOperation::Minify, super::Minifier::new());
        self.register(TransformOperation::Uppercase, super::Uppercase::new());
        self.register(TransformOperation::Lowercase, super::Lowercase::new());
        self.register(TransformOperation::TitleCase, super::TitleCase::new());
        self.register(TransformOperation::CamelCase, super::CamelCase::new());
        self.register(TransformOperation::SnakeCase, super::SnakeCase::new());
        self.register(TransformOperation::Base64Encode, super::Base64Encoder::new());
        self.register(TransformOperation::Base64Decode, super::Base64Decoder::new());
        self.register(
            TransformOperation::CollapseWhitespace,
            super::CollapseWhitespace::new(),
        );
    }

    pub fn register<T: Transform + 'static>(&mut self, operation: TransformOperation, transform: T) {
        let boxed = Arc::new(Box::new(transform) as Box<dyn Transform>);
        self.transforms.insert(operation, boxed);
    }

    pub fn get(&self, operation: TransformOperation) -> Option<&Arc<Box<dyn Transform>>> {
        self.transforms.get(&operation)
    }

    /// Runs the transform registered for the operation
    ///
    /// # Arguments
    /// * `text` - The text to process
    /// * `operation` - The operation to run
    /// * `hint` - The format hint
    ///
    /// # Returns
    /// `None` when no transform is registered for the operation, otherwise
    /// the transformed text or the error raised by the transform
    pub fn process(
        &self,
        text: &str,
        operation: TransformOperation,
        hint: FormatHint,
    ) -> Option<Result<String>> {
        self.get(operation)
            .map(|transform| transform.transform(text, hint))
    }
}

/// Global transform manager that provides thread-safe access to the shared transform registry
pub struct TransformManager {
    registry: Arc<TransformRegistry>,
}

impl TransformManager {
    /// Gets a reference to the global transform manager
    pub fn get() -> &'static TransformManager {
        static INSTANCE: Lazy<TransformManager> = Lazy::new(|| {
            let mut registry = TransformRegistry::new();
            registry.init();
            TransformManager {
                registry: Arc::new(registry),
            }
        });
        &INSTANCE
    }

    /// Gets a clone of the shared registry
    pub fn share(&self) -> Arc<TransformRegistry> {
        Arc::clone(&self.registry)
    }

    /// Gets a transform by operation
    pub fn get_transform(&self, operation: TransformOperation) -> Option<&Arc<Box<dyn Transform>>> {
        self.registry.get(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_registered() {
        let manager = TransformManager::get();
        for op in TransformOperation::ALL {
            assert!(manager.get_transform(op).is_some(), "missing {}", op);
        }
    }

    #[test]
    fn test_empty_registry_has_nothing_to_run() {
        let registry = TransformRegistry::new();
        assert!(registry
            .process("abc", TransformOperation::Uppercase, FormatHint::PlainText)
            .is_none());
    }

    #[test]
    fn test_process_runs_registered_transform() {
        let mut registry = TransformRegistry::new();
        registry.register(TransformOperation::Lowercase, super::super::Lowercase::new());
        let result = registry
            .process("ABC", TransformOperation::Lowercase, FormatHint::PlainText)
            .unwrap()
            .unwrap();
        assert_eq!(result, "abc");
    }
}
