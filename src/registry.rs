//! Document registry module
//!
//! Process-wide mapping from an instance name to a generated API description.
//! Documents are produced elsewhere and registered at startup; the handler
//! only looks them up by name.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};

/// Global registry instance
static GLOBAL_REGISTRY: OnceLock<Arc<DocumentRegistry>> = OnceLock::new();

/// Source of an API description document (JSON or YAML text)
pub trait ApiDoc: Send + Sync {
    fn read_doc(&self) -> String;
}

impl ApiDoc for String {
    fn read_doc(&self) -> String {
        self.clone()
    }
}

impl ApiDoc for &'static str {
    fn read_doc(&self) -> String {
        (*self).to_string()
    }
}

/// Document produced on every read by a function
pub struct DocFn<F>(pub F);

impl<F> ApiDoc for DocFn<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn read_doc(&self) -> String {
        (self.0)()
    }
}

/// Registry lookup and registration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No document has been registered under any name
    NothingRegistered,
    /// No document is registered under this name
    NotRegistered(String),
    /// A document is already registered under this name
    AlreadyRegistered(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingRegistered => write!(f, "no document has been registered"),
            Self::NotRegistered(name) => write!(f, "no document registered as '{name}'"),
            Self::AlreadyRegistered(name) => {
                write!(f, "a document is already registered as '{name}'")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Thread-safe name-to-document map
#[derive(Default)]
pub struct DocumentRegistry {
    docs: RwLock<HashMap<String, Arc<dyn ApiDoc>>>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide registry
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL_REGISTRY.get_or_init(|| Arc::new(Self::new())))
    }

    /// Register `doc` under `name`
    pub fn register(
        &self,
        name: impl Into<String>,
        doc: impl ApiDoc + 'static,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut docs = self.docs.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        if docs.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        docs.insert(name, Arc::new(doc));
        Ok(())
    }

    /// Remove the document registered under `name`, returning whether one existed
    pub fn unregister(&self, name: &str) -> bool {
        self.docs
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(name)
            .is_some()
    }

    /// Read the document registered under `name`
    pub fn read_doc(&self, name: &str) -> Result<String, RegistryError> {
        let doc = {
            let docs = self.docs.read().unwrap_or_else(std::sync::PoisonError::into_inner);
            if docs.is_empty() {
                return Err(RegistryError::NothingRegistered);
            }
            docs.get(name)
                .cloned()
                .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))?
        };
        // Lock is released before calling into the document source
        Ok(doc.read_doc())
    }
}

impl fmt::Debug for DocumentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let docs = self.docs.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut names: Vec<&String> = docs.keys().collect();
        names.sort();
        f.debug_struct("DocumentRegistry").field("names", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = DocumentRegistry::new();
        assert_eq!(
            registry.read_doc("swagger"),
            Err(RegistryError::NothingRegistered)
        );
    }

    #[test]
    fn test_register_and_read() {
        let registry = DocumentRegistry::new();
        registry.register("swagger", "{}").unwrap();
        assert_eq!(registry.read_doc("swagger").unwrap(), "{}");
        assert_eq!(
            registry.read_doc("petstore"),
            Err(RegistryError::NotRegistered("petstore".to_string()))
        );
    }

    #[test]
    fn test_register_twice_fails() {
        let registry = DocumentRegistry::new();
        registry.register("swagger", String::from("{}")).unwrap();
        let err = registry.register("swagger", "{\"a\":1}").unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered("swagger".to_string()));
        // First registration is kept
        assert_eq!(registry.read_doc("swagger").unwrap(), "{}");
    }

    #[test]
    fn test_closure_doc_and_unregister() {
        let registry = DocumentRegistry::new();
        registry
            .register("generated", DocFn(|| format!("{{\"version\":{}}}", 2)))
            .unwrap();
        assert_eq!(registry.read_doc("generated").unwrap(), "{\"version\":2}");
        assert!(registry.unregister("generated"));
        assert!(!registry.unregister("generated"));
    }

    #[test]
    fn test_global_is_shared() {
        let a = DocumentRegistry::global();
        let b = DocumentRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
