use super::provider::{BlockAlgorithm, BuiltinProvider, CipherProvider};
use super::{CipherBlock, CipherError, Result};

use once_cell::sync::OnceCell;
use tracing::{debug, error};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Immutable metadata and operations of one algorithm.
#[derive(Clone)]
pub struct AlgorithmDescriptor {
    name: String,
    context_size: usize,
    block_size: usize,
    key_size: usize,
    algorithm: Arc<dyn BlockAlgorithm>,
}

impl AlgorithmDescriptor {
    fn from_algorithm(algorithm: Arc<dyn BlockAlgorithm>) -> Result<Self> {
        let name = canonical_name(algorithm.name());

        if name.is_empty() {
            return Err(CipherError::ProviderFailure("algorithm with empty name".into()));
        }

        if algorithm.block_size() == 0 || algorithm.key_size() == 0 {
            return Err(CipherError::ProviderFailure(format!(
                "{} reports a zero block or key size",
                name
            )));
        }

        Ok(AlgorithmDescriptor {
            name,
            context_size: algorithm.context_size(),
            block_size: algorithm.block_size(),
            key_size: algorithm.key_size(),
            algorithm,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context_size(&self) -> usize {
        self.context_size
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn key_size(&self) -> usize {
        self.key_size
    }

    pub fn set_encrypt_key(&self, key: &[u8]) -> Result<Box<dyn CipherBlock>> {
        self.algorithm.set_encrypt_key(key)
    }

    pub fn set_decrypt_key(&self, key: &[u8]) -> Result<Box<dyn CipherBlock>> {
        self.algorithm.set_decrypt_key(key)
    }
}

impl fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("name", &self.name)
            .field("context_size", &self.context_size)
            .field("block_size", &self.block_size)
            .field("key_size", &self.key_size)
            .finish()
    }
}

#[derive(Debug)]
pub struct Registry {
    ciphers: HashMap<String, Arc<AlgorithmDescriptor>>,
}

impl Registry {
    /// Builds a registry from every algorithm `provider` knows.
    ///
    /// Fails with [`CipherError::ProviderFailure`] if the provider errors, knows
    /// nothing, or reports a malformed or duplicate algorithm. No partial
    /// registry is ever returned.
    pub fn from_provider(provider: &dyn CipherProvider) -> Result<Registry> {
        let algorithms = provider.algorithms().map_err(|e| match e {
            CipherError::ProviderFailure(msg) => CipherError::ProviderFailure(msg),
            other => CipherError::ProviderFailure(other.to_string()),
        })?;

        if algorithms.is_empty() {
            return Err(CipherError::ProviderFailure("provider reported no algorithms".into()));
        }

        let mut ciphers = HashMap::with_capacity(algorithms.len());
        for algorithm in algorithms {
            let descriptor = AlgorithmDescriptor::from_algorithm(algorithm)?;

            if ciphers.contains_key(&descriptor.name) {
                return Err(CipherError::ProviderFailure(format!(
                    "duplicate algorithm {}",
                    descriptor.name
                )));
            }

            ciphers.insert(descriptor.name.clone(), Arc::new(descriptor));
        }

        Ok(Registry { ciphers })
    }

    pub fn get(&self, name: &str) -> Result<Arc<AlgorithmDescriptor>> {
        self.ciphers
            .get(&canonical_name(name))
            .cloned()
            .ok_or_else(|| CipherError::UnknownAlgorithm(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ciphers.contains_key(&canonical_name(name))
    }

    /// Canonical names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ciphers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.ciphers.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.ciphers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty()
    }
}

/// Returns the process-wide registry, populating it on first use.
pub fn get_cipher_types() -> Result<&'static Registry> {
    REGISTRY.get_or_try_init(|| {
        let registry = Registry::from_provider(&BuiltinProvider).map_err(|e| {
            error!(error = %e, "cipher registry population failed");
            e
        })?;

        debug!(algorithms = registry.len(), "cipher registry populated");
        Ok(registry)
    })
}

pub fn canonical_name(name: &str) -> String {
    name.to_ascii_uppercase()
}
