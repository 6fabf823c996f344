use super::registry::{get_cipher_types, AlgorithmDescriptor, Registry};
use super::{CipherBlock, CipherError, Result};

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Encrypt,
    Decrypt,
}

pub struct CipherContext {
    descriptor: Arc<AlgorithmDescriptor>,
    state: Box<dyn CipherBlock>,
}

impl CipherContext {
    fn new(registry: &Registry, name: &str, key: &[u8], direction: Direction) -> Result<CipherContext> {
        let descriptor = registry.get(name)?;

        if key.len() != descriptor.key_size() {
            return Err(CipherError::InvalidKeyLength {
                expected: descriptor.key_size(),
                actual: key.len(),
            });
        }

        let state = match direction {
            Direction::Encrypt => descriptor.set_encrypt_key(key)?,
            Direction::Decrypt => descriptor.set_decrypt_key(key)?,
        };

        Ok(CipherContext { descriptor, state })
    }

    pub fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    pub fn block_size(&self) -> usize {
        self.descriptor.block_size()
    }

    pub(crate) fn state_mut(&mut self) -> &mut dyn CipherBlock {
        self.state.as_mut()
    }
}

impl fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Encryptor {
    pub(crate) ctx: CipherContext,
}

impl Encryptor {
    /// Looks `name` up in the global registry and runs the encryption key schedule.
    pub fn new(name: &str, key: &[u8]) -> Result<Encryptor> {
        Encryptor::with_registry(get_cipher_types()?, name, key)
    }

    pub fn with_registry(registry: &Registry, name: &str, key: &[u8]) -> Result<Encryptor> {
        let ctx = CipherContext::new(registry, name, key, Direction::Encrypt)?;
        Ok(Encryptor { ctx })
    }

    pub fn context(&self) -> &CipherContext {
        &self.ctx
    }
}

#[derive(Debug)]
pub struct Decryptor {
    pub(crate) ctx: CipherContext,
}

impl Decryptor {
    /// Looks `name` up in the global registry and runs the decryption key schedule.
    pub fn new(name: &str, key: &[u8]) -> Result<Decryptor> {
        Decryptor::with_registry(get_cipher_types()?, name, key)
    }

    pub fn with_registry(registry: &Registry, name: &str, key: &[u8]) -> Result<Decryptor> {
        let ctx = CipherContext::new(registry, name, key, Direction::Decrypt)?;
        Ok(Decryptor { ctx })
    }

    pub fn context(&self) -> &CipherContext {
        &self.ctx
    }
}

pub fn make_encryptor(name: &str, key: &[u8]) -> Result<Encryptor> {
    Encryptor::new(name, key)
}

pub fn make_decryptor(name: &str, key: &[u8]) -> Result<Decryptor> {
    Decryptor::new(name, key)
}
