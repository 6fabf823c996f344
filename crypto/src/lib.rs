mod utils;
pub mod constants;
pub mod provider;
pub mod registry;
pub mod kdf;
pub mod padding;
pub mod mode;
pub mod context;
pub mod cbc;
pub mod transform;
pub mod envelope;

use thiserror::Error;

pub use context::{make_decryptor, make_encryptor, CipherContext, Decryptor, Encryptor};
pub use kdf::{bytes_to_key, derive_key_iv, MessageDigest};
pub use mode::Mode;
pub use padding::{add_padding_pkcs5, trim_padding_pkcs5};
pub use registry::{get_cipher_types, AlgorithmDescriptor, Registry};
pub use transform::{decrypt, decrypt_cbc, encrypt, encrypt_cbc};

/// Keyed working state of one block cipher.
///
/// Every call works on exactly one block of `block_size()` bytes, transformed
/// in place. Implementations may keep caches between calls, so the state is
/// borrowed mutably and is never shared between contexts.
pub trait CipherBlock: Send {
    fn encrypt_block(&mut self, block: &mut [u8]);
    fn decrypt_block(&mut self, block: &mut [u8]);
    fn block_size(&self) -> usize;

    /// Encrypts `buf` in place. Fails without touching `buf` unless it is block aligned.
    fn encrypt_blocks(&mut self, buf: &mut [u8]) -> Result<()> {
        let block_size = self.block_size();
        utils::check_aligned(buf.len(), block_size)?;

        for block in buf.chunks_exact_mut(block_size) {
            self.encrypt_block(block);
        }
        Ok(())
    }

    /// Decrypts `buf` in place. Fails without touching `buf` unless it is block aligned.
    fn decrypt_blocks(&mut self, buf: &mut [u8]) -> Result<()> {
        let block_size = self.block_size();
        utils::check_aligned(buf.len(), block_size)?;

        for block in buf.chunks_exact_mut(block_size) {
            self.decrypt_block(block);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("unknown cipher algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("output buffer too small: {output} bytes for {input} bytes of input")]
    BufferTooSmall { input: usize, output: usize },

    #[error("buffer of {len} bytes is not a multiple of the {block_size}-byte block size")]
    MisalignedBuffer { len: usize, block_size: usize },

    #[error("unsupported chaining mode: {0}")]
    UnsupportedMode(String),

    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("invalid padding")]
    InvalidPadding,

    #[error("invalid envelope: {0}")]
    InvalidEnvelope(&'static str),

    #[error("cipher provider failure: {0}")]
    ProviderFailure(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
