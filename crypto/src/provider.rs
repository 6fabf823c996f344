use super::{CipherBlock, CipherError, Result};

use cipher::generic_array::GenericArray;
use cipher::{BlockCipher, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit, KeySizeUser};

use aes::{Aes128, Aes192, Aes256};
use des::{Des, TdesEde3};

use std::marker::PhantomData;
use std::sync::Arc;

/// Capability set of one block cipher algorithm.
pub trait BlockAlgorithm: Send + Sync {
    fn name(&self) -> &str;

    /// Size in bytes of the keyed working state.
    fn context_size(&self) -> usize;
    fn block_size(&self) -> usize;
    fn key_size(&self) -> usize;

    fn set_encrypt_key(&self, key: &[u8]) -> Result<Box<dyn CipherBlock>>;
    fn set_decrypt_key(&self, key: &[u8]) -> Result<Box<dyn CipherBlock>>;
}

/// Source of algorithms queried once when a registry is populated.
pub trait CipherProvider {
    fn algorithms(&self) -> Result<Vec<Arc<dyn BlockAlgorithm>>>;
}

pub struct RustCryptoAlgorithm<C> {
    name: &'static str,
    cipher: PhantomData<fn() -> C>,
}

impl<C> RustCryptoAlgorithm<C>
where
    C: BlockCipher + BlockEncrypt + BlockDecrypt + KeyInit + Send + 'static,
{
    pub const fn new(name: &'static str) -> Self {
        Self { name, cipher: PhantomData }
    }

    fn keyed(&self, key: &[u8]) -> Result<Box<dyn CipherBlock>> {
        let cipher = C::new_from_slice(key).map_err(|_| CipherError::InvalidKeyLength {
            expected: self.key_size(),
            actual: key.len(),
        })?;

        Ok(Box::new(KeyedBlock(cipher)))
    }
}

impl<C> BlockAlgorithm for RustCryptoAlgorithm<C>
where
    C: BlockCipher + BlockEncrypt + BlockDecrypt + KeyInit + Send + 'static,
{
    fn name(&self) -> &str {
        self.name
    }

    fn context_size(&self) -> usize {
        std::mem::size_of::<C>()
    }

    fn block_size(&self) -> usize {
        <C as BlockSizeUser>::block_size()
    }

    fn key_size(&self) -> usize {
        <C as KeySizeUser>::key_size()
    }

    // RustCrypto ciphers hold both schedules in one keyed value
    fn set_encrypt_key(&self, key: &[u8]) -> Result<Box<dyn CipherBlock>> {
        self.keyed(key)
    }

    fn set_decrypt_key(&self, key: &[u8]) -> Result<Box<dyn CipherBlock>> {
        self.keyed(key)
    }
}

struct KeyedBlock<C>(C);

impl<C> CipherBlock for KeyedBlock<C>
where
    C: BlockEncrypt + BlockDecrypt + Send,
{
    fn encrypt_block(&mut self, block: &mut [u8]) {
        BlockEncrypt::encrypt_block(&self.0, GenericArray::from_mut_slice(block));
    }

    fn decrypt_block(&mut self, block: &mut [u8]) {
        BlockDecrypt::decrypt_block(&self.0, GenericArray::from_mut_slice(block));
    }

    fn block_size(&self) -> usize {
        <C as BlockSizeUser>::block_size()
    }
}

/// The algorithms compiled into this crate.
pub struct BuiltinProvider;

impl CipherProvider for BuiltinProvider {
    fn algorithms(&self) -> Result<Vec<Arc<dyn BlockAlgorithm>>> {
        let algorithms: Vec<Arc<dyn BlockAlgorithm>> = vec![
            Arc::new(RustCryptoAlgorithm::<Aes128>::new("AES128")),
            Arc::new(RustCryptoAlgorithm::<Aes192>::new("AES192")),
            Arc::new(RustCryptoAlgorithm::<Aes256>::new("AES256")),
            Arc::new(RustCryptoAlgorithm::<Des>::new("DES")),
            Arc::new(RustCryptoAlgorithm::<TdesEde3>::new("DES-EDE3")),
        ];

        Ok(algorithms)
    }
}


#[cfg(test)]
mod provider_test {
    use super::*;

    fn find(name: &str) -> Arc<dyn BlockAlgorithm> {
        BuiltinProvider
            .algorithms()
            .unwrap()
            .into_iter()
            .find(|a| a.name() == name)
            .unwrap()
    }

    #[test]
    fn builtin_sizes() {
        let sizes: Vec<(String, usize, usize)> = BuiltinProvider
            .algorithms()
            .unwrap()
            .iter()
            .map(|a| (a.name().to_string(), a.block_size(), a.key_size()))
            .collect();

        assert_eq!(sizes, vec![
            ("AES128".to_string(), 16, 16),
            ("AES192".to_string(), 16, 24),
            ("AES256".to_string(), 16, 32),
            ("DES".to_string(), 8, 8),
            ("DES-EDE3".to_string(), 8, 24),
        ]);
    }

    #[test]
    fn context_size_is_nonzero() {
        for algorithm in BuiltinProvider.algorithms().unwrap() {
            assert!(algorithm.context_size() > 0, "{} has empty state", algorithm.name());
        }
    }

    #[test]
    fn set_key_errors() {
        let r = find("AES128").set_encrypt_key(&[0u8; 15]);

        assert_eq!(r.err(), Some(CipherError::InvalidKeyLength { expected: 16, actual: 15 }));
    }

    #[test]
    fn aes128_zero_block() {
        let algorithm = find("AES128");
        let mut block = [0u8; 16];

        let mut state = algorithm.set_encrypt_key(&[0u8; 16]).unwrap();
        state.encrypt_block(&mut block);

        let expected: [u8; 16] = [
            0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b,
            0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34, 0x2b, 0x2e,
        ];
        assert_eq!(block, expected);

        let mut state = algorithm.set_decrypt_key(&[0u8; 16]).unwrap();
        state.decrypt_block(&mut block);

        assert_eq!(block, [0u8; 16]);
    }

    #[test]
    fn encrypt_blocks_misaligned() {
        let mut state = find("AES128").set_encrypt_key(&[0u8; 16]).unwrap();
        let mut buf = [0x41u8; 17];

        let r = state.encrypt_blocks(&mut buf);

        assert_eq!(r.unwrap_err(), CipherError::MisalignedBuffer { len: 17, block_size: 16 });
        assert_eq!(buf, [0x41u8; 17], "partial encryption leaked into buffer");

        let mut state = find("DES").set_decrypt_key(&[1u8; 8]).unwrap();
        let mut buf = [0x41u8; 12];

        assert!(state.decrypt_blocks(&mut buf).is_err());
        assert_eq!(buf, [0x41u8; 12]);
    }

    #[test]
    fn des_classic_vector() {
        let key = [0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1];
        let mut block = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];

        let mut state = find("DES").set_encrypt_key(&key).unwrap();
        state.encrypt_blocks(&mut block).unwrap();

        assert_eq!(block, [0x85, 0xe8, 0x13, 0x54, 0x0f, 0x0a, 0xb4, 0x05]);
    }
}
