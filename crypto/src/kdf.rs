use super::constants::{IV_LEN, KEY_LEN};
use super::CipherError;

use md5::Md5;
use sha2::{Digest, Sha256};

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageDigest {
    #[default]
    Md5,
    Sha256,
}

impl MessageDigest {
    pub fn bytes_to_key(&self, password: &[u8], salt: &[u8], key_len: usize, iv_len: usize) -> (Vec<u8>, Vec<u8>) {
        match self {
            MessageDigest::Md5 => bytes_to_key::<Md5>(password, salt, key_len, iv_len),
            MessageDigest::Sha256 => bytes_to_key::<Sha256>(password, salt, key_len, iv_len),
        }
    }
}

impl FromStr for MessageDigest {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(MessageDigest::Md5),
            "sha256" | "sha-256" => Ok(MessageDigest::Sha256),
            _ => Err(CipherError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageDigest::Md5 => f.write_str("md5"),
            MessageDigest::Sha256 => f.write_str("sha256"),
        }
    }
}

/// Derives a 32-byte key and 16-byte IV from `password` and `salt` with MD5.
///
/// ```text
/// d1 = md5(password ++ salt)
/// d2 = md5(d1 ++ password ++ salt)
/// d3 = md5(d2 ++ password ++ salt)
/// key = d1 ++ d2, iv = d3
/// ```
pub fn derive_key_iv(password: &[u8], salt: &[u8]) -> ([u8; KEY_LEN], [u8; IV_LEN]) {
    let d1 = Md5::new().chain_update(password).chain_update(salt).finalize();
    let d2 = Md5::new().chain_update(d1).chain_update(password).chain_update(salt).finalize();
    let d3 = Md5::new().chain_update(d2).chain_update(password).chain_update(salt).finalize();

    let mut key = [0u8; KEY_LEN];
    key[..16].copy_from_slice(&d1);
    key[16..].copy_from_slice(&d2);

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&d3);

    (key, iv)
}

/// General form of [`derive_key_iv`] for any digest and output lengths.
pub fn bytes_to_key<D: Digest>(password: &[u8], salt: &[u8], key_len: usize, iv_len: usize) -> (Vec<u8>, Vec<u8>) {
    let mut material = Vec::with_capacity(key_len + iv_len);
    let mut prev: Vec<u8> = Vec::new();

    while material.len() < key_len + iv_len {
        prev = D::new()
            .chain_update(&prev)
            .chain_update(password)
            .chain_update(salt)
            .finalize()
            .to_vec();
        material.extend_from_slice(&prev);
    }

    let iv = material[key_len..key_len + iv_len].to_vec();
    material.truncate(key_len);

    (material, iv)
}
