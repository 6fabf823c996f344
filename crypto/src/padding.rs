use super::constants::MAX_PADDED_BLOCK_SIZE;
use super::{CipherError, Result};

/// Appends PKCS#5 padding so the result is a multiple of `block_size`.
///
/// Between 1 and `block_size` bytes are always added; an aligned input gets a
/// whole extra block.
///
/// # Panics
///
/// Panics if `block_size` is zero or larger than 255.
pub fn add_padding_pkcs5(data: &[u8], block_size: usize) -> Vec<u8> {
    assert!(
        (1..=MAX_PADDED_BLOCK_SIZE).contains(&block_size),
        "block size must be in 1..=255"
    );

    let padlen = block_size - (data.len() % block_size);

    let mut padded = Vec::with_capacity(data.len() + padlen);
    padded.extend_from_slice(data);
    padded.resize(data.len() + padlen, padlen as u8);
    padded
}

/// Strips PKCS#5 padding using the last byte as the pad length.
///
/// The pad bytes are not checked against each other, so this must only be
/// applied to ciphertext whose integrity was verified elsewhere. Only a pad
/// length running past the start of `data` is rejected.
pub fn trim_padding_pkcs5(data: &[u8]) -> Result<&[u8]> {
    let padlen = match data.last() {
        Some(&b) => b as usize,
        None => return Err(CipherError::InvalidPadding),
    };

    if padlen > data.len() {
        return Err(CipherError::InvalidPadding);
    }

    Ok(&data[..data.len() - padlen])
}
