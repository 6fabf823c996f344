// chaining state lives only for one call

use super::utils::xor_in_place;
use super::CipherBlock;

/// Encrypts `buf` in place. `buf` must be block aligned and `iv` one block long.
pub(crate) fn encrypt_blocks(block: &mut dyn CipherBlock, iv: &[u8], buf: &mut [u8]) {
    let block_size = block.block_size();
    let mut state = iv.to_vec();

    for chunk in buf.chunks_exact_mut(block_size) {
        xor_in_place(chunk, &state);
        block.encrypt_block(chunk);
        state.copy_from_slice(chunk);
    }
}

/// Decrypts `buf` in place. `buf` must be block aligned and `iv` one block long.
pub(crate) fn decrypt_blocks(block: &mut dyn CipherBlock, iv: &[u8], buf: &mut [u8]) {
    let block_size = block.block_size();
    let mut state = iv.to_vec();
    let mut saved = vec![0u8; block_size];

    for chunk in buf.chunks_exact_mut(block_size) {
        saved.copy_from_slice(chunk);
        block.decrypt_block(chunk);
        xor_in_place(chunk, &state);
        std::mem::swap(&mut state, &mut saved);
    }
}


#[cfg(test)]
mod cbc_test {
    use super::*;
    use crate::registry::get_cipher_types;

    const KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
    ];

    const PLAINTEXT: [u8; 32] = [
        0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
        0xae, 0x2d, 0x8a, 0x57, 0x1e, 0x03, 0xac, 0x9c, 0x9e, 0xb7, 0x6f, 0xac, 0x45, 0xaf, 0x8e, 0x51,
    ];

    const CIPHERTEXT: [u8; 32] = [
        0x76, 0x49, 0xab, 0xac, 0x81, 0x19, 0xb2, 0x46, 0xce, 0xe9, 0x8e, 0x9b, 0x12, 0xe9, 0x19, 0x7d,
        0x50, 0x86, 0xcb, 0x9b, 0x50, 0x72, 0x19, 0xee, 0x95, 0xdb, 0x11, 0x3a, 0x91, 0x76, 0x78, 0xb2,
    ];

    fn iv() -> Vec<u8> {
        (0..16).collect()
    }

    #[test]
    fn encrypt_res() {
        let descriptor = get_cipher_types().unwrap().get("AES128").unwrap();
        let mut block = descriptor.set_encrypt_key(&KEY).unwrap();

        let mut buf = PLAINTEXT;
        encrypt_blocks(block.as_mut(), &iv(), &mut buf);

        assert_eq!(buf, CIPHERTEXT);
    }

    #[test]
    fn decrypt_res() {
        let descriptor = get_cipher_types().unwrap().get("AES128").unwrap();
        let mut block = descriptor.set_decrypt_key(&KEY).unwrap();

        let mut buf = CIPHERTEXT;
        decrypt_blocks(block.as_mut(), &iv(), &mut buf);

        assert_eq!(buf, PLAINTEXT);
    }

    #[test]
    fn iv_is_not_mutated() {
        let descriptor = get_cipher_types().unwrap().get("AES128").unwrap();
        let mut block = descriptor.set_encrypt_key(&KEY).unwrap();

        let iv = iv();
        let mut buf = PLAINTEXT;
        encrypt_blocks(block.as_mut(), &iv, &mut buf);

        assert_eq!(iv, (0..16).collect::<Vec<u8>>());
    }
}
