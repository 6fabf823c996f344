use super::constants::{HEADER_LEN, SALT_LEN, SALT_MAGIC};
use super::context::{Decryptor, Encryptor};
use super::kdf::MessageDigest;
use super::mode::Mode;
use super::padding::{add_padding_pkcs5, trim_padding_pkcs5};
use super::registry::{get_cipher_types, AlgorithmDescriptor};
use super::{CipherError, Result};

fn derive(descriptor: &AlgorithmDescriptor, password: &[u8], salt: &[u8], digest: MessageDigest) -> (Vec<u8>, Vec<u8>) {
    digest.bytes_to_key(password, salt, descriptor.key_size(), descriptor.block_size())
}

pub fn seal(name: &str, password: &[u8], salt: &[u8; SALT_LEN], digest: MessageDigest, plaintext: &[u8]) -> Result<Vec<u8>> {
    let registry = get_cipher_types()?;
    let descriptor = registry.get(name)?;

    let (key, iv) = derive(&descriptor, password, salt, digest);
    let mut encryptor = Encryptor::with_registry(registry, name, &key)?;

    let mut body = add_padding_pkcs5(plaintext, descriptor.block_size());
    encryptor.encrypt_cbc_in_place(Mode::Cbc, &iv, &mut body)?;

    let mut envelope = Vec::with_capacity(HEADER_LEN + body.len());
    envelope.extend_from_slice(SALT_MAGIC);
    envelope.extend_from_slice(salt);
    envelope.extend_from_slice(&body);

    Ok(envelope)
}

pub fn open(name: &str, password: &[u8], digest: MessageDigest, envelope: &[u8]) -> Result<Vec<u8>> {
    let registry = get_cipher_types()?;
    let descriptor = registry.get(name)?;

    if envelope.len() < HEADER_LEN || &envelope[..SALT_MAGIC.len()] != SALT_MAGIC {
        return Err(CipherError::InvalidEnvelope("missing salt header"));
    }

    let salt = &envelope[SALT_MAGIC.len()..HEADER_LEN];
    let mut body = envelope[HEADER_LEN..].to_vec();

    if body.is_empty() || body.len() % descriptor.block_size() != 0 {
        return Err(CipherError::InvalidEnvelope("ciphertext is not block aligned"));
    }

    let (key, iv) = derive(&descriptor, password, salt, digest);
    let mut decryptor = Decryptor::with_registry(registry, name, &key)?;
    decryptor.decrypt_cbc_in_place(Mode::Cbc, &iv, &mut body)?;

    // a wrong password usually shows up here
    let padlen = body[body.len() - 1] as usize;
    if padlen == 0 || padlen > descriptor.block_size() {
        return Err(CipherError::InvalidPadding);
    }

    let plaintext_len = trim_padding_pkcs5(&body)?.len();
    body.truncate(plaintext_len);

    Ok(body)
}
