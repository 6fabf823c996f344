/// Key length produced by [`crate::derive_key_iv`].
pub const KEY_LEN: usize = 32;
/// IV length produced by [`crate::derive_key_iv`].
pub const IV_LEN: usize = 16;

pub const SALT_LEN: usize = 8;
pub const SALT_MAGIC: &[u8; 8] = b"Salted__";
pub const HEADER_LEN: usize = SALT_MAGIC.len() + SALT_LEN;

// pad length is stored in a single byte
pub const MAX_PADDED_BLOCK_SIZE: usize = 255;
