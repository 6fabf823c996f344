use super::cbc;
use super::context::{make_decryptor, make_encryptor, CipherContext, Decryptor, Direction, Encryptor};
use super::mode::Mode;
use super::utils::check_buffers;
use super::{CipherError, Result};

impl CipherContext {
    fn check_iv(&self, iv: &[u8]) -> Result<()> {
        if iv.len() != self.block_size() {
            return Err(CipherError::InvalidIvLength {
                expected: self.block_size(),
                actual: iv.len(),
            });
        }

        Ok(())
    }

    fn apply_raw(&mut self, direction: Direction, buf: &mut [u8]) -> Result<()> {
        match direction {
            Direction::Encrypt => self.state_mut().encrypt_blocks(buf),
            Direction::Decrypt => self.state_mut().decrypt_blocks(buf),
        }
    }

    fn apply_cbc(&mut self, direction: Direction, iv: &[u8], buf: &mut [u8]) {
        match direction {
            Direction::Encrypt => cbc::encrypt_blocks(self.state_mut(), iv, buf),
            Direction::Decrypt => cbc::decrypt_blocks(self.state_mut(), iv, buf),
        }
    }

    fn raw_into<'a>(&mut self, direction: Direction, output: &'a mut [u8], input: &[u8]) -> Result<&'a mut [u8]> {
        check_buffers(output.len(), input.len(), self.block_size())?;

        output[..input.len()].copy_from_slice(input);
        self.apply_raw(direction, &mut output[..input.len()])?;

        Ok(output)
    }

    fn raw_in_place(&mut self, direction: Direction, buf: &mut [u8]) -> Result<()> {
        check_buffers(buf.len(), buf.len(), self.block_size())?;
        self.apply_raw(direction, buf)
    }

    fn cbc_into<'a>(
        &mut self,
        direction: Direction,
        mode: Mode,
        iv: &[u8],
        output: &'a mut [u8],
        input: &[u8],
    ) -> Result<&'a mut [u8]> {
        mode.require_cbc()?;
        self.check_iv(iv)?;
        check_buffers(output.len(), input.len(), self.block_size())?;

        output[..input.len()].copy_from_slice(input);
        self.apply_cbc(direction, iv, &mut output[..input.len()]);

        Ok(output)
    }

    fn cbc_in_place(&mut self, direction: Direction, mode: Mode, iv: &[u8], buf: &mut [u8]) -> Result<()> {
        mode.require_cbc()?;
        self.check_iv(iv)?;
        check_buffers(buf.len(), buf.len(), self.block_size())?;

        self.apply_cbc(direction, iv, buf);
        Ok(())
    }
}

impl Encryptor {
    /// Encrypts `input` block by block into the front of `output`.
    ///
    /// Bytes of `output` past `input.len()` are left untouched.
    pub fn encrypt_into<'a>(&mut self, output: &'a mut [u8], input: &[u8]) -> Result<&'a mut [u8]> {
        self.ctx.raw_into(Direction::Encrypt, output, input)
    }

    pub fn encrypt_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ctx.raw_in_place(Direction::Encrypt, buf)
    }

    pub fn encrypt(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; input.len()];
        self.encrypt_into(&mut output, input)?;
        Ok(output)
    }

    pub fn encrypt_cbc_into<'a>(
        &mut self,
        mode: Mode,
        iv: &[u8],
        output: &'a mut [u8],
        input: &[u8],
    ) -> Result<&'a mut [u8]> {
        self.ctx.cbc_into(Direction::Encrypt, mode, iv, output, input)
    }

    pub fn encrypt_cbc_in_place(&mut self, mode: Mode, iv: &[u8], buf: &mut [u8]) -> Result<()> {
        self.ctx.cbc_in_place(Direction::Encrypt, mode, iv, buf)
    }

    pub fn encrypt_cbc(&mut self, mode: Mode, iv: &[u8], input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; input.len()];
        self.encrypt_cbc_into(mode, iv, &mut output, input)?;
        Ok(output)
    }
}

impl Decryptor {
    /// Decrypts `input` block by block into the front of `output`.
    ///
    /// Bytes of `output` past `input.len()` are left untouched.
    pub fn decrypt_into<'a>(&mut self, output: &'a mut [u8], input: &[u8]) -> Result<&'a mut [u8]> {
        self.ctx.raw_into(Direction::Decrypt, output, input)
    }

    pub fn decrypt_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ctx.raw_in_place(Direction::Decrypt, buf)
    }

    pub fn decrypt(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; input.len()];
        self.decrypt_into(&mut output, input)?;
        Ok(output)
    }

    pub fn decrypt_cbc_into<'a>(
        &mut self,
        mode: Mode,
        iv: &[u8],
        output: &'a mut [u8],
        input: &[u8],
    ) -> Result<&'a mut [u8]> {
        self.ctx.cbc_into(Direction::Decrypt, mode, iv, output, input)
    }

    pub fn decrypt_cbc_in_place(&mut self, mode: Mode, iv: &[u8], buf: &mut [u8]) -> Result<()> {
        self.ctx.cbc_in_place(Direction::Decrypt, mode, iv, buf)
    }

    pub fn decrypt_cbc(&mut self, mode: Mode, iv: &[u8], input: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; input.len()];
        self.decrypt_cbc_into(mode, iv, &mut output, input)?;
        Ok(output)
    }
}

/// One-shot raw block encryption with a throwaway context.
pub fn encrypt(name: &str, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    make_encryptor(name, key)?.encrypt(data)
}

/// One-shot raw block decryption with a throwaway context.
pub fn decrypt(name: &str, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    make_decryptor(name, key)?.decrypt(data)
}

pub fn encrypt_cbc(name: &str, key: &[u8], mode: Mode, iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    make_encryptor(name, key)?.encrypt_cbc(mode, iv, data)
}

pub fn decrypt_cbc(name: &str, key: &[u8], mode: Mode, iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    make_decryptor(name, key)?.decrypt_cbc(mode, iv, data)
}
