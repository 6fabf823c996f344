use super::{CipherError, Result};

pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut()
        .zip(src.iter())
        .for_each(|(x1, x2)| *x1 ^= x2);
}

pub fn check_aligned(len: usize, block_size: usize) -> Result<()> {
    if len % block_size != 0 {
        return Err(CipherError::MisalignedBuffer { len, block_size });
    }

    Ok(())
}

/// Validates an output/input pair before any block work is done.
pub fn check_buffers(output_len: usize, input_len: usize, block_size: usize) -> Result<()> {
    if output_len < input_len {
        return Err(CipherError::BufferTooSmall { input: input_len, output: output_len });
    }

    check_aligned(output_len, block_size)?;
    check_aligned(input_len, block_size)
}
