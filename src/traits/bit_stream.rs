/*
 * SPDX-FileCopyrightText: 2026 The bitfile authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::error::Error;

/// Sequential, streaming bit-by-bit reads.
///
/// Bits are delivered most-significant-bit first within each underlying
/// byte. [`read_byte`](BitRead::read_byte) does not require byte alignment:
/// when bits are pending in the accumulator, implementations compose the
/// result across the byte boundary.
///
/// This is the seam a decoder (Huffman, variable-length integers, ...)
/// builds on.
pub trait BitRead {
    type Error: Error + Send + Sync + 'static;

    /// Read a single bit.
    fn read_bit(&mut self) -> Result<bool, Self::Error>;

    /// Read the next 8 bits as one byte, regardless of bit alignment.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Read `n` bits into `dst`, packed most-significant-bit first, and
    /// return `n`.
    ///
    /// Whole 8-bit groups go through [`read_byte`](BitRead::read_byte); only
    /// the 0–7 trailing bits take the single-bit path. The trailing bits are
    /// left-justified in their destination byte, with the unused low bits
    /// zeroed.
    ///
    /// On failure, whole bytes already transferred are left in `dst`.
    ///
    /// # Panics
    ///
    /// If `dst` is shorter than `n.div_ceil(8)` bytes.
    fn read_bits(&mut self, dst: &mut [u8], n: usize) -> Result<usize, Self::Error>;
}

/// Sequential, streaming bit-by-bit writes.
///
/// The symmetric counterpart of [`BitRead`]: bits are emitted
/// most-significant-bit first, packed left to right across byte boundaries.
pub trait BitWrite {
    type Error: Error + Send + Sync + 'static;

    /// Write a single bit and return it.
    fn write_bit(&mut self, bit: bool) -> Result<bool, Self::Error>;

    /// Write 8 bits as one byte, regardless of bit alignment.
    ///
    /// Returns the byte that actually reached the underlying stream, which
    /// differs from `byte` when bits are pending in the accumulator.
    fn write_byte(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Write the first `n` bits of `src`, most-significant-bit first, and
    /// return `n`.
    ///
    /// Whole 8-bit groups go through [`write_byte`](BitWrite::write_byte);
    /// the 0–7 trailing bits go out one at a time from the most-significant
    /// end of the final source byte. Bits written before a failure are not
    /// retracted.
    ///
    /// # Panics
    ///
    /// If `src` is shorter than `n.div_ceil(8)` bytes.
    fn write_bits(&mut self, src: &[u8], n: usize) -> Result<usize, Self::Error>;
}
