/*
 * SPDX-FileCopyrightText: 2026 The bitfile authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::traits::{BitRead, BitWrite};

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// The direction a [`BitFile`] is configured for.
///
/// A stream is in exactly one direction at any time. `Closed` is the
/// lifecycle state of a stream owning no handle; passing it to
/// [`BitFile::open`] is rejected with
/// [`InvalidDirection`](BitFileError::InvalidDirection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Reading from the start of the file.
    Read,
    /// Writing, truncating any existing content.
    Write,
    /// Writing, positioned after any existing content.
    Append,
    /// No handle owned.
    Closed,
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Read => write!(f, "read"),
            Direction::Write => write!(f, "write"),
            Direction::Append => write!(f, "append"),
            Direction::Closed => write!(f, "closed"),
        }
    }
}

/// The error returned by [`BitFile`] operations.
///
/// Open-time errors leave the stream closed with no owned handle;
/// per-operation errors ([`EndOfData`](BitFileError::EndOfData),
/// [`WriteFailed`](BitFileError::WriteFailed)) are returned from the failing
/// operation so callers can branch locally.
#[derive(Debug)]
pub enum BitFileError {
    /// An open was attempted on a stream that already owns a handle.
    AlreadyOpen,
    /// The direction passed to open names no openable direction.
    InvalidDirection(Direction),
    /// The underlying open or create failed.
    OpenFailed(io::Error),
    /// The underlying source was exhausted before the request was satisfied.
    EndOfData,
    /// The underlying write failed.
    WriteFailed(io::Error),
}

impl BitFileError {
    fn not_writable() -> Self {
        BitFileError::WriteFailed(io::Error::new(
            io::ErrorKind::NotConnected,
            "stream not open for writing",
        ))
    }
}

impl core::fmt::Display for BitFileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitFileError::AlreadyOpen => write!(f, "stream already owns an open file"),
            BitFileError::InvalidDirection(direction) => {
                write!(f, "cannot open a stream in direction {}", direction)
            }
            BitFileError::OpenFailed(e) => write!(f, "underlying open failed: {}", e),
            BitFileError::EndOfData => write!(f, "end of data"),
            BitFileError::WriteFailed(e) => write!(f, "underlying write failed: {}", e),
        }
    }
}

impl std::error::Error for BitFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BitFileError::OpenFailed(e) | BitFileError::WriteFailed(e) => Some(e),
            _ => None,
        }
    }
}

/// The owned handle. At most one of the two halves exists at a time.
#[derive(Debug)]
enum Backend {
    Closed,
    Read(BufReader<File>),
    Write(BufWriter<File>),
}

/// A bit-granular stream over one underlying file.
///
/// All transfers route through a one-byte accumulator: `bit_buffer` holds
/// the pending bits and `bit_count` how many of its low bits are
/// meaningful, always in `[0, 8)`. For a reader the count is the number of
/// bits of the most recently fetched byte not yet delivered; for a writer
/// it is the number of bits accumulated but not yet flushed as a full
/// byte.
///
/// Closing a writer (explicitly or by dropping it) flushes any pending
/// bits as one final byte, left-justified with zero-padded low bits. Once
/// flushed, that partial byte cannot be amended. Close-time flush errors
/// are not observable; if that matters, check [`has_failed`] after the
/// last write instead.
///
/// The stream is single-threaded and blocking; share it across threads
/// only behind external mutual exclusion.
///
/// [`has_failed`]: BitFile::has_failed
#[derive(Debug)]
pub struct BitFile {
    backend: Backend,
    direction: Direction,
    bit_buffer: u8,
    bit_count: u8,
    at_end: bool,
    failed: bool,
}

impl BitFile {
    /// Creates a stream in the [`Closed`](Direction::Closed) direction,
    /// owning no handle.
    pub fn new() -> Self {
        Self {
            backend: Backend::Closed,
            direction: Direction::Closed,
            bit_buffer: 0,
            bit_count: 0,
            at_end: false,
            failed: false,
        }
    }

    /// Opens `path` in the requested direction.
    ///
    /// The stream must currently be closed. `Append` positions writes at
    /// the current end of the file, creating it if necessary; `Write`
    /// truncates. On any failure the stream stays closed with no owned
    /// handle.
    pub fn open<P: AsRef<Path>>(
        &mut self,
        path: P,
        direction: Direction,
    ) -> Result<(), BitFileError> {
        if !matches!(self.backend, Backend::Closed) {
            return Err(BitFileError::AlreadyOpen);
        }
        let backend = match direction {
            Direction::Read => {
                let file = File::open(path).map_err(BitFileError::OpenFailed)?;
                Backend::Read(BufReader::new(file))
            }
            Direction::Write => {
                let file = File::create(path).map_err(BitFileError::OpenFailed)?;
                Backend::Write(BufWriter::new(file))
            }
            Direction::Append => {
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .map_err(BitFileError::OpenFailed)?;
                Backend::Write(BufWriter::new(file))
            }
            Direction::Closed => return Err(BitFileError::InvalidDirection(direction)),
        };
        self.backend = backend;
        self.direction = direction;
        self.bit_buffer = 0;
        self.bit_count = 0;
        self.at_end = false;
        self.failed = false;
        Ok(())
    }

    /// Opens `path` in the requested direction, like [`BitFile::new`]
    /// followed by [`open`](BitFile::open).
    pub fn open_path<P: AsRef<Path>>(
        path: P,
        direction: Direction,
    ) -> Result<Self, BitFileError> {
        let mut stream = Self::new();
        stream.open(path, direction)?;
        Ok(stream)
    }

    /// Flushes pending write bits as one zero-padded byte, releases the
    /// underlying handle, and returns the stream to the closed direction.
    ///
    /// Closing an already-closed stream is a no-op. Flush and close errors
    /// are swallowed; callers that need to observe write failures must
    /// check [`has_failed`](BitFile::has_failed) before closing.
    pub fn close(&mut self) {
        if let Backend::Write(writer) = &mut self.backend {
            if self.bit_count > 0 {
                let padded = self.bit_buffer << (8 - self.bit_count);
                let _ = writer.write_all(&[padded]);
            }
            let _ = writer.flush();
        }
        self.backend = Backend::Closed;
        self.direction = Direction::Closed;
        self.bit_buffer = 0;
        self.bit_count = 0;
        self.at_end = false;
        self.failed = false;
    }

    /// The direction the stream is currently open in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the stream currently owns a handle.
    pub fn is_open(&self) -> bool {
        !matches!(self.backend, Backend::Closed)
    }

    /// Whether a read has hit the end of the underlying file.
    ///
    /// Closed streams report `false`. Like the other status queries, this
    /// reflects only the underlying handle, never the accumulator: a
    /// reader may be at end while buffered bits are still deliverable.
    pub fn at_end(&self) -> bool {
        self.at_end
    }

    /// Whether no underlying I/O operation has failed since the stream was
    /// opened. Closed streams report `true`.
    pub fn is_healthy(&self) -> bool {
        !self.failed
    }

    /// Whether an underlying I/O operation has failed since the stream was
    /// opened. Closed streams report `false`.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Reads one raw byte from the handle. End of data is keyed off the
    /// read result, never off the value read, so 0xFF bytes are ordinary
    /// data.
    fn fetch_byte(&mut self) -> Result<u8, BitFileError> {
        let Backend::Read(reader) = &mut self.backend else {
            return Err(BitFileError::EndOfData);
        };
        let mut byte = [0u8; 1];
        match reader.read_exact(&mut byte) {
            Ok(()) => Ok(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                self.at_end = true;
                Err(BitFileError::EndOfData)
            }
            Err(_) => {
                self.failed = true;
                Err(BitFileError::EndOfData)
            }
        }
    }

    /// Writes one raw byte to the handle.
    fn put_raw(&mut self, byte: u8) -> Result<u8, BitFileError> {
        let Backend::Write(writer) = &mut self.backend else {
            return Err(BitFileError::not_writable());
        };
        match writer.write_all(&[byte]) {
            Ok(()) => Ok(byte),
            Err(e) => {
                self.failed = true;
                Err(BitFileError::WriteFailed(e))
            }
        }
    }
}

impl Default for BitFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BitFile {
    fn drop(&mut self) {
        // During a drop there is nobody left to tell if the flush goes bad.
        self.close();
    }
}

impl BitRead for BitFile {
    type Error = BitFileError;

    fn read_bit(&mut self) -> Result<bool, BitFileError> {
        if !matches!(self.backend, Backend::Read(_)) {
            return Err(BitFileError::EndOfData);
        }
        if self.bit_count == 0 {
            self.bit_buffer = self.fetch_byte()?;
            self.bit_count = 8;
        }
        // Most-significant remaining bit first.
        self.bit_count -= 1;
        Ok((self.bit_buffer >> self.bit_count) & 1 == 1)
    }

    fn read_byte(&mut self) -> Result<u8, BitFileError> {
        if self.bit_count == 0 {
            return self.fetch_byte();
        }
        // Slide the window: the buffered bits fill the top of the result,
        // the fresh byte supplies the rest and replaces the buffer with the
        // count unchanged. On end of data nothing is consumed.
        let fresh = self.fetch_byte()?;
        let composed = (self.bit_buffer << (8 - self.bit_count)) | (fresh >> self.bit_count);
        self.bit_buffer = fresh;
        Ok(composed)
    }

    fn read_bits(&mut self, dst: &mut [u8], n: usize) -> Result<usize, BitFileError> {
        assert!(
            dst.len() >= n.div_ceil(8),
            "destination holds {} bytes but {} bits were requested",
            dst.len(),
            n
        );
        let mut offset = 0;
        let mut remaining = n;
        while remaining >= 8 {
            dst[offset] = self.read_byte()?;
            offset += 1;
            remaining -= 8;
        }
        if remaining > 0 {
            let mut acc = 0u8;
            for _ in 0..remaining {
                acc = (acc << 1) | self.read_bit()? as u8;
            }
            // Left-justify the trailing bits; the unused low bits stay zero.
            dst[offset] = acc << (8 - remaining);
        }
        Ok(n)
    }
}

impl BitWrite for BitFile {
    type Error = BitFileError;

    fn write_bit(&mut self, bit: bool) -> Result<bool, BitFileError> {
        if !matches!(self.backend, Backend::Write(_)) {
            return Err(BitFileError::not_writable());
        }
        self.bit_buffer = (self.bit_buffer << 1) | bit as u8;
        self.bit_count += 1;
        if self.bit_count == 8 {
            // Reset before the write so the count never stays at 8, even
            // when the flush fails.
            let full = self.bit_buffer;
            self.bit_buffer = 0;
            self.bit_count = 0;
            self.put_raw(full)?;
        }
        Ok(bit)
    }

    fn write_byte(&mut self, byte: u8) -> Result<u8, BitFileError> {
        if self.bit_count == 0 {
            return self.put_raw(byte);
        }
        // The buffered bits go out at the top, the top of `byte` below
        // them; the raw byte then replaces the buffer with the count
        // unchanged, its low bits becoming the new pending bits.
        let composed = (self.bit_buffer << (8 - self.bit_count)) | (byte >> self.bit_count);
        self.put_raw(composed)?;
        self.bit_buffer = byte;
        Ok(composed)
    }

    fn write_bits(&mut self, src: &[u8], n: usize) -> Result<usize, BitFileError> {
        assert!(
            src.len() >= n.div_ceil(8),
            "source holds {} bytes but {} bits were requested",
            src.len(),
            n
        );
        let mut offset = 0;
        let mut remaining = n;
        while remaining >= 8 {
            self.write_byte(src[offset])?;
            offset += 1;
            remaining -= 8;
        }
        if remaining > 0 {
            let mut byte = src[offset];
            for _ in 0..remaining {
                self.write_bit(byte & 0x80 != 0)?;
                byte <<= 1;
            }
        }
        Ok(n)
    }
}
