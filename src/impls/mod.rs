/*
 * SPDX-FileCopyrightText: 2026 The bitfile authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of bit-granular file streams.

[`BitFile`] wraps one open file handle in a single [`Direction`], together
with the sub-byte accumulator that aligns bit-level requests onto
byte-addressable storage. Open it with [`BitFile::open`] or
[`BitFile::open_path`], transfer data through the
[`BitRead`](crate::traits::BitRead) and
[`BitWrite`](crate::traits::BitWrite) traits, and close it explicitly or
let the destructor flush for you.

*/

mod bit_file;
pub use bit_file::*;
