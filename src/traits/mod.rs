/*
 * SPDX-FileCopyrightText: 2026 The bitfile authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for sequential, bit-granular I/O.

*/

mod bit_stream;
pub use bit_stream::*;
