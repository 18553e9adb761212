/*
 * SPDX-FileCopyrightText: 2026 The bitfile authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Shared harnesses for structured fuzzing, compiled with the `fuzz` feature
and driven by the targets in the `fuzz/` crate.

*/

pub mod bit_file;
