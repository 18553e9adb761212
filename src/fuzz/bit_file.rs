/*
 * SPDX-FileCopyrightText: 2026 The bitfile authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::atomic::{AtomicU64, Ordering};

use arbitrary::Arbitrary;

use crate::prelude::*;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    Bit(bool),
    Byte(u8),
    Bits(Vec<u8>, usize),
}

// Fuzz workers share the temp dir, so every case gets its own file.
static CASE_ID: AtomicU64 = AtomicU64::new(0);

/// Replays a command script through a writer, closes it, and checks every
/// bit of the resulting file (including the zero padding of the final
/// partial byte) against a model of the expected sequence.
pub fn harness(data: FuzzCase) {
    let path = std::env::temp_dir().join(format!(
        "bitfile_fuzz_{}_{}",
        std::process::id(),
        CASE_ID.fetch_add(1, Ordering::Relaxed)
    ));

    let mut model: Vec<bool> = vec![];
    let mut writer = BitFile::open_path(&path, Direction::Write).unwrap();
    for command in &data.commands {
        match command {
            RandomCommand::Bit(bit) => {
                writer.write_bit(*bit).unwrap();
                model.push(*bit);
            }
            RandomCommand::Byte(byte) => {
                writer.write_byte(*byte).unwrap();
                for shift in (0..8).rev() {
                    model.push((byte >> shift) & 1 == 1);
                }
            }
            RandomCommand::Bits(bytes, count) => {
                let count = count % (bytes.len() * 8 + 1);
                writer.write_bits(bytes, count).unwrap();
                for bit in 0..count {
                    model.push((bytes[bit / 8] >> (7 - bit % 8)) & 1 == 1);
                }
            }
        }
    }
    writer.close();

    while model.len() % 8 != 0 {
        model.push(false);
    }

    let mut reader = BitFile::open_path(&path, Direction::Read).unwrap();
    for (index, expected) in model.iter().enumerate() {
        assert_eq!(reader.read_bit().unwrap(), *expected, "bit {}", index);
    }
    assert!(matches!(reader.read_bit(), Err(BitFileError::EndOfData)));
    assert!(reader.at_end());
    reader.close();

    let _ = std::fs::remove_file(&path);
}
