/*
 * SPDX-FileCopyrightText: 2026 The bitfile authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Demonstrates each of the bit file operations: bytes, single bits, and
//! multi-bit runs are written to a file and read back.
//!
//! ```sh
//! cargo run --example sample
//! ```

use bitfile::prelude::*;

const NUM_CALLS: u32 = 5;

fn main() -> Result<(), BitFileError> {
    let path = std::env::temp_dir().join("bitfile_sample");

    let mut stream = BitFile::new();
    stream.open(&path, Direction::Write)?;

    for i in 0..NUM_CALLS {
        let byte = b'A' + i as u8;
        println!("writing byte {}", byte as char);
        stream.write_byte(byte)?;
    }

    for i in 0..NUM_CALLS {
        let bit = i % 2 == 1;
        println!("writing bit {}", bit as u8);
        stream.write_bit(bit)?;
    }

    for i in 1..=NUM_CALLS {
        let value = i * 0x11111111;
        println!("writing 32 bits {:08X}", value);
        stream.write_bits(&value.to_be_bytes(), 32)?;
    }

    stream.close();

    stream.open(&path, Direction::Read)?;

    for _ in 0..NUM_CALLS {
        let byte = stream.read_byte()?;
        println!("read byte {}", byte as char);
    }

    for _ in 0..NUM_CALLS {
        let bit = stream.read_bit()?;
        println!("read bit {}", bit as u8);
    }

    for _ in 0..NUM_CALLS {
        let mut bytes = [0u8; 4];
        stream.read_bits(&mut bytes, 32)?;
        println!("read 32 bits {:08X}", u32::from_be_bytes(bytes));
    }

    stream.close();
    let _ = std::fs::remove_file(&path);
    Ok(())
}
