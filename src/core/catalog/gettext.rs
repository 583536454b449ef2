//! GNU gettext `.mo` catalogs.
//!
//! Only the fixed header is inspected: the magic tells the byte order and the
//! third word (after magic and revision) holds the number of string pairs.

use crate::core::error::CatalogError;

/// Magic of a catalog written in little-endian order.
pub const MO_MAGIC: u32 = 0x950412de;
/// The same magic as seen when the catalog was written in big-endian order.
pub const MO_MAGIC_SWAPPED: u32 = 0xde120495;

/// Twelve 32-bit words.
pub const HEADER_LEN: usize = 12 * 4;

const NSTRINGS_WORD: usize = 2;

/// Returns the number of string pairs declared by a `.mo` header.
pub fn count_strings(data: &[u8]) -> Result<u32, CatalogError> {
    if data.len() < HEADER_LEN {
        return Err(CatalogError::Truncated {
            expected: HEADER_LEN,
            found: data.len(),
        });
    }

    let swapped = match read_word(data, 0) {
        MO_MAGIC => false,
        MO_MAGIC_SWAPPED => true,
        other => return Err(CatalogError::BadMagic(format!("{:#010x}", other))),
    };

    let nstrings = read_word(data, NSTRINGS_WORD);
    Ok(if swapped {
        nstrings.swap_bytes()
    } else {
        nstrings
    })
}

fn read_word(data: &[u8], index: usize) -> u32 {
    let start = index * 4;
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[start..start + 4]);
    u32::from_le_bytes(word)
}
