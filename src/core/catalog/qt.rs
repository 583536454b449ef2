//! Qt Linguist `.qm` catalogs.
//!
//! A `.qm` file is a magic followed by a tag-length-value stream. Each
//! translation record starts with tag 3, so counting those gives the number of
//! translated strings without decoding any UTF-16 payload.

use tracing::trace;

use crate::core::error::CatalogError;

pub const QM_MAGIC: [u8; 16] = [
    0x3c, 0xb8, 0x64, 0x18, 0xca, 0xef, 0x9c, 0x95, 0xcd, 0x21, 0x1c, 0xbf, 0x60, 0xa1, 0xbd, 0xdd,
];

const TAG_END: u8 = 1;
const TAG_TRANSLATION: u8 = 3;
const TAG_OBSOLETE1: u8 = 5;
const TAG_SOURCE_TEXT: u8 = 6;
const TAG_CONTEXT: u8 = 7;
const TAG_COMMENT: u8 = 8;

/// Length value used by tag 3 for a null translation, which has no payload.
const NULL_TRANSLATION: u32 = u32::MAX;

/// Returns the number of translation records in a `.qm` buffer.
///
/// Only a missing or wrong magic is an error. Anything malformed after it ends
/// the stream early and the records seen so far are returned.
pub fn count_strings(data: &[u8]) -> Result<u32, CatalogError> {
    if data.len() < QM_MAGIC.len() {
        return Err(CatalogError::Truncated {
            expected: QM_MAGIC.len(),
            found: data.len(),
        });
    }
    if data[..QM_MAGIC.len()] != QM_MAGIC {
        return Err(CatalogError::BadMagic(hex(&data[..QM_MAGIC.len()])));
    }

    let mut cursor = Cursor::new(data, QM_MAGIC.len());
    if skip_preamble(&mut cursor).is_none() {
        trace!("qm preamble runs past the end of the buffer");
        return Ok(0);
    }

    let mut nstrings = 0u32;
    while !cursor.at_end() {
        if read_record(&mut cursor, &mut nstrings).is_none() {
            break;
        }
    }
    Ok(nstrings)
}

/// Skips the section header in front of the message stream.
fn skip_preamble(cursor: &mut Cursor<'_>) -> Option<()> {
    cursor.read_u8()?;
    let addr = cursor.read_u32_be()?;
    cursor.skip(addr as usize)?;
    cursor.read_u8()?;
    cursor.read_u32_be()?;
    Some(())
}

/// Consumes one record; `None` ends the stream.
fn read_record(cursor: &mut Cursor<'_>, nstrings: &mut u32) -> Option<()> {
    match cursor.read_u8()? {
        TAG_END => Some(()),
        TAG_OBSOLETE1 => cursor.skip(4),
        TAG_TRANSLATION => {
            let len = cursor.read_u32_be()?;
            *nstrings = nstrings.saturating_add(1);
            if len < NULL_TRANSLATION {
                cursor.skip(len as usize)?;
            }
            Some(())
        }
        TAG_SOURCE_TEXT | TAG_CONTEXT | TAG_COMMENT => {
            let len = cursor.read_u32_be()?;
            cursor.skip(len as usize)
        }
        tag => {
            trace!("unknown qm tag {}, stopping at offset {}", tag, cursor.pos - 1);
            None
        }
    }
}

/// Bounds-checked reader over a catalog buffer.
///
/// Every method returns `None` instead of moving past the end.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn read_u8(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn read_u32_be(&mut self) -> Option<u32> {
        let bytes = self.data.get(self.pos..self.pos.checked_add(4)?)?;
        self.pos += 4;
        Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn skip(&mut self, len: usize) -> Option<()> {
        let end = self.pos.checked_add(len)?;
        if end > self.data.len() {
            trace!(
                "skip of {} bytes at offset {} overruns buffer of {}",
                len,
                self.pos,
                self.data.len()
            );
            return None;
        }
        self.pos = end;
        Some(())
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
