//! Forward-only rune cursor over a byte stream.

use std::io::{self, BufRead, BufReader, Read};
use std::ops::RangeInclusive;

use crate::lexer::span::ByteOffset;

/// Decodes one UTF-8 scalar at a time from a buffered reader.
///
/// Malformed sequences decode to one U+FFFD per maximal invalid prefix, the
/// same split `String::from_utf8_lossy` makes. Only the bytes of that prefix
/// are consumed, so a byte that interrupts a sequence starts the next rune.
#[derive(Debug)]
pub(crate) struct RuneCursor<R> {
    inner: BufReader<R>,
    offset: ByteOffset,
}

impl<R: Read> RuneCursor<R> {
    /// Creates a cursor at byte offset `0`.
    pub(crate) fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            offset: ByteOffset::new(0),
        }
    }

    /// Returns the offset of the next unread byte.
    pub(crate) fn offset(&self) -> ByteOffset {
        self.offset
    }

    /// Reads the next rune, or `None` at end of input.
    pub(crate) fn next_rune(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.take_byte_if(|_| true)? else {
            return Ok(None);
        };

        let width = utf8_width(lead);
        match width {
            1 => return Ok(Some(char::from(lead))),
            0 => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            _ => {}
        }

        let mut encoded = [lead, 0, 0, 0];
        for (index, slot) in encoded.iter_mut().enumerate().take(width).skip(1) {
            let accepted = if index == 1 {
                second_byte_range(lead)
            } else {
                CONTINUATION
            };
            match self.take_byte_if(|byte| accepted.contains(&byte))? {
                Some(byte) => *slot = byte,
                None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        let rune = std::str::from_utf8(&encoded[..width])
            .ok()
            .and_then(|text| text.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(rune))
    }

    /// Consumes the next byte when `accept` allows it.
    fn take_byte_if(&mut self, accept: impl FnOnce(u8) -> bool) -> io::Result<Option<u8>> {
        let next = loop {
            match self.inner.fill_buf() {
                Ok(buffer) => break buffer.first().copied(),
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error),
            }
        };

        match next {
            Some(byte) if accept(byte) => {
                self.inner.consume(1);
                self.offset = self.offset.advanced_by(1);
                Ok(Some(byte))
            }
            _ => Ok(None),
        }
    }
}

/// Returns the encoded length announced by a UTF-8 lead byte, `0` if invalid.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

const CONTINUATION: RangeInclusive<u8> = 0x80..=0xBF;

/// Returns the bytes allowed right after `lead`.
///
/// The narrowed ranges reject overlong forms, surrogates, and scalars above
/// U+10FFFF before any of their bytes are consumed.
fn second_byte_range(lead: u8) -> RangeInclusive<u8> {
    match lead {
        0xE0 => 0xA0..=0xBF,
        0xED => 0x80..=0x9F,
        0xF0 => 0x90..=0xBF,
        0xF4 => 0x80..=0x8F,
        _ => CONTINUATION,
    }
}
