use crate::bits::BitReader;
use crate::error::DecodeError;

use super::window::SlidingWindow;
use super::{DISTANCE_BITS, FLAG_BITS, LENGTH_BITS, LITERAL_BITS};

/// Decode a token stream produced by [`compress`](super::compress).
///
/// There is no byte count to work from: the reader stops exactly when all
/// that remains is the padding recorded in the header. Token bodies are
/// guarded so a corrupt pad count surfaces as [`DecodeError::ShortRead`]
/// rather than spinning or producing garbage.
pub fn decompress(payload: &[u8], pad_bits: u8) -> Result<Vec<u8>, DecodeError> {
    let mut reader = BitReader::new(payload, pad_bits);
    let mut window = SlidingWindow::new();
    let mut output = Vec::with_capacity(payload.len() * 2);

    while !reader.at_end() {
        let flag = reader.read_bits(FLAG_BITS);
        if reader.at_end() {
            break;
        }

        if flag == 1 {
            if reader.bits_left() < (DISTANCE_BITS + LENGTH_BITS) as usize {
                return Err(DecodeError::ShortRead);
            }
            let distance = reader.read_bits(DISTANCE_BITS) as u16;
            let length = reader.read_bits(LENGTH_BITS) as u16;

            if length == 0 {
                return Err(DecodeError::BadLength);
            }
            if distance as usize >= window.len() {
                return Err(DecodeError::BadDistance { distance, available: window.len() });
            }

            for _ in 0..length {
                // Recompute the source every step so an overlapping copy
                // reads the bytes it just wrote.
                let byte = window.get_back(distance as usize);
                window.push(byte);
                output.push(byte);
            }
        } else {
            if reader.bits_left() < LITERAL_BITS as usize {
                return Err(DecodeError::ShortRead);
            }
            let first = reader.read_bits(LITERAL_BITS) as u8;
            window.push(first);
            output.push(first);

            if reader.at_end() {
                break;
            }
            if reader.bits_left() < LITERAL_BITS as usize {
                return Err(DecodeError::ShortRead);
            }
            let second = reader.read_bits(LITERAL_BITS) as u8;
            window.push(second);
            output.push(second);
        }
    }

    Ok(output)
}
