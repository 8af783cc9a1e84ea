use crate::bits::BitWriter;

use super::matcher::find_longest_match;
use super::window::SlidingWindow;
use super::{Token, DISTANCE_BITS, FLAG_BITS, LENGTH_BITS, LITERAL_BITS, LOOKAHEAD_SIZE};

/// Greedily tokenize `input` against a fresh sliding window.
///
/// Literals always come out in pairs, except for a lone literal at the very
/// end of the input; the serializer and the decoder both rely on that shape.
pub fn tokenize(input: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut window = SlidingWindow::new();
    let mut pos = 0usize;

    while pos < input.len() {
        let lookahead = &input[pos..input.len().min(pos + LOOKAHEAD_SIZE)];

        match find_longest_match(&window, lookahead) {
            Some(m) => {
                tokens.push(Token::Match { distance: m.distance, length: m.length });
                for &byte in &lookahead[..m.length as usize] {
                    window.push(byte);
                }
                pos += m.length as usize;
            }
            None => {
                tokens.push(Token::Literal(lookahead[0]));
                window.push(lookahead[0]);
                pos += 1;

                if pos < input.len() {
                    tokens.push(Token::Literal(input[pos]));
                    window.push(input[pos]);
                    pos += 1;
                }
            }
        }
    }

    tokens
}

/// Compress `input` into a token bit stream.
///
/// Returns the packed payload bytes and the number of zero bits used to
/// pad the final byte; the container records that count in the header so
/// the decoder knows exactly where the tokens stop.
pub fn compress(input: &[u8]) -> (Vec<u8>, u8) {
    let tokens = tokenize(input);
    debug_assert_eq!(
        tokens.iter().map(Token::uncompressed_size).sum::<usize>(),
        input.len()
    );

    let mut writer = BitWriter::with_capacity(input.len());
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            Token::Match { distance, length } => {
                writer.write_bits(1, FLAG_BITS);
                writer.write_bits(distance as u32, DISTANCE_BITS);
                writer.write_bits(length as u32, LENGTH_BITS);
                i += 1;
            }
            Token::Literal(first) => {
                // One flag covers the whole pair; the second byte is
                // missing only when the input ran dry on an odd literal.
                writer.write_bits(0, FLAG_BITS);
                writer.write_bits(first as u32, LITERAL_BITS);
                i += 1;
                if let Some(&Token::Literal(second)) = tokens.get(i) {
                    writer.write_bits(second as u32, LITERAL_BITS);
                    i += 1;
                }
            }
        }
    }

    writer.finish()
}
