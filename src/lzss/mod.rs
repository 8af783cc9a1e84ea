//! The LZSS engine: sliding-window match search, token encode and decode.

pub mod decoder;
pub mod encoder;
pub mod matcher;
pub mod token;
pub mod window;

pub use decoder::decompress;
pub use encoder::{compress, tokenize};
pub use token::Token;
pub use window::SlidingWindow;

/// Flag bit ahead of every token.
pub const FLAG_BITS: u8 = 1;
/// Width of the match distance field.
pub const DISTANCE_BITS: u8 = 13;
/// Width of the match length field.
pub const LENGTH_BITS: u8 = 5;
/// Width of a literal byte.
pub const LITERAL_BITS: u8 = 8;

/// Sliding window capacity, fixed by the distance field width.
pub const WINDOW_SIZE: usize = 1 << DISTANCE_BITS;
/// Lookahead capacity.
pub const LOOKAHEAD_SIZE: usize = 1 << LENGTH_BITS;
/// Shortest back-reference worth a token; anything shorter goes out as
/// literals.
pub const MIN_MATCH: usize = 3;
/// Longest encodable match. The length field keeps zero reserved, so the
/// usable range stops one short of the lookahead capacity.
pub const MAX_MATCH: usize = LOOKAHEAD_SIZE - 1;
