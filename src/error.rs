use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("bad image geometry: {reason} (width {width}, input {len} bytes)")]
    InputGeometry { width: u16, len: usize, reason: &'static str },
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("input shorter than the 3-byte stream header")]
    Truncated,

    #[error("bit stream ended in the middle of a token")]
    ShortRead,

    #[error("match distance {distance} exceeds the {available} bytes decoded so far")]
    BadDistance { distance: u16, available: usize },

    #[error("match token with zero length")]
    BadLength,

    #[error("bad stream header: {0}")]
    BadHeader(&'static str),
}
