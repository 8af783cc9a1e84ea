//! Stream assembly: pre-transforms, trial selection, raw fallback, and the
//! matching decode pipeline.

use crate::delta;
use crate::error::{DecodeError, EncodeError};
use crate::header::{StreamHeader, HEADER_LEN};
use crate::lzss;
use crate::tiles::{self, TILE_DIM};
use crate::{EncodeOpts, ScanMode};

/// Compress `input` into a self-describing stream.
///
/// The result always begins with the 3-byte header. When the LZSS payload
/// would not shrink the input, the original bytes are stored verbatim
/// instead and the header's compressed flag stays clear.
pub fn encode(input: &[u8], opts: EncodeOpts) -> Result<Vec<u8>, EncodeError> {
    let adaptive = opts.mode == ScanMode::Adaptive;

    let (payload, pad_bits, vertical) = match opts.mode {
        ScanMode::Static => {
            let mut work = input.to_vec();
            if opts.delta {
                delta::forward(&mut work);
            }
            let (payload, pad_bits) = lzss::compress(&work);
            (payload, pad_bits, false)
        }
        ScanMode::Adaptive => {
            check_geometry(input, opts.width)?;

            // Both scan orders are tried in full; ties go to horizontal.
            let (h_payload, h_pad) = run_trial(input, &opts, false);
            let (v_payload, v_pad) = run_trial(input, &opts, true);
            if h_payload.len() <= v_payload.len() {
                (h_payload, h_pad, false)
            } else {
                (v_payload, v_pad, true)
            }
        }
    };

    let compressed = payload.len() < input.len();
    let header = StreamHeader {
        pad_bits: if compressed { pad_bits } else { 0 },
        adaptive,
        vertical: compressed && vertical,
        compressed,
        delta: opts.delta,
        width: if adaptive { opts.width } else { 0 },
    };

    let body: &[u8] = if compressed { &payload } else { input };
    let mut out = Vec::with_capacity(HEADER_LEN + body.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(body);
    Ok(out)
}

/// Decompress a stream produced by [`encode`].
pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let header = StreamHeader::parse(input)?;
    let payload = &input[HEADER_LEN..];

    if !header.compressed {
        return Ok(payload.to_vec());
    }

    let mut work = lzss::decompress(payload, header.pad_bits)?;

    if header.adaptive {
        let width = header.width as usize;
        if width == 0 || width % TILE_DIM != 0 {
            return Err(DecodeError::BadHeader("adaptive stream with unusable width"));
        }
        if work.len() % (width * TILE_DIM) != 0 {
            return Err(DecodeError::BadHeader("decoded size does not fit the tile grid"));
        }

        let mut decoded_tiles = tiles::split(&work);
        if header.delta {
            for tile in &mut decoded_tiles {
                delta::inverse(tile);
            }
        }
        work = tiles::from_tiles(&decoded_tiles, width, header.vertical);
    } else if header.delta {
        delta::inverse(&mut work);
    }

    Ok(work)
}

/// One adaptive trial: tile reorder, optional per-tile delta, then LZSS
/// over the concatenated tile stream.
fn run_trial(input: &[u8], opts: &EncodeOpts, transpose: bool) -> (Vec<u8>, u8) {
    let mut trial_tiles = tiles::to_tiles(input, opts.width as usize, transpose);
    if opts.delta {
        for tile in &mut trial_tiles {
            delta::forward(tile);
        }
    }
    lzss::compress(&tiles::concat(trial_tiles))
}

fn check_geometry(input: &[u8], width: u16) -> Result<(), EncodeError> {
    let len = input.len();
    if width == 0 {
        return Err(EncodeError::InputGeometry { width, len, reason: "width must be > 0" });
    }
    if width as usize % TILE_DIM != 0 {
        return Err(EncodeError::InputGeometry {
            width,
            len,
            reason: "width is not a multiple of the tile width",
        });
    }
    if len % width as usize != 0 {
        return Err(EncodeError::InputGeometry {
            width,
            len,
            reason: "input size is not a multiple of the width",
        });
    }
    let height = len / width as usize;
    if height % TILE_DIM != 0 {
        return Err(EncodeError::InputGeometry {
            width,
            len,
            reason: "height is not a multiple of the tile height",
        });
    }
    Ok(())
}
