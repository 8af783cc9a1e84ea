//! 16x16 tile reordering for the adaptive scan.
//!
//! The image is cut into tiles in row-major tile order; each tile's pixels
//! are laid out row-major as a 256-byte segment, optionally transposed.
//! Tiles are concatenated into one linear sequence before matching so that
//! back-references can span tile boundaries.

/// Tile edge length in pixels.
pub const TILE_DIM: usize = 16;
/// Bytes per complete tile.
pub const TILE_AREA: usize = TILE_DIM * TILE_DIM;

/// One 16x16 tile in row-major pixel order.
pub type Tile = Vec<u8>;

/// Cut a `width`-pixel-wide image into tiles in scan order.
///
/// With `transpose` set, every tile has its rows and columns swapped, so
/// pixel `(r, c)` lands at `(c, r)`. Requires `width` and the implied
/// height to be multiples of [`TILE_DIM`]; the driver validates this
/// before calling.
pub fn to_tiles(buf: &[u8], width: usize, transpose: bool) -> Vec<Tile> {
    debug_assert!(width > 0 && width % TILE_DIM == 0);
    debug_assert!(buf.len() % width == 0);

    let height = buf.len() / width;
    debug_assert!(height % TILE_DIM == 0);

    let tiles_x = width / TILE_DIM;
    let tiles_y = height / TILE_DIM;

    let mut tiles = Vec::with_capacity(tiles_x * tiles_y);
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let mut tile = vec![0u8; TILE_AREA];
            for y in 0..TILE_DIM {
                for x in 0..TILE_DIM {
                    let src = (ty * TILE_DIM + y) * width + tx * TILE_DIM + x;
                    let dst = if transpose { x * TILE_DIM + y } else { y * TILE_DIM + x };
                    tile[dst] = buf[src];
                }
            }
            tiles.push(tile);
        }
    }
    tiles
}

/// Inverse of [`to_tiles`]: scatter tiles back into a linear image buffer.
pub fn from_tiles(tiles: &[Tile], width: usize, transpose: bool) -> Vec<u8> {
    debug_assert!(width > 0 && width % TILE_DIM == 0);

    let tiles_x = width / TILE_DIM;
    let height = (tiles.len() / tiles_x.max(1)) * TILE_DIM;

    let mut buf = vec![0u8; width * height];
    for (idx, tile) in tiles.iter().enumerate() {
        let ty = idx / tiles_x;
        let tx = idx % tiles_x;
        for y in 0..TILE_DIM {
            for x in 0..TILE_DIM {
                let src = if transpose { x * TILE_DIM + y } else { y * TILE_DIM + x };
                buf[(ty * TILE_DIM + y) * width + tx * TILE_DIM + x] = tile[src];
            }
        }
    }
    buf
}

/// Flatten tiles into one linear byte sequence in tile scan order.
pub fn concat(tiles: Vec<Tile>) -> Vec<u8> {
    let mut out = Vec::with_capacity(tiles.len() * TILE_AREA);
    for tile in tiles {
        out.extend_from_slice(&tile);
    }
    out
}

/// Split a decoded byte stream back into fixed 256-byte tiles.
///
/// Boundaries here are positional, not geometric: the decoder sees the
/// stream exactly as [`concat`] produced it.
pub fn split(stream: &[u8]) -> Vec<Tile> {
    stream.chunks(TILE_AREA).map(|chunk| chunk.to_vec()).collect()
}
