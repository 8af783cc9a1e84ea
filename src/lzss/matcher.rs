use super::window::SlidingWindow;
use super::{MAX_MATCH, MIN_MATCH};

/// A back-reference candidate found in the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchCandidate {
    pub distance: u16,
    pub length: u16,
}

/// Scan every window position for the longest match against `lookahead`.
///
/// A match may run past the end of the window into the bytes it is in the
/// middle of producing; that is how short periodic runs encode as a single
/// token. Among equal-length candidates the smallest distance wins, which
/// the reverse scan gets for free: the first maximal candidate seen is the
/// closest one.
///
/// Returns `None` when nothing of at least [`MIN_MATCH`] bytes exists.
pub fn find_longest_match(
    window: &SlidingWindow,
    lookahead: &[u8],
) -> Option<MatchCandidate> {
    let wlen = window.len();
    if wlen == 0 || lookahead.len() < MIN_MATCH {
        return None;
    }

    let cap = lookahead.len().min(MAX_MATCH);
    let mut best_len = 0usize;
    let mut best_dist = 0usize;

    for start in (0..wlen).rev() {
        let mut len = 0usize;
        while len < cap {
            let src = if start + len < wlen {
                window.get(start + len)
            } else {
                // Past the window: the source is a byte this match itself
                // will have produced by then.
                lookahead[start + len - wlen]
            };
            if src != lookahead[len] {
                break;
            }
            len += 1;
        }

        if len > best_len {
            best_len = len;
            best_dist = wlen - 1 - start;
            if best_len == cap {
                break;
            }
        }
    }

    if best_len < MIN_MATCH {
        return None;
    }
    Some(MatchCandidate { distance: best_dist as u16, length: best_len as u16 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_of(bytes: &[u8]) -> SlidingWindow {
        let mut window = SlidingWindow::new();
        for &b in bytes {
            window.push(b);
        }
        window
    }

    #[test]
    fn test_empty_window_has_no_match() {
        let window = SlidingWindow::new();
        assert_eq!(find_longest_match(&window, b"abcdef"), None);
    }

    #[test]
    fn test_short_matches_are_discarded() {
        let window = window_of(b"ab");
        // Only 2 bytes agree; below the minimum.
        assert_eq!(find_longest_match(&window, b"abx"), None);
    }

    #[test]
    fn test_basic_match() {
        let window = window_of(b"hello world");
        let m = find_longest_match(&window, b"world").unwrap();
        assert_eq!(m.length, 5);
        // "world" starts 4 bytes behind the last emitted 'd'.
        assert_eq!(m.distance, 4);
    }

    #[test]
    fn test_overlap_extends_past_window() {
        // Window holds a single byte; an overlapping copy repeats it.
        let window = window_of(b"A");
        let m = find_longest_match(&window, b"AAAA").unwrap();
        assert_eq!(m.distance, 0);
        assert_eq!(m.length, 4);
    }

    #[test]
    fn test_overlap_periodic_run() {
        let window = window_of(b"AB");
        let m = find_longest_match(&window, b"ABABAB").unwrap();
        assert_eq!(m.distance, 1);
        assert_eq!(m.length, 6);
    }

    #[test]
    fn test_tie_break_prefers_smallest_distance() {
        // "abc" appears at distance 5 and distance 2; equal lengths must
        // resolve to the closer copy.
        let window = window_of(b"abcabc");
        let m = find_longest_match(&window, b"abcx").unwrap();
        assert_eq!(m.length, 3);
        assert_eq!(m.distance, 2);
    }

    #[test]
    fn test_length_capped_at_max_match() {
        let window = window_of(b"A");
        let lookahead = [b'A'; 40];
        let m = find_longest_match(&window, &lookahead).unwrap();
        assert_eq!(m.length as usize, MAX_MATCH);
    }

    #[test]
    fn test_lookahead_shorter_than_cap() {
        let window = window_of(b"ABC");
        let m = find_longest_match(&window, b"ABC").unwrap();
        assert_eq!(m.distance, 2);
        assert_eq!(m.length, 3);
    }
}
