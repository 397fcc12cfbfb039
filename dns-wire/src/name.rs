// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4

use crate::WireError;

/// Longest accepted expansion of one name: labels plus terminator.
pub const MAX_NAME_LEN: usize = 1025;

/// A domain name kept in wire form: length-prefixed labels, terminator
/// stripped. The root is the empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    labels: Vec<u8>,
}

impl Name {
    /// Build from dotted text, for the query side.
    pub fn from_dotted(domain: &str) -> Self {
        let mut labels: Vec<u8> = Vec::with_capacity(domain.len() + 1);

        for label in domain.split('.') {
            labels.push(label.len() as u8);
            labels.extend_from_slice(label.as_bytes());
        }

        Self { labels }
    }

    /// Expand the name whose first label sits at `start` in `buf`,
    /// following compression pointers.
    ///
    /// Returns the name and the offset just past the bytes the name
    /// occupies at `start` itself: a pointer changes what the name expands
    /// to, never how many bytes the caller consumes.
    ///
    /// Every pointer must target an offset strictly below the start of the
    /// chain segment it appears in, so a chain can only move backwards
    /// through the message and always terminates.
    pub fn expand(buf: &[u8], start: usize) -> Result<(Self, usize), WireError> {
        if start >= buf.len() {
            return Err(WireError::Malformed);
        }

        let mut labels: Vec<u8> = Vec::new();
        let mut offset = start;
        let mut segment = start;
        // one past the last byte consumed at the caller's position
        let mut end = start;

        loop {
            if offset >= buf.len() {
                return Err(WireError::Malformed);
            }
            let count = buf[offset] as usize;
            if count == 0 {
                break;
            }

            if count & 0xc0 == 0xc0 {
                if offset + 2 > buf.len() {
                    return Err(WireError::Malformed);
                }
                let target = (count & 0x3f) << 8 | buf[offset + 1] as usize;
                if target >= segment {
                    return Err(WireError::Malformed);
                }
                if end < offset + 2 {
                    end = offset + 2;
                }
                offset = target;
                segment = target;
                continue;
            }

            if offset + 1 + count > buf.len() {
                return Err(WireError::Malformed);
            }
            labels.extend_from_slice(&buf[offset..offset + 1 + count]);
            offset += 1 + count;
            if end < offset {
                end = offset;
            }
        }

        // the terminator itself, when reached without a jump
        if end < offset + 1 {
            end = offset + 1;
        }

        if labels.len() + 1 > MAX_NAME_LEN {
            return Err(WireError::TooLong);
        }

        Ok((Self { labels }, end))
    }

    /// Dot-separated text with a trailing dot; the root renders as `.`.
    pub fn to_dotted(&self) -> String {
        render_text(&self.labels)
    }

    /// Wire form with the terminator, for the query side.
    pub fn to_bytes(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.labels);
        bytes.push(0);
    }
}

/// Walk `raw` as length-prefixed chunks and join them with dots, one
/// trailing dot per chunk. Stops at a zero count or the end of the slice;
/// a count running past the slice is clamped to it.
///
/// This renders expanded names, and also TXT rdata: TXT payloads are
/// length-prefixed character strings, the same shape as a label sequence.
pub fn render_text(raw: &[u8]) -> String {
    if raw.is_empty() || raw[0] == 0 {
        return String::from(".");
    }

    let mut out = String::new();
    let mut index = 0;
    while index < raw.len() {
        let count = raw[index] as usize;
        if count == 0 {
            break;
        }

        let chunk_begin = index + 1;
        let chunk_end = (chunk_begin + count).min(raw.len());
        out.push_str(&String::from_utf8_lossy(&raw[chunk_begin..chunk_end]));
        out.push('.');

        index = chunk_begin + count;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(domain: &str) -> Vec<u8> {
        let mut bytes = vec![];
        Name::from_dotted(domain).to_bytes(&mut bytes);
        bytes
    }

    #[test]
    fn expand_then_render_round_trips() {
        for domain in &["example.com", "a.b.c.example.org", "x"] {
            let buf = wire(domain);
            let (name, next) = Name::expand(&buf, 0).unwrap();

            assert_eq!(next, buf.len());
            assert_eq!(name.to_dotted(), format!("{}.", domain));
        }
    }

    #[test]
    fn root_is_a_single_dot() {
        let buf = [0u8];
        let (name, next) = Name::expand(&buf, 0).unwrap();

        assert_eq!(next, 1);
        assert_eq!(name.to_dotted(), ".");
    }

    #[test]
    fn pointer_expands_but_does_not_consume_the_target() {
        // "example.com" at 0, then "www" + pointer back to 0
        let mut buf = wire("example.com");
        let tail = buf.len();
        buf.extend_from_slice(&[3, b'w', b'w', b'w', 0xc0, 0x00]);

        let (name, next) = Name::expand(&buf, tail).unwrap();

        assert_eq!(name.to_dotted(), "www.example.com.");
        assert_eq!(next, buf.len());
    }

    #[test]
    fn pointer_chains_stay_backwards() {
        // "com" at 0, "example" + ptr(0) at 5, "www" + ptr(5) at 14
        let mut buf = vec![3, b'c', b'o', b'm', 0];
        buf.extend_from_slice(&[7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0xc0, 0x00]);
        let tail = buf.len();
        buf.extend_from_slice(&[3, b'w', b'w', b'w', 0xc0, 0x05]);

        let (name, next) = Name::expand(&buf, tail).unwrap();

        assert_eq!(name.to_dotted(), "www.example.com.");
        assert_eq!(next, buf.len());
    }

    #[test]
    fn self_pointer_is_malformed() {
        let buf = [0xc0, 0x00];
        assert_eq!(Name::expand(&buf, 0), Err(WireError::Malformed));
    }

    #[test]
    fn forward_pointer_is_malformed() {
        let buf = [0xc0, 0x02, 1, b'a', 0];
        assert_eq!(Name::expand(&buf, 0), Err(WireError::Malformed));
    }

    #[test]
    fn pointer_at_or_after_its_segment_is_malformed() {
        // the second jump targets the first jump's segment start
        let mut buf = vec![1, b'a', 0xc0, 0x02, 0];
        buf.extend_from_slice(&[1, b'b', 0xc0, 0x00]);
        assert_eq!(Name::expand(&buf, 5), Err(WireError::Malformed));
    }

    #[test]
    fn label_past_the_buffer_is_malformed() {
        let buf = [5, b'a', b'b'];
        assert_eq!(Name::expand(&buf, 0), Err(WireError::Malformed));
    }

    #[test]
    fn missing_terminator_is_malformed() {
        let buf = [1, b'a'];
        assert_eq!(Name::expand(&buf, 0), Err(WireError::Malformed));
    }

    #[test]
    fn every_truncation_fails_without_panicking() {
        let mut buf = wire("example.com");
        let tail = buf.len();
        buf.extend_from_slice(&[3, b'w', b'w', b'w', 0xc0, 0x00]);

        for cut in 0..buf.len() {
            assert!(Name::expand(&buf[..cut], 0).is_err() || cut >= tail);
            assert!(Name::expand(&buf[..cut], tail.min(cut)).is_err());
        }
    }

    #[test]
    fn oversized_expansion_is_too_long() {
        // 17 maximal labels expand past the 1025-byte bound
        let mut buf = vec![];
        for _ in 0..17 {
            buf.push(63);
            buf.extend_from_slice(&[b'a'; 63]);
        }
        buf.push(0);

        assert_eq!(Name::expand(&buf, 0), Err(WireError::TooLong));
    }

    #[test]
    fn renders_txt_character_strings() {
        let mut raw = vec![6];
        raw.extend_from_slice(b"v=spf1");
        assert_eq!(render_text(&raw), "v=spf1.");

        // two character strings join like labels
        let mut raw = vec![2, b'a', b'b'];
        raw.extend_from_slice(&[1, b'c']);
        assert_eq!(render_text(&raw), "ab.c.");
    }

    #[test]
    fn render_clamps_an_overlong_count_to_the_slice() {
        let raw = [10, b'a', b'b'];
        assert_eq!(render_text(&raw), "ab.");
    }
}
