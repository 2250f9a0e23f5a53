use crate::consts::{GAP_SYMBOL, MATCH_SYMBOL, REF_GAP_SYMBOL};
use crate::error::BtopError;

///
/// The per-position reconstruction of one alignment.
///
/// Both tracks always have the same length: the total alignment length
/// implied by the encoding. The containment test only needs the reference
/// track; the query track is kept because it falls out of decoding for
/// free and makes the decoder directly checkable.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTracks {
    pub query: String,
    pub reference: String,
}

impl AlignmentTracks {
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }
}

fn is_literal_base(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'-'
}

fn is_gap_delimiter(byte: u8) -> bool {
    // introns (`^`) are treated as gaps
    byte == b'_' || byte == b'^'
}

///
/// Decode a BTOP string into its query and reference alignment tracks.
///
/// - a decimal run `N` emits `N` match symbols on both tracks;
/// - a literal pair emits the first character on the query track and the
///   second, verbatim, on the reference track;
/// - a delimited gap run `_N_` (or `^N^`) emits `N` gap symbols on the
///   reference track and `N` insertion markers on the query track.
///
/// Any input the tokenizer cannot fully consume is a
/// [`BtopError::MalformedEncoding`].
///
pub fn decode(btop: &str) -> Result<AlignmentTracks, BtopError> {
    let bytes = btop.as_bytes();
    let mut query = String::with_capacity(bytes.len());
    let mut reference = String::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte.is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let run: usize = btop[start..i]
                .parse()
                .map_err(|_| BtopError::malformed(start, "match run length out of range"))?;
            for _ in 0..run {
                query.push(MATCH_SYMBOL);
                reference.push(MATCH_SYMBOL);
            }
        } else if is_gap_delimiter(byte) {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end == start {
                return Err(BtopError::malformed(i, "gap run with no length"));
            }
            if end == bytes.len() || !is_gap_delimiter(bytes[end]) {
                return Err(BtopError::malformed(i, "unterminated gap run"));
            }
            let run: usize = btop[start..end]
                .parse()
                .map_err(|_| BtopError::malformed(start, "gap run length out of range"))?;
            for _ in 0..run {
                query.push(REF_GAP_SYMBOL);
                reference.push(GAP_SYMBOL);
            }
            i = end + 1;
        } else if is_literal_base(byte) {
            match bytes.get(i + 1) {
                Some(&next) if is_literal_base(next) => {
                    query.push(byte as char);
                    reference.push(next as char);
                    i += 2;
                }
                Some(_) => {
                    return Err(BtopError::malformed(i + 1, "incomplete substitution pair"));
                }
                None => {
                    return Err(BtopError::malformed(i, "dangling substitution base"));
                }
            }
        } else {
            return Err(BtopError::malformed(i, "unrecognized character"));
        }
    }

    Ok(AlignmentTracks { query, reference })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[test]
    fn test_decode_mixed_encoding() {
        let tracks = decode("4C-CG_10_4").unwrap();

        assert_eq!(tracks.reference, "====-G__________====");
        assert_eq!(tracks.query, "====CC----------====");
        assert_eq!(tracks.len(), 20);
    }

    #[rstest]
    #[case("4CGAT_10_4", "====GT__________====")]
    #[case("4C-CG^10^4", "====-G__________====")]
    #[case("19", "===================")]
    #[case("AC", "C")]
    #[case("", "")]
    fn test_decode_reference_track(#[case] btop: &str, #[case] expected: &str) {
        assert_eq!(decode(btop).unwrap().reference, expected);
    }

    #[test]
    fn test_tracks_share_implied_length() {
        let tracks = decode("2AG_3_TC1").unwrap();
        assert_eq!(tracks.query.len(), tracks.reference.len());
        assert_eq!(tracks.len(), 2 + 1 + 3 + 1 + 1);
    }

    #[rstest]
    #[case("_10")]
    #[case("__")]
    #[case("4C")]
    #[case("4C*G")]
    #[case("_x_")]
    fn test_decode_rejects_malformed_input(#[case] btop: &str) {
        assert!(matches!(
            decode(btop),
            Err(BtopError::MalformedEncoding { .. })
        ));
    }

    #[test]
    fn test_malformed_error_reports_offset() {
        let err = decode("12_9").unwrap_err();
        assert_eq!(
            err,
            BtopError::malformed(2, "unterminated gap run")
        );
    }
}
