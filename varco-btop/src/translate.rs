use crate::consts::REF_GAP_SYMBOL;

///
/// Translate an ungapped reference offset into a position on the gapped
/// reference track.
///
/// Variant boundaries are expressed in reference-sequence coordinates, but
/// the containment scan runs in alignment-track coordinates. Walk the
/// track from its start, counting a reference position for every symbol
/// except the reference gap `-` (match symbols, substituted bases and `_`
/// deletion symbols all stand for a reference base), until `ref_offset`
/// reference positions have been counted; return the number of track
/// positions consumed.
///
/// Offsets beyond the ungapped length of the track saturate to the full
/// track length.
///
pub fn translate(ref_offset: usize, reference_track: &str) -> usize {
    let track = reference_track.as_bytes();
    let mut consumed = 0;
    let mut seq_offset = 0;

    while seq_offset < ref_offset && consumed < track.len() {
        if track[consumed] != REF_GAP_SYMBOL as u8 {
            seq_offset += 1;
        }
        consumed += 1;
    }

    consumed
}
