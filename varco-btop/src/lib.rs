//! Decoding of BTOP (BLAST trace-back operations) alignment strings.
//!
//! Magic-BLAST describes each alignment with a compact run-length string:
//! a decimal count for a run of matching bases, a two-character literal for
//! a substitution (query base, then reference base), and a gap run wrapped
//! in `_` delimiters (`^` intron delimiters are treated as gaps). This
//! crate reconstructs the per-position query and reference tracks from that
//! encoding, and translates ungapped reference offsets into positions on
//! the gapped tracks.
//!
//! ## Quick Start
//!
//! ```rust
//! use varco_btop::{decode, translate};
//!
//! let tracks = decode("4C-CG_10_4").unwrap();
//! assert_eq!(tracks.reference, "====-G__________====");
//!
//! // one inserted query base (`-` in the reference track) shifts every
//! // later reference offset by one track position
//! assert_eq!(translate(16, &tracks.reference), 17);
//! ```

pub mod decode;
pub mod error;
pub mod translate;

// re-exports
pub use self::decode::{decode, AlignmentTracks};
pub use self::error::BtopError;
pub use self::translate::translate;

/// Symbols used on the reconstructed alignment tracks.
pub mod consts {
    /// The read base equals the reference base at this position.
    pub const MATCH_SYMBOL: char = '=';
    /// A reference base the query does not have (deletion from the read).
    pub const GAP_SYMBOL: char = '_';
    /// A query base the reference does not have (insertion in the read).
    /// The only track symbol that does not consume a reference coordinate.
    pub const REF_GAP_SYMBOL: char = '-';
}
