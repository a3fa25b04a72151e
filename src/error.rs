use thiserror::Error;

/// Errors produced while parsing or evaluating a `GSUB` table.
///
/// Parse-time variants (`ShortRead`, `CorruptTable`) abort font load and are
/// meant to propagate out of `Table_GSUB::parse`. `UnknownReverseMapping` is
/// the one shaping-time failure: every other shaping-time condition (unknown
/// script, missing language system, missing feature, unsupported lookup
/// type) falls back silently instead of erroring, per the propagation policy
/// this crate implements.
#[derive(Debug, Error)]
pub enum GsubError {
    /// The byte stream ended before a required field could be read.
    #[error("short read: needed {needed} more byte(s), only {available} available")]
    ShortRead { needed: usize, available: usize },

    /// A subtable or coverage table declared a format this crate does not
    /// understand, or a count field describes a structurally impossible
    /// layout.
    #[error("corrupt GSUB table: {0}")]
    CorruptTable(String),

    /// `unsubstitute` was asked about a glyph id that never appeared as the
    /// result of a successful `substitute` call.
    #[error("glyph {0} was never produced by a substitution")]
    UnknownReverseMapping(u16),
}
