use thiserror::Error;

/// Failures surfaced by the palette codec. The core never logs or panics on
/// bad input; every malformed buffer or string comes back as one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("invalid color {0:?}: expected exactly 6 hex digits")]
    InvalidFormat(String),
    #[error("invalid TPL header: expected magic bytes 54 50 4C 00 (\"TPL\\0\")")]
    InvalidHeader,
    #[error("TPL file truncated: {0} bytes (expected at least {expected})", expected = crate::tpl::FILE_SIZE)]
    TruncatedFile(usize),
    #[error("invalid byte sequence: {0:?} is not a hex byte pair")]
    InvalidByteSequence(String),
}
