mod classify;
pub mod cli;
mod comment;
mod digest;
mod emit;
pub mod error;
mod numeric;
pub mod options;
mod split;
mod strip;

#[cfg(feature = "c-api")]
pub mod ffi;

#[cfg(feature = "logging")]
pub use digest::DigestLogEntry;
pub use error::DigestError;
pub use options::Config;
pub use split::split_2;

use std::io::Write;

// ============================================================================
// Core API - digest to an owned buffer
// ============================================================================

/// Normalize a SQL statement into its canonical digest form: literals
/// replaced with `?`, comments removed, whitespace collapsed.
///
/// # Examples
///
/// ```
/// use sqldigest::{digest, Config};
///
/// let d = digest(b"SELECT * FROM t WHERE id=7", &Config::default())?;
/// assert_eq!(d, b"SELECT * FROM t WHERE id=?");
/// # Ok::<(), sqldigest::DigestError>(())
/// ```
pub fn digest(input: &[u8], cfg: &Config) -> Result<Vec<u8>, DigestError> {
    Ok(digest::digest(input, cfg, false)?.bytes)
}

/// Like [`digest`], but also returns the payload of the first `/* ... */`
/// comment encountered in the input, if any.
///
/// # Examples
///
/// ```
/// use sqldigest::{digest_with_first_comment, Config};
///
/// let (d, first_comment) =
///     digest_with_first_comment(b"/* first */ SELECT 1 /* second */", &Config::default())?;
/// assert_eq!(d, b"SELECT ?");
/// assert_eq!(first_comment.as_deref(), Some(&b"first"[..]));
/// # Ok::<(), sqldigest::DigestError>(())
/// ```
pub fn digest_with_first_comment(
    input: &[u8],
    cfg: &Config,
) -> Result<(Vec<u8>, Option<Vec<u8>>), DigestError> {
    let out = digest::digest(input, cfg, true)?;
    Ok((out.bytes, out.first_comment))
}

/// Like [`digest_with_first_comment`], but also returns a diagnostics
/// log with one entry per literal replacement, comment strip, or NULL
/// fold performed along the way. Requires the `logging` feature; the
/// log is empty when the feature is disabled at compile time.
///
/// # Examples
///
/// ```
/// use sqldigest::{digest_with_log, Config};
///
/// let (d, _first_comment, log) =
///     digest_with_log(b"SELECT * FROM t WHERE id=7", &Config::default())?;
/// assert_eq!(d, b"SELECT * FROM t WHERE id=?");
/// assert!(!log.is_empty());
/// # Ok::<(), sqldigest::DigestError>(())
/// ```
#[cfg(feature = "logging")]
pub fn digest_with_log(
    input: &[u8],
    cfg: &Config,
) -> Result<(Vec<u8>, Option<Vec<u8>>, Vec<DigestLogEntry>), DigestError> {
    let out = digest::digest(input, cfg, true)?;
    Ok((out.bytes, out.first_comment, out.log))
}

// ============================================================================
// Writer-based API
// ============================================================================

/// Digest a SQL statement and write the result into an `io::Write`,
/// avoiding an extra copy when the caller intends to stream the digest
/// straight to a sink.
///
/// # Examples
///
/// ```
/// use sqldigest::{digest_to_writer, Config};
///
/// let mut output = Vec::new();
/// digest_to_writer(b"SELECT * FROM t WHERE id=7", &Config::default(), &mut output)?;
/// assert_eq!(output, b"SELECT * FROM t WHERE id=?");
/// # Ok::<(), sqldigest::DigestError>(())
/// ```
pub fn digest_to_writer<W: Write>(input: &[u8], cfg: &Config, writer: &mut W) -> Result<(), DigestError> {
    let bytes = digest(input, cfg)?;
    writer.write_all(&bytes)?;
    Ok(())
}

// ============================================================================
// Strip-comments API
// ============================================================================

/// Remove comments and collapse whitespace without replacing any
/// literal. Only `cfg.max_query_length` and `cfg.lowercase` are
/// consulted.
///
/// # Examples
///
/// ```
/// use sqldigest::{strip_comments, Config};
///
/// let s = strip_comments(b"SELECT  *  FROM t -- trailing\nWHERE x=1", &Config::default())?;
/// assert_eq!(s, b"SELECT * FROM t WHERE x=1");
/// # Ok::<(), sqldigest::DigestError>(())
/// ```
pub fn strip_comments(input: &[u8], cfg: &Config) -> Result<Vec<u8>, DigestError> {
    strip::strip_comments(input, cfg)
}

#[cfg(test)]
mod tests;
