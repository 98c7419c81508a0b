//! Configuration view: a read-only snapshot of the scalar toggles
//! consumed by the digester and strip-comments pass. Captured by value at
//! entry and never re-read mid-pass; thread-safety of the *source* of
//! these values (the original's thread-local globals) is the caller's
//! responsibility.

/// Maximum length, in bytes, of a captured first comment (including the
/// implicit terminator in the C ABI layer).
pub const FIRST_COMMENT_MAX_LENGTH: usize = 128;

/// Small-buffer reservation hint used by [`crate::split_2`],
/// mirroring the original's `PROXYSQL_TOKENIZER_BUFFSIZE`.
pub const TOKENIZER_BUFFER_SIZE: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on input bytes consumed; longer inputs are truncated.
    pub max_query_length: usize,
    /// Lowercase non-whitespace output bytes (ASCII only).
    pub lowercase: bool,
    /// Fold token-bounded, case-insensitive `NULL` to `?`.
    pub replace_null: bool,
    /// Fold runs of digits to `?` without entering the numeric-literal mode.
    pub no_digits: bool,
    /// Max literals kept inside a parenthesized grouping before ellipsis.
    pub grouping_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // ProxySQL's published default for mysql-query_digests_max_query_length.
            max_query_length: 65_000,
            lowercase: false,
            replace_null: true,
            no_digits: false,
            grouping_limit: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_end_to_end_scenarios() {
        let cfg = Config::default();
        assert!(!cfg.lowercase);
        assert!(cfg.replace_null);
        assert!(!cfg.no_digits);
        assert_eq!(cfg.grouping_limit, 3);
    }
}
