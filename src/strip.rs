//! Strip-comments pass: a degenerate digester retaining only
//! comment recognition/removal and whitespace collapsing, ported from
//! `original_source`'s `mysql_query_strip_comments`.
//!
//! Unlike the main digester this has no string/number mode, no NULL
//! folding, no grouping, and trims only a single trailing space (not
//! two) — all differences the original source draws between the two
//! functions are preserved here rather than smoothed over.

use crate::classify::is_space_char;
use crate::emit::OutBuf;
use crate::error::DigestError;
use crate::options::Config;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    BlockComment,
    LineHash,
    LineDash,
}

struct Stripper<'a> {
    input: &'a [u8],
    len: usize,
    lowercase: bool,
    i: usize,
    out: OutBuf,
    w0: usize,
    mode: Mode,
    prev: u8,
    /// True for `BlockComment`/`LineDash`, whose opening byte sequence
    /// leaves one delimiter byte already written to `out` before `w0`
    /// was armed (the leading `/` of `/*`, and the first `-` of `--`).
    /// False for `LineHash`, whose trigger byte `#` is written *after*
    /// `w0`, so trimming to `w0` alone already removes it.
    comment_extra_trim: bool,
    seen_token: bool,
}

impl<'a> Stripper<'a> {
    fn new(input: &'a [u8], cfg: &Config) -> Result<Self, DigestError> {
        let len = input.len().min(cfg.max_query_length);
        Ok(Self {
            input,
            len,
            lowercase: cfg.lowercase,
            i: 0,
            out: OutBuf::with_capacity(len + 1)?,
            w0: 0,
            mode: Mode::Normal,
            prev: 0,
            comment_extra_trim: false,
            seen_token: false,
        })
    }

    #[inline]
    fn peek(&self, off: usize) -> Option<u8> {
        self.input.get(self.i + off).copied()
    }

    #[inline]
    fn cur(&self) -> u8 {
        self.input[self.i]
    }

    fn run(mut self) -> Result<Vec<u8>, DigestError> {
        'outer: while self.i < self.len {
            let cur_is_space = is_space_char(self.cur());

            match self.mode {
                Mode::Normal => {
                    self.w0 = self.out.len();
                    let c = self.cur();

                    if self.prev == b'/' && c == b'*' {
                        self.mode = Mode::BlockComment;
                        self.comment_extra_trim = true;
                    } else if c == b'#' {
                        self.mode = Mode::LineHash;
                        self.comment_extra_trim = false;
                    } else if self.prev == b'-' && c == b'-' && self.peek(1).is_some_and(is_space_char) {
                        self.mode = Mode::LineDash;
                        self.comment_extra_trim = true;
                    } else {
                        if !self.seen_token && cur_is_space {
                            self.i += 1;
                            continue 'outer;
                        }
                        if !self.seen_token {
                            self.seen_token = true;
                        }
                        if is_space_char(self.prev) && cur_is_space {
                            self.prev = b' ';
                            self.out.push(b' ')?;
                            self.i += 1;
                            continue 'outer;
                        }
                    }
                }
                Mode::BlockComment | Mode::LineHash | Mode::LineDash => {
                    let c = self.cur();
                    let closes = match self.mode {
                        Mode::BlockComment => self.prev == b'*' && c == b'/',
                        _ => c == b'\n' || c == b'\r' || self.i == self.len - 1,
                    };
                    if closes {
                        let trim_to = if self.comment_extra_trim {
                            self.w0.saturating_sub(1)
                        } else {
                            self.w0
                        };
                        self.out.truncate(trim_to);
                        self.prev = b' ';
                        self.mode = Mode::Normal;
                        self.i += 1;
                        continue 'outer;
                    }
                }
            }

            let out_byte = if cur_is_space {
                b' '
            } else if self.lowercase {
                self.cur().to_ascii_lowercase()
            } else {
                self.cur()
            };
            self.out.push(out_byte)?;
            self.prev = self.cur();
            self.i += 1;
        }

        self.out.trim_trailing_spaces(1);
        Ok(self.out.into_vec())
    }
}

/// Remove all comments (`/* ... */`, `# ...`, `-- ...`) and collapse
/// whitespace, without replacing any literal. Only `cfg.max_query_length`
/// and `cfg.lowercase` are consulted; every other field is ignored.
pub fn strip_comments(input: &[u8], cfg: &Config) -> Result<Vec<u8>, DigestError> {
    Stripper::new(input, cfg)?.run()
}
