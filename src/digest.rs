//! Digester: the main single-pass rewriting FSM, ported from
//! `original_source`'s `mysql_query_digest_and_first_comment`.
//!
//! The control flow below follows the original closely: a `Mode::Normal`
//! phase decides, byte by byte, whether to enter a special mode (comment,
//! string, number) or apply a cosmetic rewrite; an "active mode" phase
//! consumes the body of whatever was entered and, on exit, rewinds the
//! output to the mark recorded when the mode began. Every `continue`
//! below corresponds 1:1 to a `continue` in the original C loop; the one
//! `break` corresponds to the original's single `break` out of the loop
//! (closing an unterminated string at the very last byte of input).

use crate::classify::{is_arithmetic_op, is_digit_char, is_space_char, is_token_char};
use crate::comment::{FirstCommentCapture, HintCapture};
use crate::emit::OutBuf;
use crate::error::DigestError;
use crate::numeric::is_digit_string;
use crate::options::Config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Mode {
    Normal,
    BlockComment,
    LineHash,
    LineDash,
    Str,
    Number,
}

/// One entry per literal/comment rewrite, emitted when the `logging`
/// feature is enabled.
#[cfg(feature = "logging")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestLogEntry {
    pub position: usize,
    pub message: &'static str,
}

#[derive(Default)]
struct Grouping {
    active: bool,
    count: usize,
    limit_exceeded: bool,
}

impl Grouping {
    fn reset(&mut self) {
        self.active = false;
        self.count = 0;
        self.limit_exceeded = false;
    }
}

pub struct DigestOutput {
    pub bytes: Vec<u8>,
    pub first_comment: Option<Vec<u8>>,
    #[cfg(feature = "logging")]
    pub log: Vec<DigestLogEntry>,
}

struct Digester<'a> {
    input: &'a [u8],
    len: usize,
    cfg: &'a Config,
    i: usize,
    out: OutBuf,
    /// Start-of-current-token mark, re-armed every time `mode` is
    /// `Normal` at the top of the loop; fixed while inside a mode.
    w0: usize,
    mode: Mode,
    prev: u8,
    prev_space: bool,
    quote: u8,
    is_hint: bool,
    /// True when the comment/line-comment we just entered left one
    /// delimiter byte already written to `out` *before* `w0` was armed
    /// (block comments' leading `/`, and `--` entered on its second
    /// dash) — that byte must be trimmed too when the comment closes.
    comment_extra_trim: bool,
    seen_token: bool,
    grouping: Grouping,
    first_comment: FirstCommentCapture,
    hint: HintCapture,
    #[cfg(feature = "logging")]
    log: Vec<DigestLogEntry>,
}

impl<'a> Digester<'a> {
    fn new(input: &'a [u8], cfg: &'a Config, want_first_comment: bool) -> Result<Self, DigestError> {
        let len = input.len().min(cfg.max_query_length);
        Ok(Self {
            input,
            len,
            cfg,
            i: 0,
            out: OutBuf::with_capacity(len + 1)?,
            w0: 0,
            mode: Mode::Normal,
            prev: 0,
            prev_space: false,
            quote: 0,
            is_hint: false,
            comment_extra_trim: false,
            seen_token: false,
            grouping: Grouping::default(),
            first_comment: FirstCommentCapture::new(want_first_comment),
            hint: HintCapture::new(),
            #[cfg(feature = "logging")]
            log: Vec::new(),
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

    #[cfg(feature = "logging")]
    fn log(&mut self, message: &'static str) {
        self.log.push(DigestLogEntry {
            position: self.i,
            message,
        });
    }

    #[cfg(not(feature = "logging"))]
    #[inline]
    fn log(&mut self, _message: &'static str) {}

    /// Signed-literal trim: a `+`/`-` immediately before `w0` is also
    /// discarded when it's immediately preceded by `(`/`,`, or by a
    /// space that is itself preceded by `(`/`,`.
    ///
    /// The whole look-behind (bytes `w0-3`, `w0-2`, `w0-1`) is gated by a
    /// single `w0 >= 3` precondition, matching the original's one
    /// `_p = p_r_t - 3; if (_p >= r) { ... }` guard (`c_tokenizer2.c:695-
    /// 697`): below that threshold none of the three bytes are read and
    /// no trim happens, even though this check only inspects two of them.
    fn signed_trim_point(&self, w0: usize) -> usize {
        if w0 < 3 {
            return w0;
        }
        let a = self.out.get(w0 - 3).unwrap();
        let b = self.out.get(w0 - 2).unwrap();
        let c = self.out.get(w0 - 1).unwrap();
        if (c == b'+' || c == b'-') && (b == b',' || b == b'(' || (b == b' ' && (a == b',' || a == b'(')))
        {
            w0 - 1
        } else {
            w0
        }
    }

    /// Trim a single space immediately before `w0` when it follows one of
    /// `ops` (arith-op / comma / optionally `.`). Only ever applicable
    /// when [`Self::signed_trim_point`] did *not* already trim `w0`.
    ///
    /// Gated by the same atomic `w0 >= 3` precondition as
    /// [`Self::signed_trim_point`] — the original applies both checks
    /// under the identical `_p >= r` guard (`c_tokenizer2.c:704-710`),
    /// even though this one only reads `w0-1`/`w0-2`.
    fn trim_space_before(&self, w0: usize, ops: &[u8]) -> usize {
        if w0 < 3 {
            return w0;
        }
        let c = self.out.get(w0 - 1).unwrap();
        if !is_space_char(c) {
            return w0;
        }
        let b = self.out.get(w0 - 2).unwrap();
        if ops.contains(&b) { w0 - 1 } else { w0 }
    }

    /// Grouping "entering a replacement" check: byte immediately
    /// before `w0`, or the byte at `w0 - 3`, is `(`. Always evaluated
    /// against the original `w0`, independent of any trim.
    fn detects_group_open(&self, w0: usize) -> bool {
        let before = (w0 >= 1).then(|| self.out.get(w0 - 1)).flatten();
        let three_before = (w0 >= 3).then(|| self.out.get(w0 - 3)).flatten();
        before == Some(b'(') || three_before == Some(b'(')
    }

    /// Emit a literal replacement for a digit string closing at `w0`,
    /// applying grouping bookkeeping exactly like the original: the
    /// count/limit gate is unconditional, only the *increment* depends on
    /// whether this (or an earlier, not-yet-reset) literal in the run
    /// was adjacent to a `(`.
    fn emit_literal(&mut self, w0: usize, group_open: bool) -> Result<(), DigestError> {
        self.out.truncate(w0);
        if group_open {
            self.grouping.active = true;
        }
        if self.grouping.count < self.cfg.grouping_limit {
            self.out.push(b'?')?;
            if self.grouping.active {
                self.grouping.count += 1;
            }
        } else if !self.grouping.limit_exceeded {
            self.out.extend_from_slice(b"...")?;
            self.grouping.limit_exceeded = true;
            self.log("grouping limit exceeded");
        }
        Ok(())
    }

    fn run(mut self) -> Result<DigestOutput, DigestError> {
        'outer: while self.i < self.len {
            let cur_is_space = is_space_char(self.cur());

            match self.mode {
                Mode::Normal => {
                    self.w0 = self.out.len();
                    let c = self.cur();

                    // comment type 1: /* ... */
                    if self.prev == b'/' && c == b'*' {
                        self.mode = Mode::BlockComment;
                        self.comment_extra_trim = true;
                        self.is_hint = self.peek(1) == Some(b'!');
                        if self.is_hint {
                            self.hint.start();
                        }
                        self.first_comment.on_comment_open();
                        // falls through to the generic copy step below,
                        // which appends this '*' byte (matches the
                        // original: `flag` is set but nothing `continue`s).
                    }
                    // comment type 2: # ... \n
                    else if c == b'#' {
                        self.mode = Mode::LineHash;
                        self.comment_extra_trim = false;
                    }
                    // comment type 3a: -- <ws> ... \n  (second dash; first
                    // dash was already emitted as an ordinary byte)
                    else if self.i != self.len - 1
                        && self.prev == b'-'
                        && c == b'-'
                        && self.peek(1).is_some_and(is_space_char)
                    {
                        self.mode = Mode::LineDash;
                        self.comment_extra_trim = true;
                    }
                    // comment type 3b: -- at input start, or after a
                    // non-'-' byte (first dash, looking ahead to the second)
                    else if self.i != self.len - 1 && c == b'-' && self.peek(1) == Some(b'-') {
                        if self.prev != b'-' || self.i == 0 {
                            self.mode = Mode::LineDash;
                            self.comment_extra_trim = false;
                        }
                    }
                    // string literal
                    else if c == b'\'' || c == b'"' {
                        self.mode = Mode::Str;
                        self.quote = c;
                    }
                    // digit at a token boundary
                    else if is_token_char(self.prev) && is_digit_char(c) {
                        if self.cfg.no_digits {
                            self.out.push(b'?')?;
                            while self.i < self.len && is_digit_char(self.cur()) {
                                self.i += 1;
                            }
                            self.log("digit run replaced (no_digits)");
                            continue 'outer;
                        } else {
                            self.mode = Mode::Number;
                            if self.len == self.i + 1 {
                                // no i/s advance here: mirrors the original's
                                // bare `continue` on a lone trailing digit.
                                continue 'outer;
                            }
                        }
                    }
                    // not one of the above - cosmetic rewrites, no mode change
                    else {
                        if !self.seen_token && cur_is_space {
                            self.i += 1;
                            continue 'outer;
                        }
                        if !self.seen_token {
                            self.seen_token = true;
                        }
                        if self.prev_space && cur_is_space {
                            self.prev = b' ';
                            self.out.push(b' ')?;
                            self.i += 1;
                            continue 'outer;
                        }
                        let mut cur_is_space = cur_is_space;
                        if self.cfg.no_digits && !is_digit_char(self.prev) && is_digit_char(c) {
                            self.out.push(b'?')?;
                            while self.i < self.len && is_digit_char(self.cur()) {
                                self.i += 1;
                            }
                            cur_is_space = self.i < self.len && is_space_char(self.cur());
                            self.log("digit run replaced (no_digits)");
                        }
                        if self.i >= self.len {
                            continue 'outer;
                        }
                        let c = self.cur();
                        // suppress space before an arithmetic op following a replaced literal
                        if self.out.len() >= 2 && self.prev_space && is_arithmetic_op(c) {
                            if self.out.peek_back(2) == Some(b'?') {
                                self.out.truncate(self.out.len() - 1);
                                self.out.push(c)?;
                                self.prev = c;
                                self.prev_space = false;
                                self.i += 1;
                                continue 'outer;
                            }
                        }
                        // suppress spaces before and after commas
                        if self.out.len() >= 2 && self.prev_space && (c == b',' || self.out.peek_back(2) == Some(b',')) {
                            self.out.truncate(self.out.len() - 1);
                            if !self.grouping.limit_exceeded {
                                self.out.push(c)?;
                            }
                            self.prev = b',';
                            self.prev_space = false;
                            self.i += 1;
                            continue 'outer;
                        }
                        // suppress space before a closing paren after a trailing '.'
                        if self.out.len() >= 2 && self.out.peek_back(2) == Some(b'.') && self.prev_space && c == b')' {
                            self.out.truncate(self.out.len() - 1);
                            self.out.push(c)?;
                            self.prev = c;
                            self.prev_space = false;
                            self.i += 1;
                            continue 'outer;
                        }
                        // NULL folding
                        if self.cfg.replace_null
                            && (c == b'n' || c == b'N')
                            && self.i != 0
                            && is_token_char(self.prev)
                            && self.len >= 4
                            && self.i < self.len - 3
                        {
                            let spells_null = matches!(self.peek(1), Some(b'u') | Some(b'U'))
                                && matches!(self.peek(2), Some(b'l') | Some(b'L'))
                                && matches!(self.peek(3), Some(b'l') | Some(b'L'));
                            if spells_null {
                                if self.i == self.len - 4 {
                                    self.out.push(b'?')?;
                                    self.log("NULL folded (tail)");
                                    return self.finish_early();
                                } else if self.peek(4).is_some_and(is_token_char) {
                                    self.out.push(b'?')?;
                                    self.i += 4;
                                    self.log("NULL folded");
                                    continue 'outer;
                                }
                            }
                        }
                    }
                }
                Mode::BlockComment => {
                    let c = self.cur();
                    if self.is_hint {
                        self.hint.push(c, cur_is_space);
                    }
                    self.first_comment.push(c, cur_is_space);

                    if self.prev == b'*' && c == b'/' {
                        let trim_to = if self.comment_extra_trim {
                            self.w0.saturating_sub(1)
                        } else {
                            self.w0
                        };
                        self.out.truncate(trim_to);
                        self.first_comment.on_comment_close();
                        if self.is_hint {
                            if let Some(payload) = self.hint.finish() {
                                self.out.extend_from_slice(&payload)?;
                                self.out.push(b' ')?;
                                self.log("hint comment re-emitted");
                            }
                        }
                        self.log("block comment stripped");
                        self.prev = b' ';
                        self.prev_space = true;
                        self.mode = Mode::Normal;
                        self.i += 1;
                        continue 'outer;
                    }
                }
                Mode::LineHash | Mode::LineDash => {
                    let c = self.cur();
                    if c == b'\n' || c == b'\r' || self.i == self.len - 1 {
                        let trim_to = if self.comment_extra_trim {
                            self.w0.saturating_sub(1)
                        } else {
                            self.w0
                        };
                        self.out.truncate(trim_to);
                        self.log("line comment stripped");
                        self.prev = b' ';
                        self.prev_space = true;
                        self.mode = Mode::Normal;
                        self.i += 1;
                        continue 'outer;
                    }
                }
                Mode::Str => {
                    if self.len == self.i + 1 {
                        let w0 = self.signed_trim_point(self.w0);
                        self.out.truncate(w0);
                        self.out.push(b'?')?;
                        self.log("string literal replaced (tail)");
                        self.mode = Mode::Normal;
                        break 'outer;
                    }
                    let c = self.cur();
                    if self.out.len() > self.w0 + 1
                        && ((self.prev == b'\\' && c == b'\\')
                            || (self.prev == b'\\' && c == self.quote)
                            || (self.prev == self.quote && c == self.quote))
                    {
                        self.prev = b'X';
                        self.prev_space = false;
                        self.i += 1;
                        continue 'outer;
                    }
                    if c == self.quote && (self.len == self.i + 1 || self.peek(1) != Some(self.quote)) {
                        let w0 = self.signed_trim_point(self.w0);
                        self.out.truncate(w0);
                        self.out.push(b'?')?;
                        self.log("string literal replaced");
                        self.mode = Mode::Normal;
                        self.i += 1;
                        continue 'outer;
                    }
                }
                Mode::Number => {
                    if self.w0 == self.out.len() {
                        // lone digit at the very tail of input: nothing has
                        // been written for it yet (see the Normal-mode entry).
                        let mut w0 = self.signed_trim_point(self.w0);
                        if w0 == self.w0 {
                            w0 = self.trim_space_before(self.w0, b"-+*/%,");
                        }
                        self.out.truncate(w0);
                        self.out.push(b'?')?;
                        self.log("numeric literal replaced (tail)");
                        self.i += 1;
                        continue 'outer;
                    }
                    let c = self.cur();
                    if c == b'.' || c == b'e' || c == b'E' || ((c == b'+' || c == b'-') && self.prev == b'e') {
                        self.prev = c;
                        self.prev_space = false;
                        self.i += 1;
                        continue 'outer;
                    }
                    if is_token_char(c) || self.len == self.i + 1 {
                        let span: Vec<u8> = (self.w0..self.out.len()).map(|p| self.out.get(p).unwrap()).collect();
                        if is_digit_string(&span) {
                            let group_open = self.detects_group_open(self.w0);
                            let mut w0 = self.signed_trim_point(self.w0);
                            if w0 == self.w0 {
                                w0 = self.trim_space_before(self.w0, b"-+*/%,.");
                            }
                            self.emit_literal(w0, group_open)?;
                            self.log("numeric literal replaced");
                            if self.len == self.i + 1 {
                                if is_token_char(c) {
                                    self.out.push(c)?;
                                }
                                self.i += 1;
                                continue 'outer;
                            }
                        }
                        self.mode = Mode::Normal;
                        // falls through to the generic copy step for `c`.
                    }
                }
            }

            // ================= generic copy step =================
            if self.grouping.active || self.grouping.count > 0 || self.grouping.limit_exceeded {
                let c = self.cur();
                if c != b',' && !cur_is_space && !is_digit_char(c) {
                    self.grouping.reset();
                }
            }

            let suppressed = self.grouping.active && self.grouping.limit_exceeded && self.cur() == b',';
            if !suppressed {
                let c = self.cur();
                let out_byte = if cur_is_space {
                    b' '
                } else if self.cfg.lowercase {
                    c.to_ascii_lowercase()
                } else {
                    c
                };
                self.out.push(out_byte)?;
            }
            self.prev = self.cur();
            self.prev_space = cur_is_space;
            self.i += 1;
        }

        self.finish()
    }

    fn finish(mut self) -> Result<DigestOutput, DigestError> {
        self.out.trim_trailing_spaces(2);
        Ok(DigestOutput {
            bytes: self.out.into_vec(),
            first_comment: self.first_comment.take_result(),
            #[cfg(feature = "logging")]
            log: self.log,
        })
    }

    /// Used by the one tail special-case (`NULL` folded at the very end
    /// of input) that returns immediately in the original, bypassing the
    /// trailing-space trim.
    fn finish_early(self) -> Result<DigestOutput, DigestError> {
        Ok(DigestOutput {
            bytes: self.out.into_vec(),
            first_comment: self.first_comment.take_result(),
            #[cfg(feature = "logging")]
            log: self.log,
        })
    }
}

pub fn digest(input: &[u8], cfg: &Config, want_first_comment: bool) -> Result<DigestOutput, DigestError> {
    Digester::new(input, cfg, want_first_comment)?.run()
}
