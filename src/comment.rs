//! Comment capture helpers: the two independent pieces of state a
//! block comment can feed into besides the main output stream — the
//! first-comment-in-the-query slot, and the re-emitted payload of a
//! `/*! ... */` hint comment currently being scanned.

use crate::options::FIRST_COMMENT_MAX_LENGTH;

/// Captures the payload of the very first `/* ... */` encountered in the
/// whole input, once, regardless of whether it turns out to be a hint.
pub(crate) struct FirstCommentCapture {
    requested: bool,
    started: bool,
    done: bool,
    buf: Vec<u8>,
    result: Option<Vec<u8>>,
}

impl FirstCommentCapture {
    pub(crate) fn new(requested: bool) -> Self {
        Self {
            requested,
            started: false,
            done: false,
            buf: Vec::new(),
            result: None,
        }
    }

    /// Called when a block comment opens (on the `*` of `/*`).
    pub(crate) fn on_comment_open(&mut self) {
        if self.requested && !self.done && !self.started {
            self.started = true;
        }
    }

    /// Called for every byte consumed while inside a block comment,
    /// including the closing `*/` itself.
    pub(crate) fn push(&mut self, byte: u8, is_space: bool) {
        if !self.started || self.done {
            return;
        }
        if self.buf.len() < FIRST_COMMENT_MAX_LENGTH - 1 {
            self.buf.push(if is_space { b' ' } else { byte });
        }
    }

    /// Called when a block comment closes (`prev == '*' && cur == '/'`).
    /// Trims the trailing `*/` that was just pushed and finalizes the
    /// capture so later comments are ignored.
    pub(crate) fn on_comment_close(&mut self) {
        if !self.started || self.done {
            return;
        }
        if self.buf.len() >= 2 {
            let new_len = self.buf.len() - 2;
            self.buf.truncate(new_len);
        }
        self.result = Some(std::mem::take(&mut self.buf));
        self.done = true;
    }

    /// Consumes the capture, returning the final payload if one was
    /// requested and completed.
    pub(crate) fn take_result(self) -> Option<Vec<u8>> {
        self.result
    }
}

/// Captures the payload of a `/*! ... */` hint comment currently being
/// scanned, so it can be re-emitted into the main output stream (minus
/// its `/*!` / `*/` fencing) once the comment closes.
pub(crate) struct HintCapture {
    buf: Vec<u8>,
}

impl HintCapture {
    pub(crate) fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Called when a hint comment opens; resets the scratch buffer.
    pub(crate) fn start(&mut self) {
        self.buf.clear();
    }

    /// Called for every byte consumed while inside the hint comment,
    /// including the closing `*/` itself. Bounded by the same
    /// `FIRST_COMMENT_MAX_LENGTH` limit as [`FirstCommentCapture::push`],
    /// matching the original's single `cur_comment`/`ccl` buffer shared
    /// by both captures (`c_tokenizer2.c:536`).
    pub(crate) fn push(&mut self, byte: u8, is_space: bool) {
        if self.buf.len() < FIRST_COMMENT_MAX_LENGTH - 1 {
            self.buf.push(if is_space { b' ' } else { byte });
        }
    }

    /// Called when the hint comment closes. Trims the trailing `*/`,
    /// strips the leading run of `{/, *, !, '0'..='9', ' '}` bytes (the
    /// `/*!50100 ... */`-style version-gated fencing), and returns the
    /// remaining payload if anything is left.
    pub(crate) fn finish(&mut self) -> Option<Vec<u8>> {
        if self.buf.len() >= 2 {
            let new_len = self.buf.len() - 2;
            self.buf.truncate(new_len);
        }
        let start = self
            .buf
            .iter()
            .position(|&b| !matches!(b, b'/' | b'*' | b'!' | b'0'..=b'9' | b' '))
            .unwrap_or(self.buf.len());
        if start >= self.buf.len() {
            self.buf.clear();
            return None;
        }
        let payload = self.buf[start..].to_vec();
        self.buf.clear();
        Some(payload)
    }
}
