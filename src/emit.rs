//! Output buffer with explicit allocation-failure handling and the small
//! set of look-behind/rewind operations the digester FSM needs: state is
//! modeled as `(input, i, out, w0)`, with rewinds expressed as
//! `out.truncate(w0 - k)`.

use crate::error::DigestError;

pub(crate) struct OutBuf {
    bytes: Vec<u8>,
}

impl OutBuf {
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, DigestError> {
        let mut bytes = Vec::new();
        bytes.try_reserve(cap).map_err(|_| DigestError::Alloc)?;
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn push(&mut self, b: u8) -> Result<(), DigestError> {
        if self.bytes.len() == self.bytes.capacity() {
            self.bytes.try_reserve(1).map_err(|_| DigestError::Alloc)?;
        }
        self.bytes.push(b);
        Ok(())
    }

    pub(crate) fn extend_from_slice(&mut self, s: &[u8]) -> Result<(), DigestError> {
        self.bytes
            .try_reserve(s.len().saturating_sub(self.bytes.capacity() - self.bytes.len()))
            .map_err(|_| DigestError::Alloc)?;
        self.bytes.extend_from_slice(s);
        Ok(())
    }

    /// Rewind the write cursor to `pos`, discarding anything written since.
    #[inline]
    pub(crate) fn truncate(&mut self, pos: usize) {
        self.bytes.truncate(pos);
    }

    /// Byte at absolute position `pos`, if within bounds.
    #[inline]
    pub(crate) fn get(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    /// Peek the byte `back` positions before the current end (`back = 1`
    /// is the last written byte).
    #[inline]
    pub(crate) fn peek_back(&self, back: usize) -> Option<u8> {
        self.bytes.len().checked_sub(back).and_then(|i| self.bytes.get(i)).copied()
    }

    pub(crate) fn trim_trailing_spaces(&mut self, max: usize) {
        let mut trimmed = 0;
        while trimmed < max && self.bytes.last() == Some(&b' ') {
            self.bytes.pop();
            trimmed += 1;
        }
    }

    pub(crate) fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}
