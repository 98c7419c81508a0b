//! Two-token split helper, ported from `original_source`'s
//! generic `tokenizer_t`/`tokenize()` pair as used by `c_split_2`
//! (`test/parser/c_tokenizer2.c`). The original always invokes the
//! tokenizer in `TOKENIZER_NO_EMPTIES` mode, so that is the only
//! behavior reproduced here: split on any byte in `delimiters`, skip
//! empty fields, keep the first two non-empty fields.

use crate::options::TOKENIZER_BUFFER_SIZE;

/// Split `input` on any byte in `delimiters`, ignoring empty fields, and
/// return the first two non-empty fields as owned byte buffers. A
/// missing field is reported as an empty `Vec`, mirroring the original's
/// `strdup("")` fallback.
pub fn split_2(input: &[u8], delimiters: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut out1: Option<Vec<u8>> = None;
    let mut out2: Option<Vec<u8>> = None;

    for field in input.split(|b| delimiters.contains(b)) {
        if field.is_empty() {
            continue;
        }
        if out1.is_none() {
            let mut v = Vec::with_capacity(field.len().min(TOKENIZER_BUFFER_SIZE));
            v.extend_from_slice(field);
            out1 = Some(v);
            continue;
        }
        if out2.is_none() {
            let mut v = Vec::with_capacity(field.len().min(TOKENIZER_BUFFER_SIZE));
            v.extend_from_slice(field);
            out2 = Some(v);
            break;
        }
    }

    (out1.unwrap_or_default(), out2.unwrap_or_default())
}
