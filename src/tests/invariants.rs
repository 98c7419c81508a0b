//! Cross-cutting invariants, checked over a representative sample of inputs
//! rather than as a full property-test grid.

use super::*;

const SAMPLES: &[&[u8]] = &[
    b"SELECT * FROM t WHERE id=7",
    b"SELECT  *  FROM t -- trailing\nWHERE x='a''b'",
    b"INSERT INTO t VALUES (1,2,3,4,5,6)",
    b"SELECT /*! STRAIGHT_JOIN */ a FROM t",
    b"SELECT * FROM t WHERE c IS NULL",
    b"SELECT x + -3 , (-4) FROM t",
    b"/* first */ SELECT 1 /* second */",
    b"UPDATE t SET a=0x1F, b='x' WHERE id IN (1,2,3,4,5)",
    b"SELECT 'unterminated",
];

#[test]
fn invariant_1_output_length_bound() {
    for &s in SAMPLES {
        let (out, first_comment) = digest_with_first_comment(s, &Config::default()).unwrap();
        let hint_len = first_comment.map(|c| c.len()).unwrap_or(0);
        assert!(
            out.len() <= s.len() + 3 + hint_len,
            "output grew beyond bound for {:?}",
            String::from_utf8_lossy(s)
        );
    }
}

#[test]
fn invariant_2_no_comment_delimiters_survive() {
    for &s in SAMPLES {
        let out = d(s);
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains("/*"), "{:?} -> {:?}", String::from_utf8_lossy(s), text);
        assert!(!text.contains("*/"), "{:?} -> {:?}", String::from_utf8_lossy(s), text);
        assert!(!text.contains("-- "), "{:?} -> {:?}", String::from_utf8_lossy(s), text);
        assert!(!text.contains('#'), "{:?} -> {:?}", String::from_utf8_lossy(s), text);
    }
}

#[test]
fn invariant_3_quoted_literal_collapses_to_one_mark() {
    let out = d(b"SELECT * FROM t WHERE name='bob' AND age=30");
    assert_eq!(out, b"SELECT * FROM t WHERE name=? AND age=?");
}

#[test]
fn invariant_4_strip_comments_idempotent_without_literals() {
    let once = strip_comments(b"SELECT  *  FROM t /* c */ WHERE a", &Config::default()).unwrap();
    let twice = strip_comments(&once, &Config::default()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn invariant_5_lowercase_strips_all_uppercase() {
    let mut cfg = Config::default();
    cfg.lowercase = true;
    let out = d_cfg(b"SELECT Name FROM Users WHERE Id=7", &cfg);
    assert!(out.iter().all(|b| !b.is_ascii_uppercase()));
}

#[test]
fn invariant_6_replace_null_removes_bare_null_token() {
    let out = d(b"SELECT * FROM t WHERE a IS NULL AND b IS null");
    let text = String::from_utf8_lossy(&out);
    assert!(!text.to_lowercase().contains("null"));
}

#[test]
fn invariant_7_grouping_limit_then_single_ellipsis() {
    let mut cfg = Config::default();
    cfg.grouping_limit = 3;
    let out = d_cfg(b"INSERT INTO t VALUES (1,2,3,4,5,6,7,8)", &cfg);
    let text = String::from_utf8_lossy(&out);
    assert_eq!(text.matches('?').count(), 3);
    assert_eq!(text.matches("...").count(), 1);
}
