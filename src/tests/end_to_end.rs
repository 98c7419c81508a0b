//! Representative end-to-end digest scenarios covering comments, string
//! and numeric literals, NULL folding, and grouping together in a single
//! realistic statement.

use super::*;

#[test]
fn scenario_1_simple_equality() {
    assert_eq!(d(b"SELECT * FROM t WHERE id=7"), b"SELECT * FROM t WHERE id=?");
}

#[test]
fn scenario_2_line_comment_and_doubled_quote_string() {
    assert_eq!(
        d(b"SELECT  *  FROM t -- trailing\nWHERE x='a''b'"),
        b"SELECT * FROM t WHERE x=?"
    );
}

#[test]
fn scenario_3_grouping_ellipsis() {
    assert_eq!(
        d(b"INSERT INTO t VALUES (1,2,3,4,5,6)"),
        b"INSERT INTO t VALUES (?,?,?,...)"
    );
}

#[test]
fn scenario_4_hint_comment_reemitted() {
    assert_eq!(
        d(b"SELECT /*! STRAIGHT_JOIN */ a FROM t"),
        b"SELECT STRAIGHT_JOIN a FROM t"
    );
}

#[test]
fn scenario_5_null_folding() {
    assert_eq!(d(b"SELECT * FROM t WHERE c IS NULL"), b"SELECT * FROM t WHERE c IS ?");
}

#[test]
fn scenario_6_signed_literal_trim() {
    assert_eq!(d(b"SELECT x + -3 , (-4) FROM t"), b"SELECT x + ? , (?) FROM t");
}

#[test]
fn scenario_7_first_comment_capture() {
    let (digest, first_comment) =
        digest_with_first_comment(b"/* first */ SELECT 1 /* second */", &Config::default()).unwrap();
    assert_eq!(digest, b"SELECT ?");
    assert_eq!(first_comment.as_deref(), Some(&b"first"[..]));
}
