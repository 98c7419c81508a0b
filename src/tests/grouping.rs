use super::*;

#[test]
fn short_list_under_limit_has_no_ellipsis() {
    assert_eq!(d(b"INSERT INTO t VALUES (1,2,3)"), b"INSERT INTO t VALUES (?,?,?)");
}

#[test]
fn list_over_limit_collapses_to_ellipsis() {
    assert_eq!(
        d(b"INSERT INTO t VALUES (1,2,3,4,5,6)"),
        b"INSERT INTO t VALUES (?,?,?,...)"
    );
}

#[test]
fn grouping_state_resets_outside_parens() {
    // Two independent short lists, neither over the limit, separated by
    // ordinary tokens: grouping state must not leak between them.
    assert_eq!(
        d(b"SELECT * FROM t WHERE a IN (1,2) AND b IN (3,4)"),
        b"SELECT * FROM t WHERE a IN (?,?) AND b IN (?,?)"
    );
}

#[test]
fn custom_grouping_limit_is_honored() {
    let mut cfg = Config::default();
    cfg.grouping_limit = 1;
    assert_eq!(
        d_cfg(b"INSERT INTO t VALUES (1,2,3)", &cfg),
        b"INSERT INTO t VALUES (?,...)"
    );
}

#[test]
fn grouping_limit_zero_replaces_first_literal_with_ellipsis() {
    let mut cfg = Config::default();
    cfg.grouping_limit = 0;
    assert_eq!(d_cfg(b"INSERT INTO t VALUES (1,2,3)", &cfg), b"INSERT INTO t VALUES (...)");
}

#[test]
fn grouping_does_not_apply_to_string_literal_lists() {
    // Grouping bookkeeping only lives in the NUMBER mode's literal-emit
    // path; the STRING mode collapses straight to `?` with no group
    // counting, so a long string list is never ellipsis-compressed.
    assert_eq!(
        d(b"INSERT INTO t VALUES ('a','b','c','d')"),
        b"INSERT INTO t VALUES (?,?,?,?)"
    );
}
