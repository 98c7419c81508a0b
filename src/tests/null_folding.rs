use super::*;

#[test]
fn null_is_folded_case_insensitively() {
    assert_eq!(d(b"SELECT * FROM t WHERE a IS NULL"), b"SELECT * FROM t WHERE a IS ?");
    assert_eq!(d(b"SELECT * FROM t WHERE a IS null"), b"SELECT * FROM t WHERE a IS ?");
    assert_eq!(d(b"SELECT * FROM t WHERE a IS NuLl"), b"SELECT * FROM t WHERE a IS ?");
}

#[test]
fn null_at_very_end_of_input_returns_early() {
    assert_eq!(d(b"SELECT * FROM t WHERE a IS NULL"), b"SELECT * FROM t WHERE a IS ?");
}

#[test]
fn null_folding_disabled_leaves_token_untouched() {
    let mut cfg = Config::default();
    cfg.replace_null = false;
    assert_eq!(
        d_cfg(b"SELECT * FROM t WHERE a IS NULL", &cfg),
        b"SELECT * FROM t WHERE a IS NULL"
    );
}

#[test]
fn nullable_is_not_folded_identifier() {
    // "nullable" is an identifier, not the bare token NULL: the byte
    // after the would-be match must be a token-char for folding to apply.
    assert_eq!(d(b"SELECT nullable FROM t"), b"SELECT nullable FROM t");
}

#[test]
fn null_requires_token_boundary_before_it() {
    // "xnull" - prev char 'x' is a normal/identifier char, so the 'n' is
    // not at a token boundary and is never considered for folding.
    assert_eq!(d(b"SELECT xnull FROM t"), b"SELECT xnull FROM t");
}
