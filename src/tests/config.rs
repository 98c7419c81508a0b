use super::*;

#[test]
fn default_config_matches_spec_end_to_end_defaults() {
    let cfg = Config::default();
    assert!(!cfg.lowercase);
    assert!(cfg.replace_null);
    assert!(!cfg.no_digits);
    assert_eq!(cfg.grouping_limit, 3);
}

#[test]
fn max_query_length_truncates_input() {
    let mut cfg = Config::default();
    cfg.max_query_length = 10;
    let out = d_cfg(b"SELECT * FROM very_long_table_name WHERE x=1", &cfg);
    assert!(out.len() <= 10 + 3);
}

#[test]
fn strip_comments_only_reads_max_query_length_and_lowercase() {
    let mut cfg = Config::default();
    cfg.replace_null = false;
    cfg.no_digits = true;
    cfg.grouping_limit = 0;
    // None of these fields should affect strip_comments.
    let out = strip_comments(b"SELECT a FROM t WHERE b IS NULL", &cfg).unwrap();
    assert_eq!(out, b"SELECT a FROM t WHERE b IS NULL");
}
