use super::*;

#[test]
fn log_has_one_entry_per_literal_replacement() {
    let (digest, _first_comment, log) =
        digest_with_log(b"SELECT * FROM t WHERE a=1 AND b=2", &Config::default()).unwrap();
    assert_eq!(digest, b"SELECT * FROM t WHERE a=? AND b=?");
    assert_eq!(log.len(), 2);
}

#[test]
fn log_records_comment_strip_and_grouping_exceeded() {
    let (_digest, _first_comment, log) =
        digest_with_log(b"/* c */ INSERT INTO t VALUES (1,2,3,4,5)", &Config::default()).unwrap();
    assert!(log.iter().any(|e| e.message.contains("comment")));
    assert!(log.iter().any(|e| e.message.contains("grouping")));
}

#[test]
fn log_is_empty_for_input_with_no_replacements() {
    let (_digest, _first_comment, log) = digest_with_log(b"SELECT a FROM t", &Config::default()).unwrap();
    assert!(log.is_empty());
}
