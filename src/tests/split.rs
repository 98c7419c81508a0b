use super::*;

#[test]
fn splits_host_and_group() {
    let (user, hostgroup) = split_2(b"app_user:10", b":");
    assert_eq!(user, b"app_user");
    assert_eq!(hostgroup, b"10");
}

#[test]
fn whitespace_delimiter_set() {
    let (a, b) = split_2(b"  foo   bar  ", b" \t");
    assert_eq!(a, b"foo");
    assert_eq!(b, b"bar");
}
