use super::*;

#[test]
fn vote_endpoint_formats_expected_path() {
    assert_eq!(vote_endpoint(42), "/vote/42");
}

#[test]
fn vote_failed_message_formats_status() {
    assert_eq!(vote_failed_message(401), "vote request failed: 401");
    assert_eq!(vote_failed_message(500), "vote request failed: 500");
}
