use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionStore
// =============================================================================

#[test]
fn unknown_token_is_signed_out_and_absent() {
    let sessions = SessionStore::new();
    assert!(!sessions.contains("nope"));
    assert_eq!(sessions.username("nope"), None);
    assert!(sessions.take_flashes("nope").is_empty());
}

#[test]
fn sign_in_creates_session() {
    let sessions = SessionStore::new();
    sessions.sign_in("t1", "ana");
    assert!(sessions.contains("t1"));
    assert_eq!(sessions.username("t1").as_deref(), Some("ana"));
}

#[test]
fn sign_out_then_flash_is_anonymous() {
    let sessions = SessionStore::new();
    sessions.sign_in("t1", "ana");
    sessions.sign_out("t1");
    sessions.push_flash("t1", Flash::success("You have been logged out."));
    assert_eq!(sessions.username("t1"), None);
    assert_eq!(sessions.take_flashes("t1"), vec![Flash::success("You have been logged out.")]);
}

#[test]
fn take_flashes_drains_in_order() {
    let sessions = SessionStore::new();
    sessions.push_flash("t1", Flash::error("first"));
    sessions.push_flash("t1", Flash::success("second"));
    let flashes = sessions.take_flashes("t1");
    assert_eq!(flashes.iter().map(|f| f.message.as_str()).collect::<Vec<_>>(), ["first", "second"]);
    assert!(sessions.take_flashes("t1").is_empty());
}

#[test]
fn sessions_are_isolated_by_token() {
    let sessions = SessionStore::new();
    sessions.sign_in("t1", "ana");
    sessions.push_flash("t2", Flash::error("other"));
    assert_eq!(sessions.username("t2"), None);
    assert!(sessions.take_flashes("t1").is_empty());
}

#[test]
fn clones_share_the_table() {
    let sessions = SessionStore::new();
    let clone = sessions.clone();
    clone.sign_in("t1", "ana");
    assert_eq!(sessions.username("t1").as_deref(), Some("ana"));
}

// =============================================================================
// Cleanup
// =============================================================================

fn len(sessions: &SessionStore) -> usize {
    sessions.lock().len()
}

#[test]
fn drained_anonymous_sessions_are_removed() {
    let sessions = SessionStore::new();
    for _ in 0..10_000 {
        let token = generate_token();
        sessions.push_flash(&token, Flash::error("You must be logged in to submit an AI tool."));
        assert_eq!(sessions.take_flashes(&token).len(), 1);
    }
    assert_eq!(len(&sessions), 0);
}

#[test]
fn signed_in_session_survives_drain() {
    let sessions = SessionStore::new();
    sessions.sign_in("t1", "ana");
    sessions.push_flash("t1", Flash::success("Logged in successfully!"));
    sessions.take_flashes("t1");
    assert!(sessions.contains("t1"));
}

#[test]
fn sign_out_without_flashes_removes_entry() {
    let sessions = SessionStore::new();
    sessions.sign_in("t1", "ana");
    sessions.sign_out("t1");
    assert!(!sessions.contains("t1"));
    assert_eq!(len(&sessions), 0);
}

#[test]
fn sweep_drops_idle_anonymous_entries_only() {
    let sessions = SessionStore::new();
    sessions.push_flash("anon", Flash::error("stale"));
    sessions.sign_in("member", "ana");

    assert_eq!(sweep(&mut sessions.lock(), Duration::ZERO), 1);
    assert!(!sessions.contains("anon"));
    assert!(sessions.contains("member"));
}

#[test]
fn fresh_anonymous_entries_outlive_the_sweep() {
    let sessions = SessionStore::new();
    sessions.push_flash("anon", Flash::error("pending"));
    assert_eq!(sweep(&mut sessions.lock(), ANONYMOUS_IDLE), 0);
    assert!(sessions.contains("anon"));
}

#[test]
fn rotate_moves_flashes_and_retires_old_token() {
    let sessions = SessionStore::new();
    sessions.push_flash("old", Flash::error("kept"));
    let token = sessions.rotate("old");

    assert_ne!(token, "old");
    assert!(!sessions.contains("old"));
    assert_eq!(sessions.take_flashes(&token), vec![Flash::error("kept")]);
}

#[test]
fn rotate_unknown_token_starts_empty_session() {
    let sessions = SessionStore::new();
    let token = sessions.rotate("missing");
    assert!(sessions.contains(&token));
    assert_eq!(sessions.username(&token), None);
}
