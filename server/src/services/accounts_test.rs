use super::*;

fn form(email: &str, username: &str, password: &str, confirm: &str) -> Signup {
    Signup {
        email: email.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

async fn empty_store(dir: &tempfile::TempDir) -> Store {
    Store::open(dir.path().join("tools.json"), dir.path().join("users.json")).await.unwrap()
}

// =============================================================================
// hashing
// =============================================================================

#[test]
fn hash_password_is_salted() {
    let a = hash_password("aa", "secret");
    let b = hash_password("bb", "secret");
    assert_ne!(a, b);
    assert_eq!(a.len(), 64);
    assert_eq!(a, hash_password("aa", "secret"));
}

#[test]
fn generate_salt_is_32_hex_chars() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
}

// =============================================================================
// validate_signup
// =============================================================================

#[test]
fn validate_signup_trims_fields() {
    let (email, username) = validate_signup(&form(" ana@example.com ", " ana ", "pw", "pw")).unwrap();
    assert_eq!(email, "ana@example.com");
    assert_eq!(username, "ana");
}

#[test]
fn validate_signup_requires_fields() {
    assert!(matches!(validate_signup(&form("", "ana", "pw", "pw")), Err(AccountError::MissingField)));
    assert!(matches!(validate_signup(&form("a@b.c", "  ", "pw", "pw")), Err(AccountError::MissingField)));
    assert!(matches!(validate_signup(&form("a@b.c", "ana", "", "")), Err(AccountError::MissingField)));
}

#[test]
fn validate_signup_password_mismatch_message() {
    let err = validate_signup(&form("a@b.c", "ana", "pw", "pw2")).unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match. Please try again.");
    assert!(err.is_user_facing());
}

// =============================================================================
// signup / login
// =============================================================================

#[tokio::test]
async fn signup_then_login() {
    let dir = tempfile::tempdir().unwrap();
    let store = empty_store(&dir).await;
    assert_eq!(signup(&store, &form("ana@example.com", "ana", "pw", "pw")).await.unwrap(), "ana");

    let record = store.find_user("ana").await.unwrap();
    assert_ne!(record.password_hash, "pw");
    assert_eq!(login(&store, "ana", "pw").await.unwrap(), "ana");
}

#[tokio::test]
async fn signup_rejects_duplicate_username() {
    let dir = tempfile::tempdir().unwrap();
    let store = empty_store(&dir).await;
    signup(&store, &form("ana@example.com", "ana", "pw", "pw")).await.unwrap();
    let err = signup(&store, &form("other@example.com", "ana", "pw", "pw")).await.unwrap_err();
    assert_eq!(err.to_string(), "Username already exists. Please choose another.");
}

#[tokio::test]
async fn signup_rejects_duplicate_email() {
    let dir = tempfile::tempdir().unwrap();
    let store = empty_store(&dir).await;
    signup(&store, &form("ana@example.com", "ana", "pw", "pw")).await.unwrap();
    let err = signup(&store, &form("ana@example.com", "bob", "pw", "pw")).await.unwrap_err();
    assert!(matches!(err, AccountError::EmailTaken));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_for_one_username_create_one_account() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(empty_store(&dir).await);

    for round in 0..50 {
        let username = format!("user{round}");
        let first = {
            let store = store.clone();
            let signup_form = form(&format!("a{round}@example.com"), &username, "pw-a", "pw-a");
            tokio::spawn(async move { signup(&store, &signup_form).await })
        };
        let second = {
            let store = store.clone();
            let signup_form = form(&format!("b{round}@example.com"), &username, "pw-b", "pw-b");
            tokio::spawn(async move { signup(&store, &signup_form).await })
        };
        let results = [first.await.unwrap(), second.await.unwrap()];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1, "round {round}");
        assert!(results.iter().any(|r| matches!(r, Err(AccountError::UsernameTaken))));

        let won_a = login(&store, &username, "pw-a").await.is_ok();
        let won_b = login(&store, &username, "pw-b").await.is_ok();
        assert!(won_a ^ won_b, "round {round}");
    }
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_user() {
    let dir = tempfile::tempdir().unwrap();
    let store = empty_store(&dir).await;
    signup(&store, &form("ana@example.com", "ana", "pw", "pw")).await.unwrap();
    assert!(matches!(login(&store, "ana", "nope").await, Err(AccountError::InvalidCredentials)));
    let err = login(&store, "bob", "pw").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid username or password.");
}
