use super::*;

#[test]
fn hash_then_verify_accepts_original() {
    let hash = hash_password("Secret1!").unwrap();
    assert!(verify_password(&hash, "Secret1!"));
}

#[test]
fn verify_rejects_other_passwords() {
    let hash = hash_password("Secret1!").unwrap();
    for wrong in ["secret1!", "Secret1", "Secret1!!", "", " Secret1!"] {
        assert!(!verify_password(&hash, wrong), "accepted {wrong:?}");
    }
}

#[test]
fn hash_is_phc_argon2id() {
    let hash = hash_password("pw").unwrap();
    assert!(hash.starts_with("$argon2id$"));
    assert!(!hash.contains("pw$"));
}

#[test]
fn same_password_hashes_differ_by_salt() {
    let a = hash_password("Secret1!").unwrap();
    let b = hash_password("Secret1!").unwrap();
    assert_ne!(a, b);
    assert!(verify_password(&a, "Secret1!"));
    assert!(verify_password(&b, "Secret1!"));
}

#[test]
fn empty_and_unicode_passwords_round_trip() {
    for plain in ["", "pässwörd-🔐", "a much longer passphrase with spaces"] {
        let hash = hash_password(plain).unwrap();
        assert!(verify_password(&hash, plain), "failed for {plain:?}");
    }
}

#[test]
fn malformed_hash_never_verifies() {
    assert!(!verify_password("not-a-phc-string", "anything"));
    assert!(!verify_password("", ""));
}
