use prephub::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_produces_bcrypt_hash() {
    let hash = hash_password("secret123").unwrap();

    assert_ne!(hash, "secret123");
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_verify_password_accepts_correct_password() {
    let hash = hash_password("secret123").unwrap();

    assert!(verify_password("secret123", &hash).unwrap());
}

#[test]
fn test_verify_password_rejects_wrong_password() {
    let hash = hash_password("secret123").unwrap();

    assert!(!verify_password("wrong-password", &hash).unwrap());
}

#[test]
fn test_same_password_hashes_differently() {
    // bcrypt salts every hash
    let hash1 = hash_password("secret123").unwrap();
    let hash2 = hash_password("secret123").unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password("secret123", &hash1).unwrap());
    assert!(verify_password("secret123", &hash2).unwrap());
}

#[test]
fn test_verify_password_with_invalid_hash_errors() {
    assert!(verify_password("secret123", "not-a-bcrypt-hash").is_err());
}
