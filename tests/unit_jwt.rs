use prephub::config::jwt::JwtConfig;
use prephub::modules::users::model::UserRole;
use prephub::utils::jwt::{create_access_token, verify_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 604800,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();

    let result = create_access_token(1, "test@example.com", UserRole::User, &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_verify_token_round_trips_identity_and_role() {
    let jwt_config = get_test_jwt_config();

    let token =
        create_access_token(42, "test@example.com", UserRole::Admin, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.email, "test@example.com");
    assert_eq!(claims.role, UserRole::Admin);
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    assert!(verify_token("invalid.token.here", &jwt_config).is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(1, "test@example.com", UserRole::User, &jwt_config).unwrap();

    let wrong_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        token_expiry: 604800,
    };

    assert!(verify_token(&token, &wrong_config).is_err());
}

#[test]
fn test_verify_token_expired() {
    // Negative lifetime puts `exp` in the past; a valid signature must
    // not rescue an expired token.
    let expired_config = JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: -3600,
    };

    let token =
        create_access_token(1, "test@example.com", UserRole::User, &expired_config).unwrap();

    assert!(verify_token(&token, &expired_config).is_err());
}

#[test]
fn test_verify_token_empty() {
    let jwt_config = get_test_jwt_config();

    assert!(verify_token("", &jwt_config).is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        assert!(verify_token(token, &jwt_config).is_err());
    }
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token(1, "test@example.com", UserRole::User, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, jwt_config.token_expiry as usize);
}

#[test]
fn test_different_users_get_different_tokens() {
    let jwt_config = get_test_jwt_config();

    let token1 = create_access_token(1, "user1@example.com", UserRole::User, &jwt_config).unwrap();
    let token2 = create_access_token(2, "user2@example.com", UserRole::User, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(claims1.sub, "1");
    assert_eq!(claims2.sub, "2");
}
