//! Authentication service tests

mod helpers;

use fairhub::config::settings::AuthConfig;
use fairhub::models::user::UserRole;
use fairhub::services::auth::AuthService;

fn test_auth_service() -> AuthService {
    helpers::init_test_env();
    AuthService::new(AuthConfig {
        jwt_secret: "an-integration-test-secret-of-32b".to_string(),
        token_ttl_hours: 2,
        // Minimum cost keeps the test fast
        bcrypt_cost: 4,
    })
}

#[test]
fn test_issue_and_verify_token_for_each_role() {
    let auth = test_auth_service();

    for role in [UserRole::Admin, UserRole::Company, UserRole::JobSeeker] {
        let token = auth.issue_token(7, role).expect("issue failed");
        let claims = auth.verify_token(&token).expect("verify failed");
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_token_from_other_secret_rejected() {
    let auth = test_auth_service();
    let other = AuthService::new(AuthConfig {
        jwt_secret: "a-different-secret-that-is-32-by".to_string(),
        token_ttl_hours: 2,
        bcrypt_cost: 4,
    });

    let token = other.issue_token(7, UserRole::Admin).expect("issue failed");
    assert!(auth.verify_token(&token).is_err());
}

#[test]
fn test_password_hashes_are_salted() {
    let auth = test_auth_service();

    let a = auth.hash_password("password123").expect("hash failed");
    let b = auth.hash_password("password123").expect("hash failed");
    assert_ne!(a, b);
    assert!(auth.verify_password("password123", &a).unwrap());
    assert!(auth.verify_password("password123", &b).unwrap());
}
