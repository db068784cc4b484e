use super::*;

/// Tests that a valid token establishes the caller's identity.
///
/// Expected: Ok with the user row behind the token subject
#[tokio::test]
async fn accepts_valid_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = UserFactory::new(db)
        .email("ana@x.com")
        .build()
        .await
        .unwrap();
    let headers = bearer_headers(&tokens.issue("ana@x.com"));

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[Permission::Authenticated]).await.unwrap();

    assert_eq!(result.id, user.id);
    assert_eq!(result.email, "ana@x.com");
}

/// Tests that a request without an Authorization header is rejected.
///
/// Expected: Err with the missing-token auth error
#[tokio::test]
async fn rejects_missing_header() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[Permission::Authenticated]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a token minted with a different secret is rejected.
///
/// Expected: Err with the invalid-token auth error
#[tokio::test]
async fn rejects_foreign_token() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    UserFactory::new(db)
        .email("ana@x.com")
        .build()
        .await
        .unwrap();
    let foreign = TokenService::new("other-secret", Duration::hours(1));
    let headers = bearer_headers(&foreign.issue("ana@x.com"));

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[Permission::Authenticated]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that a valid token whose subject no longer exists is rejected.
///
/// Expected: Err with the unknown-user auth error
#[tokio::test]
async fn rejects_token_for_missing_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer_headers(&tokens.issue("nadie@x.com"));

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[Permission::Authenticated]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownUser(_)))
    ));
}

/// Tests that a CLIENTE cannot pass an admin checkpoint.
///
/// Expected: Err with the access-denied auth error
#[tokio::test]
async fn denies_client_on_admin_route() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    UserFactory::new(db)
        .email("ana@x.com")
        .role(UserRole::Cliente)
        .build()
        .await
        .unwrap();
    let headers = bearer_headers(&tokens.issue("ana@x.com"));

    let guard = AuthGuard::new(db, &tokens, &headers);
    let result = guard.require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));
}

/// Tests the role/permission matrix across every role.
#[tokio::test]
async fn role_matrix_matches_permissions() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let cases = [
        (UserRole::Admin, "admin@x.com"),
        (UserRole::AdminDiscoteca, "gestor@x.com"),
    ];
    for (role, email) in cases {
        UserFactory::new(db).email(email).role(role).build().await.unwrap();
    }

    let admin_headers = bearer_headers(&tokens.issue("admin@x.com"));
    let guard = AuthGuard::new(db, &tokens, &admin_headers);
    assert!(guard.require(&[Permission::Admin]).await.is_ok());
    assert!(guard.require(&[Permission::Staff]).await.is_ok());
    assert!(guard.require(&[Permission::ClubAdmin]).await.is_err());

    let club_headers = bearer_headers(&tokens.issue("gestor@x.com"));
    let guard = AuthGuard::new(db, &tokens, &club_headers);
    assert!(guard.require(&[Permission::ClubAdmin]).await.is_ok());
    assert!(guard.require(&[Permission::Staff]).await.is_ok());
    assert!(guard.require(&[Permission::Admin]).await.is_err());
}
