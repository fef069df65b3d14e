use super::*;

/// Tests a valid token without permission requirements.
///
/// Expected: Ok(Claims) for the token's user
#[test]
fn accepts_valid_bearer_token() {
    let tokens = token_service(None);
    let token = tokens.issue(&user_from("Novi Sad")).unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    let claims = AuthGuard::new(&tokens, &headers).require(&[]).unwrap();

    assert_eq!(claims.sub, "1");
    assert_eq!(claims.city, "Novi Sad");
}

/// Tests that the scheme is matched case-insensitively.
///
/// Expected: Ok(Claims)
#[test]
fn accepts_lowercase_scheme() {
    let tokens = token_service(None);
    let token = tokens.issue(&user_from("Novi Sad")).unwrap();
    let headers = headers_with(&format!("bearer {}", token));

    assert!(AuthGuard::new(&tokens, &headers).require(&[]).is_ok());
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let tokens = token_service(None);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests non-bearer schemes and empty tokens.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_other_schemes() {
    let tokens = token_service(None);

    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer"] {
        let headers = headers_with(value);
        let result = AuthGuard::new(&tokens, &headers).require(&[]);

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))),
            "accepted {value:?}"
        );
    }
}

/// Tests a malformed bearer token.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_invalid_token() {
    let tokens = token_service(None);
    let headers = headers_with("Bearer not.a.jwt");

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests the city policy when no city is configured.
///
/// Expected: Ok for any city
#[test]
fn city_policy_without_required_city_allows_all() {
    let tokens = token_service(None);
    let token = tokens.issue(&user_from("Antwerp")).unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    assert!(AuthGuard::new(&tokens, &headers)
        .require(&[Permission::CityPolicy])
        .is_ok());
}

/// Tests the city policy with a matching city.
///
/// Expected: Ok(Claims)
#[test]
fn city_policy_allows_matching_city() {
    let tokens = token_service(Some("Novi Sad"));
    let token = tokens.issue(&user_from("Novi Sad")).unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    assert!(AuthGuard::new(&tokens, &headers)
        .require(&[Permission::CityPolicy])
        .is_ok());
}

/// Tests the city policy with a different city.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn city_policy_denies_other_city() {
    let tokens = token_service(Some("Antwerp"));
    let token = tokens.issue(&user_from("Novi Sad")).unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::CityPolicy]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));
}
