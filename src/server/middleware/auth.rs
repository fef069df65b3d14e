use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::{Claims, TokenService},
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    /// Token's `city` claim must match the configured city, when one is configured.
    CityPolicy,
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Validates the bearer token and checks every requested permission.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Claims of the valid token
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Signature, issuer, audience, or lifetime check failed
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.validate(token)?;

        for permission in permissions {
            match permission {
                Permission::CityPolicy => {
                    if let Some(required) = self.tokens.required_city() {
                        if claims.city != required {
                            return Err(AuthError::AccessDenied {
                                required: required.to_string(),
                                actual: claims.city,
                            }
                            .into());
                        }
                    }
                }
            }
        }

        Ok(claims)
    }

    fn bearer_token(&self) -> Option<&'a str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value
            .get(..BEARER_PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(BEARER_PREFIX))
            .map(|_| value[BEARER_PREFIX.len()..].trim())?;

        (!token.is_empty()).then_some(token)
    }
}
