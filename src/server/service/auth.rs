//! Bearer token issuing and validation.
//!
//! Every set of credentials with a username is accepted and mapped to the same demo
//! user; the interesting part is the token itself. Tokens are HS256-signed JWTs carrying
//! the user's identity and city, and are valid for one hour.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::AuthenticationRequestDto,
    server::{config::AuthConfig, error::auth::AuthError},
};

/// Token lifetime in seconds.
pub const TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Claims carried by an issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub given_name: String,
    pub family_name: String,
    pub city: String,
    pub iss: String,
    pub aud: String,
    pub nbf: i64,
    pub iat: i64,
    pub exp: i64,
}

/// User the token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityInfoUser {
    pub user_id: i32,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

impl CityInfoUser {
    fn demo(user_name: String) -> Self {
        Self {
            user_id: 1,
            user_name,
            first_name: "Nikola".to_string(),
            last_name: "Maksimovic".to_string(),
            city: "Novi Sad".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    required_city: Option<String>,
}

impl TokenService {
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
        required_city: Option<String>,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            audience: audience.into(),
            required_city,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            &config.secret,
            config.issuer.clone(),
            config.audience.clone(),
            config.required_city.clone(),
        )
    }

    /// City a token must be issued for to pass the city policy, if any.
    pub fn required_city(&self) -> Option<&str> {
        self.required_city.as_deref()
    }

    /// Validates credentials and issues a token for the matching user.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AuthError::InvalidCredentials)` - Username missing or empty
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub fn authenticate(&self, request: AuthenticationRequestDto) -> Result<String, AuthError> {
        let user_name = request
            .username
            .filter(|name| !name.trim().is_empty())
            .ok_or(AuthError::InvalidCredentials)?;

        let user = CityInfoUser::demo(user_name);
        let token = self.issue(&user)?;

        tracing::info!("Issued token for user {}", user.user_name);

        Ok(token)
    }

    pub fn issue(&self, user: &CityInfoUser) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.user_id.to_string(),
            given_name: user.first_name.clone(),
            family_name: user.last_name.clone(),
            city: user.city.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            nbf: now,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECONDS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenCreation)
    }

    /// Checks signature, issuer, audience, and lifetime of a token.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.validate_nbf = true;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}
