use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::{CityInfoUser, TokenService},
};

mod require;

const SECRET: &[u8] = b"secret-key-for-tests";

fn token_service(required_city: Option<&str>) -> TokenService {
    TokenService::new(
        SECRET,
        "https://localhost:7169",
        "cityinfoapi",
        required_city.map(str::to_string),
    )
}

fn user_from(city: &str) -> CityInfoUser {
    CityInfoUser {
        user_id: 1,
        user_name: "nikola".to_string(),
        first_name: "Nikola".to_string(),
        last_name: "Maksimovic".to_string(),
        city: city.to_string(),
    }
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
