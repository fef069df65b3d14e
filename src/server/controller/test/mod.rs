use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Request, StatusCode,
    },
    response::Response,
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;
use tower::ServiceExt;

use crate::{
    model::auth::AuthenticationRequestDto,
    server::{
        data::{memory::InMemoryCityInfoStore, StoreProvider},
        router::router,
        service::{
            auth::TokenService,
            file::FileService,
            mail::testing::{RecordingMailService, SentMail},
        },
        state::AppState,
    },
};


const SECRET: &[u8] = b"secret-key-for-tests";
const ISSUER: &str = "https://localhost:7169";
const AUDIENCE: &str = "cityinfoapi";
const DOCUMENT_NAME: &str = "certificate.pdf";

struct TestApp {
    router: Router,
    tokens: TokenService,
    mail: UnboundedReceiver<SentMail>,
    dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        Self::with_required_city(None)
    }

    fn with_required_city(required_city: Option<&str>) -> Self {
        let tokens = TokenService::new(
            SECRET,
            ISSUER,
            AUDIENCE,
            required_city.map(str::to_string),
        );
        let (mail_service, mail) = RecordingMailService::new();
        let dir = tempfile::tempdir().unwrap();
        let files = FileService::new(dir.path().join(DOCUMENT_NAME), dir.path().join("uploads"));

        let state = AppState::new(
            StoreProvider::InMemory(Arc::new(InMemoryCityInfoStore::seeded())),
            tokens.clone(),
            mail_service,
            files,
        );

        Self {
            router: router(state),
            tokens,
            mail,
            dir,
        }
    }

    fn token(&self) -> String {
        self.tokens
            .authenticate(AuthenticationRequestDto {
                username: Some("nikola".to_string()),
                password: Some("password".to_string()),
            })
            .unwrap()
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Sends an authenticated request with an optional JSON body.
    async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {}", self.token()));

        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send(request).await
    }
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests that the OpenAPI document lists the API.
///
/// Expected: 200 with the point of interest item path and the bearer scheme
#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new();

    let response = app
        .send(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let document = json_body(response).await;
    assert!(document["paths"]
        .get("/api/cities/{city_id}/pointsofinterest/{point_of_interest_id}")
        .is_some());
    assert!(document["components"]["securitySchemes"]
        .get("bearer_auth")
        .is_some());
}
