//! JSON endpoints under `/api`.
//!
//! - `POST /api/chat`      — Answer the latest message of a conversation
//! - `GET  /api/sequence`  — Frame count and public path of the hero sequence
//! - `POST /api/contact`   — Contact form (form-urlencoded or JSON)
//! - `GET  /api/profile`   — Owner profile and social links

use axum::{
    Form, Router,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use scrollfolio_contact::{ContactResult, ContactSubmission};
use scrollfolio_core::{KnowledgeBase, Message, Role};
use scrollfolio_sequence::{SequenceData, get_sequence_data};

use crate::SharedState;

const CHAT_FAILED: &str = "Failed to process chat request";

pub fn api_router(state: SharedState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/sequence", get(sequence_handler))
        .route("/contact", post(contact_handler))
        .route("/profile", get(profile_handler))
        .with_state(state)
}

// ── Request / Response types ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn chat_error(status: StatusCode) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: CHAT_FAILED.into(),
        }),
    )
}

/// Contact form body, accepted as JSON or `application/x-www-form-urlencoded`.
pub struct ContactPayload(pub ContactSubmission);

impl<S: Send + Sync> FromRequest<S> for ContactPayload {
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let submission = if is_json {
            let Json(s) = Json::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            s
        } else {
            let Form(s) = Form::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            s
        };
        Ok(Self(submission))
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────

async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(|e| {
        error!(error = %e, "Malformed chat request");
        match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => chat_error(StatusCode::PAYLOAD_TOO_LARGE),
            _ => chat_error(StatusCode::INTERNAL_SERVER_ERROR),
        }
    })?;

    info!(
        messages = request.messages.len(),
        strategy = state.chat.strategy_name(),
        "Chat request"
    );

    let reply = state.chat.reply(&request.messages).await.map_err(|e| {
        error!(error = %e, "Chat responder failed");
        chat_error(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(ChatReply {
        role: reply.role,
        content: reply.content,
    }))
}

async fn sequence_handler(State(state): State<SharedState>) -> Json<SequenceData> {
    Json(get_sequence_data(&state.config.sequence).await)
}

async fn contact_handler(
    State(state): State<SharedState>,
    ContactPayload(submission): ContactPayload,
) -> Json<ContactResult> {
    Json(state.contact.send(&submission).await)
}

async fn profile_handler(State(state): State<SharedState>) -> Json<KnowledgeBase> {
    Json(state.knowledge.as_ref().clone())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppState;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use scrollfolio_chat::ChatResponder;
    use scrollfolio_config::{AppConfig, ChatConfig, ChatStrategy};
    use scrollfolio_contact::ContactSender;
    use scrollfolio_core::provider::{ProviderRequest, ProviderResponse};
    use scrollfolio_core::{MailError, Mailer, OutgoingEmail, Provider, ProviderError};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct MockProvider {
        reply: Result<String, ProviderError>,
    }

    #[async_trait::async_trait]
    impl Provider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
            let text = self.reply.clone()?;
            Ok(ProviderResponse {
                message: Message::assistant(text),
                usage: None,
                model: request.model,
            })
        }
    }

    #[derive(Default)]
    struct MockMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    #[async_trait::async_trait]
    impl Mailer for MockMailer {
        fn name(&self) -> &str {
            "mock"
        }

        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn state_with(chat: ChatConfig, provider: Option<Arc<dyn Provider>>, contact: ContactSender) -> SharedState {
        let config = AppConfig {
            chat,
            ..AppConfig::default()
        };
        let knowledge = Arc::new(KnowledgeBase::builtin());
        let chat = ChatResponder::from_config(&config.chat, knowledge.clone(), provider);
        Arc::new(AppState {
            config,
            knowledge,
            chat,
            contact,
        })
    }

    fn keyword_state() -> SharedState {
        state_with(ChatConfig::default(), None, ContactSender::unconfigured())
    }

    fn llm_state(reply: Result<String, ProviderError>) -> SharedState {
        let chat = ChatConfig {
            strategy: ChatStrategy::Llm,
            ..ChatConfig::default()
        };
        let provider: Arc<dyn Provider> = Arc::new(MockProvider { reply });
        state_with(chat, Some(provider), ContactSender::unconfigured())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn chat_keyword_answers_skills() {
        let app = api_router(keyword_state());
        let req = post_json(
            "/chat",
            r#"{"messages":[{"role":"user","content":"What is your tech stack?"}]}"#,
        );

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["role"], "assistant");
        let content = json["content"].as_str().unwrap();
        for skill in &KnowledgeBase::builtin().profile.skills {
            assert!(content.contains(skill.as_str()), "missing {skill}");
        }
    }

    #[tokio::test]
    async fn chat_empty_history_gets_fallback() {
        let app = api_router(keyword_state());
        let response = app.oneshot(post_json("/chat", r#"{"messages":[]}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert!(json["content"].as_str().unwrap().contains("portfolio assistant"));
    }

    #[tokio::test]
    async fn chat_malformed_body_is_500() {
        let app = api_router(keyword_state());
        let response = app.oneshot(post_json("/chat", "{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"], CHAT_FAILED);
    }

    #[tokio::test]
    async fn chat_llm_reply_is_forwarded() {
        let app = api_router(llm_state(Ok("Hello from the model".into())));
        let response = app
            .oneshot(post_json("/chat", r#"{"messages":[{"role":"user","content":"hi"}]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["content"], "Hello from the model");
    }

    #[tokio::test]
    async fn chat_llm_failure_is_500() {
        let app = api_router(llm_state(Err(ProviderError::Timeout("deadline exceeded".into()))));
        let response = app
            .oneshot(post_json("/chat", r#"{"messages":[{"role":"user","content":"hi"}]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], CHAT_FAILED);
    }

    #[tokio::test]
    async fn sequence_reports_frames() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..3 {
            std::fs::write(dir.path().join(format!("frame_{i:03}.png")), b"").unwrap();
        }
        let mut config = AppConfig::default();
        config.sequence.dir = dir.path().to_path_buf();
        let knowledge = Arc::new(KnowledgeBase::builtin());
        let state = Arc::new(AppState {
            chat: ChatResponder::from_config(&config.chat, knowledge.clone(), None),
            config,
            knowledge,
            contact: ContactSender::unconfigured(),
        });

        let req = Request::builder().uri("/sequence").body(Body::empty()).unwrap();
        let response = api_router(state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["frameCount"], 3);
        assert_eq!(json["sequencePath"], "/sequences");
    }

    #[tokio::test]
    async fn contact_form_with_missing_fields() {
        let app = api_router(keyword_state());
        let req = Request::builder()
            .method("POST")
            .uri("/contact")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("name=Ada&email=&message=hello"))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Missing fields");
    }

    #[tokio::test]
    async fn contact_json_is_delivered() {
        let mailer = Arc::new(MockMailer::default());
        let contact = ContactSender::new(mailer.clone(), "relay@gmail.com", "relay@gmail.com");
        let app = api_router(state_with(ChatConfig::default(), None, contact));

        let response = app
            .oneshot(post_json(
                "/contact",
                r#"{"name":"Ada","email":"ada@example.com","message":"Let's build something"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!({"success": true}));

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Message from Ada (Portfolio)");
    }

    #[tokio::test]
    async fn contact_without_relay_reports_not_configured() {
        let app = api_router(keyword_state());
        let response = app
            .oneshot(post_json(
                "/contact",
                r#"{"name":"Ada","email":"ada@example.com","message":"hi"}"#,
            ))
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Email is not configured");
    }

    #[tokio::test]
    async fn profile_lists_socials() {
        let app = api_router(keyword_state());
        let req = Request::builder().uri("/profile").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["profile"]["name"], "Varun Mahajan");
        assert_eq!(json["socials"].as_array().unwrap().len(), 3);
    }
}
