pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::assistant::WELCOME_MESSAGE;
    use crate::config::{
        AssistantConfig, Config, ContentConfig, DatabaseConfig, PortfolioConfig, ServerConfig,
    };
    use crate::models::Portfolio;

    fn unique_suffix() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let thread_id = std::thread::current().id();
        format!("{thread_id:?}_{timestamp}")
            .replace(['(', ')'], "")
            .to_lowercase()
    }

    async fn test_state() -> AppState {
        let suffix = unique_suffix();
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: format!("file:/tmp/folio_api_test_{suffix}?mode=memory&cache=shared"),
                auth_token: None,
                local_path: None,
            },
            assistant: AssistantConfig {
                response_delay_ms: 0,
                max_sessions: 16,
            },
            content: ContentConfig {
                generation_delay_ms: 0,
                library_path: std::env::temp_dir()
                    .join(format!("folio_api_test_content_{suffix}.json"))
                    .to_string_lossy()
                    .into_owned(),
                randomize_templates: false,
            },
            portfolio: PortfolioConfig { path: None },
        };

        let raw_db = crate::db::Database::new(&config.database).await.unwrap();
        let db_backend = crate::db::LibSqlBackend::new(raw_db);
        let db: std::sync::Arc<dyn crate::db::DatabaseBackend> = std::sync::Arc::new(db_backend);

        AppState::new(config, db, Portfolio::default()).await
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn send_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_portfolio_and_sessions() {
        let app = create_router(test_state().await);

        let response = app.oneshot(get("/api/v1/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["database"]["status"], "ok");
        assert_eq!(json["data"]["assistant"]["portfolio"], "Raghav Bharadwaj");
        assert_eq!(json["data"]["assistant"]["activeSessions"], 0);
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn openapi_json_is_valid() {
        let app = create_router(test_state().await);

        let response = app.oneshot(get("/api/v1/openapi.json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(
            version.starts_with("3"),
            "OpenAPI version should start with 3, got: {version}"
        );
        assert!(json["paths"]["/api/v1/projects"].is_object());
        assert!(json["paths"]["/api/v1/chat/sessions/{sessionId}/messages"].is_object());
    }

    #[tokio::test]
    async fn project_crud_and_filter() {
        let app = create_router(test_state().await);

        let response = app
            .clone()
            .oneshot(send_json(
                "POST",
                "/api/v1/projects",
                serde_json::json!({
                    "title": "Weather Dashboard",
                    "description": "Forecasts",
                    "technologies": ["React", "D3.js"]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created["data"]["projectId"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 21);

        app.clone()
            .oneshot(send_json(
                "POST",
                "/api/v1/projects",
                serde_json::json!({ "title": "Task Manager", "technologies": ["Angular"] }),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get("/api/v1/projects?filter=react"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["meta"]["total"], 1);
        assert_eq!(json["data"]["filter"], "react");
        assert_eq!(json["data"]["projects"][0]["title"], "Weather Dashboard");

        let response = app.clone().oneshot(get("/api/v1/projects")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["meta"]["total"], 2);
        assert_eq!(json["data"]["filter"], "all");

        let response = app
            .clone()
            .oneshot(send_json(
                "PATCH",
                &format!("/api/v1/projects/{id}"),
                serde_json::json!({ "title": "Weather Station" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["title"], "Weather Station");
        assert_eq!(json["data"]["description"], "Forecasts");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/projects/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get(&format!("/api/v1/projects/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_project_title_is_rejected() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(send_json(
                "POST",
                "/api/v1/projects",
                serde_json::json!({ "title": "   " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn submitted_message_is_stored_unread() {
        let app = create_router(test_state().await);

        let response = app
            .clone()
            .oneshot(send_json(
                "POST",
                "/api/v1/messages",
                serde_json::json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "Hello",
                    "message": "Nice portfolio"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(
            json["data"]["notice"],
            "Thank you for your message! I'll get back to you soon."
        );
        assert_eq!(json["data"]["message"]["read"], false);
        let id = json["data"]["message"]["messageId"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/messages/{id}/read"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/api/v1/messages")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["meta"]["total"], 1);
        assert_eq!(json["data"]["messages"][0]["read"], true);
    }

    #[tokio::test]
    async fn incomplete_contact_form_is_rejected() {
        let app = create_router(test_state().await);

        let response = app
            .clone()
            .oneshot(send_json(
                "POST",
                "/api/v1/messages",
                serde_json::json!({ "name": "Ada", "email": "ada@example.com" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Sorry, there was an error sending your message. Please try again."
        );

        let response = app.oneshot(get("/api/v1/messages")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["meta"]["total"], 0);
    }

    #[tokio::test]
    async fn chat_send_and_clear() {
        let app = create_router(test_state().await);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat/sessions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        let session_id = json["data"]["sessionId"].as_str().unwrap().to_string();
        assert_eq!(json["data"]["messages"][0]["content"], WELCOME_MESSAGE);
        assert_eq!(json["data"]["isOpen"], false);

        let response = app
            .clone()
            .oneshot(send_json(
                "POST",
                &format!("/api/v1/chat/sessions/{session_id}/messages"),
                serde_json::json!({ "content": "  What are your skills?  " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let messages = json["data"]["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["content"], "What are your skills?");
        assert_eq!(messages[0]["isUser"], true);
        assert_eq!(messages[1]["isUser"], false);
        assert_eq!(messages[1]["type"], "text");

        let response = app
            .clone()
            .oneshot(get(&format!("/api/v1/chat/sessions/{session_id}")))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["messages"].as_array().unwrap().len(), 3);
        assert_eq!(json["data"]["isTyping"], false);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/chat/sessions/{session_id}/clear"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        let messages = json["data"]["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["content"], WELCOME_MESSAGE);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/chat/sessions/{session_id}/toggle"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["isOpen"], true);
    }

    #[tokio::test]
    async fn blank_chat_message_is_rejected() {
        let state = test_state().await;
        let (session_id, _) = state.assistant.create_session().unwrap();
        let app = create_router(state);

        let response = app
            .oneshot(send_json(
                "POST",
                &format!("/api/v1/chat/sessions/{session_id}/messages"),
                serde_json::json!({ "content": "   " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(get("/api/v1/chat/sessions/does-not-exist"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn skill_analysis_tool() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(send_json(
                "POST",
                "/api/v1/tools/skill-analysis",
                serde_json::json!({ "skill": "angular" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["title"], "ANGULAR Analysis");
        assert_eq!(json["data"]["priority"], "high");
    }

    #[tokio::test]
    async fn content_library_round_trip() {
        let app = create_router(test_state().await);

        let response = app
            .clone()
            .oneshot(send_json(
                "POST",
                "/api/v1/tools/content",
                serde_json::json!({ "type": "skill_analysis", "input": "Rust" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(get("/api/v1/tools/content"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["meta"]["total"], 1);
        assert_eq!(json["data"]["items"][0]["type"], "skill_analysis");

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/tools/content/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn markdown_export_is_an_attachment() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(get("/api/v1/portfolio/export/markdown"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"portfolio-raghav-bharadwaj.md\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
        let body = body_text(response).await;
        assert!(body.starts_with("# Raghav Bharadwaj\nFull Stack Developer\n"));
    }

    #[tokio::test]
    async fn json_export_parses_back_to_the_record() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(get("/api/v1/portfolio/export/json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        let parsed: Portfolio = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, Portfolio::default());
    }

    #[tokio::test]
    async fn unknown_export_format_is_rejected() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(get("/api/v1/portfolio/export/docx"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }
}
