// Preview server tests
//
// Run with: cargo test --features server --test server_integration_tests

#[cfg(feature = "server")]
mod server_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use portfolio_site::{create_router, AppState, BasePath, RenderOptions, SiteContent};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    fn create_test_app(base: &str, assets_dir: &std::path::Path) -> axum::Router {
        let options = RenderOptions::new(BasePath::new(base).unwrap()).with_year(2025);
        let state = AppState::new(&SiteContent::portfolio(), options, assets_dir).unwrap();
        create_router(state)
    }

    async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    #[tokio::test]
    async fn test_page_served_at_base_path() {
        let assets = tempfile::tempdir().unwrap();
        let app = create_test_app("/personal-site/", assets.path());

        let response = get(app.clone(), "/personal-site/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<section id=\"projects\""));

        let response = get(app, "/personal-site/index.html").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_redirects_to_base_path() {
        let assets = tempfile::tempdir().unwrap();
        let app = create_test_app("/personal-site/", assets.path());

        for uri in ["/", "/personal-site"] {
            let response = get(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
            assert_eq!(
                response.headers().get(header::LOCATION).unwrap(),
                "/personal-site/"
            );
        }
    }

    #[tokio::test]
    async fn test_assets_served_under_base_path() {
        let assets = tempfile::tempdir().unwrap();
        std::fs::write(assets.path().join("CV.pdf"), b"%PDF-1.4").unwrap();
        let app = create_test_app("/personal-site/", assets.path());

        let response = get(app.clone(), "/personal-site/CV.pdf").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "%PDF-1.4");

        let response = get(app.clone(), "/personal-site/missing.pdf").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = get(app, "/elsewhere/CV.pdf").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_only_get_and_head_are_served() {
        let assets = tempfile::tempdir().unwrap();
        std::fs::write(assets.path().join("CV.pdf"), b"%PDF-1.4").unwrap();
        let app = create_test_app("/personal-site/", assets.path());

        for (method, uri) in [
            ("POST", "/personal-site/"),
            ("DELETE", "/personal-site/"),
            ("PUT", "/personal-site/CV.pdf"),
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
            assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET, HEAD");
        }

        let response = app
            .oneshot(Request::builder().method("HEAD").uri("/personal-site/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_base_path() {
        let assets = tempfile::tempdir().unwrap();
        let app = create_test_app("/", assets.path());

        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check() {
        let assets = tempfile::tempdir().unwrap();
        let app = create_test_app("/personal-site/", assets.path());

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
        assert_eq!(body["page"]["project_cards"], SiteContent::portfolio().projects.len());
    }
}
