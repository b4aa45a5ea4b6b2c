//! HTTP tests for the contact-form endpoints

#[cfg(test)]
mod http_tests {
    use actix_web::{App, test, web};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::AppState;
    use crate::config::Config;
    use crate::handlers::configure_contact_routes;
    use crate::models::{CodeChefStats, GithubRepo, GithubStats, LeetCodeStats};
    use crate::services::{
        ChatService, ContactService, FetchError, ManualClock, PortfolioStore, ProjectsService,
        RepoSource, StatsService, StatsSources,
    };

    struct NoSources;

    #[async_trait]
    impl StatsSources for NoSources {
        async fn github(&self) -> Option<GithubStats> {
            None
        }
        async fn leetcode(&self) -> Option<LeetCodeStats> {
            None
        }
        async fn codechef(&self) -> CodeChefStats {
            CodeChefStats::fallback("someone")
        }
    }

    struct NoRepos;

    #[async_trait]
    impl RepoSource for NoRepos {
        async fn fetch_repos(&self) -> Result<Vec<GithubRepo>, FetchError> {
            Ok(Vec::new())
        }
    }

    fn test_state() -> web::Data<AppState> {
        let clock = Arc::new(ManualClock::default());
        web::Data::new(AppState {
            config: Config {
                host: "127.0.0.1".to_string(),
                port: 5000,
                github_username: "someone".to_string(),
                leetcode_username: "someone".to_string(),
                codechef_username: "someone".to_string(),
                stats_cache_ttl_secs: 1800,
                repos_cache_ttl_secs: 600,
                upstream_timeout_secs: 10,
                openai_api_key: None,
                smtp: None,
            },
            stats: StatsService::new(Arc::new(NoSources), 1800, clock.clone()),
            projects: ProjectsService::new(Arc::new(NoRepos), "someone", 600, clock),
            chat: ChatService::new(reqwest::Client::new(), None),
            contact: ContactService::new(None),
            portfolio: PortfolioStore::seeded(),
        })
    }

    #[actix_web::test]
    async fn valid_submission_is_created_and_receipt_reports_no_email() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(web::scope("/api").configure(configure_contact_routes)),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/contact")
                .set_json(json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "hello there"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["receipt"]["saved"], true);
        assert_eq!(body["receipt"]["emailSent"], false);
    }

    #[actix_web::test]
    async fn missing_fields_are_rejected_with_400() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(web::scope("/api").configure(configure_contact_routes)),
        )
        .await;

        for payload in [
            json!({"email": "a@example.com", "message": "hi"}),
            json!({"name": "Ada", "message": "hi"}),
            json!({"name": "Ada", "email": "a@example.com", "message": "  "}),
        ] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/api/contact")
                    .set_json(payload)
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), 400);
        }
    }

    #[actix_web::test]
    async fn listing_returns_submissions_newest_first() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(web::scope("/api").configure(configure_contact_routes)),
        )
        .await;

        for name in ["first", "second"] {
            let _ = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/api/contact")
                    .set_json(json!({
                        "name": name,
                        "email": "a@example.com",
                        "message": "hi"
                    }))
                    .to_request(),
            )
            .await;
        }

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/contact").to_request(),
        )
        .await;

        assert_eq!(body["success"], true);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["status"], "new");
    }

    #[actix_web::test]
    async fn status_update_round_trips_and_unknown_id_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(web::scope("/api").configure(configure_contact_routes)),
        )
        .await;

        let _ = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/contact")
                .set_json(json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "hello"
                }))
                .to_request(),
        )
        .await;

        let listing: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/contact").to_request(),
        )
        .await;
        let id = listing["messages"][0]["id"].as_str().unwrap().to_string();

        let updated: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/api/contact/{id}"))
                .set_json(json!({"status": "read"}))
                .to_request(),
        )
        .await;
        assert_eq!(updated["success"], true);
        assert_eq!(updated["message"]["status"], "read");

        let missing = test::call_service(
            &app,
            test::TestRequest::patch()
                .uri(&format!("/api/contact/{}", Uuid::new_v4()))
                .set_json(json!({"status": "read"}))
                .to_request(),
        )
        .await;
        assert_eq!(missing.status(), 404);
    }
}
