pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::state::AppState;
use crate::tailoring::handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jd/classify", post(handlers::handle_classify_jd))
        .route("/api/v1/resumes/update", post(handlers::handle_update_resume))
        .route(
            "/api/v1/resumes/upload",
            post(handlers::handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::output::FsOutputSink;

    const BOUNDARY: &str = "tailor-test-boundary";

    fn test_router() -> (Router, TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: tmp.path().to_path_buf(),
            ..Config::default()
        };
        let state = AppState {
            sink: Arc::new(FsOutputSink::new(config.output_dir.clone())),
            config,
        };
        (build_router(state), tmp)
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(parts: &[(&str, Option<&str>, Vec<u8>)]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file_name, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match file_name {
                Some(file_name) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: text/plain\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(content.as_slice());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let (app, _tmp) = test_router();
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-tailor");
    }

    #[tokio::test]
    async fn test_classify_returns_every_category() {
        let (app, _tmp) = test_router();
        let response = app
            .oneshot(json_request(
                "/api/v1/jd/classify",
                json!({ "jd_text": "- Python\nResponsible for testing\nFluent in Tamil" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["sections"]["skills"], json!(["Python"]));
        assert_eq!(
            body["sections"]["responsibilities"],
            json!(["Responsible for testing"])
        );
        assert_eq!(body["sections"]["languages"], json!(["Fluent in Tamil"]));
        assert_eq!(body["sections"]["qualifications"], json!([]));
        assert_eq!(body["sections"]["projects"], json!([]));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_jd() {
        let (app, _tmp) = test_router();
        let response = app
            .oneshot(json_request(
                "/api/v1/resumes/update",
                json!({ "resume_text": "Jane Doe", "jd_text": "  \n " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_returns_tailored_resume_without_saving() {
        let (app, tmp) = test_router();
        let response = app
            .oneshot(json_request(
                "/api/v1/resumes/update",
                json!({
                    "resume_text": "Jane Doe\nEducation\nBSc Computer Science\n\n",
                    "jd_text": "Must know Python and SQL\nResponsible for testing\n"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let updated = body["updated_resume"].as_str().unwrap();
        assert!(updated.starts_with("Jane Doe\n\nSummary\n"));
        assert!(updated.contains("Technical Skills\n- Must know Python and SQL"));
        assert!(updated.ends_with("Education\nBSc Computer Science"));
        assert!(body["output_path"].is_null());
        assert!(body["generated_at"].is_string());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_update_saves_when_requested() {
        let (app, tmp) = test_router();
        let response = app
            .oneshot(json_request(
                "/api/v1/resumes/update",
                json!({
                    "resume_text": "Jane Doe\n\nExperience\nAcme",
                    "jd_text": "Develop services\n",
                    "save": true
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let path = body["output_path"].as_str().unwrap();
        assert!(path.starts_with(tmp.path().to_str().unwrap()));
        let saved = std::fs::read_to_string(path).unwrap();
        assert_eq!(saved, body["updated_resume"].as_str().unwrap());
    }

    #[tokio::test]
    async fn test_upload_returns_attachment_and_saves_copy() {
        let (app, tmp) = test_router();
        let response = app
            .oneshot(multipart_request(&[
                ("resume", Some("resume.txt"), b"Jane Doe\n\nProjects\nChess engine\n".to_vec()),
                ("jd_text", None, b"Python\nSQL\n".to_vec()),
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"updated_resume.txt\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("Projects\nChess engine\n- Designed and implemented using Python, SQL."));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_upload_requires_resume_file() {
        let (app, _tmp) = test_router();
        let response = app
            .oneshot(multipart_request(&[("jd_text", None, b"Python\n".to_vec())]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_text_extension() {
        let (app, _tmp) = test_router();
        let response = app
            .oneshot(multipart_request(&[
                ("resume", Some("resume.pdf"), b"%PDF-1.7".to_vec()),
                ("jd_text", None, b"Python\n".to_vec()),
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_utf8() {
        let (app, _tmp) = test_router();
        let response = app
            .oneshot(multipart_request(&[
                ("resume", Some("resume.txt"), vec![0xff, 0xfe, 0xfd]),
                ("jd_text", None, b"Python\n".to_vec()),
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
