//! # API REST
//!
//! REST API implementation for the Heart Analyzer.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping)
//!
//! Uses `analyzer-core` for data operations and `api-shared` for representation types.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod startup;

use analyzer_core::constants::{
    ATTACHMENTS_PATH, OPENAPI_JSON_PATH, PATIENTS_PATH, STATIC_DATA_PATH,
};
use analyzer_core::{CoreConfig, ResourceService};
use analyzer_files::StaticDataService;
use api_shared::{
    AttachmentFull, AttachmentSummary, ErrorRes, HealthRes, HealthService, LinkMethod, LinkRes,
    PatientFull, PatientSummary, Sex,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

pub use error::ApiError;

/// Application state shared across REST API handlers
///
/// Contains the services needed by the REST API endpoints. Everything in here
/// is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    resources: ResourceService,
    static_data: Arc<StaticDataService>,
}

impl AppState {
    /// Creates the handler state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured static data directory is not a valid directory.
    pub fn new(cfg: Arc<CoreConfig>, resources: ResourceService) -> Result<Self, ApiError> {
        let static_data = StaticDataService::new(cfg.static_data_dir())?;
        Ok(Self {
            cfg,
            resources,
            static_data: Arc::new(static_data),
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "LARALAB Heart Analyzer API"),
    paths(
        health,
        list_patients,
        get_patient,
        list_attachments,
        get_attachment,
        get_static_file,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        LinkRes,
        LinkMethod,
        Sex,
        PatientSummary,
        PatientFull,
        AttachmentSummary,
        AttachmentFull,
    ))
)]
pub struct ApiDoc;

/// Query parameters accepted by the attachment listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttachmentsQuery {
    /// Only return attachments owned by this patient.
    pub owner_id: Option<Uuid>,
}

/// Builds the REST router over `state`.
///
/// Collection routes answer both with and without a trailing slash. Swagger UI
/// is served at the configured docs path and the OpenAPI document at
/// `/openapi.json`. Cross-origin requests are allowed from any origin.
pub fn router(state: AppState) -> Router {
    let docs_path = state.cfg.docs_path().to_string();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(PATIENTS_PATH, get(list_patients))
        .route(&format!("{PATIENTS_PATH}/"), get(list_patients))
        .route(&format!("{PATIENTS_PATH}/:id"), get(get_patient))
        .route(ATTACHMENTS_PATH, get(list_attachments))
        .route(&format!("{ATTACHMENTS_PATH}/"), get(list_attachments))
        .route(&format!("{ATTACHMENTS_PATH}/:id"), get(get_attachment))
        .route(&format!("{STATIC_DATA_PATH}/:file_name"), get(get_static_file))
        .merge(SwaggerUi::new(docs_path).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Redirect the API root to the documentation
///
/// Always answers `301 Moved Permanently`.
#[axum::debug_handler]
async fn root(State(state): State<AppState>) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, state.cfg.docs_path().to_string())],
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/patients/",
    responses(
        (status = 200, description = "List of patients", body = [PatientSummary]),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List all patients
///
/// Returns patient summaries in store order, each with `self` and
/// `attachments` links.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientSummary>>, ApiError> {
    Ok(Json(state.resources.list_patients()?))
}

#[utoipa::path(
    get,
    path = "/patients/{id}",
    params(("id" = Uuid, Path, description = "Patient identifier")),
    responses(
        (status = 200, description = "Patient", body = PatientFull),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Unknown patient", body = ErrorRes)
    )
)]
/// Fetch one patient with all attributes
///
/// # Errors
/// Returns `404 Not Found` if no patient has this id.
#[axum::debug_handler]
async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PatientFull>, ApiError> {
    Ok(Json(state.resources.get_patient(id)?))
}

#[utoipa::path(
    get,
    path = "/attachments/",
    params(AttachmentsQuery),
    responses(
        (status = 200, description = "List of attachments", body = [AttachmentSummary]),
        (status = 400, description = "Malformed owner identifier"),
        (status = 500, description = "Dataset integrity violation", body = ErrorRes)
    )
)]
/// List attachments, optionally only those owned by one patient
///
/// Returns attachment summaries in store order, each with `self`, `data`
/// and `owner` links. An owner without attachments yields an empty list.
///
/// # Errors
/// Returns `500 Internal Server Error` if any attachment has an unregistered
/// media type or no owner.
#[axum::debug_handler]
async fn list_attachments(
    State(state): State<AppState>,
    Query(query): Query<AttachmentsQuery>,
) -> Result<Json<Vec<AttachmentSummary>>, ApiError> {
    Ok(Json(state.resources.list_attachments(query.owner_id)?))
}

#[utoipa::path(
    get,
    path = "/attachments/{id}",
    params(("id" = Uuid, Path, description = "Attachment identifier")),
    responses(
        (status = 200, description = "Attachment", body = AttachmentFull),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Unknown attachment", body = ErrorRes),
        (status = 500, description = "Dataset integrity violation", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn get_attachment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AttachmentFull>, ApiError> {
    Ok(Json(state.resources.get_attachment(id)?))
}

#[utoipa::path(
    get,
    path = "/static/data/{file_name}",
    params(("file_name" = String, Path, description = "Data file name, `<attachment id>.<extension>`")),
    responses(
        (status = 200, description = "Raw file content"),
        (status = 400, description = "Unsafe file name", body = ErrorRes),
        (status = 404, description = "No such file", body = ErrorRes)
    )
)]
/// Serve a raw attachment data file
///
/// The `Content-Type` is derived from the file extension; unregistered
/// extensions are served as `application/octet-stream`.
#[axum::debug_handler]
async fn get_static_file(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, ApiError> {
    let file = state.static_data.read(&file_name)?;
    Ok(([(header::CONTENT_TYPE, file.media_type)], file.bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_core::seed::{
        seeded_store, JANE_DOE_ID, JOHN_DOE_ID, MITRAL_ANNULUS_MEASUREMENTS_ID,
        SADDLE_SHAPE_SCREENSHOT_ID,
    };
    use analyzer_core::{Attachment, EntityStore, InMemoryStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{HeaderMap, Request};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct TestApp {
        _static_dir: TempDir,
        router: Router,
    }

    impl TestApp {
        fn with_store(store: Arc<dyn EntityStore>) -> Self {
            let static_dir = TempDir::new().unwrap();
            std::fs::write(
                static_dir
                    .path()
                    .join(format!("{MITRAL_ANNULUS_MEASUREMENTS_ID}.json")),
                br#"{"/mitral-annulus/area":{"type":"Scalar","value":7.5,"unit":"cm^2"}}"#,
            )
            .unwrap();
            std::fs::write(static_dir.path().join("notes.txt"), b"plain").unwrap();

            let cfg = Arc::new(
                CoreConfig::new(static_dir.path().to_path_buf(), "/docs".into()).unwrap(),
            );
            let state = AppState::new(cfg, ResourceService::new(store)).unwrap();
            Self {
                _static_dir: static_dir,
                router: router(state),
            }
        }

        fn seeded() -> Self {
            Self::with_store(Arc::new(seeded_store().unwrap()))
        }

        async fn get(&self, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
            let request = Request::builder()
                .uri(uri)
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap();
            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let headers = response.headers().clone();
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, headers, body.to_vec())
        }

        async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
            let (status, _, body) = self.get(uri).await;
            (status, serde_json::from_slice(&body).unwrap())
        }
    }

    fn link<'a>(entity: &'a Value, rel: &str) -> &'a str {
        entity["links"]
            .as_array()
            .unwrap()
            .iter()
            .find(|l| l["rel"] == rel)
            .and_then(|l| l["href"].as_str())
            .unwrap()
    }

    #[tokio::test]
    async fn root_redirects_permanently_to_docs() {
        let app = TestApp::seeded();

        let (status, headers, _) = app.get("/").await;

        assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(headers[header::LOCATION], "/docs");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = TestApp::seeded().get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn list_patients_returns_summaries() {
        let app = TestApp::seeded();

        let (status, body) = app.get_json("/patients/").await;

        assert_eq!(status, StatusCode::OK);
        let patients = body.as_array().unwrap();
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0]["id"], JOHN_DOE_ID.to_string());
        assert_eq!(patients[0]["date_of_birth"], "1960-07-15");
        for patient in patients {
            let object = patient.as_object().unwrap();
            assert!(!object.contains_key("sex"));
            assert!(!object.contains_key("assigned_physician"));
            assert!(!object.contains_key("clinical_notes"));
        }
    }

    #[tokio::test]
    async fn collection_routes_accept_missing_trailing_slash() {
        let app = TestApp::seeded();

        let (_, with_slash) = app.get_json("/patients/").await;
        let (status, without_slash) = app.get_json("/patients").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(with_slash, without_slash);

        let (status, attachments) = app.get_json("/attachments").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(attachments.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn patient_self_link_returns_identical_entity() {
        let app = TestApp::seeded();
        let (_, patients) = app.get_json("/patients/").await;

        for summary in patients.as_array().unwrap() {
            let (status, full) = app.get_json(link(summary, "self")).await;
            assert_eq!(status, StatusCode::OK);
            let (_, again) = app.get_json(link(&full, "self")).await;
            assert_eq!(full, again);
            assert_eq!(full["id"], summary["id"]);
        }
    }

    #[tokio::test]
    async fn full_patient_includes_nullable_fields() {
        let app = TestApp::seeded();

        let (status, jane) = app.get_json(&format!("/patients/{JANE_DOE_ID}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(jane["sex"], "female");
        assert_eq!(jane["assigned_physician"], "Dr. Tom Tavi");
        assert!(jane.as_object().unwrap().contains_key("clinical_notes"));
        assert!(jane["clinical_notes"].is_null());
        assert_eq!(
            jane["links"],
            serde_json::json!([
                {"rel": "self", "href": format!("/patients/{JANE_DOE_ID}"), "method": "GET"},
                {"rel": "attachments", "href": format!("/attachments/?owner_id={JANE_DOE_ID}"), "method": "GET"}
            ])
        );
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let app = TestApp::seeded();
        let unknown = Uuid::from_u128(1);

        let (status, body) = app.get_json(&format!("/patients/{unknown}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");

        let (status, _) = app.get_json(&format!("/attachments/{unknown}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_ids_are_bad_requests() {
        let app = TestApp::seeded();

        let (status, _, _) = app.get("/patients/not-a-uuid").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, _) = app.get("/attachments/?owner_id=nope").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn attachments_filtered_by_owner() {
        let app = TestApp::seeded();

        let (status, body) = app
            .get_json(&format!("/attachments/?owner_id={JOHN_DOE_ID}"))
            .await;

        assert_eq!(status, StatusCode::OK);
        let attachments = body.as_array().unwrap();
        let ids: Vec<_> = attachments.iter().map(|a| a["id"].clone()).collect();
        assert_eq!(
            ids,
            [
                Value::from(MITRAL_ANNULUS_MEASUREMENTS_ID.to_string()),
                Value::from(SADDLE_SHAPE_SCREENSHOT_ID.to_string())
            ]
        );
        assert!(link(&attachments[0], "data").ends_with(".json"));
        assert!(link(&attachments[1], "data").ends_with(".jpeg"));
    }

    #[tokio::test]
    async fn attachments_for_owner_without_attachments_is_empty() {
        let app = TestApp::seeded();
        let (status, body) = app
            .get_json(&format!("/attachments/?owner_id={}", Uuid::from_u128(5)))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn patient_attachments_link_lists_owned_attachments() {
        let app = TestApp::seeded();
        let (_, jane) = app.get_json(&format!("/patients/{JANE_DOE_ID}")).await;

        let (status, attachments) = app.get_json(link(&jane, "attachments")).await;

        assert_eq!(status, StatusCode::OK);
        let attachments = attachments.as_array().unwrap();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0]["name"], "3d-model/anatomical");
        assert_eq!(link(&attachments[0], "owner"), link(&jane, "self"));
    }

    #[tokio::test]
    async fn attachment_data_link_serves_file_with_media_type() {
        let app = TestApp::seeded();
        let (_, attachment) = app
            .get_json(&format!("/attachments/{MITRAL_ANNULUS_MEASUREMENTS_ID}"))
            .await;

        let (status, headers, body) = app.get(link(&attachment, "data")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_TYPE],
            "application/com.laralab.analysis-primitives+json"
        );
        let data: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(data["/mitral-annulus/area"]["type"], "Scalar");
    }

    #[tokio::test]
    async fn static_file_with_unknown_extension_is_octet_stream() {
        let (status, headers, body) = TestApp::seeded().get("/static/data/notes.txt").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/octet-stream");
        assert_eq!(body, b"plain");
    }

    #[tokio::test]
    async fn missing_or_unsafe_static_files_are_rejected() {
        let app = TestApp::seeded();

        let (status, _, _) = app.get("/static/data/absent.gltf").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = app.get("/static/data/..").await;
        assert!(status == StatusCode::BAD_REQUEST || status == StatusCode::NOT_FOUND);

        let (status, _, _) = app.get("/static/data/.hidden").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn responses_allow_any_origin() {
        let (_, headers, _) = TestApp::seeded().get("/patients/").await;
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn integrity_violation_is_internal_server_error() {
        let broken = Attachment {
            id: Uuid::from_u128(77),
            name: "report".into(),
            media_type: "application/pdf".into(),
        };
        let store = InMemoryStore::without_integrity_check(
            vec![],
            vec![broken.clone()],
            vec![(broken.id, JOHN_DOE_ID)],
        )
        .unwrap();
        let app = TestApp::with_store(Arc::new(store));

        let (status, body) = app.get_json(&format!("/attachments/{}", broken.id)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");

        let (status, _) = app.get_json("/attachments/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn openapi_document_lists_resource_paths() {
        let (status, doc) = TestApp::seeded().get_json("/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/patients/{id}"));
        assert!(paths.contains_key("/attachments/"));
    }
}
