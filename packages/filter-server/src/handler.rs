use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::AppState;
use filter_core::{
    validate_upload, MediaError, TransformError, DEFAULT_MODE_NAME, NO_FILE_PROVIDED,
};

const HEALTH_MESSAGE: &str = "Image Processing API is running";
const API_NOT_FOUND: &str = "API endpoint not found";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    pub processed_image: String,
    /// クライアントが送った type をそのまま返す（フォールバック時も補正しない）
    pub process_type: String,
}

/// multipart から取り出したアップロード内容
#[derive(Debug, Default)]
struct Upload {
    file_name: Option<String>,
    data: Bytes,
    process_type: Option<String>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: HEALTH_MESSAGE,
    })
}

pub async fn process_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "request is not multipart");
        AppError::BadRequest(NO_FILE_PROVIDED.to_string())
    })?;

    let upload = read_upload(&mut multipart).await?;
    validate_upload(upload.file_name.as_deref())?;

    let process_type = upload
        .process_type
        .unwrap_or_else(|| DEFAULT_MODE_NAME.to_string());

    tracing::info!(
        file_name = ?upload.file_name,
        bytes = upload.data.len(),
        process_type = %process_type,
        "processing image"
    );

    let processed = crate::transform::run(upload.data, process_type.clone()).await?;

    if processed.mode.as_str() != process_type {
        tracing::info!(
            requested = %process_type,
            applied = %processed.mode,
            "unknown process type, fell back to default"
        );
    }

    Ok(Json(ProcessResponse {
        success: true,
        processed_image: crate::transform::to_data_uri(&processed),
        process_type,
    }))
}

/// `image` ファイルパートと `type` フィールドを読み取る。
/// 同名のパートが複数ある場合は最初のものを使う。
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    let mut upload = Upload::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        let file_name = field.file_name().map(str::to_owned);

        match name.as_deref() {
            // ファイル名の無いパートはファイルとして扱わない
            Some("image") if file_name.is_some() && upload.file_name.is_none() => {
                upload.data = field.bytes().await?;
                upload.file_name = file_name;
            }
            Some("type") if upload.process_type.is_none() => {
                upload.process_type = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(upload)
}

/// API 以外のパスは静的ファイルとして配信する
pub async fn fallback(State(state): State<AppState>, req: Request) -> Response {
    let path = req.uri().path();
    if path == "/api" || path.starts_with("/api/") {
        return AppError::NotFound(API_NOT_FOUND.to_string()).into_response();
    }

    match ServeDir::new(&state.config.static_dir).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    ProcessingFailed(String),
    Internal(String),
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Validation(msg) => {
                tracing::warn!(error = %msg, "validation error");
                AppError::BadRequest(msg)
            }
            MediaError::Transform(transform_err) => transform_err.into(),
        }
    }
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        tracing::error!(error = %err, "image processing failed");
        AppError::ProcessingFailed(err.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        let msg = err.body_text();
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            tracing::warn!(error = %msg, "upload exceeds body limit");
            AppError::PayloadTooLarge(msg)
        } else {
            tracing::warn!(error = %msg, "malformed multipart body");
            AppError::BadRequest(msg)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::ProcessingFailed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
