use thiserror::Error;

/// フィルタサービスの統合エラー型
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("encode failed: {0}")]
    EncodeFailed(String),
}

/// デモ画像の書き出しエラー
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: image::ImageError,
    },
}
