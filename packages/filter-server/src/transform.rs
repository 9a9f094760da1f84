use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use filter_core::Processed;

use crate::handler::AppError;

/// 画像変換をブロッキングスレッドで実行する。
///
/// 変換は CPU バウンドなので、非同期ランタイムのワーカーを塞がないようにする。
pub async fn run(input: Bytes, mode: String) -> Result<Processed, AppError> {
    let result = tokio::task::spawn_blocking(move || filter_core::process(&input, &mode))
        .await
        .map_err(|e| AppError::Internal(format!("transform task failed: {e}")))?;

    Ok(result?)
}

/// 変換結果を `data:image/png;base64,...` 形式の文字列にする
pub fn to_data_uri(processed: &Processed) -> String {
    format!(
        "data:{};base64,{}",
        processed.content_type(),
        STANDARD.encode(&processed.bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_core::{encode_png, Mode};
    use image::DynamicImage;

    #[tokio::test]
    async fn test_run_processes_image() {
        let input = encode_png(&DynamicImage::new_rgb8(9, 4)).unwrap();
        let processed = run(Bytes::from(input), "edge".to_string()).await.unwrap();

        assert_eq!(processed.mode, Mode::Edge);
        assert_eq!((processed.width, processed.height), (9, 4));
    }

    #[tokio::test]
    async fn test_run_decode_failure() {
        let result = run(Bytes::from_static(b"nope"), "blur".to_string()).await;
        assert!(matches!(result, Err(AppError::ProcessingFailed(_))));
    }

    #[test]
    fn test_data_uri() {
        let processed = Processed {
            bytes: vec![1, 2, 3],
            mode: Mode::Grayscale,
            width: 1,
            height: 1,
        };
        assert_eq!(to_data_uri(&processed), "data:image/png;base64,AQID");
    }
}
