use crate::errors::TransformError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// 画像バイト列をデコードし、DynamicImage と元のフォーマットを返す
///
/// フォーマットはマジックナンバーから推測する。空のバイト列や
/// 判別できないデータは DecodeFailed になる。
pub fn decode_image(input: &[u8]) -> Result<(DynamicImage, Option<ImageFormat>), TransformError> {
    if input.is_empty() {
        return Err(TransformError::DecodeFailed("empty input".to_string()));
    }

    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::DecodeFailed(format!("failed to guess format: {e}")))?;

    let source_format = reader.format();

    let img = reader
        .decode()
        .map_err(|e| TransformError::DecodeFailed(e.to_string()))?;

    Ok((img, source_format))
}

/// フィルタ処理用のピクセル形式に正規化する
///
/// 8bit グレースケールはそのまま、アルファ付きは RGBA8、それ以外は RGB8。
pub fn normalize(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => {
            img
        }
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
