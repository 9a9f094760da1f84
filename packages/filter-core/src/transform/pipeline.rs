use crate::constants::OUTPUT_CONTENT_TYPE;
use crate::errors::TransformError;
use crate::transform::{apply, decode_image, encode_png, normalize, Mode};

/// 変換結果
#[derive(Debug, Clone)]
pub struct Processed {
    /// PNG エンコード済みのバイト列
    pub bytes: Vec<u8>,
    /// 実際に適用したモード（未知のモードは grayscale になる）
    pub mode: Mode,
    pub width: u32,
    pub height: u32,
}

impl Processed {
    /// Content-Type を取得
    pub fn content_type(&self) -> &'static str {
        OUTPUT_CONTENT_TYPE
    }
}

/// 画像バイト列にモード名で指定されたフィルタを適用する。
///
/// 未知のモード名はエラーにせず grayscale として処理する。
/// 入力バイト列は変更せず、常に新しい PNG バイト列を返す。
pub fn process(input: &[u8], mode: &str) -> Result<Processed, TransformError> {
    process_with_mode(input, Mode::parse(mode))
}

/// デコード → フィルタ → PNG エンコード
pub fn process_with_mode(input: &[u8], mode: Mode) -> Result<Processed, TransformError> {
    let (img, source_format) = decode_image(input)?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        format = ?source_format,
        mode = %mode,
        "decoded image"
    );

    let filtered = apply(&normalize(img), mode);
    let bytes = encode_png(&filtered)?;

    Ok(Processed {
        bytes,
        mode,
        width: filtered.width(),
        height: filtered.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

    /// 黄色のストライプ入りの青い画像
    fn striped_png(w: u32, h: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(w, h, |x, y| {
            if (x + y) % 20 < 10 {
                Rgb([255, 255, 0])
            } else {
                Rgb([0, 0, 255])
            }
        });
        encode_png(&DynamicImage::ImageRgb8(img)).unwrap()
    }

    fn decode(bytes: &[u8]) -> DynamicImage {
        image::load_from_memory(bytes).unwrap()
    }

    #[test]
    fn test_all_modes_preserve_dimensions() {
        let input = striped_png(64, 48);
        for mode in Mode::ALL {
            let processed = process(&input, mode.as_str()).unwrap();
            assert_eq!(processed.mode, mode);

            let output = decode(&processed.bytes);
            assert_eq!((output.width(), output.height()), (64, 48), "mode {mode}");
            assert_eq!((processed.width, processed.height), (64, 48));
        }
    }

    #[test]
    fn test_output_is_png() {
        let processed = process(&striped_png(8, 8), "blur").unwrap();
        assert_eq!(&processed.bytes[0..4], &[0x89, b'P', b'N', b'G']);
        assert_eq!(processed.content_type(), "image/png");
    }

    #[test]
    fn test_invalid_input_is_error() {
        for mode in ["grayscale", "sepia", "whatever"] {
            assert!(process(b"", mode).is_err());
            assert!(process(b"GIF89a but not really", mode).is_err());
            assert!(process(&[0u8; 64], mode).is_err());
        }
    }

    #[test]
    fn test_unknown_mode_matches_grayscale() {
        let input = striped_png(32, 32);
        let fallback = process(&input, "not_a_real_filter").unwrap();
        let grayscale = process(&input, "grayscale").unwrap();

        assert_eq!(fallback.mode, Mode::Grayscale);
        assert_eq!(fallback.bytes, grayscale.bytes);
    }

    #[test]
    fn test_grayscale_is_idempotent() {
        let once = process(&striped_png(40, 30), "grayscale").unwrap();
        let twice = process(&once.bytes, "grayscale").unwrap();

        assert_eq!(
            decode(&once.bytes).to_luma8(),
            decode(&twice.bytes).to_luma8()
        );
    }

    #[test]
    fn test_sepia_on_solid_blue() {
        let blue = RgbImage::from_pixel(200, 200, Rgb([0, 0, 255]));
        let input = encode_png(&DynamicImage::ImageRgb8(blue)).unwrap();

        let processed = process(&input, "sepia").unwrap();
        let output = decode(&processed.bytes).to_rgb8();

        assert_eq!(output.dimensions(), (200, 200));
        assert!(output.pixels().all(|p| p.0 == [29, 23, 17]));
    }

    #[test]
    fn test_round_trip_dimensions() {
        let input = striped_png(33, 17);
        for mode in Mode::ALL {
            let first = process(&input, mode.as_str()).unwrap();
            let second = encode_png(&decode(&first.bytes)).unwrap();
            let reread = decode(&second);
            assert_eq!((reread.width(), reread.height()), (first.width, first.height));
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = striped_png(16, 16);
        let copy = input.clone();
        for mode in Mode::ALL {
            process(&input, mode.as_str()).unwrap();
        }
        assert_eq!(input, copy);
    }

    #[test]
    fn test_alpha_survives_color_filters() {
        let img = RgbaImage::from_pixel(6, 6, Rgba([200, 100, 50, 128]));
        let input = encode_png(&DynamicImage::ImageRgba8(img)).unwrap();

        for mode in [Mode::Blur, Mode::Sharpen, Mode::Edge, Mode::Brightness, Mode::Contrast] {
            let output = decode(&process_with_mode(&input, mode).unwrap().bytes);
            assert!(output.color().has_alpha(), "mode {mode}");
        }
        for mode in [Mode::Grayscale, Mode::Sepia] {
            let output = decode(&process_with_mode(&input, mode).unwrap().bytes);
            assert!(!output.color().has_alpha(), "mode {mode}");
        }
    }

    #[test]
    fn test_jpeg_input() {
        let mut buf = std::io::Cursor::new(Vec::new());
        DynamicImage::new_rgb8(20, 10)
            .write_to(&mut buf, image::ImageFormat::Jpeg)
            .unwrap();

        let processed = process(buf.get_ref(), "edge").unwrap();
        assert_eq!((processed.width, processed.height), (20, 10));
    }
}
