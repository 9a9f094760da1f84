//! モードごとのフィルタ実装
//!
//! 入力は `decode::normalize` 済み（Luma8 / Rgb8 / Rgba8）を前提とする。
//! アルファチャンネルはフィルタの対象外で、元の値をそのまま引き継ぐ。

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::filter::gaussian_blur_f32;

use crate::constants::{
    BLUR_SIGMA, BRIGHTNESS_FACTOR, CONTRAST_FACTOR, EDGE_KERNEL, SEPIA_BLUE, SEPIA_GREEN,
    SHARPEN_KERNEL,
};
use crate::transform::mode::Mode;

/// モードに応じたフィルタを適用し、新しい画像を返す（入力は変更しない）
pub fn apply(img: &DynamicImage, mode: Mode) -> DynamicImage {
    match mode {
        Mode::Grayscale => grayscale(img),
        Mode::Blur => blur(img),
        Mode::Sharpen => sharpen(img),
        Mode::Edge => edge(img),
        Mode::Sepia => sepia(img),
        Mode::Brightness => brightness(img),
        Mode::Contrast => contrast(img),
    }
}

/// ITU-R BT.601 の輝度（固定小数点、0x8000 で四捨五入）
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + 0x8000) >> 16) as u8
}

/// 1 チャンネルの輝度画像に変換する
pub fn to_gray(img: &DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => {
            let rgb = other.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([luma(r, g, b)])
            })
        }
    }
}

pub fn grayscale(img: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(to_gray(img))
}

pub fn blur(img: &DynamicImage) -> DynamicImage {
    per_channel(
        img,
        |gray| gaussian_blur_f32(gray, BLUR_SIGMA),
        |rgb| gaussian_blur_f32(rgb, BLUR_SIGMA),
    )
}

pub fn sharpen(img: &DynamicImage) -> DynamicImage {
    per_channel(
        img,
        |gray| convolve3x3(gray, &SHARPEN_KERNEL),
        |rgb| convolve3x3(rgb, &SHARPEN_KERNEL),
    )
}

pub fn edge(img: &DynamicImage) -> DynamicImage {
    per_channel(
        img,
        |gray| convolve3x3(gray, &EDGE_KERNEL),
        |rgb| convolve3x3(rgb, &EDGE_KERNEL),
    )
}

/// 輝度 g から (g, 0.8g, 0.6g) への写像
pub fn sepia_tone(g: u8) -> [u8; 3] {
    let scale = |factor: f32| (g as f32 * factor).round().min(255.0) as u8;
    [g, scale(SEPIA_GREEN), scale(SEPIA_BLUE)]
}

/// セピア調（常に 3 チャンネル RGB を返す）
pub fn sepia(img: &DynamicImage) -> DynamicImage {
    let gray = to_gray(img);
    let out = RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        Rgb(sepia_tone(gray.get_pixel(x, y)[0]))
    });
    DynamicImage::ImageRgb8(out)
}

pub fn brightness(img: &DynamicImage) -> DynamicImage {
    map_channels(img, |c| clamp_u8(c as f32 * BRIGHTNESS_FACTOR))
}

/// 画像全体の平均輝度を中心にコントラストを強調する
pub fn contrast(img: &DynamicImage) -> DynamicImage {
    let mid = mean_luma(img) as f32;
    map_channels(img, |c| clamp_u8(mid + (c as f32 - mid) * CONTRAST_FACTOR))
}

/// 平均輝度（四捨五入した整数）
pub fn mean_luma(img: &DynamicImage) -> u8 {
    let gray = to_gray(img);
    let count = gray.width() as u64 * gray.height() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = gray.pixels().map(|p| p[0] as u64).sum();
    (sum as f64 / count as f64 + 0.5) as u8
}

// [0, 255] に収めて四捨五入
fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// 3x3 畳み込み。外周 1px は元画像の値をそのままコピーする
fn convolve3x3<P>(src: &ImageBuffer<P, Vec<u8>>, kernel: &[f32; 9]) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let mut out = image::imageops::filter3x3(src, kernel);
    let (w, h) = src.dimensions();
    for (x, y, pixel) in src.enumerate_pixels() {
        if x == 0 || y == 0 || x + 1 == w || y + 1 == h {
            out.put_pixel(x, y, *pixel);
        }
    }
    out
}

/// グレー画像とカラー画像それぞれにフィルタを振り分ける。
/// RGBA の場合は RGB 部分のみ処理し、アルファを戻す。
fn per_channel<G, C>(img: &DynamicImage, gray: G, color: C) -> DynamicImage
where
    G: Fn(&GrayImage) -> GrayImage,
    C: Fn(&RgbImage) -> RgbImage,
{
    match img {
        DynamicImage::ImageLuma8(g) => DynamicImage::ImageLuma8(gray(g)),
        DynamicImage::ImageRgba8(rgba) => {
            let filtered = color(&img.to_rgb8());
            DynamicImage::ImageRgba8(with_alpha(&filtered, rgba))
        }
        other => DynamicImage::ImageRgb8(color(&other.to_rgb8())),
    }
}

fn with_alpha(rgb: &RgbImage, alpha_src: &RgbaImage) -> RgbaImage {
    RgbaImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Rgba([r, g, b, alpha_src.get_pixel(x, y)[3]])
    })
}

/// 色チャンネルごとの値変換（256 要素のテーブル経由）
fn map_channels<F>(img: &DynamicImage, f: F) -> DynamicImage
where
    F: Fn(u8) -> u8,
{
    let lut: [u8; 256] = std::array::from_fn(|v| f(v as u8));

    match img {
        DynamicImage::ImageLuma8(gray) => {
            let mut out = gray.clone();
            for p in out.pixels_mut() {
                p[0] = lut[p[0] as usize];
            }
            DynamicImage::ImageLuma8(out)
        }
        DynamicImage::ImageRgba8(rgba) => {
            let mut out = rgba.clone();
            for p in out.pixels_mut() {
                for c in &mut p.0[..3] {
                    *c = lut[*c as usize];
                }
            }
            DynamicImage::ImageRgba8(out)
        }
        other => {
            let mut out = other.to_rgb8();
            for p in out.pixels_mut() {
                for c in p.0.iter_mut() {
                    *c = lut[*c as usize];
                }
            }
            DynamicImage::ImageRgb8(out)
        }
    }
}
