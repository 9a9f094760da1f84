//! フィルタ比較用のデモ画像
//!
//! すべて決定的に生成されるため、テストの入力としても使える。

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut,
};
use imageproc::rect::Rect;

use crate::errors::DemoError;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);
const GREEN: Rgb<u8> = Rgb([0, 128, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);

/// 輪郭線の太さ（px）
const OUTLINE_WIDTH: i32 = 3;

/// デモ画像 1 枚
#[derive(Debug, Clone)]
pub struct DemoImage {
    pub file_name: &'static str,
    pub description: &'static str,
    pub image: DynamicImage,
}

/// すべてのデモ画像を生成する
pub fn demo_images() -> Vec<DemoImage> {
    vec![
        DemoImage {
            file_name: "colored_squares.png",
            description: "good for filter comparison",
            image: DynamicImage::ImageRgb8(colored_squares()),
        },
        DemoImage {
            file_name: "gradient.png",
            description: "good for blur/sharpen effects",
            image: DynamicImage::ImageRgb8(gradient()),
        },
        DemoImage {
            file_name: "checkerboard.png",
            description: "good for edge detection",
            image: DynamicImage::ImageRgb8(checkerboard()),
        },
        DemoImage {
            file_name: "shapes_demo.png",
            description: "good for outline processing",
            image: DynamicImage::ImageRgb8(shapes()),
        },
        DemoImage {
            file_name: "high_contrast.png",
            description: "good for all filters",
            image: DynamicImage::ImageRgb8(high_contrast()),
        },
    ]
}

/// デモ画像を PNG としてディレクトリに書き出す
pub fn write_demo_images(dir: &Path) -> Result<Vec<PathBuf>, DemoError> {
    std::fs::create_dir_all(dir).map_err(|source| DemoError::CreateDir {
        path: dir.display().to_string(),
        source,
    })?;

    let mut written = Vec::new();
    for demo in demo_images() {
        let path = dir.join(demo.file_name);
        demo.image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| DemoError::Save {
                path: path.display().to_string(),
                source,
            })?;
        tracing::info!(path = %path.display(), description = demo.description, "demo image written");
        written.push(path);
    }

    Ok(written)
}

/// 400x400 を 4 色の正方形で塗り分ける
fn colored_squares() -> RgbImage {
    let mut img = RgbImage::from_pixel(400, 400, WHITE);
    for (i, color) in [RED, GREEN, BLUE, YELLOW].into_iter().enumerate() {
        let x = (i % 2) as i32 * 200;
        let y = (i / 2) as i32 * 200;
        draw_filled_rect_mut(&mut img, Rect::at(x, y).of_size(200, 200), color);
    }
    img
}

fn gradient() -> RgbImage {
    let (w, h) = (400u32, 300u32);
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([
            (255 * x / w) as u8,
            (255 * y / h) as u8,
            (255 * (x + y) / (w + h)) as u8,
        ])
    })
}

/// 40px マスの市松模様
fn checkerboard() -> RgbImage {
    RgbImage::from_fn(400, 400, |x, y| {
        if (x / 40 + y / 40) % 2 == 0 { BLACK } else { WHITE }
    })
}

fn shapes() -> RgbImage {
    let mut img = RgbImage::from_pixel(500, 200, WHITE);
    for offset in 0..OUTLINE_WIDTH {
        draw_hollow_circle_mut(&mut img, (100, 100), 30 - offset, RED);
        draw_hollow_rect_mut(
            &mut img,
            Rect::at(300 + offset, 50 + offset).of_size(
                (150 - 2 * offset) as u32,
                (100 - 2 * offset) as u32,
            ),
            BLUE,
        );
    }
    img
}

/// 黒地に白い図形
fn high_contrast() -> RgbImage {
    let mut img = RgbImage::from_pixel(300, 300, BLACK);
    draw_filled_circle_mut(&mut img, (150, 150), 100, WHITE);
    draw_filled_rect_mut(&mut img, Rect::at(50, 50).of_size(50, 50), WHITE);
    draw_filled_rect_mut(&mut img, Rect::at(200, 200).of_size(50, 50), WHITE);
    img
}
