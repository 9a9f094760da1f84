/// モード未指定・未知のモード時に適用するモード名
pub const DEFAULT_MODE_NAME: &str = "grayscale";

/// ぼかし（ガウシアン）の標準偏差
pub const BLUR_SIGMA: f32 = 1.5;

/// シャープ化カーネル（合計 16 で正規化される）
pub const SHARPEN_KERNEL: [f32; 9] = [-2.0, -2.0, -2.0, -2.0, 32.0, -2.0, -2.0, -2.0, -2.0];

/// エッジ検出カーネル（ラプラシアン、合計 0）
pub const EDGE_KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0];

/// 明るさの倍率
pub const BRIGHTNESS_FACTOR: f32 = 1.3;

/// コントラストの倍率
pub const CONTRAST_FACTOR: f32 = 1.2;

/// セピアの緑チャンネル係数
pub const SEPIA_GREEN: f32 = 0.8;

/// セピアの青チャンネル係数
pub const SEPIA_BLUE: f32 = 0.6;

/// 出力の Content-Type（常に PNG）
pub const OUTPUT_CONTENT_TYPE: &str = "image/png";
