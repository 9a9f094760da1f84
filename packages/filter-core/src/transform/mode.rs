use std::fmt;

use crate::constants::DEFAULT_MODE_NAME;

/// 処理モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Grayscale,
    Blur,
    Sharpen,
    Edge,
    Sepia,
    Brightness,
    Contrast,
}

impl Mode {
    /// 未知のモードに対するフォールバック先
    pub const DEFAULT: Self = Self::Grayscale;

    /// サポートする全モード
    pub const ALL: [Self; 7] = [
        Self::Grayscale,
        Self::Blur,
        Self::Sharpen,
        Self::Edge,
        Self::Sepia,
        Self::Brightness,
        Self::Contrast,
    ];

    /// 文字列から Mode を作成（完全一致のみ）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "grayscale" => Some(Self::Grayscale),
            "blur" => Some(Self::Blur),
            "sharpen" => Some(Self::Sharpen),
            "edge" => Some(Self::Edge),
            "sepia" => Some(Self::Sepia),
            "brightness" => Some(Self::Brightness),
            "contrast" => Some(Self::Contrast),
            _ => None,
        }
    }

    /// 文字列から Mode を作成する。未知の値は grayscale として扱う（エラーにしない）
    pub fn parse(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::DEFAULT)
    }

    /// API 上のモード名
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grayscale => DEFAULT_MODE_NAME,
            Self::Blur => "blur",
            Self::Sharpen => "sharpen",
            Self::Edge => "edge",
            Self::Sepia => "sepia",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("grayscale"), Some(Mode::Grayscale));
        assert_eq!(Mode::from_str("blur"), Some(Mode::Blur));
        assert_eq!(Mode::from_str("sharpen"), Some(Mode::Sharpen));
        assert_eq!(Mode::from_str("edge"), Some(Mode::Edge));
        assert_eq!(Mode::from_str("sepia"), Some(Mode::Sepia));
        assert_eq!(Mode::from_str("brightness"), Some(Mode::Brightness));
        assert_eq!(Mode::from_str("contrast"), Some(Mode::Contrast));
        assert_eq!(Mode::from_str("unknown"), None);
        // 大文字小文字は区別する
        assert_eq!(Mode::from_str("Sepia"), None);
    }

    #[test]
    fn test_mode_parse_falls_back_to_grayscale() {
        assert_eq!(Mode::parse("not_a_real_filter"), Mode::Grayscale);
        assert_eq!(Mode::parse(""), Mode::Grayscale);
        assert_eq!(Mode::parse("edge"), Mode::Edge);
    }

    #[test]
    fn test_as_str_matches_from_str() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }
}
