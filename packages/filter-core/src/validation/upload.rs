use crate::errors::MediaError;

pub const NO_FILE_PROVIDED: &str = "No image file provided";
pub const NO_FILE_SELECTED: &str = "No image file selected";

/// アップロードされたファイルパートを検証する
///
/// `file_name` はファイルパートが無い場合 None。
/// 中身が空でもファイル名があれば通し、デコード側でエラーにする。
pub fn validate_upload(file_name: Option<&str>) -> Result<(), MediaError> {
    match file_name {
        None => Err(MediaError::Validation(NO_FILE_PROVIDED.to_string())),
        Some("") => Err(MediaError::Validation(NO_FILE_SELECTED.to_string())),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_upload() {
        assert!(validate_upload(Some("photo.png")).is_ok());
        assert!(validate_upload(Some("blob")).is_ok());
    }

    #[test]
    fn test_missing_file() {
        match validate_upload(None) {
            Err(MediaError::Validation(msg)) => assert_eq!(msg, NO_FILE_PROVIDED),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_name() {
        match validate_upload(Some("")) {
            Err(MediaError::Validation(msg)) => assert_eq!(msg, NO_FILE_SELECTED),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
