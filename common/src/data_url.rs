//! Data URLユーティリティ
//!
//! キャプチャ画像は "data:image/jpeg;base64,..." 形式で送信される

use base64::Engine;

/// Data URLからBase64データ部分を抽出
///
/// 抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// 抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// デコード後のペイロードサイズ（バイト数）
///
/// Base64としてデコードできない場合はNone。診断ログ用
pub fn decoded_len(data_url: &str) -> Option<usize> {
    let payload = extract_base64_from_data_url(data_url)?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()
        .map(|bytes| bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base64_from_data_url_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(extract_base64_from_data_url(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_extract_base64_from_data_url_invalid() {
        assert_eq!(extract_base64_from_data_url("not a data url"), None);
        assert_eq!(extract_base64_from_data_url(""), None);
    }

    #[test]
    fn test_extract_mime_type_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(extract_mime_type_from_data_url(data_url), "image/jpeg");
    }

    #[test]
    fn test_extract_mime_type_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_mime_type_from_data_url(data_url), "image/png");
    }

    #[test]
    fn test_extract_mime_type_default() {
        // 不正なフォーマットの場合はデフォルト値を返す
        assert_eq!(extract_mime_type_from_data_url("invalid"), "image/jpeg");
    }

    #[test]
    fn test_decoded_len() {
        // "hello" -> aGVsbG8=
        let data_url = "data:image/jpeg;base64,aGVsbG8=";
        assert_eq!(decoded_len(data_url), Some(5));
    }

    #[test]
    fn test_decoded_len_invalid_base64() {
        assert_eq!(decoded_len("data:image/jpeg;base64,@@@@"), None);
        assert_eq!(decoded_len("no comma"), None);
    }
}
