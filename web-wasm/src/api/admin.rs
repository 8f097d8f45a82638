//! 管理者APIゲートウェイ

use wasm_bindgen::prelude::*;

use kiosk_common::{AdminLoginRequest, AdminSummary, StatusResponse};

use super::{request_json, to_body};

const ADMIN_LOGIN_URL: &str = "/api/admin/login";
const ADMIN_SUMMARY_URL: &str = "/api/admin/summary";

/// 管理者ログイン
///
/// クライアント側のバリデーションはない。入力はトリムして
/// そのまま送り、判定はすべてサーバ側
pub async fn login(username: &str, password: &str) -> Result<StatusResponse, JsValue> {
    let body = to_body(&AdminLoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })?;
    request_json(ADMIN_LOGIN_URL, "POST", Some(body)).await
}

/// 選挙サマリの取得
pub async fn fetch_summary() -> Result<AdminSummary, JsValue> {
    request_json(ADMIN_SUMMARY_URL, "GET", None).await
}
