//! バックエンドAPIゲートウェイ
//!
//! 同一オリジンの固定エンドポイントへJSONリクエストを送る。
//! 管理者向けエンドポイントはadminサブモジュール

pub mod admin;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use kiosk_common::{Party, StatusResponse, VoteRequest, VoteResponse, VoterIdentity};

const LOGIN_USER_URL: &str = "/api/login-user";
const PARTIES_URL: &str = "/api/parties";
const VERIFY_AND_VOTE_URL: &str = "/api/verify-and-vote";

/// JSONリクエストを送り、レスポンスボディをデシリアライズして返す
///
/// HTTPステータスでは分岐しない。JSONとして読めるボディは
/// すべて呼び出し側へ返す
pub(crate) async fn request_json<R>(url: &str, method: &str, body: Option<String>) -> Result<R, JsValue>
where
    R: serde::de::DeserializeOwned,
{
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub(crate) fn to_body<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// 有権者ログイン
pub async fn login_user(voter: &VoterIdentity) -> Result<StatusResponse, JsValue> {
    request_json(LOGIN_USER_URL, "POST", Some(to_body(voter)?)).await
}

/// 政党一覧の取得
pub async fn fetch_parties() -> Result<Vec<Party>, JsValue> {
    request_json(PARTIES_URL, "GET", None).await
}

/// 本人確認と投票
pub async fn verify_and_vote(request: &VoteRequest) -> Result<VoteResponse, JsValue> {
    request_json(VERIFY_AND_VOTE_URL, "POST", Some(to_body(request)?)).await
}
