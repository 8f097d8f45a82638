//! APIリクエスト/レスポンスの型定義
//!
//! 4つの固定エンドポイントとやり取りするワイヤ型:
//! - VoterIdentity: POST /api/login-user のボディ兼セッション保持用
//! - Party: GET /api/parties の要素
//! - VoteRequest/VoteResponse: POST /api/verify-and-vote
//! - AdminLoginRequest/StatusResponse: POST /api/admin/login
//! - AdminSummary: GET /api/admin/summary

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ログイン済み有権者の申告アイデンティティ
///
/// ログインリクエストのボディそのものでもある（name, aadhar）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterIdentity {
    pub name: String,
    pub aadhar: String,
}

/// 政党の表示レコード（サーバ由来、ローカルでは生成しない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub logo: String,
}

/// success/message 形式の共通レスポンス
///
/// login-user と admin/login が返す
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// 投票リクエスト。imageはJPEGのData URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRequest {
    pub name: String,
    pub aadhar: String,
    pub party: String,
    pub image: String,
}

/// 投票レスポンス
///
/// UIはmessageのみ表示し、成功フラグでは分岐しない
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteResponse {
    pub message: Option<String>,
}

/// 管理者ログインリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// 管理者サマリ
///
/// previous/upcomingは任意のJSON。liveは欠けることがある
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSummary {
    pub previous: Value,
    pub upcoming: Value,
    pub live: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voter_identity_serialize() {
        let voter = VoterIdentity {
            name: "Asha".to_string(),
            aadhar: "123456789012".to_string(),
        };
        let json = serde_json::to_string(&voter).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"name":"Asha","aadhar":"123456789012"}"#);
    }

    #[test]
    fn test_party_deserialize() {
        let json = r#"[{"name":"BRS","logo":"🚗 Car"},{"name":"INC","logo":"✋ Hand"}]"#;
        let parties: Vec<Party> = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(parties.len(), 2);
        assert_eq!(parties[0].name, "BRS");
        assert_eq!(parties[1].logo, "✋ Hand");
    }

    #[test]
    fn test_status_response_defaults() {
        // 空オブジェクトは失敗・メッセージなしとして読む
        let res: StatusResponse = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(!res.success);
        assert!(res.message.is_none());
    }

    #[test]
    fn test_status_response_with_message() {
        let json = r#"{"success":false,"message":"Not found in voter list"}"#;
        let res: StatusResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(!res.success);
        assert_eq!(res.message.as_deref(), Some("Not found in voter list"));
    }

    #[test]
    fn test_status_response_ignores_extra_fields() {
        // admin/loginは成功時にnameを返すがクライアントは使わない
        let json = r#"{"success":true,"name":"Officer"}"#;
        let res: StatusResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(res.success);
    }

    #[test]
    fn test_vote_request_serialize() {
        let req = VoteRequest {
            name: "Asha".to_string(),
            aadhar: "123456789012".to_string(),
            party: "INC".to_string(),
            image: "data:image/jpeg;base64,/9j/4AAQ".to_string(),
        };
        let json = serde_json::to_string(&req).expect("シリアライズ失敗");
        assert!(json.contains(r#""party":"INC""#));
        assert!(json.contains(r#""image":"data:image/jpeg;base64,"#));
    }

    #[test]
    fn test_vote_response_without_message() {
        // 成功フラグやtallyが付いていてもmessageだけを読む
        let json = r#"{"success":true,"tally":{"INC":1}}"#;
        let res: VoteResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(res.message.is_none());
    }

    #[test]
    fn test_admin_summary_missing_live() {
        let json = r#"{"previous":[],"upcoming":[]}"#;
        let summary: AdminSummary = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(summary.previous.is_array());
        assert!(summary.live.is_none());
    }

    #[test]
    fn test_admin_summary_full() {
        let json = r#"{
            "previous": [{"year": 2018, "winner": "TRS/BRS"}],
            "upcoming": [{"year": 2028, "type": "Assembly Elections"}],
            "live": {"INC": 3}
        }"#;
        let summary: AdminSummary = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(summary.previous[0]["winner"], "TRS/BRS");
        assert_eq!(summary.live.unwrap()["INC"], 3);
    }
}
