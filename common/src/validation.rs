//! ログイン入力のバリデーション

use crate::error::{Error, Result};
use crate::types::VoterIdentity;

/// Aadhaar番号の桁数
pub const AADHAAR_LEN: usize = 12;

const INVALID_CREDENTIALS: &str = "Enter valid Name and 12-digit Aadhaar";

/// ログイン入力を検証し、正規化済みのVoterIdentityを返す
///
/// 前後の空白を除去した上で、氏名が空でないことと
/// Aadhaarが12桁の数字であることを確認する。
/// 失敗時のメッセージはそのままアラート表示される
pub fn validate_credentials(name: &str, aadhar: &str) -> Result<VoterIdentity> {
    let name = name.trim();
    let aadhar = aadhar.trim();
    if name.is_empty() || !is_valid_aadhaar(aadhar) {
        return Err(Error::Validation(INVALID_CREDENTIALS.to_string()));
    }
    Ok(VoterIdentity {
        name: name.to_string(),
        aadhar: aadhar.to_string(),
    })
}

/// 12桁の数字のみをAadhaarとして受け付ける
pub fn is_valid_aadhaar(aadhar: &str) -> bool {
    aadhar.len() == AADHAAR_LEN && aadhar.bytes().all(|b| b.is_ascii_digit())
}
