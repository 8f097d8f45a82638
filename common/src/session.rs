//! セッション状態
//!
//! ページ存続期間のみ保持される。リロードで消え、タブ間でも共有されない

use thiserror::Error;

use crate::types::VoterIdentity;

/// 投票前ゲートの失敗理由
///
/// メッセージはそのままverifyResultに表示される。
/// あくまでクライアント側の補助チェックであり、最終判定はサーバ側
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteGateError {
    #[error("Please log in first.")]
    NotLoggedIn,

    #[error("Entered details do not match your login.")]
    DetailsMismatch,

    #[error("Please select a party first.")]
    NoPartySelected,
}

/// 認証済み有権者と選択政党を保持するセッション状態
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    voter: Option<VoterIdentity>,
    selected_party: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ログイン成功時に呼ぶ。前回の選択政党は破棄する
    pub fn login(&mut self, voter: VoterIdentity) {
        self.voter = Some(voter);
        self.selected_party = None;
    }

    pub fn voter(&self) -> Option<&VoterIdentity> {
        self.voter.as_ref()
    }

    pub fn select_party(&mut self, party: &str) {
        self.selected_party = Some(party.to_string());
    }

    pub fn selected_party(&self) -> Option<&str> {
        self.selected_party.as_deref()
    }

    /// 投票前のクライアント側ゲート
    ///
    /// 入力された氏名とAadhaarがログイン時の値と文字列として
    /// 完全一致し、政党が選択済みであることを確認する
    pub fn check_vote_entry(&self, name: &str, aadhar: &str) -> std::result::Result<(), VoteGateError> {
        let voter = self.voter.as_ref().ok_or(VoteGateError::NotLoggedIn)?;
        if name != voter.name || aadhar != voter.aadhar {
            return Err(VoteGateError::DetailsMismatch);
        }
        if self.selected_party.is_none() {
            return Err(VoteGateError::NoPartySelected);
        }
        Ok(())
    }
}
