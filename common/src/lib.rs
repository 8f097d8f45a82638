//! Voting Kiosk Common Library
//!
//! フロントエンド(WASM)から利用される型とユーティリティ

pub mod types;
pub mod validation;
pub mod session;
pub mod summary;
pub mod data_url;
pub mod error;

pub use types::{AdminLoginRequest, AdminSummary, Party, StatusResponse, VoteRequest, VoteResponse, VoterIdentity};
pub use validation::validate_credentials;
pub use session::{SessionState, VoteGateError};
pub use summary::format_summary;
pub use data_url::{extract_base64_from_data_url, extract_mime_type_from_data_url};
pub use error::{Error, Result};
