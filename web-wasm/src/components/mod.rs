//! UIコンポーネント
//!
//! 6つのセクションそれぞれを1コンポーネントとし、
//! ナビゲーションバーを加えた構成

pub mod nav;
pub mod home;
pub mod user_login;
pub mod party_table;
pub mod camera;
pub mod admin_login;
pub mod admin_dashboard;

/// ブロッキングアラート表示
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
