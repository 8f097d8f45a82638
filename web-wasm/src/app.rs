//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use kiosk_common::{Party, SessionState};

use crate::components::{
    admin_dashboard::AdminDashboard,
    admin_login::AdminLogin,
    camera::CameraSection,
    home::Home,
    nav::NavBar,
    party_table::PartySection,
    user_login::UserLogin,
};

/// 表示セクション
///
/// 常にちょうど1つだけが表示される。遷移ガードはなく、
/// どの遷移が起きるかは各ハンドラの呼び出し経路で決まる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    UserLogin,
    PartySection,
    CameraSection,
    AdminLogin,
    AdminDashboard,
}

impl Section {
    /// ナビゲーショントークンからの変換。未知のトークンはNone
    pub fn from_nav(token: &str) -> Option<Self> {
        match token {
            "home" => Some(Section::Home),
            "user" => Some(Section::UserLogin),
            "admin" => Some(Section::AdminLogin),
            _ => None,
        }
    }

    /// DOM上のセクションid
    pub fn dom_id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::UserLogin => "userLogin",
            Section::PartySection => "partySection",
            Section::CameraSection => "cameraSection",
            Section::AdminLogin => "adminLogin",
            Section::AdminDashboard => "adminDashboard",
        }
    }
}

/// メインアプリケーションコンポーネント
///
/// 全状態をここで生成し、ハンドラ経由で子コンポーネントへ渡す。
/// セクションのDOMノードは常駐させ、hiddenクラスの付け外しだけで
/// 表示を切り替える（カメラストリームが遷移をまたいで生き続ける）
#[component]
pub fn App() -> impl IntoView {
    let (section, set_section) = signal(Section::Home);
    // ナビゲーション世代。画面が切り替わった後に届いた
    // リクエスト結果を破棄する判定に使う
    let nav_epoch = RwSignal::new(0u64);

    let session = RwSignal::new(SessionState::new());
    let parties = RwSignal::new(Vec::<Party>::new());
    let parties_loading = RwSignal::new(false);
    let verify_name = RwSignal::new(String::new());
    let verify_aadhar = RwSignal::new(String::new());
    let verify_result = RwSignal::new(String::new());
    let admin_data = RwSignal::new(String::new());

    let show = move |target: Section| {
        nav_epoch.update(|epoch| *epoch += 1);
        set_section.set(target);
    };

    let on_nav = move |token: &'static str| {
        if let Some(target) = Section::from_nav(token) {
            show(target);
        }
    };

    view! {
        <div class="container">
            <NavBar on_nav=on_nav />
            <Home section=section />
            <UserLogin
                section=section
                session=session
                parties=parties
                parties_loading=parties_loading
                nav_epoch=nav_epoch
                show=show
            />
            <PartySection
                section=section
                session=session
                parties=parties
                parties_loading=parties_loading
                verify_name=verify_name
                verify_aadhar=verify_aadhar
                show=show
            />
            <CameraSection
                section=section
                session=session
                verify_name=verify_name
                verify_aadhar=verify_aadhar
                verify_result=verify_result
                nav_epoch=nav_epoch
            />
            <AdminLogin
                section=section
                admin_data=admin_data
                nav_epoch=nav_epoch
                show=show
            />
            <AdminDashboard section=section admin_data=admin_data />
        </div>
    }
}
