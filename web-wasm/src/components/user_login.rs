//! 有権者ログインコンポーネント
//!
//! 入力検証 -> POST /api/login-user -> 政党一覧の取得 -> 政党選択画面へ

use leptos::prelude::*;
use leptos::task::spawn_local;

use kiosk_common::{validate_credentials, Party, SessionState};

use crate::api;
use crate::app::Section;
use crate::components::alert;
use crate::components::party_table::load_parties;

#[component]
pub fn UserLogin<F>(
    section: ReadSignal<Section>,
    session: RwSignal<SessionState>,
    parties: RwSignal<Vec<Party>>,
    parties_loading: RwSignal<bool>,
    nav_epoch: RwSignal<u64>,
    show: F,
) -> impl IntoView
where
    F: Fn(Section) + Clone + 'static,
{
    let (name, set_name) = signal(String::new());
    let (aadhar, set_aadhar) = signal(String::new());

    let on_login = move |_| {
        // 検証に通らない限りリクエストは送らない
        let voter = match validate_credentials(&name.get_untracked(), &aadhar.get_untracked()) {
            Ok(voter) => voter,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let show = show.clone();
        let epoch = nav_epoch.get_untracked();
        spawn_local(async move {
            let res = match api::login_user(&voter).await {
                Ok(res) => res,
                Err(e) => {
                    gloo::console::error!(format!("login request failed: {e:?}"));
                    return;
                }
            };
            if nav_epoch.get_untracked() != epoch {
                return; // 別画面へ遷移済みなら結果を破棄
            }
            if !res.success {
                alert(res.message.as_deref().unwrap_or("Login failed"));
                return;
            }

            session.update(|s| s.login(voter.clone()));
            load_parties(parties, parties_loading).await;
            if nav_epoch.get_untracked() != epoch {
                return;
            }
            show(Section::PartySection);
        });
    };

    view! {
        <section
            id="userLogin"
            class="section"
            class:hidden=move || section.get() != Section::UserLogin
        >
            <h2>"Voter Login"</h2>
            <div class="form-group">
                <label for="userName">"Name"</label>
                <input
                    type="text"
                    id="userName"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                    }
                />
            </div>
            <div class="form-group">
                <label for="userAadhar">"Aadhaar"</label>
                <input
                    type="text"
                    id="userAadhar"
                    placeholder="12-digit Aadhaar"
                    maxlength="12"
                    prop:value=move || aadhar.get()
                    on:input=move |ev| {
                        set_aadhar.set(event_target_value(&ev));
                    }
                />
            </div>
            <button id="userLoginBtn" class="btn btn-primary" on:click=on_login>
                "Login"
            </button>
        </section>
    }
}
