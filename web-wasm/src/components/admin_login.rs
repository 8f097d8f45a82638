//! 管理者ログインコンポーネント
//!
//! POST /api/admin/login -> サマリ取得 -> ダッシュボードへ

use leptos::prelude::*;
use leptos::task::spawn_local;

use kiosk_common::format_summary;

use crate::api;
use crate::app::Section;
use crate::components::alert;

#[component]
pub fn AdminLogin<F>(
    section: ReadSignal<Section>,
    admin_data: RwSignal<String>,
    nav_epoch: RwSignal<u64>,
    show: F,
) -> impl IntoView
where
    F: Fn(Section) + Clone + 'static,
{
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_login = move |_| {
        let show = show.clone();
        let username = username.get_untracked().trim().to_string();
        let password = password.get_untracked().trim().to_string();
        let epoch = nav_epoch.get_untracked();
        spawn_local(async move {
            let res = match api::admin::login(&username, &password).await {
                Ok(res) => res,
                Err(e) => {
                    gloo::console::error!(format!("admin login request failed: {e:?}"));
                    return;
                }
            };
            if nav_epoch.get_untracked() != epoch {
                return;
            }
            if !res.success {
                alert(res.message.as_deref().unwrap_or("Login failed"));
                return;
            }

            let summary = match api::admin::fetch_summary().await {
                Ok(summary) => summary,
                Err(e) => {
                    gloo::console::error!(format!("summary request failed: {e:?}"));
                    return;
                }
            };
            let text = match format_summary(&summary) {
                Ok(text) => text,
                Err(e) => {
                    gloo::console::error!(format!("summary format failed: {e}"));
                    return;
                }
            };
            if nav_epoch.get_untracked() != epoch {
                return;
            }
            admin_data.set(text);
            show(Section::AdminDashboard);
        });
    };

    view! {
        <section
            id="adminLogin"
            class="section"
            class:hidden=move || section.get() != Section::AdminLogin
        >
            <h2>"Admin Login"</h2>
            <div class="form-group">
                <label for="adminUser">"Username"</label>
                <input
                    type="text"
                    id="adminUser"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        set_username.set(event_target_value(&ev));
                    }
                />
            </div>
            <div class="form-group">
                <label for="adminPass">"Password"</label>
                <input
                    type="password"
                    id="adminPass"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                    }
                />
            </div>
            <button id="adminLoginBtn" class="btn btn-primary" on:click=on_login>
                "Login"
            </button>
        </section>
    }
}
