//! 政党選択テーブルコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;

use kiosk_common::{Party, SessionState};

use crate::api;
use crate::app::Section;
use crate::capture;
use crate::components::alert;

/// 政党一覧を取得してテーブルを差し替える
///
/// 取得中はLoading行を表示する。失敗時はLoading行のまま
/// （コンソールにのみ記録する）
pub async fn load_parties(parties: RwSignal<Vec<Party>>, loading: RwSignal<bool>) {
    loading.set(true);
    match api::fetch_parties().await {
        Ok(list) => {
            parties.set(list);
            loading.set(false);
        }
        Err(e) => {
            gloo::console::error!(format!("party list request failed: {e:?}"));
        }
    }
}

#[component]
pub fn PartySection<F>(
    section: ReadSignal<Section>,
    session: RwSignal<SessionState>,
    parties: RwSignal<Vec<Party>>,
    parties_loading: RwSignal<bool>,
    verify_name: RwSignal<String>,
    verify_aadhar: RwSignal<String>,
    show: F,
) -> impl IntoView
where
    F: Fn(Section) + Copy + Send + Sync + 'static,
{
    let on_select = move |party_name: String| {
        session.update(|s| s.select_party(&party_name));

        // カメラはここで起動しておく（画面表示と並行して許可を取る）
        spawn_local(async {
            if let Err(e) = capture::start_camera().await {
                gloo::console::error!(format!("camera error: {e:?}"));
                alert("Unable to access camera. Please allow camera permission.");
            }
        });

        // ログイン時の値を検証フィールドへプリフィル
        let state = session.get_untracked();
        if let Some(voter) = state.voter() {
            verify_name.set(voter.name.clone());
            verify_aadhar.set(voter.aadhar.clone());
        }
        show(Section::CameraSection);
    };

    view! {
        <section
            id="partySection"
            class="section"
            class:hidden=move || section.get() != Section::PartySection
        >
            <h2>"Select Your Party"</h2>
            <table class="party-table">
                <thead>
                    <tr>
                        <th>"Party"</th>
                        <th>"Symbol"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="partyTableBody">
                    <Show
                        when=move || !parties_loading.get()
                        fallback=|| view! { <tr><td colspan="3">"Loading..."</td></tr> }
                    >
                        <For
                            each=move || parties.get()
                            key=|party| party.name.clone()
                            children=move |party: Party| {
                                let party_name = party.name.clone();
                                view! {
                                    <tr>
                                        <td>{party.name.clone()}</td>
                                        <td>{party.logo.clone()}</td>
                                        <td>
                                            <button
                                                class="btn btn-small"
                                                data-party=party.name.clone()
                                                on:click=move |_| on_select(party_name.clone())
                                            >
                                                "Select"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </section>
    }
}
