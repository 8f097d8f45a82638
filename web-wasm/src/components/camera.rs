//! カメラ・本人確認セクションコンポーネント
//!
//! ゲート通過 -> フレーム取得 -> POST /api/verify-and-vote -> 結果表示

use leptos::prelude::*;
use leptos::task::spawn_local;

use kiosk_common::{data_url, SessionState, VoteRequest};

use crate::api;
use crate::app::Section;
use crate::capture;

#[component]
pub fn CameraSection(
    section: ReadSignal<Section>,
    session: RwSignal<SessionState>,
    verify_name: RwSignal<String>,
    verify_aadhar: RwSignal<String>,
    verify_result: RwSignal<String>,
    nav_epoch: RwSignal<u64>,
) -> impl IntoView {
    let on_capture = move |_| {
        let name = verify_name.get_untracked().trim().to_string();
        let aadhar = verify_aadhar.get_untracked().trim().to_string();

        let state = session.get_untracked();
        if let Err(gate) = state.check_vote_entry(&name, &aadhar) {
            verify_result.set(gate.to_string());
            return;
        }
        // ゲート通過後はvoterと政党が揃っている
        let Some(voter) = state.voter().cloned() else {
            return;
        };
        let Some(party) = state.selected_party().map(str::to_string) else {
            return;
        };

        let image = match capture::capture_frame() {
            Ok(image) => image,
            Err(e) => {
                gloo::console::error!(format!("frame capture failed: {e:?}"));
                return;
            }
        };
        if let Some(len) = data_url::decoded_len(&image) {
            gloo::console::log!(format!("captured frame: {len} bytes"));
        }

        verify_result.set("Verifying...".to_string());
        let epoch = nav_epoch.get_untracked();
        spawn_local(async move {
            // 送信するのは入力値ではなくセッション側のアイデンティティ
            let request = VoteRequest {
                name: voter.name,
                aadhar: voter.aadhar,
                party,
                image,
            };
            let text = match api::verify_and_vote(&request).await {
                Ok(res) => res.message.unwrap_or_else(|| "Done".to_string()),
                Err(e) => {
                    gloo::console::error!(format!("verify-and-vote failed: {e:?}"));
                    "Error contacting server.".to_string()
                }
            };
            if nav_epoch.get_untracked() != epoch {
                return;
            }
            verify_result.set(text);
        });
    };

    view! {
        <section
            id="cameraSection"
            class="section"
            class:hidden=move || section.get() != Section::CameraSection
        >
            <h2>"Face Verification"</h2>
            <video id="video" autoplay=true width="320" height="240"></video>
            <canvas id="canvas" width="320" height="240" style="display:none"></canvas>
            <div class="form-group">
                <label for="verifyName">"Name"</label>
                <input
                    type="text"
                    id="verifyName"
                    prop:value=move || verify_name.get()
                    on:input=move |ev| {
                        verify_name.set(event_target_value(&ev));
                    }
                />
            </div>
            <div class="form-group">
                <label for="verifyAadhar">"Aadhaar"</label>
                <input
                    type="text"
                    id="verifyAadhar"
                    prop:value=move || verify_aadhar.get()
                    on:input=move |ev| {
                        verify_aadhar.set(event_target_value(&ev));
                    }
                />
            </div>
            <button id="captureBtn" class="btn btn-primary" on:click=on_capture>
                "Capture & Vote"
            </button>
            <p id="verifyResult">{move || verify_result.get()}</p>
        </section>
    }
}
