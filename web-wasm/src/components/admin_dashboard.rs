//! 管理者ダッシュボードコンポーネント

use leptos::prelude::*;

use crate::app::Section;

#[component]
pub fn AdminDashboard(section: ReadSignal<Section>, admin_data: RwSignal<String>) -> impl IntoView {
    view! {
        <section
            id="adminDashboard"
            class="section"
            class:hidden=move || section.get() != Section::AdminDashboard
        >
            <h2>"Admin Dashboard"</h2>
            <pre id="adminData">{move || admin_data.get()}</pre>
        </section>
    }
}
