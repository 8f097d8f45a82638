//! ホームセクションコンポーネント

use leptos::prelude::*;

use crate::app::Section;

#[component]
pub fn Home(section: ReadSignal<Section>) -> impl IntoView {
    view! {
        <section id="home" class="section" class:hidden=move || section.get() != Section::Home>
            <h2>"Welcome to the Online Voting System"</h2>
            <p>"Use the navigation above to log in as a voter or as an administrator."</p>
        </section>
    }
}
