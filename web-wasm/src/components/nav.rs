//! ナビゲーションバーコンポーネント

use leptos::prelude::*;

#[component]
pub fn NavBar<F>(on_nav: F) -> impl IntoView
where
    F: Fn(&'static str) + Clone + 'static,
{
    let nav_link = move |token: &'static str, label: &'static str| {
        let on_nav = on_nav.clone();
        view! {
            <a
                href="#"
                data-nav=token
                on:click=move |ev| {
                    ev.prevent_default();
                    on_nav(token);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <header class="header">
            <h1>"Online Voting System"</h1>
            <nav>
                {nav_link("home", "Home")}
                {nav_link("user", "Voter Login")}
                {nav_link("admin", "Admin")}
            </nav>
        </header>
    }
}
