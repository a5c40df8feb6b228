// Equip Noc Landing Page — Leptos 0.8 Edition

mod icons;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main class="min-h-screen">
            <Hero />
            <Solutions />
            <Contact />
        </main>
        <Footer />
    }
}
