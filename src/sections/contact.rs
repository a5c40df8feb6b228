use leptos::prelude::*;

use super::{COMPANY, CONTACT_EMAIL};

pub(crate) const SECTION_ID: &str = "contact";

#[component]
pub fn Contact() -> impl IntoView {
    let pitch = format!(
        "Connect with our team to discover how {COMPANY} can help your business thrive in the global market"
    );
    view! {
        <section id=SECTION_ID class="py-20 bg-slate-900">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-3xl lg:text-4xl font-bold text-white mb-8">
                        "Ready to Transform Your Trading Experience?"
                    </h2>
                    <p class="text-lg text-gray-300 mb-4">{pitch}</p>
                    <p class="text-lg text-blue-400 mb-8">
                        "Email us at: "
                        <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:text-blue-300">
                            {CONTACT_EMAIL}
                        </a>
                    </p>
                    <button class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-6 text-lg rounded-md">
                        "Schedule a Consultation"
                    </button>
                </div>
            </div>
        </section>
    }
}
