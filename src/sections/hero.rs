use leptos::prelude::*;

/// Anchor id targeted by the "Trading" nav link.
pub(crate) const SECTION_ID: &str = "trading";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SECTION_ID class="pt-32 pb-20 bg-gradient-to-br from-slate-900 via-slate-800 to-blue-900">
            <div class="container mx-auto px-6">
                <div class="flex flex-col lg:flex-row items-center justify-between gap-12">
                    <div class="lg:w-1/2 text-center lg:text-left">
                        <h1 class="text-4xl lg:text-6xl font-bold text-white mb-6">
                            "Empowering Global Trade Solutions"
                        </h1>
                        <p class="text-lg text-gray-300 mb-8">
                            "Your trusted partner in international trade and commerce. We connect businesses worldwide through innovative trading solutions and comprehensive global network."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <a href="#solutions" class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-6 rounded-md text-center">
                                "Explore Solutions"
                            </a>
                            <a href="#contact" class="bg-transparent border-2 border-white text-white hover:bg-white hover:text-slate-900 px-8 py-6 rounded-md text-center">
                                "Contact Us"
                            </a>
                        </div>
                    </div>
                    <div class="lg:w-1/2">
                        <div class="relative">
                            <div class="absolute inset-0 bg-blue-600 rounded-full blur-3xl opacity-20"></div>
                            <img
                                src="assets/trading-dashboard.svg"
                                alt="Trading Dashboard"
                                width="600"
                                height="400"
                                class="relative rounded-lg shadow-2xl"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
