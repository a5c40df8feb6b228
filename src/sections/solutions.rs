use leptos::prelude::*;

use crate::icons::{BarChartIcon, DatabaseIcon, GlobeIcon};

pub(crate) const SECTION_ID: &str = "solutions";
/// The "Global Network" nav link lands on this card.
pub(crate) const GLOBAL_CARD_ID: &str = "global";

#[component]
pub fn Solutions() -> impl IntoView {
    view! {
        <section id=SECTION_ID class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl lg:text-4xl font-bold text-gray-900 mb-4">
                        "Comprehensive Trading Solutions"
                    </h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "We offer end-to-end solutions for businesses looking to expand their global reach"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <SolutionCard
                        anchor=None
                        title="Market Analysis"
                        description="Comprehensive market insights and trend analysis for informed decision-making"
                    >
                        <BarChartIcon class="w-12 h-12 text-blue-600 mb-4" />
                    </SolutionCard>
                    <SolutionCard
                        anchor=Some(GLOBAL_CARD_ID)
                        title="Global Trade Network"
                        description="Access to worldwide markets and trusted trading partners"
                    >
                        <GlobeIcon class="w-12 h-12 text-blue-600 mb-4" />
                    </SolutionCard>
                    <SolutionCard
                        anchor=None
                        title="Supply Chain Management"
                        description="Efficient logistics and supply chain optimization solutions"
                    >
                        <DatabaseIcon class="w-12 h-12 text-blue-600 mb-4" />
                    </SolutionCard>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionCard(
    anchor: Option<&'static str>,
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=anchor class="p-6 bg-slate-50 rounded-lg hover:shadow-lg transition-shadow">
            {children()}
            <h3 class="text-xl font-semibold mb-3">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
