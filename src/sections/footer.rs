use leptos::prelude::*;

use super::COMPANY;

/// Link columns rendered in the footer grid.
const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Solutions", &["Market Analysis", "Global Trade", "Supply Chain"]),
    ("Company", &["About Us", "Careers", "Contact"]),
    ("Resources", &["Blog", "Case Studies", "Documentation"]),
    ("Legal", &["Privacy Policy", "Terms of Service", "Compliance"]),
];

fn copyright_line(year: u32) -> String {
    format!("© {year} {COMPANY}. All rights reserved.")
}

/// Calendar year at render time, from the browser clock.
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-800 text-gray-300">
            <div class="container mx-auto px-6 py-12">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|(heading, links)| view! { <FooterColumn heading=*heading links=*links /> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="border-t border-gray-700 mt-8 pt-8 text-center">
                    <p>{copyright_line(current_year())}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(heading: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-white font-semibold mb-4">{heading}</h3>
            <ul class="space-y-2">
                {links
                    .iter()
                    .map(|label| {
                        view! {
                            <li>
                                <a href="#" class="hover:text-blue-400">{*label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_carries_year_and_company() {
        assert_eq!(copyright_line(2026), "© 2026 Equip Noc. All rights reserved.");
    }

    #[test]
    fn four_columns_of_three_links() {
        let headings: Vec<_> = FOOTER_COLUMNS.iter().map(|(heading, _)| *heading).collect();
        assert_eq!(headings, ["Solutions", "Company", "Resources", "Legal"]);
        for (heading, links) in FOOTER_COLUMNS {
            assert_eq!(links.len(), 3, "column {heading}");
        }
    }
}
