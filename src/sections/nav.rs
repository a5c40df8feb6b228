use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{COMPANY, contact, hero, solutions};
use crate::icons::BuildingIcon;

/// Scroll offset (px) past which the bar switches to its light style.
const SCROLL_THRESHOLD: f64 = 20.0;

/// Anchor targets shared by the desktop links and the mobile drawer.
const NAV_ITEMS: &[(&str, &str)] = &[
    (solutions::SECTION_ID, "Solutions"),
    (hero::SECTION_ID, "Trading"),
    (solutions::GLOBAL_CARD_ID, "Global Network"),
    (contact::SECTION_ID, "Contact"),
];

fn scrolled_past(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed w-full z-50 transition-all duration-300 bg-white shadow-lg"
    } else {
        "fixed w-full z-50 transition-all duration-300 bg-slate-900"
    }
}

fn nav_link_class(scrolled: bool) -> &'static str {
    if scrolled {
        "text-sm font-medium transition-colors hover:text-blue-600 text-gray-900"
    } else {
        "text-sm font-medium transition-colors hover:text-blue-600 text-white"
    }
}

fn brand_icon_color(scrolled: bool) -> &'static str {
    if scrolled { "text-blue-600" } else { "text-white" }
}

fn brand_title_class(scrolled: bool) -> &'static str {
    if scrolled {
        "text-2xl font-bold text-gray-900"
    } else {
        "text-2xl font-bold text-white"
    }
}

fn menu_bar_color(scrolled: bool) -> &'static str {
    if scrolled { "bg-gray-900" } else { "bg-white" }
}

/// Keeps `scrolled` in sync with the window scroll position.
///
/// The closure is leaked with `forget()`; the listener lives as long as the
/// page does.
fn setup_scroll_listener(set_scrolled: WriteSignal<bool>) {
    if let Some(window) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(win) = web_sys::window() {
                if let Ok(y) = win.scroll_y() {
                    set_scrolled.set(scrolled_past(y));
                }
            }
        }) as Box<dyn FnMut()>);

        let _ = window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());

        closure.forget();
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    Effect::new(move || {
        setup_scroll_listener(set_scrolled);
    });

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href="/" class="flex items-center space-x-2">
                        <span class=move || brand_icon_color(scrolled.get())>
                            <BuildingIcon class="w-8 h-8" />
                        </span>
                        <span class=move || brand_title_class(scrolled.get())>{COMPANY}</span>
                    </a>

                    <div class="hidden md:flex space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(id, label)| {
                                view! {
                                    <a href=format!("#{id}") class=move || nav_link_class(scrolled.get())>
                                        {*label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <button class="hidden md:block bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md">
                        "Partner With Us"
                    </button>

                    <button
                        class="md:hidden p-2"
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                    >
                        <div class=move || format!("w-6 h-0.5 mb-1.5 transition-all {}", menu_bar_color(scrolled.get()))></div>
                        <div class=move || format!("w-6 h-0.5 mb-1.5 transition-all {}", menu_bar_color(scrolled.get()))></div>
                        <div class=move || format!("w-6 h-0.5 transition-all {}", menu_bar_color(scrolled.get()))></div>
                    </button>
                </div>
            </div>

            // Mobile drawer; every link closes it
            <Show when=move || menu_open.get()>
                <div class="md:hidden absolute w-full bg-white shadow-lg">
                    <div class="container mx-auto px-6 py-4 space-y-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|(id, label)| {
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="block text-gray-900 hover:text-blue-600 transition-colors"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <button class="w-full bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md">
                            "Partner With Us"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_is_strictly_greater_than_20px() {
        assert!(!scrolled_past(0.0));
        assert!(!scrolled_past(20.0));
        assert!(scrolled_past(20.1));
        assert!(scrolled_past(400.0));
    }

    #[test]
    fn bar_swaps_background_and_shadow_on_scroll() {
        assert!(nav_class(false).contains("bg-slate-900"));
        assert!(!nav_class(false).contains("shadow-lg"));
        assert!(nav_class(true).contains("bg-white"));
        assert!(nav_class(true).contains("shadow-lg"));
    }

    #[test]
    fn link_and_brand_colors_follow_scroll_state() {
        assert!(nav_link_class(false).contains("text-white"));
        assert!(nav_link_class(true).contains("text-gray-900"));
        assert_eq!(brand_icon_color(false), "text-white");
        assert_eq!(brand_icon_color(true), "text-blue-600");
        assert_eq!(menu_bar_color(false), "bg-white");
        assert_eq!(menu_bar_color(true), "bg-gray-900");
    }

    #[test]
    fn every_anchor_resolves_to_a_rendered_id() {
        let ids = [
            hero::SECTION_ID,
            solutions::SECTION_ID,
            solutions::GLOBAL_CARD_ID,
            contact::SECTION_ID,
        ];
        for (id, label) in NAV_ITEMS {
            assert!(ids.contains(id), "nav link {label} targets #{id} but no element has that id");
        }
    }

    #[test]
    fn nav_lists_the_four_expected_items() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, ["Solutions", "Trading", "Global Network", "Contact"]);
    }
}
