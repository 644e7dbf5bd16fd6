//! Fixed top navigation
//!
//! Shrinks and gains a blurred backdrop once the page scrolls past
//! [`COMPACT_AFTER_PX`], highlights the current route and collapses into an
//! overlay menu on small screens.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::content::{NAV_LINKS, is_active};
use crate::ui::components::Logo;
use crate::ui::icon::{Icon, icons};
#[cfg(feature = "hydrate")]
use crate::ui::motion::use_window_listener;

/// Scroll offset in pixels past which the bar switches to its compact form.
pub const COMPACT_AFTER_PX: f64 = 20.0;

pub fn is_compact(scroll_y: f64) -> bool {
    scroll_y > COMPACT_AFTER_PX
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let compact = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::scroll;

        let read_scroll = move || {
            let scroll_y = window().scroll_y().unwrap_or(0.0);
            compact.set(is_compact(scroll_y));
        };
        read_scroll();

        use_window_listener(scroll, move |_| read_scroll());
    }

    // Navigating closes the mobile menu
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    let bar_class = move || {
        if compact.get() {
            "h-16 bg-dark/70 backdrop-blur-xl border-b border-white/5 shadow-lg shadow-black/20"
        } else {
            "h-24 bg-transparent border-b border-transparent"
        }
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50">
            <nav class=move || format!(
                "flex items-center transition-all duration-500 ease-out {}", bar_class()
            )>
                <div class="w-full max-w-7xl mx-auto px-6 flex items-center justify-between">
                    <Logo />

                    <ul class="hidden md:flex items-center gap-1 p-1 rounded-full bg-white/[0.03] border border-white/5">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let path = link.path;
                                let link_class = move || {
                                    if is_active(&location.pathname.get(), path) {
                                        "px-4 py-1.5 rounded-full text-sm font-medium bg-white/10 text-white"
                                    } else {
                                        "px-4 py-1.5 rounded-full text-sm font-medium text-secondary hover:text-white transition-colors"
                                    }
                                };
                                view! {
                                    <li>
                                        <A href=path attr:class=link_class>{link.label}</A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div class="hidden md:flex items-center gap-4">
                        <A href="/contact" attr:class="text-sm font-medium text-secondary hover:text-white transition-colors">
                            "Sign In"
                        </A>
                        <A
                            href="/pricing"
                            attr:class="px-5 py-2 rounded-full bg-white text-dark text-sm font-semibold hover:bg-white/90 transition-colors"
                        >
                            "Get Started"
                        </A>
                    </div>

                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-white/5"
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let name = if menu_open.get() { icons::X } else { icons::MENU };
                            view! { <Icon name=name class="w-6 h-6" /> }
                        }}
                    </button>
                </div>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="md:hidden fixed inset-0 top-16 bg-dark/95 backdrop-blur-xl px-6 py-10 animate-fade-in">
                    <ul class="flex flex-col gap-6">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <A href=link.path attr:class="text-3xl font-semibold text-white">
                                            {link.label}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <A
                        href="/pricing"
                        attr:class="mt-10 inline-flex w-full justify-center px-6 py-3 rounded-full bg-white text-dark font-semibold"
                    >
                        "Get Started"
                    </A>
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_threshold() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(20.0));
        assert!(is_compact(20.5));
        assert!(is_compact(800.0));
    }
}
