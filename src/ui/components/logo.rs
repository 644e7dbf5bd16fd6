use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::BRAND;

/// Gradient hexagon mark.
#[component]
pub fn LogoMark(#[prop(default = "w-8 h-8")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 32 32" fill="none" aria-hidden="true">
            <defs>
                <linearGradient id="nexus-logo-gradient" x1="0" y1="0" x2="32" y2="32" gradientUnits="userSpaceOnUse">
                    <stop offset="0" stop-color="#6E56CF" />
                    <stop offset="1" stop-color="#00C2FF" />
                </linearGradient>
            </defs>
            <path
                d="M16 2 28.124 9v14L16 30 3.876 23V9L16 2Z"
                stroke="url(#nexus-logo-gradient)"
                stroke-width="2.5"
                stroke-linejoin="round"
            />
            <path d="M16 9 22 12.5v7L16 23l-6-3.5v-7L16 9Z" fill="url(#nexus-logo-gradient)" />
        </svg>
    }
}

/// Mark and word mark linking home.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <A href="/" attr:class="flex items-center gap-2.5 group" attr:aria-label="Nexus home">
            <LogoMark class="w-8 h-8 transition-transform duration-300 group-hover:rotate-12" />
            <span class="text-xl font-bold tracking-tight text-white">{BRAND}</span>
        </A>
    }
}
