use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::FOOTER_COLUMNS;
use crate::ui::components::Logo;
use crate::ui::icon::{Icon, icons};

const SOCIALS: [(&str, &str); 3] = [
    (icons::TWITTER, "Twitter"),
    (icons::GITHUB, "GitHub"),
    (icons::LINKEDIN, "LinkedIn"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative border-t border-white/5 bg-dark pt-20 pb-10">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-5 gap-12 mb-16">
                    <div class="md:col-span-2 space-y-6">
                        <Logo />
                        <p class="text-sm text-secondary max-w-xs leading-relaxed">
                            "The operating system for field sales. Track visits, verify locations, and close more deals."
                        </p>
                        <div class="flex items-center gap-3">
                            {SOCIALS
                                .iter()
                                .map(|&(icon, label)| {
                                    view! {
                                        <a
                                            href="#"
                                            class="w-10 h-10 rounded-full border border-white/10 flex items-center justify-center hover:bg-white/5 transition-colors"
                                            aria-label=label
                                        >
                                            <Icon name=icon class="w-4 h-4" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="text-sm font-semibold text-white mb-5">{column.title}</h4>
                                    <ul class="space-y-3">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                let class = "text-sm text-secondary hover:text-white transition-colors";
                                                if link.href.starts_with('/') {
                                                    view! {
                                                        <li><A href=link.href attr:class=class>{link.label}</A></li>
                                                    }
                                                    .into_any()
                                                } else {
                                                    view! {
                                                        <li><a href=link.href class=class>{link.label}</a></li>
                                                    }
                                                    .into_any()
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="pt-8 border-t border-white/5 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-secondary/70">"© 2024 Nexus Inc. All rights reserved."</span>
                    <span class="flex items-center gap-2 text-sm text-secondary">
                        <span class="relative flex w-2 h-2">
                            <span class="absolute inline-flex w-full h-full rounded-full bg-emerald-400 opacity-75 animate-ping"></span>
                            <span class="relative inline-flex w-2 h-2 rounded-full bg-emerald-500"></span>
                        </span>
                        "System Operational"
                    </span>
                </div>
            </div>
        </footer>
    }
}
