use leptos::html::{Div, H1, Section};
use leptos::prelude::*;

use crate::core::content::{CONTACT_CHANNELS, CONTACT_PAGE, ContactChannel};
use crate::core::motion::{
    Ease, FadeIn, ScrollPosition, Stagger, VisualProps, WordReveal, fade_in_from,
    staggered_children, word_by_word,
};
use crate::ui::components::{HeaderScene, PageHeaderScene};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{target, use_animation_scope};

use super::PageSeo;

#[component]
pub fn ContactPage() -> impl IntoView {
    let container = NodeRef::<Section>::new();
    let title = NodeRef::<H1>::new();
    let intro = NodeRef::<Div>::new();
    let channels = NodeRef::<Div>::new();
    let form = NodeRef::<Div>::new();
    let submitted = RwSignal::new(false);

    use_animation_scope(move |scope| {
        let start = ScrollPosition::top_at(0.7);

        word_by_word(
            scope,
            target(title),
            WordReveal {
                start,
                ..WordReveal::default()
            },
        );
        fade_in_from(
            scope,
            target(intro),
            FadeIn {
                from: VisualProps::new().opacity(0.0).x(-30.0),
                delay: 0.3,
                duration: 1.0,
                ease: Ease::OutCubic,
                start: Some(start),
                trigger: target(container),
            },
        );
        fade_in_from(
            scope,
            target(form),
            FadeIn {
                from: VisualProps::new().opacity(0.0).y(40.0).scale(0.98),
                delay: 0.4,
                duration: 1.2,
                ease: Ease::OutCubic,
                start: Some(start),
                trigger: target(container),
            },
        );
        staggered_children(
            scope,
            target(channels),
            Stagger {
                delay: 0.5,
                distance: 20.0,
                horizontal: true,
                ..Stagger::default()
            },
        );
    });

    view! {
        <PageSeo page=CONTACT_PAGE />

        <section node_ref=container class="min-h-screen bg-dark pt-32 pb-24 relative overflow-hidden">
            <div class="absolute top-0 right-0 w-2/3 h-2/3 -z-10 opacity-30 pointer-events-none">
                <PageHeaderScene scene=HeaderScene::Rings class="h-[800px] w-full" />
            </div>
            <div class="absolute bottom-0 left-0 w-[500px] h-[500px] bg-accent-secondary/5 rounded-full blur-[100px] pointer-events-none"></div>

            <div class="max-w-7xl mx-auto px-6 grid lg:grid-cols-2 gap-16 lg:gap-24 items-start">
                <div>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-white/5 border border-white/10 text-accent-primary text-xs font-semibold uppercase tracking-wider mb-8 backdrop-blur-md">
                        "Contact Us"
                    </div>
                    <h1 node_ref=title class="text-5xl md:text-6xl font-bold text-white mb-8 tracking-tighter">
                        "Let's talk business."
                    </h1>

                    <div node_ref=intro>
                        <p class="text-xl text-secondary mb-16 max-w-md font-light leading-relaxed">
                            {CONTACT_PAGE.description}
                        </p>

                        <div node_ref=channels class="space-y-8">
                            {CONTACT_CHANNELS
                                .into_iter()
                                .map(|channel| view! { <ContactItem channel=channel /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div node_ref=form class="relative group">
                    <div class="absolute -inset-1 bg-gradient-to-r from-accent-primary/30 to-accent-secondary/30 rounded-3xl blur-2xl opacity-50 group-hover:opacity-75 transition-opacity duration-500"></div>

                    <div class="relative bg-[#0A0A0A]/90 backdrop-blur-xl border border-white/10 p-8 md:p-10 rounded-3xl shadow-2xl">
                        // Submission is display-only; nothing leaves the page
                        <form
                            class="space-y-6"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                submitted.set(true);
                            }
                        >
                            <div class="grid grid-cols-2 gap-6">
                                <FloatingInput label="First Name" placeholder="Jane" />
                                <FloatingInput label="Last Name" placeholder="Doe" />
                            </div>

                            <FloatingInput label="Work Email" placeholder="jane@company.com" kind="email" />
                            <FloatingInput label="Company Name" placeholder="Acme Inc." />

                            <div class="space-y-1.5">
                                <label class="text-xs font-semibold text-white/60 uppercase tracking-wider ml-1">
                                    "Message"
                                    <textarea
                                        class="mt-1.5 w-full bg-white/5 border border-white/10 rounded-xl p-4 text-white normal-case tracking-normal font-normal focus:ring-2 focus:ring-accent-primary/50 focus:border-accent-primary/50 outline-none transition-all h-32 placeholder:text-white/10 resize-none"
                                        placeholder="Tell us about your team size and needs..."
                                    ></textarea>
                                </label>
                            </div>

                            <button type="submit" class="w-full btn-primary py-4 text-base font-semibold shadow-lg group-hover:shadow-accent-primary/20">
                                "Send Message"
                                <Icon name=icons::ARROW_RIGHT class="w-[18px] h-[18px]" />
                            </button>

                            <Show
                                when=move || submitted.get()
                                fallback=|| view! {
                                    <p class="text-center text-xs text-secondary mt-4">
                                        "By submitting, you agree to our Terms and Privacy Policy."
                                    </p>
                                }
                            >
                                <p class="text-center text-xs text-accent-secondary mt-4" role="status">
                                    "Thanks! Our team will reach out shortly."
                                </p>
                            </Show>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(channel: ContactChannel) -> impl IntoView {
    view! {
        <div class="flex items-start gap-5 group cursor-pointer">
            <div class="p-3.5 rounded-2xl bg-white/5 border border-white/5 group-hover:bg-white/10 group-hover:border-white/20 transition-all">
                <Icon name=channel.icon class="w-5 h-5" />
            </div>
            <div>
                <h3 class="text-white font-medium mb-0.5 text-sm">{channel.title}</h3>
                <p class="text-secondary font-light text-base group-hover:text-white transition-colors">{channel.value}</p>
            </div>
        </div>
    }
}

#[component]
fn FloatingInput(
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5 group">
            <label class="block text-xs font-semibold text-white/60 uppercase tracking-wider ml-1 group-focus-within:text-accent-primary transition-colors">
                {label}
                <input
                    type=kind
                    placeholder=placeholder
                    class="mt-1.5 -ml-1 w-full bg-white/5 border border-white/10 rounded-xl px-4 py-3.5 text-white normal-case tracking-normal font-normal focus:bg-white/[0.07] focus:ring-2 focus:ring-accent-primary/50 focus:border-accent-primary/50 outline-none transition-all placeholder:text-white/10"
                />
            </label>
        </div>
    }
}
