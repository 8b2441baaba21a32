use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::AboutContent,
    avatar::ProfileImage,
    contact::ContactSection,
    decor::{AnimatedBackdrop, BlobTone, SlimeBlob},
    header::Header,
    section::PageSection,
};
use crate::{
    build_info::{built_at, footer_notice},
    nav::Anchor,
    profile::PROFILE,
};

const WIP_TEXT: &str = "Work in progress — just in my first year lmao";

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <PortfolioBody />
    }
}

#[component]
fn PortfolioBody() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white text-zinc-900 antialiased dark:bg-zinc-950 dark:text-zinc-100">
            <Header />
            <Hero />
            <PageSection anchor=Anchor::Projects title="Projects">
                <SlimeBlob text=WIP_TEXT tone=BlobTone::Blue />
            </PageSection>
            <PageSection anchor=Anchor::Skills title="Skills">
                <SlimeBlob text=WIP_TEXT tone=BlobTone::Teal />
            </PageSection>
            <PageSection anchor=Anchor::About title="About">
                <AboutContent />
            </PageSection>
            <PageSection anchor=Anchor::Contact title="Contact">
                <ContactSection />
            </PageSection>
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id=Anchor::Home.id() class="relative isolate overflow-hidden pt-10 sm:pt-16">
            <AnimatedBackdrop />
            <div class="mx-auto max-w-6xl px-4 pb-14 sm:pb-20 text-center">
                <ProfileImage
                    alt="profile large"
                    class="mx-auto mb-6 h-40 w-40 rounded-full object-cover ring-2 ring-blue-500/30 dark:ring-blue-400/20 shadow"
                />
                <p class="text-xs uppercase tracking-wider text-blue-600 dark:text-blue-400">
                    "Biomedical student — " {PROFILE.focus}
                </p>
                <h1 class="mt-2 text-2xl font-bold sm:text-3xl lg:text-4xl">{PROFILE.headline}</h1>
                <p class="mt-3 max-w-prose mx-auto text-sm text-zinc-700 dark:text-zinc-300">
                    {PROFILE.value}
                </p>
                <div class="mt-6 text-xs text-zinc-600 dark:text-zinc-400">
                    {PROFILE.university} " • " {PROFILE.graduation}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let notice = built_at()
        .map(|built| footer_notice(PROFILE.name, built))
        .unwrap_or_else(|| format!("© {}", PROFILE.name));
    view! {
        <footer class="border-t border-zinc-200 py-8 text-center text-xs text-zinc-500 dark:border-zinc-800 dark:text-zinc-400">
            <div class="mx-auto max-w-6xl px-4">
                <p>{notice}</p>
            </div>
        </footer>
    }
}
