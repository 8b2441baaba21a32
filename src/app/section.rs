use leptos::prelude::*;

use crate::nav::Anchor;

#[component]
pub fn PageSection(anchor: Anchor, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=anchor.id() class="scroll-mt-24 py-14 sm:py-20">
            <div class="mx-auto max-w-6xl px-4">
                <h2 class="text-xl font-semibold text-center">{title}</h2>
                <div class="mt-6 flex items-center justify-center">{children()}</div>
            </div>
        </section>
    }
}
