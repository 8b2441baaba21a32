use leptos::prelude::*;

use super::avatar::ProfileImage;
use crate::nav::{scroll_to, Anchor};

#[component]
pub fn Header() -> impl IntoView {
    // last section we actually scrolled to; a missing anchor leaves it alone
    let (active, set_active) = signal(Anchor::Home);
    let go_to = move |anchor: Anchor| {
        if scroll_to(anchor) {
            set_active.set(anchor);
        }
    };

    view! {
        <header class="sticky top-0 z-40 border-b border-zinc-200 bg-white/80 backdrop-blur dark:border-zinc-800 dark:bg-zinc-950/70">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-4 py-3">
                <button
                    type="button"
                    class="flex items-center gap-2 font-semibold"
                    on:click=move |_| go_to(Anchor::Home)
                >
                    <ProfileImage alt="profile" class="h-6 w-6 rounded-full object-cover" />
                    <span>"Student"</span>
                </button>
                <nav class="hidden gap-6 text-sm sm:flex">
                    {Anchor::ALL
                        .into_iter()
                        .map(|anchor| {
                            view! {
                                <button
                                    type="button"
                                    class="px-2 py-1"
                                    class:underline=move || active.get() == anchor
                                    aria-current=move || (active.get() == anchor).then_some("true")
                                    on:click=move |_| go_to(anchor)
                                >
                                    {anchor.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
