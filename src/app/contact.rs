use leptos::{prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    clipboard::{copy_to_clipboard, CopyFeedback, COPY_RESET_MS},
    profile::PROFILE,
};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <div class="text-center">
            <p class="text-sm">
                "Email: "
                <a href=format!("mailto:{}", PROFILE.email) class="underline">
                    {PROFILE.email}
                </a>
            </p>
            <div class="mt-4 flex flex-wrap items-center justify-center gap-6 text-sm">
                {PROFILE
                    .socials()
                    .into_iter()
                    .map(|(label, url)| {
                        view! {
                            <a class="underline" href=url target="_blank" rel="noreferrer">
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
                <CopyHandle handle=PROFILE.discord />
            </div>
        </div>
    }
}

/// Click-to-copy Discord handle with a short-lived "(copied)" hint.
#[component]
fn CopyHandle(handle: &'static str) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());
    // start() alone doesn't clear a pending timeout, so stop() goes first;
    // the ticket check also drops any reset that still slips through
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: u64| {
            feedback.update(|f| {
                if f.expire(ticket) {
                    log::debug!("copy hint reset");
                }
            })
        },
        COPY_RESET_MS,
    );

    let on_copy = move |_| {
        let start = start.clone();
        let stop = stop.clone();
        spawn_local(async move {
            let res = copy_to_clipboard(handle).await;
            let ticket = feedback.try_update(|f| f.record(&res)).flatten();
            match res {
                Ok(path) => log::debug!("copied discord handle via {path:?}"),
                Err(err) => log::warn!("couldn't copy discord handle: {err}"),
            }
            if let Some(ticket) = ticket {
                stop();
                start(ticket);
            }
        });
    };

    view! {
        <span
            class="cursor-pointer underline hover:text-blue-600"
            class:font-semibold=move || feedback.get().indicator().is_copied()
            on:click=on_copy
        >
            "Discord: "
            {handle}
            " "
            {move || feedback.get().indicator().hint()}
        </span>
    }
}
