use leptos::{html, prelude::*};

use crate::{
    image::FallbackSource,
    profile::{FALLBACK_PHOTO, PROFILE},
};

/// The profile photo, swapped for the bundled picture if the remote one fails.
#[component]
pub fn ProfileImage(#[prop(into)] alt: String, class: &'static str) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let source = RwSignal::new(FallbackSource::new(PROFILE.about.photo, FALLBACK_PHOTO));
    let use_fallback = move || {
        source.update(|s| {
            if s.fail() {
                log::debug!("profile photo failed to load, using {}", s.current());
            }
        });
    };

    // an error fired before hydration never reached on:error
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() == 0 {
                use_fallback();
            }
        }
    });

    view! {
        <img
            node_ref=img_ref
            src=move || source.with(|s| s.current())
            alt=alt
            class=class
            loading="lazy"
            referrerpolicy="no-referrer"
            on:error=move |_| use_fallback()
        />
    }
}
