use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobTone {
    Blue,
    Teal,
}

impl BlobTone {
    fn body_class(self) -> &'static str {
        match self {
            BlobTone::Blue => "bg-blue-300 dark:bg-blue-800",
            BlobTone::Teal => "bg-teal-300 dark:bg-teal-800",
        }
    }

    fn eye_class(self) -> &'static str {
        match self {
            BlobTone::Blue => "bg-blue-900 dark:bg-blue-100",
            BlobTone::Teal => "bg-teal-900 dark:bg-teal-100",
        }
    }
}

#[component]
pub fn AnimatedBackdrop() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="pointer-events-none absolute inset-0 overflow-hidden">
            <div class="absolute -top-24 -right-16 h-72 w-72 rounded-full bg-blue-300/20 dark:bg-blue-300/10 blur-3xl"></div>
            <div class="absolute -bottom-24 -left-16 h-72 w-72 rounded-full bg-teal-300/20 dark:bg-teal-300/10 blur-3xl"></div>
        </div>
    }
}

/// Placeholder panel. Hovering hides the text and shows blinking eyes (see input.css).
#[component]
pub fn SlimeBlob(text: &'static str, tone: BlobTone) -> impl IntoView {
    let eye = format!("eye {}", tone.eye_class());
    view! {
        <div class=format!(
            "group relative flex h-48 w-64 items-center justify-center slime-shape shadow-lg transition-transform duration-200 ease-out slime-bob {}",
            tone.body_class(),
        )>
            <div class="absolute inset-0 flex items-center justify-center gap-8 opacity-0 transition-opacity duration-300 group-hover:opacity-100">
                <div class=eye.clone()></div>
                <div class=eye></div>
            </div>
            <p class="font-semibold text-center text-zinc-900 transition-opacity duration-300 group-hover:opacity-0">
                {text}
            </p>
        </div>
    }
}
