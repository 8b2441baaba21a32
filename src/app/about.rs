use leptos::prelude::*;

use super::avatar::ProfileImage;
use crate::profile::{TimelineEntry, PROFILE};

#[component]
pub fn AboutContent() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 items-start gap-6 sm:grid-cols-[auto,1fr]">
            <ProfileImage
                alt=format!("{} portrait", PROFILE.name)
                class="h-28 w-28 rounded-full object-cover"
            />
            <div>
                <p class="max-w-prose text-sm text-zinc-700 dark:text-zinc-300">{PROFILE.about.bio}</p>
                <FactList facts=PROFILE.about.facts />
                <div class="mt-6">
                    <h3 class="text-sm font-semibold">"Timeline"</h3>
                    <Timeline entries=PROFILE.about.timeline />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FactList(facts: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="mt-3 grid list-disc grid-cols-1 gap-1 pl-5 text-sm sm:grid-cols-2">
            {facts.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn Timeline(entries: &'static [TimelineEntry]) -> impl IntoView {
    view! {
        <ol class="mt-2 space-y-2 text-sm">
            {entries
                .iter()
                .map(|t| {
                    view! {
                        <li class="flex gap-3">
                            <span class="min-w-[6rem] text-zinc-500 dark:text-zinc-400">{t.date}</span>
                            <span>{t.label}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| f().to_html())
    }

    #[test]
    fn test_timeline_renders_date_before_label() {
        static ENTRIES: [TimelineEntry; 1] = [TimelineEntry {
            date: "2024",
            label: "Intern, HealthTech Co.",
        }];
        let html = render(|| view! { <Timeline entries=&ENTRIES /> });
        let date = html.find("2024").expect("date should render");
        let label = html
            .find("Intern, HealthTech Co.")
            .expect("label should render");
        assert!(date < label);
    }

    #[test]
    fn test_full_timeline_keeps_order() {
        let html = render(|| view! { <Timeline entries=PROFILE.about.timeline /> });
        let positions = PROFILE
            .about
            .timeline
            .iter()
            .map(|t| html.find(t.label).expect("every label should render"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_facts_render_verbatim() {
        let html = render(|| view! { <FactList facts=PROFILE.about.facts /> });
        for fact in PROFILE.about.facts {
            assert!(html.contains(fact));
        }
        assert_eq!(html.matches("<li").count(), PROFILE.about.facts.len());
    }
}
