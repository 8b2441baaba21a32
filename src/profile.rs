use serde_json::{json, Value};

/// Served from `public/` when the remote photo can't be loaded.
pub const FALLBACK_PHOTO: &str = "/profile.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct About {
    pub bio: &'static str,
    pub photo: &'static str,
    pub facts: &'static [&'static str],
    pub timeline: &'static [TimelineEntry],
}

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub value: &'static str,
    pub email: &'static str,
    pub discord: &'static str,
    pub linkedin: Option<&'static str>,
    pub instagram: Option<&'static str>,
    pub university: &'static str,
    pub graduation: &'static str,
    pub focus: &'static str,
    /// Form submission endpoint. Nothing posts to it yet.
    pub contact_endpoint: &'static str,
    pub about: About,
}

pub static PROFILE: Profile = Profile {
    name: "Abdullah Al Zubaidi",
    headline: "Biological Sciences Student",
    value: "I design and test simple tools that turn data into decisions in my free time",
    email: "abdullaaqeelalzubaidi@gmail.com",
    discord: "revidents",
    linkedin: Some("https://www.linkedin.com/in/abdulla-al-zubaidi-732852298/"),
    instagram: Some("https://instagram.com/3qee.l"),
    university: "University of Calgary",
    graduation: "Expected 2029",
    focus: "Biological Sciences",
    contact_endpoint: "https://formspree.io/f/xzzaplrj",
    about: About {
        bio: "I’m a biomedical student focused on Bioinformatics. I like clear problems, clean data, and simple tools that help decisions. I enjoy working with small teams and shipping.",
        photo: "https://i.imgur.com/uNks6y0.png",
        facts: &[
            "STEM Council founder",
            "NSERC USRA recipient",
            "Volunteer EMT",
        ],
        timeline: &[
            TimelineEntry {
                date: "2025–2029",
                label: "BSc, University of Calgary",
            },
            TimelineEntry {
                date: "Summer 2025",
                label: "Research Assistant, Lab XYZ",
            },
            TimelineEntry {
                date: "2024",
                label: "Intern, HealthTech Co.",
            },
        ],
    },
};

impl Profile {
    /// Social links that are present, in the order the contact section shows them.
    pub fn socials(&self) -> Vec<(&'static str, &'static str)> {
        [("LinkedIn", self.linkedin), ("Instagram", self.instagram)]
            .into_iter()
            .filter_map(|(label, url)| url.map(|url| (label, url)))
            .collect()
    }

    pub fn description(&self) -> String {
        format!("{} - {}. {}", self.name, self.headline, self.value)
    }

    /// schema.org `Person` for the document head.
    pub fn person_schema(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "Person",
            "name": self.name,
            "email": format!("mailto:{}", self.email),
            "jobTitle": self.headline,
            "description": self.value,
            "image": self.about.photo,
            "alumniOf": {
                "@type": "CollegeOrUniversity",
                "name": self.university,
            },
            "sameAs": self.socials().into_iter().map(|(_, url)| url).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_ordered_newest_last() {
        let dates = PROFILE
            .about
            .timeline
            .iter()
            .map(|t| t.date)
            .collect::<Vec<_>>();
        assert_eq!(dates, vec!["2025–2029", "Summer 2025", "2024"]);
        assert_eq!(
            PROFILE.about.timeline[2],
            TimelineEntry {
                date: "2024",
                label: "Intern, HealthTech Co.",
            }
        );
    }

    #[test]
    fn test_socials_skip_missing_links() {
        let mut profile = Profile {
            linkedin: None,
            about: About { ..PROFILE.about },
            ..PROFILE
        };
        assert_eq!(
            profile.socials(),
            vec![("Instagram", "https://instagram.com/3qee.l")]
        );

        profile.instagram = None;
        assert!(profile.socials().is_empty());

        let labels = PROFILE
            .socials()
            .into_iter()
            .map(|(label, _)| label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["LinkedIn", "Instagram"]);
    }

    #[test]
    fn test_person_schema() {
        let schema = PROFILE.person_schema();
        assert_eq!(schema["@type"], "Person");
        assert_eq!(schema["name"], PROFILE.name);
        assert_eq!(schema["email"], "mailto:abdullaaqeelalzubaidi@gmail.com");
        assert_eq!(schema["alumniOf"]["name"], "University of Calgary");
        assert_eq!(schema["sameAs"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_description_mentions_headline() {
        let desc = PROFILE.description();
        assert!(desc.starts_with(PROFILE.name));
        assert!(desc.contains(PROFILE.headline));
    }
}
