use chrono::{DateTime, Datelike, Utc};

pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn built_at() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

pub fn footer_notice(name: &str, built: DateTime<Utc>) -> String {
    format!(
        "© {} {}. Last updated {}",
        built.year(),
        name,
        built.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_build_time_parses() {
        assert!(built_at().is_some());
    }

    #[test]
    fn test_footer_notice() {
        let built = Utc.with_ymd_and_hms(2025, 9, 3, 23, 59, 0).unwrap();
        assert_eq!(
            footer_notice("Abdullah Al Zubaidi", built),
            "© 2025 Abdullah Al Zubaidi. Last updated 2025-09-03"
        );
    }
}
