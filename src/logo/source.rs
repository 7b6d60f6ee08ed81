/// Where the brand logo URL came from.
///
/// Resolution is strictly ordered: an explicit caller value wins, then the
/// ambient page-level value, then absence. Empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    Explicit(String),
    Ambient(String),
    Absent,
}

impl LogoSource {
    pub fn resolve(explicit: Option<&str>, ambient: Option<&str>) -> Self {
        match (non_empty(explicit), non_empty(ambient)) {
            (Some(url), _) => LogoSource::Explicit(url.to_string()),
            (None, Some(url)) => LogoSource::Ambient(url.to_string()),
            (None, None) => LogoSource::Absent,
        }
    }

    pub fn candidate(&self) -> Option<&str> {
        match self {
            LogoSource::Explicit(url) | LogoSource::Ambient(url) => Some(url),
            LogoSource::Absent => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LogoSource::Explicit(_) => "explicit",
            LogoSource::Ambient(_) => "ambient",
            LogoSource::Absent => "absent",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins_over_ambient() {
        let source = LogoSource::resolve(
            Some("https://good.example/logo.svg"),
            Some("https://example.com/logo.png"),
        );
        assert_eq!(source, LogoSource::Explicit("https://good.example/logo.svg".to_string()));
        assert_eq!(source.candidate(), Some("https://good.example/logo.svg"));
    }

    #[test]
    fn test_empty_explicit_falls_through_to_ambient() {
        let source = LogoSource::resolve(Some(""), Some("https://example.com/logo.png"));
        assert_eq!(source.candidate(), Some("https://example.com/logo.png"));
        assert_eq!(source.kind(), "ambient");

        let source = LogoSource::resolve(None, Some("https://example.com/logo.png"));
        assert_eq!(source.kind(), "ambient");
    }

    #[test]
    fn test_nothing_configured_is_absent() {
        assert_eq!(LogoSource::resolve(None, None), LogoSource::Absent);
        assert_eq!(LogoSource::resolve(Some(""), Some("")), LogoSource::Absent);
        assert_eq!(LogoSource::Absent.candidate(), None);
    }
}
