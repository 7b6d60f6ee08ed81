use crate::ui::html::{cn, escape};

/// Two-letter initials badge shown whenever no logo image is displayable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monogram {
    initials: String,
}

impl Monogram {
    pub fn new(initials: impl Into<String>) -> Self {
        Self {
            initials: initials.into(),
        }
    }

    pub fn initials(&self) -> &str {
        &self.initials
    }

    pub fn render(&self, size: u32, class: &str) -> String {
        format!(
            r#"<div class="{}" style="width: {size}px; height: {size}px"><span class="font-extrabold" style="letter-spacing: 0.5px">{}</span></div>"#,
            cn(&[
                "inline-grid place-items-center rounded-2xl overflow-hidden",
                "bg-gradient-to-br from-[#7B3FB3] to-[#C850C0] text-white",
                "shadow-sm border border-purple-200",
                class,
            ]),
            escape(&self.initials)
        )
    }
}

impl Default for Monogram {
    fn default() -> Self {
        Self::new("HM")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let monogram = Monogram::default();
        assert_eq!(monogram.render(40, ""), monogram.render(40, ""));
        assert_ne!(monogram.render(40, ""), monogram.render(48, ""));
    }

    #[test]
    fn test_render_contains_initials_and_size() {
        let html = Monogram::default().render(48, "");
        assert!(html.contains("width: 48px; height: 48px"));
        assert!(html.contains(">HM</span>"));
        assert!(html.contains("from-[#7B3FB3] to-[#C850C0]"));
    }
}
