use crate::ui::html::cn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
}

const BASE: &str = "inline-flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium rounded-md border shadow-sm transition active:scale-[.99]";

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Outline => "bg-white border-purple-200 text-purple-800 hover:bg-purple-50",
            ButtonVariant::Secondary => "bg-white text-purple-700 border-white/10 hover:bg-purple-50",
            ButtonVariant::Primary => "bg-gradient-to-r from-[#7B3FB3] to-[#C850C0] text-white border-transparent hover:from-[#6B33A0] hover:to-[#B240AE]",
        }
    }
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Lg => "px-5 py-3 text-base",
            ButtonSize::Default => "",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Button<'a> {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub kind: &'a str,
}

impl<'a> Button<'a> {
    pub fn new() -> Self {
        Self {
            kind: "button",
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn submit(mut self) -> Self {
        self.kind = "submit";
        self
    }

    /// `children` is trusted markup.
    pub fn render(&self, children: &str) -> String {
        format!(
            r#"<button type="{}" class="{}">{}</button>"#,
            self.kind,
            cn(&[BASE, self.variant.classes(), self.size.classes(), "rounded-2xl"]),
            children
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button_has_gradient() {
        let html = Button::new().render("Get a Quote");
        assert!(html.starts_with(r#"<button type="button""#));
        assert!(html.contains("from-[#7B3FB3]"));
        assert!(html.contains(">Get a Quote</button>"));
    }

    #[test]
    fn test_outline_large_submit() {
        let html = Button::new()
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Lg)
            .submit()
            .render("Submit");
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains("border-purple-200"));
        assert!(html.contains("px-5 py-3 text-base"));
        assert!(!html.contains("from-[#7B3FB3]"));
    }

    #[test]
    fn test_secondary_button_is_light() {
        let html = Button::new().variant(ButtonVariant::Secondary).render("Call Us");
        assert!(html.contains("text-purple-700"));
        assert!(!html.contains("from-[#7B3FB3]"));
    }
}
