use crate::domain::model::Icon;
use crate::ui::html::cn;

impl Icon {
    fn paths(self) -> &'static str {
        match self {
            Icon::Sparkles => {
                r#"<path d="M12 3l1.6 3.8L18 8l-4.4 1.2L12 13l-1.6-3.8L6 8l4.4-1.2L12 3z"/><path d="M5 16l.9 2.1L8 19l-2.1.6L5 22l-.9-2.4L2 19l2.1-.9L5 16z"/>"#
            }
            Icon::Broom => {
                r#"<path d="M3 21c5-2 9-6 12-12"/><rect x="12" y="5" width="9" height="3" rx="1"/><path d="M15 8v3M18 8v3M21 8v3"/>"#
            }
            Icon::Gutter => {
                r#"<path d="M3 6h18v4c0 3-3 6-6 6H9c-3 0-6-3-6-6V6z"/><path d="M8 20c1 .5 2 .5 3 0m2 0c1 .5 2 .5 3 0"/>"#
            }
            Icon::Floor => {
                r#"<rect x="3" y="6" width="18" height="12" rx="1"/><path d="M9 6v12M15 6v12M3 12h18"/>"#
            }
            Icon::Trash => {
                r#"<path d="M4 7h16"/><path d="M9 7V5h6v2"/><rect x="6" y="7" width="12" height="13" rx="2"/><path d="M10 11v6M14 11v6"/>"#
            }
            Icon::Paint => {
                r#"<rect x="3" y="4" width="14" height="8" rx="2"/><path d="M17 8h3"/><rect x="8" y="14" width="5" height="6" rx="1"/>"#
            }
            Icon::Pressure => {
                r#"<path d="M3 15h8l3-6h4"/><circle cx="18" cy="9" r="1"/><path d="M18 9c2 0 3 1 3 3"/>"#
            }
        }
    }
}

/// Inline stroke icon on a 24x24 grid, scaled to `size` pixels.
pub fn render_icon(icon: Icon, size: u32, class: &str) -> String {
    format!(
        r#"<svg viewBox="0 0 24 24" width="{size}" height="{size}" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round" class="{}" aria-hidden="true">{}</svg>"#,
        cn(&["shrink-0", class]),
        icon.paths()
    )
}
