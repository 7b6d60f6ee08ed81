use crate::domain::model::Icon;
use crate::logo::LogoSet;
use crate::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::ui::contact::ContactForm;
use crate::ui::content::{
    CONTACT_COPY, CONTACT_HEADLINE, HERO_COPY, HERO_HEADLINE, NAV_LINKS, SERVICES, SERVICES_COPY,
    SERVICES_HEADLINE, STATS,
};
use crate::ui::html::escape;
use crate::ui::icons::render_icon;

pub struct PageContext<'a> {
    pub title: &'a str,
    pub site_name: &'a str,
    pub tailwind_cdn: &'a str,
    pub footer_year: i32,
    pub logos: &'a LogoSet,
    pub contact: &'a ContactForm,
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let body = [
        header(ctx),
        hero(ctx),
        services(),
        stats(),
        contact(ctx),
        footer(ctx),
    ]
    .concat();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{}</title>",
            r#"<script src="{}"></script></head>"#,
            r#"<body><div class="min-h-screen bg-gradient-to-b from-[#E7D5F7]/60 via-white to-[#E7D5F7]/40 text-[#1E1E1E]">{}</div></body></html>"#,
            "\n"
        ),
        escape(ctx.title),
        escape(ctx.tailwind_cdn),
        body
    )
}

fn header(ctx: &PageContext<'_>) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="hover:text-[#C850C0]">{}</a>"#,
                link.href,
                escape(link.label)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<header class="sticky top-0 z-40 bg-white/80 backdrop-blur border-b border-purple-200">"#,
            r#"<div class="mx-auto max-w-7xl px-4 h-16 flex items-center justify-between">"#,
            r#"<div class="flex items-center gap-3 font-semibold text-[#1E1E1E]">{}<span>{}</span></div>"#,
            r#"<nav class="hidden md:flex items-center gap-8 text-sm">{}</nav>"#,
            r##"<a href="#contact" class="hidden sm:block">{}</a>"##,
            "</div></header>"
        ),
        ctx.logos.header.render(),
        escape(ctx.site_name),
        nav,
        Button::new().render("Get a Quote")
    )
}

fn hero(ctx: &PageContext<'_>) -> String {
    let estimate = Button::new()
        .size(ButtonSize::Lg)
        .render(&format!("{} Request Free Estimate", render_icon(Icon::Sparkles, 18, "")));
    let view_services = Button::new()
        .size(ButtonSize::Lg)
        .variant(ButtonVariant::Outline)
        .render(&format!("{} View Services", render_icon(Icon::Broom, 18, "")));

    format!(
        concat!(
            r#"<section class="relative overflow-hidden py-20 lg:py-28">"#,
            r#"<div class="mx-auto max-w-7xl px-4 grid lg:grid-cols-2 gap-10 items-center"><div>"#,
            r#"<h1 class="text-4xl sm:text-5xl font-extrabold tracking-tight leading-tight text-[#7B3FB3]">{}</h1>"#,
            r#"<p class="mt-5 text-lg text-[#1E1E1E]/80 max-w-xl">{}</p>"#,
            r##"<div class="mt-8 flex flex-wrap gap-4"><a href="#contact">{}</a><a href="#services">{}</a></div>"##,
            r#"</div><div><div class="flex justify-center">{}</div></div>"#,
            "</div></section>"
        ),
        escape(HERO_HEADLINE),
        escape(HERO_COPY),
        estimate,
        view_services,
        ctx.logos.showcase.render()
    )
}

fn services() -> String {
    let cards: String = SERVICES
        .iter()
        .map(|s| {
            format!(
                concat!(
                    r#"<div class="border rounded-2xl p-5 bg-white shadow-sm hover:shadow-md transition"><div class="flex items-start gap-3">"#,
                    r#"<div class="h-10 w-10 grid place-items-center rounded-xl bg-[#E7D5F7] text-[#7B3FB3]">{}</div>"#,
                    r#"<div><h3 class="font-semibold text-[#1E1E1E]">{}</h3><p class="text-sm text-[#1E1E1E]/70 mt-1">{}</p></div>"#,
                    "</div></div>"
                ),
                render_icon(s.icon, 20, ""),
                escape(s.title),
                escape(s.description)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<section id="services" class="py-16 bg-white"><div class="mx-auto max-w-7xl px-4">"#,
            r#"<div class="text-center mb-10"><h2 class="text-3xl sm:text-4xl font-bold tracking-tight text-[#7B3FB3]">{}</h2>"#,
            r#"<p class="mt-3 text-[#1E1E1E]/80 max-w-2xl mx-auto">{}</p></div>"#,
            r#"<div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">{}</div>"#,
            "</div></section>"
        ),
        escape(SERVICES_HEADLINE),
        escape(SERVICES_COPY),
        cards
    )
}

fn stats() -> String {
    let cards: String = STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="rounded-2xl border bg-white p-5 text-center"><p class="text-2xl font-bold text-[#7B3FB3]">{}</p><p class="text-sm text-[#1E1E1E]/70">{}</p></div>"#,
                escape(stat.value),
                escape(stat.label)
            )
        })
        .collect();

    format!(
        r#"<section id="about" class="py-16 bg-[#E7D5F7]/30"><div class="mx-auto max-w-6xl px-4 grid md:grid-cols-3 gap-4">{}</div></section>"#,
        cards
    )
}

fn contact(ctx: &PageContext<'_>) -> String {
    format!(
        concat!(
            r#"<section id="contact" class="py-16 bg-[#E7D5F7]/40"><div class="mx-auto max-w-4xl px-4">"#,
            r#"<div class="text-center mb-10"><h2 class="text-3xl font-bold tracking-tight text-[#7B3FB3]">{}</h2>"#,
            r#"<p class="mt-3 text-[#1E1E1E]/80">{}</p></div>"#,
            "{}</div></section>"
        ),
        escape(CONTACT_HEADLINE),
        escape(CONTACT_COPY),
        ctx.contact.render()
    )
}

fn footer(ctx: &PageContext<'_>) -> String {
    format!(
        concat!(
            r#"<footer class="border-t bg-white py-10 text-center text-[#1E1E1E]/70">"#,
            r#"<div class="mx-auto mb-3">{}</div>"#,
            "<p>© {} {}. All rights reserved.</p></footer>"
        ),
        ctx.logos.footer.render(),
        ctx.footer_year,
        escape(ctx.site_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::LogoSizes;
    use crate::logo::{Brand, LogoSource};

    fn page(source: LogoSource) -> String {
        let logos = LogoSet::mount(source, LogoSizes::default(), Brand::default());
        let contact = ContactForm::new();
        render_page(&PageContext {
            title: "HavenMaids LLC",
            site_name: "HavenMaids LLC",
            tailwind_cdn: "https://cdn.tailwindcss.com",
            footer_year: 2026,
            logos: &logos,
            contact: &contact,
        })
    }

    #[test]
    fn test_page_contains_every_section() {
        let html = page(LogoSource::Absent);
        assert!(html.starts_with("<!DOCTYPE html>"));
        for id in [r#"id="services""#, r#"id="about""#, r#"id="contact""#] {
            assert!(html.contains(id), "missing {}", id);
        }
        for service in SERVICES {
            assert!(html.contains(service.title));
        }
        assert!(html.contains("24–48h"));
        assert!(html.contains("© 2026 HavenMaids LLC. All rights reserved."));
    }

    #[test]
    fn test_absent_logo_renders_no_images() {
        let html = page(LogoSource::Absent);
        assert!(!html.contains("<img"));
        assert_eq!(html.matches(">HM</span>").count(), 3);
    }

    #[test]
    fn test_logo_url_reaches_every_instance() {
        let html = page(LogoSource::Explicit("https://cdn.example/logo.png".to_string()));
        assert_eq!(html.matches(r#"src="https://cdn.example/logo.png""#).count(), 3);
        assert_eq!(html.matches("<template>").count(), 4);
    }
}
