use crate::domain::model::{Icon, NavLink, ServiceEntry, StatCard};

pub const HERO_HEADLINE: &str = "Premium Cleaning & Property Care";
pub const HERO_COPY: &str = "HavenMaids LLC delivers professional deep cleaning, maid services, gutter cleaning, floor waxing, junk removal, painting, and pressure washing for residential and commercial clients.";

pub const SERVICES_HEADLINE: &str = "Comprehensive Services";
pub const SERVICES_COPY: &str = "Flexible one‑time projects and reliable recurring schedules tailored to your property’s needs.";

pub const CONTACT_HEADLINE: &str = "Request a Free Quote";
pub const CONTACT_COPY: &str = "Tell us about your property and preferred timing. We’ll respond with a tailored estimate.";

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const SERVICES: [ServiceEntry; 7] = [
    ServiceEntry {
        icon: Icon::Sparkles,
        title: "Deep Cleaning",
        description: "Top-to-bottom detail: kitchens, baths, baseboards, vents, and high-touch surfaces.",
    },
    ServiceEntry {
        icon: Icon::Broom,
        title: "Maid Services",
        description: "Recurring weekly, bi-weekly, or monthly maintenance cleans.",
    },
    ServiceEntry {
        icon: Icon::Gutter,
        title: "Gutter Cleaning",
        description: "Remove debris and restore flow to protect roof and foundation.",
    },
    ServiceEntry {
        icon: Icon::Floor,
        title: "Floor Waxing",
        description: "Strip, seal, and high-gloss finishes for resilient floors.",
    },
    ServiceEntry {
        icon: Icon::Trash,
        title: "Junk Removal",
        description: "Fast haul-away for garage, move-out, renovation, and office cleanouts.",
    },
    ServiceEntry {
        icon: Icon::Paint,
        title: "Painting",
        description: "Interior/exterior touch-ups and refreshes with durable finishes.",
    },
    ServiceEntry {
        icon: Icon::Pressure,
        title: "Pressure Washing",
        description: "Driveways, siding, and patios restored to like-new curb appeal.",
    },
];

pub const STATS: [StatCard; 3] = [
    StatCard { value: "98%", label: "Customer satisfaction" },
    StatCard { value: "24–48h", label: "Typical scheduling window" },
    StatCard { value: "Bonded", label: "Insured & background‑checked" },
];
