//! Marketing copy and the fixed tables the pages render.
//!
//! Icons are referenced by name so this module stays free of UI types; the
//! names map to files under `public/icons`.

use serde::Serialize;
use serde_json::{Value, json};

pub const BRAND: &str = "Nexus";

/// Title and description of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_PAGE: PageMeta = PageMeta {
    path: "/",
    title: "Nexus - Field Sales OS",
    description: "The mobile-first CRM for field sales. Log visits with photo and GPS proof, \
                  manage leads on the go, and track your team in real time.",
};

pub const FEATURES_PAGE: PageMeta = PageMeta {
    path: "/features",
    title: "Features - Nexus",
    description: "Everything you need to manage field operations, from lead capture to team payroll.",
};

pub const PRICING_PAGE: PageMeta = PageMeta {
    path: "/pricing",
    title: "Pricing - Nexus",
    description: "Pay per team. Scale as you grow. 14-day free trial on all plans.",
};

pub const ABOUT_PAGE: PageMeta = PageMeta {
    path: "/about",
    title: "About - Nexus",
    description: "We're replacing outdated clipboards and spreadsheets with a seamless, \
                  mobile-first operating system designed for the modern field team.",
};

pub const CONTACT_PAGE: PageMeta = PageMeta {
    path: "/contact",
    title: "Contact - Nexus",
    description: "Ready to transform your field operations? Our team is standing by to give \
                  you a personalized demo.",
};

/// Site-wide metadata resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    /// Canonical origin without a trailing slash
    pub public_url: String,
}

impl SiteMeta {
    pub fn new(public_url: impl Into<String>) -> Self {
        Self {
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of a route.
    pub fn canonical(&self, path: &str) -> String {
        if path == "/" {
            format!("{}/", self.public_url)
        } else {
            format!("{}{}", self.public_url, path)
        }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self::new("https://nexus.inc")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Product",
        path: "/features",
    },
    NavLink {
        label: "Pricing",
        path: "/pricing",
    },
    NavLink {
        label: "About",
        path: "/about",
    },
    NavLink {
        label: "Contact",
        path: "/contact",
    },
];

/// Exact-match active check used by the navbar.
pub fn is_active(current: &str, link: &str) -> bool {
    let trimmed = current.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    trimmed == link
}

/// Illustration shown next to a feature section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum ArtVariant {
    #[display("mobile")]
    Mobile,
    #[display("dashboard")]
    Dashboard,
    #[display("tech")]
    Tech,
    #[display("pricing")]
    Pricing,
    #[display("billing")]
    Billing,
}

impl ArtVariant {
    /// Ordinal label shown above the section title.
    pub fn ordinal(self) -> &'static str {
        match self {
            ArtVariant::Mobile => "Feature 01",
            ArtVariant::Dashboard => "Feature 02",
            _ => "Feature 03",
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ArtVariant::Mobile
    }

    /// Scroll distance, in pixels, the section stays pinned while its art
    /// plays through. Only the sync engine art is pinned.
    pub fn pin_distance(self) -> Option<f64> {
        match self {
            ArtVariant::Tech => Some(1500.0),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureBlock {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub bullets: &'static [&'static str],
    pub art: ArtVariant,
    pub reversed: bool,
}

const OFFLINE_FIRST: FeatureBlock = FeatureBlock {
    title: "Offline-First PWA",
    description: "Sales never stop for bad signal. Our PWA uses IndexedDB to store leads and \
                  visit logs locally, syncing automatically via background sockets when online.",
    icon: "wifi-off",
    bullets: &[
        "Local Database Queue",
        "Background Sync",
        "Zero Data Loss",
        "Native-Like Speed",
    ],
    art: ArtVariant::Tech,
    reversed: false,
};

const AUTOMATED_REVENUE: FeatureBlock = FeatureBlock {
    title: "Automated Revenue",
    description: "Handle subscriptions, usage-based billing, and payouts with zero code. Watch \
                  your MRR grow in real-time with our transparent billing engine.",
    icon: "dollar-sign",
    bullets: &[
        "Smart Invoicing",
        "Usage Metering",
        "Global Payouts",
        "Tax Handling",
    ],
    art: ArtVariant::Billing,
    reversed: true,
};

pub const HOME_FEATURES: [FeatureBlock; 4] = [
    FeatureBlock {
        title: "Photo-Verified Visits",
        description: "Eliminate fake reports. Field staff capture 2 photos, customer and \
                      location, with auto-GPS stamps for indisputable proof of every visit.",
        icon: "camera",
        bullets: &[
            "Double Photo Capture",
            "Auto-GPS Tagging",
            "Visit Verification",
            "Fraud Prevention",
        ],
        art: ArtVariant::Mobile,
        reversed: false,
    },
    FeatureBlock {
        title: "Live Team Command Center",
        description: "Visualize your workforce in real-time. The manager dashboard offers map \
                      clustering, active route playback, and daily visit timelines for every \
                      sales user.",
        icon: "map",
        bullets: &[
            "Real-time GPS Clustering",
            "Activity Timelines",
            "Attendance Logs",
            "Territory Filters",
        ],
        art: ArtVariant::Dashboard,
        reversed: true,
    },
    OFFLINE_FIRST,
    AUTOMATED_REVENUE,
];

pub const PRODUCT_FEATURES: [FeatureBlock; 4] = [
    FeatureBlock {
        title: "Lead & Follow-Up Management",
        description: "Never drop a lead. Capture names, notes, and sources on the fly. \
                      Schedule callbacks and view your daily follow-up queue directly from the \
                      home screen.",
        icon: "database",
        bullets: &[
            "Exact Location Capture",
            "One-Tap Navigation",
            "Status Tracking",
            "History Logs",
        ],
        art: ArtVariant::Mobile,
        reversed: false,
    },
    FeatureBlock {
        title: "Role-Based Team Control",
        description: "Secure your data. Assign specific roles (CEO, Manager, Sales, or Staff) \
                      to control access to sensitive analytics and settings.",
        icon: "shield-check",
        bullets: &[
            "Multi-Role Support",
            "Attendance Tracking",
            "Check-in/Out Logs",
            "User Deactivation",
        ],
        art: ArtVariant::Dashboard,
        reversed: true,
    },
    OFFLINE_FIRST,
    AUTOMATED_REVENUE,
];

/// Which price column a visitor is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum BillingCycle {
    #[display("Monthly")]
    Monthly,
    #[default]
    #[display("Yearly")]
    Annual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub blurb: &'static str,
    /// Per-month price billed monthly, `None` for quoted plans
    pub monthly: Option<u32>,
    /// Per-month price billed yearly
    pub annual: Option<u32>,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

impl PricingTier {
    pub fn price(&self, cycle: BillingCycle) -> Option<u32> {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annual => self.annual,
        }
    }

    pub fn price_label(&self, cycle: BillingCycle) -> String {
        match self.price(cycle) {
            Some(price) => format!("${price}"),
            None => "Custom".to_string(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.monthly.is_none() && self.annual.is_none()
    }

    pub fn cta_label(&self) -> &'static str {
        if self.is_custom() {
            "Contact Sales"
        } else {
            "Start 14-Day Trial"
        }
    }
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        blurb: "Essential tools for small local teams.",
        monthly: Some(29),
        annual: Some(19),
        features: &[
            "Up to 5 Field Users",
            "Photo Visit Logging",
            "Real-time GPS",
            "7-Day History",
            "Basic Support",
        ],
        highlight: false,
    },
    PricingTier {
        name: "Growth",
        blurb: "Advanced control for scaling organizations.",
        monthly: Some(59),
        annual: Some(49),
        features: &[
            "Up to 25 Field Users",
            "Unlimited History",
            "Route Playback",
            "Follow-up Scheduling",
            "Role Management",
        ],
        highlight: true,
    },
    PricingTier {
        name: "Enterprise",
        blurb: "Custom solutions for national operations.",
        monthly: None,
        annual: None,
        features: &[
            "Unlimited Users",
            "API Access",
            "Custom Integration",
            "Dedicated Account Manager",
            "SLA Uptime",
        ],
        highlight: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// Company initials shown as a small badge
    pub logo: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "Nexus allows us to scale our field team without losing visibility. It's the \
                operating system we've been waiting for.",
        author: "Elena Rodriguez",
        role: "VP Ops, SolarFlow",
        logo: "SF",
        avatar: "https://i.pravatar.cc/150?img=47",
    },
    Testimonial {
        quote: "The automated billing features alone saved us 20 hours a week. It pays for \
                itself ten times over.",
        author: "Marcus Chen",
        role: "Director, UrbanLogistics",
        logo: "UL",
        avatar: "https://i.pravatar.cc/150?img=12",
    },
    Testimonial {
        quote: "Finally, a CRM that field reps actually want to use. The offline mode is flawless.",
        author: "Sarah Johnson",
        role: "Head of Sales, TechStream",
        logo: "TS",
        avatar: "https://i.pravatar.cc/150?img=32",
    },
    Testimonial {
        quote: "We've increased our daily visit capacity by 35% since switching to Nexus. Data \
                quality is up, fraud is down.",
        author: "David Park",
        role: "Regional Manager, Apex",
        logo: "AP",
        avatar: "https://i.pravatar.cc/150?img=12",
    },
    Testimonial {
        quote: "Implementation took days, not months. The support team is incredible.",
        author: "Jessica Wu",
        role: "CTO, BuildSmart",
        logo: "BS",
        avatar: "https://i.pravatar.cc/150?img=47",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClientLogo {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CLIENT_LOGOS: [ClientLogo; 7] = [
    ClientLogo {
        name: "Acme Corp",
        icon: "box",
    },
    ClientLogo {
        name: "Global Bank",
        icon: "globe",
    },
    ClientLogo {
        name: "Starlight",
        icon: "sparkles",
    },
    ClientLogo {
        name: "Umbrella",
        icon: "hexagon",
    },
    ClientLogo {
        name: "Cyberdyne",
        icon: "zap",
    },
    ClientLogo {
        name: "Massive",
        icon: "triangle",
    },
    ClientLogo {
        name: "Vortex",
        icon: "circle",
    },
];

/// Repeat a list `times` over, for marquees that loop by sliding one copy
/// out of view.
pub fn repeated<T: Copy>(items: &[T], times: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * times);
    for _ in 0..times {
        out.extend_from_slice(items);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Active Users",
        value: "50k+",
    },
    Stat {
        label: "Visits Logged",
        value: "10M+",
    },
    Stat {
        label: "Countries",
        value: "30+",
    },
    Stat {
        label: "Uptime",
        value: "99.99%",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [CompanyValue; 3] = [
    CompanyValue {
        title: "Accountability",
        description: "Trust is built on transparency. Verified data ensures everyone is on the \
                      same page.",
    },
    CompanyValue {
        title: "Reliability",
        description: "Offline-first means work never stops. We engineer for the edge cases so \
                      you don't have to.",
    },
    CompanyValue {
        title: "Simplicity",
        description: "Complex doesn't mean complicated. We strive for consumer-grade UX in \
                      enterprise tools.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
    pub portrait: &'static str,
}

pub const LEADERSHIP: [Leader; 4] = [
    Leader {
        name: "Alex Morgan",
        role: "CEO & Founder",
        portrait: "https://i.pravatar.cc/400?img=11",
    },
    Leader {
        name: "Sarah Chen",
        role: "CTO",
        portrait: "https://i.pravatar.cc/400?img=5",
    },
    Leader {
        name: "James Wilson",
        role: "Head of Product",
        portrait: "https://i.pravatar.cc/400?img=3",
    },
    Leader {
        name: "Emily Davis",
        role: "VP of Sales",
        portrait: "https://i.pravatar.cc/400?img=9",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: "mail",
        title: "Email sales",
        value: "sales@nexus.inc",
    },
    ContactChannel {
        icon: "map-pin",
        title: "Visit our office",
        value: "100 Innovation Dr, SF, CA",
    },
    ContactChannel {
        icon: "phone",
        title: "Call support",
        value: "+1 (555) 123-4567",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Product",
        links: &[
            FooterLink {
                label: "Features",
                href: "/features",
            },
            FooterLink {
                label: "Pricing",
                href: "/pricing",
            },
            FooterLink {
                label: "Enterprise",
                href: "/contact",
            },
            FooterLink {
                label: "Roadmap",
                href: "/features",
            },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink {
                label: "About",
                href: "/about",
            },
            FooterLink {
                label: "Contact",
                href: "/contact",
            },
            FooterLink {
                label: "Careers",
                href: "#",
            },
            FooterLink {
                label: "Blog",
                href: "#",
            },
        ],
    },
    FooterColumn {
        title: "Connect",
        links: &[
            FooterLink {
                label: "hello@nexus.com",
                href: "mailto:hello@nexus.com",
            },
            FooterLink {
                label: "Twitter",
                href: "#",
            },
            FooterLink {
                label: "Privacy Policy",
                href: "#",
            },
            FooterLink {
                label: "Terms of Service",
                href: "#",
            },
        ],
    },
];

/// schema.org description of the organisation and its plans, embedded in
/// the page head as JSON-LD.
pub fn structured_data(site: &SiteMeta) -> Value {
    let offers: Vec<Value> = PRICING_TIERS
        .iter()
        .filter_map(|tier| {
            let price = tier.price(BillingCycle::Monthly)?;
            Some(json!({
                "@type": "Offer",
                "name": tier.name,
                "description": tier.blurb,
                "price": price.to_string(),
                "priceCurrency": "USD",
                "url": site.canonical(PRICING_PAGE.path),
            }))
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Organization",
                "name": format!("{BRAND} Inc."),
                "url": site.canonical(HOME_PAGE.path),
                "email": "hello@nexus.com",
            },
            {
                "@type": "SoftwareApplication",
                "name": BRAND,
                "applicationCategory": "BusinessApplication",
                "operatingSystem": "Web, iOS, Android",
                "description": HOME_PAGE.description,
                "offers": offers,
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_is_default_cycle() {
        assert_eq!(BillingCycle::default(), BillingCycle::Annual);
        assert_eq!(BillingCycle::Annual.to_string(), "Yearly");
    }

    #[test]
    fn test_tier_prices() {
        let [starter, growth, enterprise] = PRICING_TIERS;

        assert_eq!(starter.price_label(BillingCycle::Annual), "$19");
        assert_eq!(starter.price_label(BillingCycle::Monthly), "$29");
        assert_eq!(growth.price_label(BillingCycle::Annual), "$49");
        assert_eq!(growth.price_label(BillingCycle::Monthly), "$59");
        assert_eq!(enterprise.price_label(BillingCycle::Annual), "Custom");
        assert_eq!(enterprise.cta_label(), "Contact Sales");
        assert_eq!(starter.cta_label(), "Start 14-Day Trial");
        assert!(growth.highlight);
    }

    #[test]
    fn test_only_sync_art_is_pinned() {
        assert_eq!(ArtVariant::Tech.pin_distance(), Some(1500.0));
        assert_eq!(ArtVariant::Billing.pin_distance(), None);
        assert_eq!(ArtVariant::Mobile.pin_distance(), None);
    }

    #[test]
    fn test_active_link_matching() {
        assert!(is_active("/pricing", "/pricing"));
        assert!(is_active("/pricing/", "/pricing"));
        assert!(is_active("/", "/"));
        assert!(!is_active("/pricing", "/features"));
        assert!(!is_active("/", "/features"));
    }

    #[test]
    fn test_canonical_urls() {
        let site = SiteMeta::new("https://example.com/");
        assert_eq!(site.canonical("/"), "https://example.com/");
        assert_eq!(site.canonical("/about"), "https://example.com/about");
    }

    #[test]
    fn test_art_ordinals() {
        assert_eq!(ArtVariant::Mobile.ordinal(), "Feature 01");
        assert_eq!(ArtVariant::Dashboard.ordinal(), "Feature 02");
        assert_eq!(ArtVariant::Billing.ordinal(), "Feature 03");
    }

    #[test]
    fn test_feature_layouts_alternate() {
        for features in [HOME_FEATURES, PRODUCT_FEATURES] {
            let flags: Vec<bool> = features.iter().map(|f| f.reversed).collect();
            assert_eq!(flags, [false, true, false, true]);
        }
    }

    #[test]
    fn test_repeated() {
        let doubled = repeated(&CLIENT_LOGOS, 2);
        assert_eq!(doubled.len(), 14);
        assert_eq!(doubled[7], CLIENT_LOGOS[0]);
    }

    #[test]
    fn test_structured_data_lists_priced_plans() {
        let data = structured_data(&SiteMeta::default());
        let offers = data["@graph"][1]["offers"].as_array().unwrap();

        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0]["name"], "Starter");
        assert_eq!(offers[0]["price"], "29");
        assert_eq!(data["@graph"][0]["url"], "https://nexus.inc/");
    }
}
