//! Static copy of the marketing pages.

pub const AGENCY_NAME: &str = "CreatorFlow";
pub const TAGLINE: &str = "Websites • Landing Pages • Redesigns";

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Creator Websites",
        description: "Personal brand sites",
    },
    Service {
        title: "Business Websites",
        description: "Professional company sites",
    },
    Service {
        title: "Landing Pages",
        description: "For products and services",
    },
    Service {
        title: "Redesigns",
        description: "Improve old websites",
    },
];

pub struct Work {
    pub name: &'static str,
    pub url: &'static str,
}

pub const PORTFOLIO: &[Work] = &[
    Work {
        name: "Enlead Digital",
        url: "https://enlead.figma.site/",
    },
    Work {
        name: "ViewMovement",
        url: "https://viewmovement.com",
    },
    Work {
        name: "ScaleBrandsLab",
        url: "https://www.scalebrandslab.com/",
    },
    Work {
        name: "FinTrack",
        url: "https://fintrack.scalebrandslab.com/",
    },
];

pub struct Step {
    pub number: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS: &[Step] = &[
    Step {
        number: "01",
        name: "VISION",
        title: "Share Your Vision",
        description: "Tell us about your website, your goals, and what you want to build. \
            We take the time to understand your idea before getting started.",
    },
    Step {
        number: "02",
        name: "BUILD",
        title: "Design & Build",
        description: "We design and develop a clean, modern website tailored to your needs, \
            ensuring it looks professional across all devices.",
    },
    Step {
        number: "03",
        name: "LAUNCH",
        title: "Launch Your Website",
        description: "Once everything is ready, your website goes live and is ready to be \
            shared with the world.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "Creator Flow didn't just redesign our site; they reimagined how we communicate \
        our value to the world's most discerning clients. The ROI was immediate.",
    author: "Julian Sterling",
    role: "CEO, UNITED GLOBAL",
};

pub const CONTACT_EMAIL: &str = "creatorflow.in@gmail.com";

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "https://www.instagram.com/creatorflow.co.in"),
    ("LinkedIn", "https://linkedin.com/in/yourhandle"),
    ("WhatsApp", "https://wa.me/919810093572"),
];
