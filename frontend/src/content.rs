use crate::config::PageVariant;
use crate::effects::typing::{TypeScript, TypeStep};

pub const STUDIO_NAME: &str = "TEAM CREATORS";
pub const WHATSAPP_NUMBER: &str = "1234567890";
pub const EMAIL_ADDRESS: &str = "hello@teamcreators.com";
pub const WHATSAPP_MESSAGE: &str = "Hi! I have a project inquiry.";
pub const EMAIL_SUBJECT: &str = "Project Inquiry";

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

pub fn mailto_link(address: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", address, urlencoding::encode(subject)),
        None => format!("mailto:{}", address),
    }
}

pub struct Service {
    pub glyph: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub coming_soon: bool,
}

pub struct Tech {
    pub glyph: Option<&'static str>,
    pub name: &'static str,
}

pub struct TechGroup {
    pub title: &'static str,
    pub techs: &'static [Tech],
}

pub struct PageCopy {
    pub heading: Option<&'static str>,
    pub tagline: Option<TypeScript>,
    pub intro: Option<&'static str>,
    pub intel: &'static [(&'static str, &'static str)],
    pub services_title: &'static str,
    pub services: &'static [Service],
    pub tech_title: &'static str,
    pub tech_groups: &'static [TechGroup],
    pub contact_blurb: &'static str,
    pub whatsapp_label: &'static str,
    pub email_label: &'static str,
    pub email_subject: Option<&'static str>,
}

pub const PROMPT_DESKTOP: TypeScript = TypeScript {
    steps: &[
        TypeStep::Text("Hold [H] to see our work"),
        TypeStep::Pause(2000),
        TypeStep::Text("Hold [S] for capabilities"),
        TypeStep::Pause(2000),
        TypeStep::Text("Hold [T] for tech stack"),
        TypeStep::Pause(2000),
        TypeStep::Text("Hold [C] for contact"),
        TypeStep::Pause(2000),
    ],
    repeat: true,
};

pub const PROMPT_MOBILE: &str = "Tap and Hold to see our work";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Theyala Social Platform",
        description: "Full social media app (chat, auth, content) for NovusTales LLC, built from the ground up.",
        coming_soon: false,
    },
    Project {
        title: "Danfe Tea AI Salesbot",
        description: "Custom AI-powered chatbot to boost sales and engagement for a US-based tea company.",
        coming_soon: false,
    },
    Project {
        title: "SRM Event Portal (Zoho Collab)",
        description: "Internal platform to manage college events for SRM's CTech department.",
        coming_soon: false,
    },
    Project {
        title: "Gameflix",
        description: "A web-based game streaming + discovery platform, like 'Steam meets Netflix'.",
        coming_soon: true,
    },
];

const FRONTEND: &[Tech] = &[
    Tech { glyph: Some("▲"), name: "Next.js" },
    Tech { glyph: Some("⚛"), name: "React" },
    Tech { glyph: Some("≈"), name: "Tailwind" },
    Tech { glyph: Some("TS"), name: "TypeScript" },
];

const BACKEND: &[Tech] = &[
    Tech { glyph: Some("⬢"), name: "Node.js" },
    Tech { glyph: Some("ex"), name: "Express" },
    Tech { glyph: Some("🔥"), name: "Firebase" },
    Tech { glyph: Some("⚡"), name: "Supabase" },
    Tech { glyph: Some("🍃"), name: "MongoDB" },
];

const DESIGN: &[Tech] = &[
    Tech { glyph: Some("◐"), name: "Figma" },
    Tech { glyph: Some("◉"), name: "Blender" },
    Tech { glyph: Some("△"), name: "Three.js" },
    Tech { glyph: None, name: "Shaders" },
];

static STUDIO: PageCopy = PageCopy {
    heading: None,
    tagline: Some(TypeScript {
        steps: &[
            TypeStep::Text("Connecting vision..."),
            TypeStep::Pause(2000),
            TypeStep::Text("Connecting vision... to reality."),
        ],
        repeat: false,
    }),
    intro: Some("We are a product engineering team specializing in building high-end digital experiences for serious clients."),
    intel: &[("STUDIO", STUDIO_NAME), ("CHANNEL", EMAIL_ADDRESS)],
    services_title: "Capabilities",
    services: &[
        Service {
            glyph: "🧠",
            title: "AI & Automation",
            blurb: "Custom AI agents, autonomous workflows, and intelligent automation to solve complex business problems.",
        },
        Service {
            glyph: "🖥",
            title: "Full-Stack Platforms",
            blurb: "Scalable web applications, company dashboards, and robust platforms built with best-in-class technology.",
        },
        Service {
            glyph: "🎨",
            title: "Immersive Experiences",
            blurb: "Aesthetic-first landing pages and digital installations using 3D, motion, and shader artistry.",
        },
    ],
    tech_title: "Technology_Stack",
    tech_groups: &[
        TechGroup { title: "Frontend", techs: FRONTEND },
        TechGroup { title: "Backend", techs: BACKEND },
        TechGroup {
            title: "AI / Automation",
            techs: &[
                Tech { glyph: Some("✦"), name: "OpenAI" },
                Tech { glyph: Some("⛓"), name: "Langchain" },
                Tech { glyph: None, name: "Agentic" },
                Tech { glyph: None, name: "Automation" },
            ],
        },
        TechGroup { title: "Design / 3D", techs: DESIGN },
    ],
    contact_blurb: "We partner with a select group of clients. If you have a serious project, we'd love to hear from you.",
    whatsapp_label: "Message on WhatsApp",
    email_label: "Send an Email",
    email_subject: Some(EMAIL_SUBJECT),
};

static SHOWCASE: PageCopy = PageCopy {
    heading: Some("Our Work & Expertise"),
    tagline: None,
    intro: None,
    intel: &[],
    services_title: "Services",
    services: &[
        Service {
            glyph: "🧠",
            title: "AI Integration",
            blurb: "Building AI-powered tools and chatbots for your brand.",
        },
        Service {
            glyph: "🖥",
            title: "Backend Systems",
            blurb: "Robust backend APIs and cloud infrastructure setup.",
        },
        Service {
            glyph: "🎨",
            title: "UI/UX Design",
            blurb: "Pixel-perfect and responsive user interfaces.",
        },
        Service {
            glyph: "⚛",
            title: "Frontend Development",
            blurb: "Modern React and Next.js web apps with animations.",
        },
    ],
    tech_title: "Tech Stack",
    tech_groups: &[
        TechGroup { title: "Frontend", techs: FRONTEND },
        TechGroup { title: "Backend", techs: BACKEND },
        TechGroup {
            title: "AI",
            techs: &[
                Tech { glyph: Some("✦"), name: "OpenAI" },
                Tech { glyph: Some("⛓"), name: "Langchain" },
                Tech { glyph: None, name: "Agentic AI" },
                Tech { glyph: None, name: "Automation" },
            ],
        },
        TechGroup { title: "Design & 3D", techs: DESIGN },
    ],
    contact_blurb: "Reach out to us anytime for your product needs. We're excited to help your brand shine online.",
    whatsapp_label: "WhatsApp Chat",
    email_label: "Send Email",
    email_subject: None,
};

pub fn copy(variant: PageVariant) -> &'static PageCopy {
    match variant {
        PageVariant::Studio => &STUDIO,
        PageVariant::Showcase => &SHOWCASE,
    }
}
