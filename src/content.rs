//! Authoring-time page content. Nothing here is mutated at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Award,
    BarChart,
    Brain,
    CheckCircle,
    Code,
    Cpu,
    Database,
    Globe,
    Menu,
    Message,
    Moon,
    Rocket,
    Server,
    Shield,
    Sparkles,
    Sun,
    Terminal,
    TrendingUp,
    Close,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Award => "🏅",
            Icon::BarChart => "📊",
            Icon::Brain => "🧠",
            Icon::CheckCircle => "✔",
            Icon::Code => "</>",
            Icon::Cpu => "▣",
            Icon::Database => "🗄",
            Icon::Globe => "🌐",
            Icon::Menu => "☰",
            Icon::Message => "💬",
            Icon::Moon => "☾",
            Icon::Rocket => "🚀",
            Icon::Server => "🖥",
            Icon::Shield => "🛡",
            Icon::Sparkles => "✨",
            Icon::Sun => "☀",
            Icon::Terminal => ">_",
            Icon::TrendingUp => "📈",
            Icon::Close => "✕",
            Icon::Zap => "⚡",
        }
    }
}

/// Accent colour used for icons and timeline labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Emerald,
    Blue,
    Purple,
    Orange,
    Yellow,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Emerald => "tone-emerald",
            Tone::Blue => "tone-blue",
            Tone::Purple => "tone-purple",
            Tone::Orange => "tone-orange",
            Tone::Yellow => "tone-yellow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CertificationRecord {
    pub name: &'static str,
    pub org: &'static str,
    pub date: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompetencyRecord {
    pub subject: &'static str,
    pub level: &'static str,
    pub grade: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityCard {
    pub icon: Icon,
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub icon: Icon,
    pub tone: Tone,
    pub title: &'static str,
    pub summary: &'static str,
    pub featured: bool,
    pub actions: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLinks {
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub phone_display: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const OWNER_NAME: &str = "INGABIRE Alain";
pub const REGISTRATION_NO: &str = "BBICTR/2023/69217";
pub const PROFILE_IMAGE: &str = "alain-profile.jpg";

/// Section `id` attributes. Components render these and nav items link to them.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const SKILLS: &str = "skills";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const PROJECTS: &str = "projects";
    pub const EXPERIENCE: &str = "experience";
    pub const CONTACT: &str = "contact";

    pub const ALL: &[&str] = &[HOME, SKILLS, CERTIFICATIONS, PROJECTS, EXPERIENCE, CONTACT];
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: anchors::HOME, label: "Home" },
    NavItem { id: anchors::SKILLS, label: "Skills" },
    NavItem { id: anchors::EXPERIENCE, label: "Experience" },
    NavItem { id: anchors::PROJECTS, label: "Projects" },
    NavItem { id: anchors::CONTACT, label: "Contact" },
];

pub const CERTIFICATIONS: &[CertificationRecord] = &[
    CertificationRecord {
        name: "Legacy Responsive Web Design",
        org: "freeCodeCamp",
        date: "Sept 2025",
        icon: Icon::Code,
        tone: Tone::Orange,
    },
    CertificationRecord {
        name: "Virtual Assistant (Digital Age)",
        org: "ALX",
        date: "March 2025",
        icon: Icon::Globe,
        tone: Tone::Blue,
    },
    CertificationRecord {
        name: "Software Development",
        org: "IDA",
        date: "Jan 2026",
        icon: Icon::Terminal,
        tone: Tone::Emerald,
    },
    CertificationRecord {
        name: "Professional Foundations",
        org: "ALX",
        date: "August 2024",
        icon: Icon::Award,
        tone: Tone::Purple,
    },
    CertificationRecord {
        name: "Work Ready Now",
        org: "Akazi Kanoze Access",
        date: "2023",
        icon: Icon::Zap,
        tone: Tone::Yellow,
    },
];

pub const COMPETENCIES: &[CompetencyRecord] = &[
    CompetencyRecord {
        subject: "ICT in Business & E-commerce",
        level: "Advanced Proficiency",
        grade: "Grade A (81%)",
    },
    CompetencyRecord {
        subject: "Database Design & Management",
        level: "Technical Mastery",
        grade: "Grade B (76%)",
    },
    CompetencyRecord {
        subject: "Human Computer Interaction",
        level: "UI/UX Specialist",
        grade: "Grade B (76%)",
    },
    CompetencyRecord {
        subject: "Computer Networks",
        level: "Infrastructure Logic",
        grade: "Grade B (75%)",
    },
];

pub const CAPABILITIES: &[CapabilityCard] = &[
    CapabilityCard {
        icon: Icon::Cpu,
        title: "High-Conversion Interfaces",
        summary: "Developing performant React + Vite and React Native applications that drive user engagement.",
    },
    CapabilityCard {
        icon: Icon::Server,
        title: "Scalable Backend Logic",
        summary: "Designing secure Django systems and PostgreSQL databases with Technical Mastery.",
    },
    CapabilityCard {
        icon: Icon::BarChart,
        title: "Business Intelligence",
        summary: "Applying BBICT principles, QuickBooks, and E-commerce Strategy to solve enterprise challenges.",
    },
];

pub const PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        icon: Icon::Brain,
        tone: Tone::Emerald,
        title: "AI Task Streamliner",
        summary: "Automating business allocation using Python and AI logic. Focuses on reducing operational overhead with custom algorithms.",
        featured: true,
        actions: &["Case Study", "Logic Flow"],
    },
    ProjectCard {
        icon: Icon::Database,
        tone: Tone::Blue,
        title: "Business Solution",
        summary: "Built a secure Django-React web application managing inventory and transactions, leveraging E-commerce proficiency.",
        featured: false,
        actions: &[],
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        period: "2024 — 2025",
        role: "Marketing Manager & Store Keeper",
        organization: "Cards From Africa (CFA)",
        tone: Tone::Emerald,
    },
    ExperienceEntry {
        period: "2023 — 2024",
        role: "Facilitator Intern",
        organization: "TRI-RWANDA+ & Gold YOUTH",
        tone: Tone::Purple,
    },
];

pub const CONTACT: ContactLinks = ContactLinks {
    whatsapp: "https://wa.me/250791058764",
    email: "alaingabire5@gmail.com",
    phone_display: "+250 791 058 764",
    github: "https://github.com/MrIngabire",
    linkedin: "https://www.linkedin.com/in/ingabire-alain-893327309",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_ids_are_unique_and_point_at_sections() {
        let mut seen = HashSet::new();
        for item in NAV_ITEMS {
            assert!(seen.insert(item.id), "duplicate nav id {}", item.id);
            assert!(anchors::ALL.contains(&item.id), "no section for {}", item.id);
        }
    }

    #[test]
    fn section_anchors_are_unique_and_valid_ids() {
        let unique: HashSet<_> = anchors::ALL.iter().collect();
        assert_eq!(unique.len(), anchors::ALL.len());
        for id in anchors::ALL {
            assert!(!id.is_empty());
            assert!(!id.contains(|c: char| c.is_whitespace() || c == '#'), "{id}");
        }
    }

    #[test]
    fn nav_href_is_anchor() {
        assert_eq!(NAV_ITEMS[0].href(), "#home");
        assert!(NAV_ITEMS.iter().all(|item| item.href() == format!("#{}", item.id)));
    }

    #[test]
    fn content_lists_keep_authoring_order() {
        assert_eq!(CERTIFICATIONS.len(), 5);
        assert_eq!(CERTIFICATIONS[0].org, "freeCodeCamp");
        assert_eq!(COMPETENCIES.len(), 4);
        assert_eq!(COMPETENCIES[0].grade, "Grade A (81%)");
        assert_eq!(NAV_ITEMS.last().map(|item| item.label), Some("Contact"));
    }

    #[test]
    fn contact_links_are_outbound() {
        assert_eq!(CONTACT.mailto(), "mailto:alaingabire5@gmail.com");
        for url in [CONTACT.whatsapp, CONTACT.github, CONTACT.linkedin] {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
