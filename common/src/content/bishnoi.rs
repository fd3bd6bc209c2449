use super::*;

pub static BISHNOI: SiteContent = SiteContent {
    name: "Bishnoi Omniverse",
    brand: "BISHNOI",
    brand_suffix: "Omniverse",
    tagline: "Global Vision · Indian Values",
    nav: &[
        NavEntry { label: "Home", target: SectionId::Home },
        NavEntry { label: "About", target: SectionId::About },
        NavEntry { label: "Our Roots", target: SectionId::Roots },
        NavEntry { label: "Divisions", target: SectionId::Divisions },
        NavEntry { label: "News", target: SectionId::News },
        NavEntry { label: "Careers", target: SectionId::Careers },
        NavEntry { label: "Contact", target: SectionId::Contact },
    ],
    hero: Hero {
        headline: "Transforming Sectors. Empowering Communities. Building a Borderless Future.",
        lead: "Bishnoi Omniverse is a diversified group rooted in a 500-year legacy of \
               conservation and compassion. We combine global scale with Indian values to \
               build enduring businesses across Pharmaceuticals, Hydroponics, Dairy and \
               Social Impact.",
        primary_cta: NavEntry { label: "Explore Divisions", target: SectionId::Divisions },
        secondary_cta: NavEntry { label: "Discover Our Roots", target: SectionId::Roots },
        image_url: "https://images.unsplash.com/photo-1549880338-65ddcdfd017b?q=80&w=1470&auto=format&fit=crop",
        caption: "Symbolic visual: growth, connection and a future-ready ecosystem.",
    },
    stats: &[
        Stat { label: "Countries Served", value: "30+" },
        Stat { label: "Divisions", value: "4+" },
        Stat { label: "Years of Legacy", value: ">500" },
        Stat { label: "Lives Touched", value: "1M+" },
    ],
    about: About {
        heading: "About Us",
        body: "We are builders of resilient, high-trust businesses. Our operating model blends \
               disciplined execution with long-term, values-driven leadership. The Omniverse \
               approach enables shared capabilities (quality, compliance, supply chains and \
               community partnerships) across multiple sectors and geographies.",
        values: &["Integrity", "Innovation", "Impact"],
        leaders_heading: "Leadership",
        leaders: &[
            Leader { name: "Naresh Bishnoi", role: "Group Founder & Chair" },
            Leader { name: "Group CEO", role: "Life Sciences & Agri" },
            Leader { name: "Advisory Board", role: "Industry & community leaders" },
        ],
        leaders_note: "*Roles and titles are updated as the group grows.",
    },
    roots: Roots {
        heading: "Our Roots: The Bishnoi Legacy",
        intro: "The Bishnoi community, founded in the 15th century by Guru Jambheshwar Ji \
                Maharaj, has lived a 29-principle code centred on conservation, compassion and \
                disciplined living. This ethos inspires our work across the Omniverse today.",
        cards: &[
            RootsCard {
                title: "29 Principles",
                desc: "From protecting trees and wildlife to water stewardship and simple living: \
                       timeless guidance that aligns with modern sustainability.",
                cta: "Read more",
                target: SectionId::RootsTimeline,
            },
            RootsCard {
                title: "Khejarli Courage",
                desc: "In 1730, Amrita Devi and 360+ Bishnois sacrificed their lives to save \
                       sacred Khejri trees, an early environmental movement.",
                cta: "View timeline",
                target: SectionId::RootsTimeline,
            },
            RootsCard {
                title: "Legacy in Action",
                desc: "We carry these values into pharma, agri and social initiatives, building \
                       growth that respects nature and people.",
                cta: "See how",
                target: SectionId::Divisions,
            },
        ],
        timeline: &[
            TimelineEntry {
                year: "1485–1536",
                title: "Origin of a Movement",
                text: "Guru Jambheshwar Ji articulates 29 principles in the Thar desert after a \
                       devastating drought, guiding a community toward ecological balance and \
                       compassion.",
            },
            TimelineEntry {
                year: "1730",
                title: "Khejarli Massacre",
                text: "Amrita Devi Bishnoi and hundreds of Bishnois embrace Khejri trees to stop \
                       felling; their martyrdom becomes a global symbol of environmental \
                       stewardship.",
            },
            TimelineEntry {
                year: "Present",
                title: "Guardians of Wildlife",
                text: "Bishnoi villages proactively protect blackbucks, chinkaras and peacocks, \
                       raising orphaned fawns, preserving trees and water, and resisting \
                       poaching.",
            },
        ],
        faqs: &[
            Faq {
                question: "Who are the Bishnois?",
                answer: "A community from Rajasthan, India, founded by Guru Jambheshwar Ji \
                         Maharaj. They follow 29 principles that promote sustainability, \
                         compassion and disciplined living.",
            },
            Faq {
                question: "What is the Khejarli story?",
                answer: "In 1730, to prevent the cutting of sacred Khejri trees, Amrita Devi and \
                         360+ Bishnois sacrificed their lives, an early environmental movement \
                         that continues to inspire the world.",
            },
            Faq {
                question: "How does this legacy shape Bishnoi Omniverse?",
                answer: "Our operating ethos (Integrity, Innovation, Impact) translates the \
                         Bishnoi values into modern enterprises across pharma, hydroponics, \
                         dairy and social development.",
            },
            Faq {
                question: "Can I partner with your Trust or projects?",
                answer: "Yes. We collaborate with NGOs, hospitals, universities and impact \
                         investors. Reach us via the Contact section for partnerships.",
            },
        ],
    },
    divisions_heading: "Divisions of Bishnoi Omniverse",
    divisions: &[
        Division {
            id: "pharma",
            title: "Bishnoi Pharmaceuticals",
            desc: "Global B2B partner for specialty and life-saving medicines. Focus on oncology, \
                   biologics, critical care, and tender supplies, backed by robust sourcing, \
                   quality, and compliance.",
        },
        Division {
            id: "hydroponics",
            title: "Bishnoi Hydroponics",
            desc: "Sustainable, soil-less cultivation for premium export produce. Training \
                   programs for farmers, climate-smart practices, and controlled-environment \
                   farming.",
        },
        Division {
            id: "dairy",
            title: "Bishnoi Dairy",
            desc: "Ethical, animal-first dairy built on Bishnoi values. Clean nutrition, \
                   quality-assured processing, and community livelihoods.",
        },
        Division {
            id: "trust",
            title: "Naresh Bishnoi Trust",
            desc: "Social impact arm: education, farmer empowerment, rural healthcare support, \
                   and environmental stewardship.",
        },
        Division {
            id: "future",
            title: "Future Ventures",
            desc: "Emerging plays in exports, agri-tech and green initiatives, aligned with the \
                   Omniverse vision.",
        },
    ],
    division_pills: &["Quality First", "Sustainability"],
    news_heading: "News & Media",
    news: &[
        NewsItem {
            kind: "Press Note",
            headline: "Sample headline for a group announcement",
            summary: "Short summary of a milestone: partnerships, certifications, CSR campaigns \
                      or market entries.",
        },
        NewsItem {
            kind: "Press Note",
            headline: "Sample headline for a group announcement",
            summary: "Short summary of a milestone: partnerships, certifications, CSR campaigns \
                      or market entries.",
        },
        NewsItem {
            kind: "Press Note",
            headline: "Sample headline for a group announcement",
            summary: "Short summary of a milestone: partnerships, certifications, CSR campaigns \
                      or market entries.",
        },
    ],
    careers: Careers {
        intro: "Join a values-driven, growth-oriented team. We invest in people, processes and \
                purpose, so you can do the best work of your career.",
        jobs: &[
            Job {
                role: "Regulatory Affairs Manager – Pharmaceuticals",
                location: "Ahmedabad / Hybrid",
            },
            Job { role: "Hydroponics Operations Lead", location: "Rajasthan / On-site" },
            Job { role: "Dairy Supply Chain Executive", location: "Jodhpur / On-site" },
        ],
        perks_heading: "Why Bishnoi Omniverse?",
        perks: &[
            "Mission-aligned, ethical growth",
            "Cross-division opportunities",
            "Learning & leadership pathways",
        ],
    },
    contact: Contact {
        offices: &[
            Office { region: "India (HO)", city: "Ahmedabad, Gujarat" },
            Office { region: "Philippines", city: "Metro Manila" },
            Office { region: "Caribbean", city: "Nevis" },
        ],
        partnership_note: "For media & partnerships: partnerships@bishnoiomniverse.com",
    },
    footer: Footer {
        blurb: "Global ecosystem of values-driven businesses, built on a 500-year legacy of \
                stewardship and service.",
        explore: &[
            NavEntry { label: "About", target: SectionId::About },
            NavEntry { label: "Our Roots", target: SectionId::Roots },
            NavEntry { label: "Divisions", target: SectionId::Divisions },
            NavEntry { label: "Careers", target: SectionId::Careers },
        ],
        legal: &["Privacy Policy", "Terms & Conditions"],
        emails: &[
            "ceo@bishnoiomniverse.com",
            "sales@bishnoipharmaceuticals.com",
            "csr@nareshbishnoitrust.org",
        ],
    },
    mobile_menu: false,
};
