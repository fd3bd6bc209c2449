use super::*;

pub static HAXXYVERSE: SiteContent = SiteContent {
    name: "Haxxyverse",
    brand: "HAXXY",
    brand_suffix: "verse",
    tagline: "Build · Break · Learn",
    nav: &[
        NavEntry { label: "Home", target: SectionId::Home },
        NavEntry { label: "About", target: SectionId::About },
        NavEntry { label: "Origins", target: SectionId::Roots },
        NavEntry { label: "Modules", target: SectionId::Divisions },
        NavEntry { label: "News", target: SectionId::News },
        NavEntry { label: "Careers", target: SectionId::Careers },
        NavEntry { label: "Contact", target: SectionId::Contact },
    ],
    hero: Hero {
        headline: "One Universe for Builders, Breakers and Curious Minds.",
        lead: "Haxxyverse is a collective of labs, programs and communities for people who \
               like to take systems apart and put them back together better. We run open \
               challenges, security research and hands-on training under one roof.",
        primary_cta: NavEntry { label: "Explore Modules", target: SectionId::Divisions },
        secondary_cta: NavEntry { label: "Our Origins", target: SectionId::Roots },
        image_url: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1470&auto=format&fit=crop",
        caption: "Symbolic visual: circuits, signals and an open playground for makers.",
    },
    stats: &[
        Stat { label: "Community Members", value: "12k+" },
        Stat { label: "Modules", value: "5" },
        Stat { label: "Challenges Shipped", value: "300+" },
        Stat { label: "Cities", value: "18" },
    ],
    about: About {
        heading: "About Haxxyverse",
        body: "We started as a weekend meetup and grew into a network of labs. Every module \
               shares the same core: learn in the open, publish what you find, and leave \
               every system a little safer than you found it.",
        values: &["Curiosity", "Openness", "Responsibility"],
        leaders_heading: "Core Team",
        leaders: &[
            Leader { name: "Founding Crew", role: "Community & Programs" },
            Leader { name: "Lab Leads", role: "Research & Infrastructure" },
            Leader { name: "Mentor Circle", role: "Practitioners from industry" },
        ],
        leaders_note: "*The team rotates as new modules launch.",
    },
    roots: Roots {
        heading: "Origins: How the Verse Began",
        intro: "Haxxyverse grew out of a handful of late-night capture-the-flag sessions. The \
                habits from those nights (share the write-up, help the next person) are still \
                how we work.",
        cards: &[
            RootsCard {
                title: "The First CTF",
                desc: "Twelve people, one borrowed classroom and a scoreboard on a whiteboard.",
                cta: "View timeline",
                target: SectionId::RootsTimeline,
            },
            RootsCard {
                title: "Open Write-ups",
                desc: "Every solved challenge gets a public write-up so the next cohort starts \
                       further ahead.",
                cta: "Read more",
                target: SectionId::RootsTimeline,
            },
            RootsCard {
                title: "Modules Today",
                desc: "Labs, academy, arena and research, each run by the community it serves.",
                cta: "See modules",
                target: SectionId::Divisions,
            },
        ],
        timeline: &[
            TimelineEntry {
                year: "2016",
                title: "First Meetup",
                text: "A weekend capture-the-flag turns into a monthly meetup with its own \
                       challenge server.",
            },
            TimelineEntry {
                year: "2019",
                title: "The Academy Opens",
                text: "Structured tracks for newcomers, taught by people who came through the \
                       meetups themselves.",
            },
            TimelineEntry {
                year: "Present",
                title: "A Network of Labs",
                text: "Research labs, a public arena and a responsible-disclosure program across \
                       multiple cities.",
            },
        ],
        faqs: &[
            Faq {
                question: "Do I need experience to join?",
                answer: "No. The Academy starts from first principles and the Arena has \
                         beginner ladders.",
            },
            Faq {
                question: "Is everything legal?",
                answer: "Yes. We only work on our own infrastructure or with written permission \
                         from system owners.",
            },
            Faq {
                question: "How are modules funded?",
                answer: "Through sponsorships, training programs and research partnerships.",
            },
            Faq {
                question: "Can my company partner with you?",
                answer: "Yes. Reach us via the Contact section to sponsor a challenge or host a \
                         lab.",
            },
        ],
    },
    divisions_heading: "Modules of the Haxxyverse",
    divisions: &[
        Division {
            id: "labs",
            title: "Haxxy Labs",
            desc: "Hardware benches, radio gear and a shared cluster for members' research \
                   projects.",
        },
        Division {
            id: "academy",
            title: "Haxxy Academy",
            desc: "Guided tracks from networking basics to exploit development, with mentors \
                   at every step.",
        },
        Division {
            id: "arena",
            title: "Haxxy Arena",
            desc: "Always-on capture-the-flag ladder and seasonal tournaments open to everyone.",
        },
        Division {
            id: "research",
            title: "Haxxy Research",
            desc: "Coordinated vulnerability disclosure and published write-ups on what we find.",
        },
        Division {
            id: "commons",
            title: "Haxxy Commons",
            desc: "Free workshops and hardware loans for schools and community spaces.",
        },
    ],
    division_pills: &["Open by Default", "Community Run"],
    news_heading: "Dispatches",
    news: &[
        NewsItem {
            kind: "Dispatch",
            headline: "Season tournament announced",
            summary: "Registration, brackets and prize pool for the next Arena season.",
        },
        NewsItem {
            kind: "Dispatch",
            headline: "New Academy track",
            summary: "A hands-on track on embedded firmware, from UART to secure boot.",
        },
        NewsItem {
            kind: "Dispatch",
            headline: "Research write-up published",
            summary: "Findings from a coordinated disclosure, now that the vendor has shipped a \
                      fix.",
        },
    ],
    careers: Careers {
        intro: "Help run the verse. We hire people who teach as naturally as they build.",
        jobs: &[
            Job { role: "Challenge Author – Arena", location: "Remote" },
            Job { role: "Lab Infrastructure Engineer", location: "Bengaluru / Hybrid" },
            Job { role: "Academy Instructor", location: "Pune / On-site" },
        ],
        perks_heading: "Why Haxxyverse?",
        perks: &[
            "Time set aside for your own research",
            "Conference and training budget",
            "A community that shares what it learns",
        ],
    },
    contact: Contact {
        offices: &[
            Office { region: "HQ", city: "Bengaluru, Karnataka" },
            Office { region: "Lab", city: "Pune, Maharashtra" },
            Office { region: "Remote", city: "Everywhere else" },
        ],
        partnership_note: "For sponsorships & partnerships: hello@haxxyverse.io",
    },
    footer: Footer {
        blurb: "Labs, academy and arena for people who build and break things responsibly.",
        explore: &[
            NavEntry { label: "About", target: SectionId::About },
            NavEntry { label: "Origins", target: SectionId::Roots },
            NavEntry { label: "Modules", target: SectionId::Divisions },
            NavEntry { label: "Careers", target: SectionId::Careers },
        ],
        legal: &["Privacy Policy", "Responsible Disclosure", "Code of Conduct"],
        emails: &[
            "hello@haxxyverse.io",
            "security@haxxyverse.io",
            "academy@haxxyverse.io",
        ],
    },
    mobile_menu: true,
};
