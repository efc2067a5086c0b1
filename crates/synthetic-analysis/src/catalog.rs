//! Static choice pools the generators draw from.

pub const RISK_RECOMMENDATIONS: &[&str] = &[
    "Consult a lawyer familiar with the regulatory landscape before launch",
    "Validate demand with a landing-page smoke test before building",
    "Start in a single city or segment to limit early market risk",
    "Budget for compliance review in the first funding round",
    "Prototype the riskiest technical component first",
    "Line up two or three design partners before writing production code",
    "Run customer discovery interviews with at least 20 target users",
    "Price against the closest incumbent, not against cost",
    "Keep burn low until channel economics are proven",
    "File provisional IP protection early if the core tech is novel",
    "Hire a domain expert advisor before the seed round",
    "Instrument retention from day one; acquisition hides churn",
];

pub const FUNDING_STAGES: &[&str] = &[
    "Pre-seed",
    "Seed",
    "Series A",
    "Series B",
    "Series C",
    "Growth",
];

pub const COMPANY_PREFIXES: &[&str] = &[
    "Nova", "Apex", "Prime", "Bright", "North", "Clear", "Swift", "Atlas", "Bold", "True",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Labs", "HQ", "Hub", "Works", "Systems", "Base", "Flow", "Stack",
];

pub const COMPETITOR_STRENGTHS: &[&str] = &[
    "Strong brand recognition",
    "Deep enterprise relationships",
    "Aggressive pricing",
    "Large installed user base",
    "Well-funded growth team",
    "Superior onboarding experience",
    "Wide integration ecosystem",
    "Strong retention metrics",
];

pub const MARKET_SATURATION: &[&str] = &["low", "moderate", "high"];

pub const ENTRY_DIFFICULTY: &[&str] = &["low", "moderate", "high"];

pub const POSITIONING: &[&str] = &[
    "Differentiate on speed of onboarding and time-to-value",
    "Target the underserved small-business end of the market",
    "Compete on vertical depth rather than horizontal breadth",
    "Lead with transparent pricing against opaque incumbents",
    "Build for the buyer the incumbents ignore",
];

pub const MARKET_SIZES: &[&str] = &[
    "$500M", "$1.2B", "$3.5B", "$8B", "$15B", "$40B",
];

pub const SWOT_STRENGTHS: &[&str] = &[
    "Focused niche positioning",
    "Low initial capital requirements",
    "Founder domain expertise",
    "Fast iteration cycle compared to incumbents",
    "Clear early-adopter segment",
];

pub const SWOT_WEAKNESSES: &[&str] = &[
    "No established brand or distribution",
    "Limited runway for a long sales cycle",
    "Single-product dependency",
    "Key-person risk in the founding team",
    "Unproven unit economics",
];

pub const SWOT_OPPORTUNITIES: &[&str] = &[
    "Incumbent products are aging and slow to change",
    "Regulatory shifts are opening the segment",
    "Remote-first buyers are easier to reach than ever",
    "Adjacent markets offer expansion once the core is won",
    "Partnership channels remain unclaimed",
];

pub const SWOT_THREATS: &[&str] = &[
    "A well-funded competitor could copy the wedge",
    "Platform dependency exposes the business to policy changes",
    "Economic downturn could shrink discretionary budgets",
    "Customer acquisition costs may rise with competition",
    "Talent competition in the sector is intense",
];

pub const GO_TO_MARKET: &[&str] = &[
    "Bottom-up adoption through a generous free tier",
    "Founder-led sales to the first 50 accounts",
    "Content and SEO around the category's core problems",
    "Partner-led distribution through existing platforms",
    "Community-first launch in practitioner spaces",
];

pub const MONETIZATION: &[&str] = &[
    "Seat-based subscription with a free starter tier",
    "Usage-based pricing tied to customer value",
    "Flat team pricing with an enterprise upsell",
    "Transaction fee on value moved through the platform",
];

pub const DIFFERENTIATORS: &[&str] = &[
    "Setup measured in minutes, not weeks",
    "Pricing transparency",
    "Depth in one vertical instead of breadth in many",
    "Local-market compliance out of the box",
    "Opinionated defaults over endless configuration",
    "Service quality as the product, not an add-on",
];

pub const NEXT_STEPS: &[&str] = &[
    "Interview 20 target customers in the chosen segment",
    "Ship a concierge MVP to three design partners",
    "Define the one metric that proves the wedge works",
    "Map the top five competitors' pricing and positioning",
    "Draft a 12-month milestone plan tied to a fundable story",
    "Set up a waitlist and measure conversion from cold traffic",
];
