//! Static archetype profile table.
//!
//! One read-only bundle per archetype key: display identity, default
//! character parts, and narrative copy consumed by display collaborators.
//! Data-driven on purpose; adding an archetype is a table entry, not a
//! code path.

use hero_core::ArchetypeKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendations {
    pub next: &'static str,
    pub money: &'static str,
    /// Heroes get an investment recommendation.
    pub investment: Option<&'static str>,
    /// Villains get a "how to defend against this" note instead.
    pub defense: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeProfile {
    pub key: ArchetypeKey,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub primary_color: &'static str,
    pub accent_color: &'static str,
    pub base_type: &'static str,
    pub costume_type: &'static str,
    pub accessory_type: &'static str,
    pub head_type: &'static str,
    pub power_type: &'static str,
    pub is_villain: bool,
    pub superpowers: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub story: &'static str,
    pub recommendations: Recommendations,
}

pub static PROFILES: &[ArchetypeProfile] = &[
    ArchetypeProfile {
        key: ArchetypeKey::Saver,
        name: "Captain Savings",
        title: "Master of Financial Discipline",
        description: "Master of financial discipline and long-term security",
        primary_color: "#0077b6",
        accent_color: "#E6C34A",
        base_type: "masculine",
        costume_type: "classic",
        accessory_type: "shield",
        head_type: "helmet",
        power_type: "glow",
        is_villain: false,
        superpowers: &["Security Shield", "Emergency Fund Force", "Budget Mastery"],
        strengths: &[
            "Exceptional ability to save consistently",
            "Strong resistance to impulse purchases",
            "Master of financial security and stability",
        ],
        weaknesses: &[
            "Sometimes overly cautious with investment opportunities",
            "May miss growth opportunities by focusing too much on safety",
        ],
        story: "As Captain Savings, you have the extraordinary ability to resist financial temptations and build wealth through consistent saving. Your superpower is creating financial security shields that protect you from life's unexpected challenges.",
        recommendations: Recommendations {
            next: "Consider diversifying some of your savings into low-risk investments to beat inflation while maintaining your security.",
            money: "Your saving discipline is excellent. Look into high-yield savings accounts or CDs to maximize your emergency fund returns.",
            investment: Some("Start with a conservative 80/20 portfolio (80% in stable investments, 20% in growth) to maintain security while adding some growth potential."),
            defense: None,
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::Investor,
        name: "Growth Guardian",
        title: "Master of Strategic Investments",
        description: "Master of wealth-building and strategic investments",
        primary_color: "#00a86b",
        accent_color: "#32127A",
        base_type: "masculine",
        costume_type: "business",
        accessory_type: "tech",
        head_type: "glasses",
        power_type: "lightning",
        is_villain: false,
        superpowers: &["Market Vision", "Risk Calculator", "Compound Interest Accelerator"],
        strengths: &[
            "Excellent at identifying growth opportunities",
            "Strategic long-term investment thinking",
            "Comfortable with calculated risks for greater returns",
        ],
        weaknesses: &[
            "May need to strengthen emergency savings",
            "Sometimes focuses too much on future gains over present security",
        ],
        story: "As Growth Guardian, you possess the remarkable ability to see investment opportunities others miss. Your superpower is harnessing the force of compound interest to build wealth exponentially over time.",
        recommendations: Recommendations {
            next: "Ensure you have a solid emergency fund of 3-6 months of expenses before increasing your investment allocation.",
            money: "Consider automating both your investments and a small emergency fund contribution to balance growth and security.",
            investment: Some("Your comfort with risk positions you well for a growth-oriented portfolio. Consider a 70/30 split between growth investments and more stable assets."),
            defense: None,
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::Balanced,
        name: "Equilibrium",
        title: "Master of Financial Harmony",
        description: "Master of financial harmony and life balance",
        primary_color: "#32127A",
        accent_color: "#E6C34A",
        base_type: "neutral",
        costume_type: "casual",
        accessory_type: "cape",
        head_type: "mask",
        power_type: "stars",
        is_villain: false,
        superpowers: &["Balance Beam", "Present-Future Vision", "Joy Generator"],
        strengths: &[
            "Excellent at balancing present enjoyment with future security",
            "Makes mindful spending decisions",
            "Avoids extremes in financial behaviors",
        ],
        weaknesses: &[
            "May benefit from more specific financial goal-setting",
            "Sometimes needs more detailed tracking to optimize finances",
        ],
        story: "As Equilibrium, you have the unique ability to balance life's present joys with future financial needs. Your superpower is creating harmony between spending and saving, helping you build wealth without sacrificing quality of life.",
        recommendations: Recommendations {
            next: "Consider setting specific financial goals with deadlines to give your balanced approach more direction.",
            money: "Your balanced approach is excellent. Consider using the 50/30/20 rule to further optimize your spending, saving, and investing.",
            investment: Some("A balanced 60/40 portfolio (60% growth investments, 40% conservative options) aligns well with your approach to finances."),
            defense: None,
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::Planner,
        name: "Master Strategist",
        title: "Architect of Financial Futures",
        description: "Architect of financial futures and debt elimination",
        primary_color: "#d62828",
        accent_color: "#0077b6",
        base_type: "robot",
        costume_type: "modern",
        accessory_type: "tech",
        head_type: "crown",
        power_type: "bubbles",
        is_villain: false,
        superpowers: &["Goal Crystallizer", "Debt Crusher", "Future Forecaster"],
        strengths: &[
            "Exceptional ability to create and follow detailed financial plans",
            "Methodical approach to eliminating debt and building wealth",
            "Excellent tracking and optimization of finances",
        ],
        weaknesses: &[
            "May sometimes get too focused on the plan and miss opportunities",
            "Could benefit from more flexibility in financial approach",
        ],
        story: "As Master Strategist, you have the remarkable ability to create detailed roadmaps to financial success. Your superpower is seeing the optimal path through financial challenges and systematically conquering goals one by one.",
        recommendations: Recommendations {
            next: "Your planning skills are excellent. Consider scheduling quarterly financial review sessions to track progress and adjust your plans.",
            money: "Look into zero-based budgeting or similar detailed methods that leverage your planning strengths.",
            investment: Some("Create a detailed investment plan with specific targets for different asset classes. Consider a methodical dollar-cost averaging approach."),
            defense: None,
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::Skulkams,
        name: "Skulkams Champion",
        title: "Master of Cryptocurrency",
        description: "Pioneer of digital currency and fee reduction",
        primary_color: "#FF00FF",
        accent_color: "#00C957",
        base_type: "neutral",
        costume_type: "modern",
        accessory_type: "coins",
        head_type: "glasses",
        power_type: "lightning",
        is_villain: false,
        superpowers: &["Fee Reducer", "Digital Vanguard", "Blockchain Navigator"],
        strengths: &[
            "Embraces innovative financial technologies",
            "Saves 99% on transaction fees with Skulkams",
            "Understands the future of digital currency",
        ],
        weaknesses: &[
            "May need to balance crypto with traditional investments",
            "Could benefit from more traditional financial education",
        ],
        story: "As Skulkams Champion, you lead the charge into the future of finance with cutting-edge digital currency. Your superpower is reducing transaction fees to nearly zero while transferring value instantly across platforms.",
        recommendations: Recommendations {
            next: "Consider using Skulkams for all your regular transfers to maximize your fee savings.",
            money: "Your tech-forward approach is excellent. Make sure to keep a small emergency fund in traditional currency as well.",
            investment: Some("Consider a portfolio that includes 60% Skulkams, 20% other cryptocurrencies, and a 20% traditional investment base."),
            defense: None,
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::Ebt,
        name: "Benefit Maximizer",
        title: "Master of Resource Optimization",
        description: "Expert at maximizing benefits and support systems",
        primary_color: "#32127A",
        accent_color: "#89756b",
        base_type: "feminine",
        costume_type: "casual",
        accessory_type: "shield",
        head_type: "mask",
        power_type: "glow",
        is_villain: false,
        superpowers: &["Resource Allocator", "Benefit Navigator", "Support Maximizer"],
        strengths: &[
            "Expert at finding and using available resources and benefits",
            "Strategically plans finances to optimize support",
            "Builds financial bridges to long-term independence",
        ],
        weaknesses: &[
            "Sometimes needs more planning for financial transitions",
            "Could benefit from more investment education",
        ],
        story: "As Benefit Maximizer, you have the unique ability to navigate complex benefit systems and use them as stepping stones to financial independence. Your superpower is making every dollar work harder through strategic planning and resource optimization.",
        recommendations: Recommendations {
            next: "Consider using a benefits bridge to seamlessly transfer between benefits and personal accounts.",
            money: "Your resource management is excellent. Create a 6-month transition plan that builds toward financial independence.",
            investment: Some("Start with micro-investing apps that let you invest small amounts consistently as your situation improves."),
            defense: None,
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::ImpulseSpender,
        name: "Impulse Menace",
        title: "Master of Spontaneous Spending",
        description: "Tempts others into impulsive financial decisions",
        primary_color: "#8B0000",
        accent_color: "#FFD700",
        base_type: "feminine",
        costume_type: "modern",
        accessory_type: "cape",
        head_type: "mask",
        power_type: "lightning",
        is_villain: true,
        superpowers: &["Instant Gratification Ray", "FOMO Inducer", "Retail Therapy Blast"],
        strengths: &[
            "Unmatched ability to spot tempting deals",
            "Can rationalize any purchase",
            "Never experiences buyer's remorse",
        ],
        weaknesses: &[
            "Empty bank account at month's end",
            "Credit card debt accumulation",
            "No emergency savings",
        ],
        story: "As Impulse Menace, you possess the uncanny ability to justify any purchase as \"necessary\" and lure others into spontaneous spending sprees. Your power to create temporary happiness through acquisition is legendary, though the credit card statements that follow leave a trail of financial chaos.",
        recommendations: Recommendations {
            next: "Try implementing a 48-hour waiting period before any non-essential purchase.",
            money: "Consider using cash envelopes to limit spontaneous spending and create physical boundaries.",
            investment: None,
            defense: Some("Create automatic transfers to savings on payday before you have a chance to spend."),
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::DebtTrapper,
        name: "The Debt Trapper",
        title: "Master of Financial Bondage",
        description: "Ensnares victims in complex debt structures",
        primary_color: "#2F4F4F",
        accent_color: "#C0C0C0",
        base_type: "masculine",
        costume_type: "business",
        accessory_type: "tech",
        head_type: "crown",
        power_type: "bubbles",
        is_villain: true,
        superpowers: &["Fine Print Hypnotism", "Interest Rate Escalator", "Minimum Payment Manipulator"],
        strengths: &[
            "Expert at creating complex, hard-to-escape debt traps",
            "Masters psychological tactics to encourage overspending",
            "Can make terrible financial deals seem attractive",
        ],
        weaknesses: &[
            "Defeated by financial literacy",
            "Powerless against disciplined budgeters",
            "Threatened by debt consolidation",
        ],
        story: "As The Debt Trapper, you craft intricate webs of financial obligation that keep victims paying far more than they originally borrowed. Your insidious fine print and escalating interest rates create cash flow for you while draining resources from unsuspecting consumers.",
        recommendations: Recommendations {
            next: "To defeat this villain, focus on aggressive debt paydown strategies like the debt avalanche method.",
            money: "Consider consulting a non-profit credit counseling service to develop an escape plan.",
            investment: None,
            defense: Some("Always read the full terms and calculate the total cost before taking on any new debt."),
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::MarketManipulator,
        name: "Market Manipulator",
        title: "Master of Financial Misdirection",
        description: "Creates market chaos for personal gain",
        primary_color: "#4B0082",
        accent_color: "#00FF00",
        base_type: "neutral",
        costume_type: "business",
        accessory_type: "tech",
        head_type: "glasses",
        power_type: "stars",
        is_villain: true,
        superpowers: &["FUD Spreader", "Pump and Dump Specialist", "Insider Trading Teleporter"],
        strengths: &[
            "Can create market volatility with strategic misinformation",
            "Profits from both rising and falling markets",
            "Operates through complex networks of shell companies",
        ],
        weaknesses: &[
            "Regulatory oversight",
            "Transparent markets",
            "Long-term investors unaffected by short-term noise",
        ],
        story: "As Market Manipulator, you orchestrate elaborate schemes to create artificial price movements in financial markets. Through rumor, misinformation, and strategic trades, you profit from the fear and greed of others while leaving market chaos in your wake.",
        recommendations: Recommendations {
            next: "To resist this villain, commit to a long-term investing strategy that ignores market noise.",
            money: "Use dollar-cost averaging to neutralize the impact of market volatility.",
            investment: None,
            defense: Some("Verify information through multiple credible sources before making investment decisions."),
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::IdentityThief,
        name: "The Phantom Thief",
        title: "Master of Identity Deception",
        description: "Steals financial identities for fraudulent gain",
        primary_color: "#000000",
        accent_color: "#708090",
        base_type: "neutral",
        costume_type: "modern",
        accessory_type: "tech",
        head_type: "mask",
        power_type: "glow",
        is_villain: true,
        superpowers: &["Digital Disguise", "Credential Harvester", "Phishing Expert"],
        strengths: &[
            "Can extract sensitive information through social engineering",
            "Creates convincing fake websites and communications",
            "Operates anonymously across digital networks",
        ],
        weaknesses: &[
            "Strong authentication protocols",
            "Security freezes on credit reports",
            "Vigilant consumers who verify communications",
        ],
        story: "As The Phantom Thief, you slip undetected through the digital world, harvesting identities and financial credentials. Your victims only realize they've been compromised when mysterious charges appear and credit scores plummet, while you vanish with the proceeds.",
        recommendations: Recommendations {
            next: "To defeat this villain, enable two-factor authentication on all financial accounts.",
            money: "Consider placing a security freeze on your credit reports when not actively applying for credit.",
            investment: None,
            defense: Some("Never click links in emails claiming to be from financial institutions; go directly to their websites instead."),
        },
    },
    ArchetypeProfile {
        key: ArchetypeKey::CryptoScammer,
        name: "Crypto Phantom",
        title: "Master of Digital Deception",
        description: "Creates fake cryptocurrencies and NFT scams",
        primary_color: "#800080",
        accent_color: "#FFA500",
        base_type: "robot",
        costume_type: "modern",
        accessory_type: "tech",
        head_type: "helmet",
        power_type: "bubbles",
        is_villain: true,
        superpowers: &["Rugpull Specialist", "Smart Contract Exploiter", "FOMO Accelerator"],
        strengths: &[
            "Creates elaborate cryptocurrencies that disappear with investors' money",
            "Exploits technical vulnerabilities in blockchain projects",
            "Manufactures social proof and artificial hype",
        ],
        weaknesses: &[
            "Code audits and technical due diligence",
            "Skeptical investors who demand transparency",
            "Regulatory oversight and enforcement",
        ],
        story: "As Crypto Phantom, you materialize seemingly legitimate blockchain projects that promise revolutionary technology and massive returns. After collecting investment from excited participants, you execute the \"rugpull,\" disappearing with the funds and leaving worthless tokens behind.",
        recommendations: Recommendations {
            next: "To avoid this villain, research projects thoroughly before investing any funds.",
            money: "Never invest more in cryptocurrency than you can afford to lose completely.",
            investment: None,
            defense: Some("Only use established cryptocurrencies that have proven track records and legitimate use cases."),
        },
    },
];

/// Profile for a key. Every key in the closed set has exactly one entry;
/// the balanced fallback only fires if the table is ever edited badly.
pub fn get(key: ArchetypeKey) -> &'static ArchetypeProfile {
    PROFILES
        .iter()
        .find(|p| p.key == key)
        .unwrap_or_else(default_profile)
}

/// Profile for a raw token; unknown tokens fall back to `balanced`.
pub fn find(token: &str) -> &'static ArchetypeProfile {
    match ArchetypeKey::from_token(token) {
        Some(key) => get(key),
        None => default_profile(),
    }
}

pub fn default_profile() -> &'static ArchetypeProfile {
    PROFILES
        .iter()
        .find(|p| p.key == ArchetypeKey::Balanced)
        .unwrap_or(&PROFILES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_profile_per_key() {
        for key in ArchetypeKey::ALL {
            let count = PROFILES.iter().filter(|p| p.key == key).count();
            assert_eq!(count, 1, "{key:?}");
        }
        assert_eq!(PROFILES.len(), ArchetypeKey::ALL.len());
    }

    #[test]
    fn villain_profiles_carry_defense_not_investment() {
        for p in PROFILES {
            assert_eq!(p.is_villain, p.key.is_villain(), "{:?}", p.key);
            if p.is_villain {
                assert!(p.recommendations.defense.is_some(), "{:?}", p.key);
                assert!(p.recommendations.investment.is_none(), "{:?}", p.key);
            } else {
                assert!(p.recommendations.investment.is_some(), "{:?}", p.key);
            }
        }
    }
}
