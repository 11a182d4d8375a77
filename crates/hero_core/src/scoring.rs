//! Quiz scoring: a fixed rule table over four base buckets, plus the
//! out-of-band special and villain selections that bypass it.

use rand::Rng;

use crate::answers::QuizAnswers;
use crate::archetype::ArchetypeKey;

/// Scored quiz questions, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    SavingStyle,
    RiskApproach,
    FinancialGoal,
    FinancialStrength,
    TrackingStyle,
}

/// The four point buckets. Discriminants index `totals` in [`score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Saver = 0,
    Investor = 1,
    Balanced = 2,
    Planner = 3,
}

struct ScoreRule {
    question: Question,
    token: &'static str,
    bucket: Bucket,
    points: u32,
}

/// (question, token) -> point contribution. Tokens not listed here match
/// no rule and score nothing.
static SCORE_RULES: &[ScoreRule] = &[
    ScoreRule { question: Question::SavingStyle, token: "saver", bucket: Bucket::Saver, points: 2 },
    ScoreRule { question: Question::SavingStyle, token: "investor", bucket: Bucket::Investor, points: 2 },
    ScoreRule { question: Question::SavingStyle, token: "balanced", bucket: Bucket::Balanced, points: 2 },
    ScoreRule { question: Question::SavingStyle, token: "spender", bucket: Bucket::Balanced, points: 1 },
    ScoreRule { question: Question::RiskApproach, token: "cautious", bucket: Bucket::Saver, points: 2 },
    ScoreRule { question: Question::RiskApproach, token: "aggressive", bucket: Bucket::Investor, points: 2 },
    ScoreRule { question: Question::RiskApproach, token: "balanced", bucket: Bucket::Balanced, points: 2 },
    ScoreRule { question: Question::RiskApproach, token: "moderate", bucket: Bucket::Planner, points: 1 },
    ScoreRule { question: Question::FinancialGoal, token: "security", bucket: Bucket::Saver, points: 2 },
    ScoreRule { question: Question::FinancialGoal, token: "growth", bucket: Bucket::Investor, points: 2 },
    ScoreRule { question: Question::FinancialGoal, token: "lifestyle", bucket: Bucket::Balanced, points: 2 },
    ScoreRule { question: Question::FinancialGoal, token: "debt", bucket: Bucket::Planner, points: 2 },
    ScoreRule { question: Question::FinancialStrength, token: "discipline", bucket: Bucket::Saver, points: 1 },
    ScoreRule { question: Question::FinancialStrength, token: "knowledge", bucket: Bucket::Investor, points: 1 },
    ScoreRule { question: Question::FinancialStrength, token: "balance", bucket: Bucket::Balanced, points: 1 },
    ScoreRule { question: Question::FinancialStrength, token: "adaptability", bucket: Bucket::Planner, points: 1 },
    ScoreRule { question: Question::TrackingStyle, token: "detailed", bucket: Bucket::Planner, points: 2 },
    ScoreRule { question: Question::TrackingStyle, token: "automated", bucket: Bucket::Investor, points: 1 },
    ScoreRule { question: Question::TrackingStyle, token: "minimal", bucket: Bucket::Balanced, points: 1 },
    ScoreRule { question: Question::TrackingStyle, token: "intuitive", bucket: Bucket::Saver, points: 1 },
];

/// Bucket comparison order. The leader is only replaced on a strictly
/// greater total, so on a tie the earlier entry here keeps the lead; with
/// every bucket at zero the result stays `balanced`.
const BUCKET_ORDER: [(Bucket, ArchetypeKey); 4] = [
    (Bucket::Saver, ArchetypeKey::Saver),
    (Bucket::Investor, ArchetypeKey::Investor),
    (Bucket::Balanced, ArchetypeKey::Balanced),
    (Bucket::Planner, ArchetypeKey::Planner),
];

/// Resolve a quiz session to an archetype key. Total over its whole input
/// domain: missing answers score zero, unknown tokens match no rule.
///
/// The RNG is consulted only on the villain path when the villain-type
/// token is absent or unrecognized; pass a seeded generator to make that
/// fallback reproducible.
pub fn score<R: Rng>(answers: &QuizAnswers, rng: &mut R) -> ArchetypeKey {
    if answers.is_villain_alignment() {
        return villain_key(answers.villain_type.as_deref(), rng);
    }
    // Special selections sit outside the point system.
    if style_or_goal_is(answers, "crypto") {
        return ArchetypeKey::Skulkams;
    }
    if style_or_goal_is(answers, "benefits") {
        return ArchetypeKey::Ebt;
    }

    let mut totals = [0u32; 4];
    for rule in SCORE_RULES {
        if answers.token(rule.question) == Some(rule.token) {
            totals[rule.bucket as usize] += rule.points;
        }
    }

    let mut best = ArchetypeKey::Balanced;
    let mut best_total = 0;
    for (bucket, key) in BUCKET_ORDER {
        let total = totals[bucket as usize];
        if total > best_total {
            best_total = total;
            best = key;
        }
    }
    best
}

fn style_or_goal_is(answers: &QuizAnswers, token: &str) -> bool {
    answers.saving_style.as_deref() == Some(token)
        || answers.financial_goal.as_deref() == Some(token)
}

fn villain_key<R: Rng>(villain_type: Option<&str>, rng: &mut R) -> ArchetypeKey {
    match villain_type {
        Some("impulsive") => ArchetypeKey::ImpulseSpender,
        Some("debt") => ArchetypeKey::DebtTrapper,
        Some("market") => ArchetypeKey::MarketManipulator,
        Some("identity") => ArchetypeKey::IdentityThief,
        Some("crypto") => ArchetypeKey::CryptoScammer,
        _ => ArchetypeKey::VILLAINS[rng.random_range(0..ArchetypeKey::VILLAINS.len())],
    }
}
