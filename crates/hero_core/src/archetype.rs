//! Archetype identity: the closed key set and token spellings.

/// Every financial archetype the engine can produce. Tokens (see
/// [`ArchetypeKey::token`]) are stable identifiers used in persisted
/// profiles and data tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchetypeKey {
    Saver,
    Investor,
    Balanced,
    Planner,
    Skulkams,
    Ebt,
    ImpulseSpender,
    DebtTrapper,
    MarketManipulator,
    IdentityThief,
    CryptoScammer,
}

impl ArchetypeKey {
    pub const ALL: [ArchetypeKey; 11] = [
        ArchetypeKey::Saver,
        ArchetypeKey::Investor,
        ArchetypeKey::Balanced,
        ArchetypeKey::Planner,
        ArchetypeKey::Skulkams,
        ArchetypeKey::Ebt,
        ArchetypeKey::ImpulseSpender,
        ArchetypeKey::DebtTrapper,
        ArchetypeKey::MarketManipulator,
        ArchetypeKey::IdentityThief,
        ArchetypeKey::CryptoScammer,
    ];

    pub const VILLAINS: [ArchetypeKey; 5] = [
        ArchetypeKey::ImpulseSpender,
        ArchetypeKey::DebtTrapper,
        ArchetypeKey::MarketManipulator,
        ArchetypeKey::IdentityThief,
        ArchetypeKey::CryptoScammer,
    ];

    pub fn token(self) -> &'static str {
        match self {
            ArchetypeKey::Saver => "saver",
            ArchetypeKey::Investor => "investor",
            ArchetypeKey::Balanced => "balanced",
            ArchetypeKey::Planner => "planner",
            ArchetypeKey::Skulkams => "skulkams",
            ArchetypeKey::Ebt => "ebt",
            ArchetypeKey::ImpulseSpender => "impulseSpender",
            ArchetypeKey::DebtTrapper => "debtTrapper",
            ArchetypeKey::MarketManipulator => "marketManipulator",
            ArchetypeKey::IdentityThief => "identityThief",
            ArchetypeKey::CryptoScammer => "cryptoScammer",
        }
    }

    pub fn from_token(token: &str) -> Option<ArchetypeKey> {
        Self::ALL.iter().copied().find(|k| k.token() == token)
    }

    pub fn is_villain(self) -> bool {
        Self::VILLAINS.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for key in ArchetypeKey::ALL {
            assert_eq!(ArchetypeKey::from_token(key.token()), Some(key));
        }
        assert_eq!(ArchetypeKey::from_token("dragon"), None);
    }

    #[test]
    fn villain_flag_matches_set() {
        assert!(ArchetypeKey::DebtTrapper.is_villain());
        assert!(!ArchetypeKey::Saver.is_villain());
        assert_eq!(ArchetypeKey::VILLAINS.len(), 5);
    }
}
