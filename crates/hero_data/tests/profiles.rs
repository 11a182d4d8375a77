use hero_core::ArchetypeKey;
use hero_data::profiles;

#[test]
fn saver_profile_identity() {
    let p = profiles::get(ArchetypeKey::Saver);
    assert_eq!(p.name, "Captain Savings");
    assert_eq!(p.primary_color, "#0077b6");
    assert_eq!(p.accessory_type, "shield");
    assert!(!p.is_villain);
}

#[test]
fn planner_defaults_to_robot_base() {
    let p = profiles::get(ArchetypeKey::Planner);
    assert_eq!(p.base_type, "robot");
    assert_eq!(p.costume_type, "modern");
}

#[test]
fn find_by_token_matches_get() {
    for key in ArchetypeKey::ALL {
        assert_eq!(profiles::find(key.token()).key, key);
    }
}

#[test]
fn unknown_token_falls_back_to_balanced() {
    assert_eq!(profiles::find("dragon").key, ArchetypeKey::Balanced);
    assert_eq!(profiles::find("").key, ArchetypeKey::Balanced);
}

#[test]
fn every_profile_has_display_copy() {
    for p in profiles::PROFILES {
        assert!(!p.name.is_empty());
        assert!(!p.story.is_empty());
        assert_eq!(p.superpowers.len(), 3, "{:?}", p.key);
        assert!(p.strengths.len() >= 2, "{:?}", p.key);
        assert!(p.weaknesses.len() >= 2, "{:?}", p.key);
        assert!(p.primary_color.starts_with('#'));
        assert!(p.accent_color.starts_with('#'));
    }
}
