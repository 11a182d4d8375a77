use hero_data::CharacterCustomization;
use profile_store::{JsonFileStore, ProfileStore, StoredProfile};

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path().join("profiles/user.json"));
    assert!(store.load().expect("load").is_none());

    let profile = StoredProfile {
        archetype: Some("planner".into()),
        customization: CharacterCustomization {
            base: Some("robot".into()),
            primary_color: Some("#d62828".into()),
            ..CharacterCustomization::default()
        },
        ..StoredProfile::default()
    };
    store.save(&profile).expect("save");
    assert_eq!(store.load().expect("reload"), Some(profile));
}

#[test]
fn reset_removes_the_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = JsonFileStore::new(dir.path().join("user.json"));
    // Reset with nothing saved is a no-op, not an error.
    store.reset().expect("reset empty");

    store.save(&StoredProfile::default()).expect("save");
    assert!(store.path().is_file());
    store.reset().expect("reset");
    assert!(store.load().expect("load").is_none());
}

#[test]
fn partial_json_loads_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("user.json");
    std::fs::write(&path, r#"{"archetype":"ebt"}"#).expect("write");
    let store = JsonFileStore::new(&path);
    let profile = store.load().expect("load").expect("present");
    assert_eq!(profile.archetype.as_deref(), Some("ebt"));
    assert!(profile.customization.is_empty());
}
