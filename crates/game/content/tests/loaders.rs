use std::fs;

use froglin_content::ContentFactory;
use froglin_core::{Catalog, FroglinType, GameConfig, Player, ZoneId};

#[test]
fn bundled_content_matches_builtin_tables() {
    let factory = ContentFactory::bundled();
    let catalog = factory.load_catalog().expect("bundled catalog should load");
    assert_eq!(catalog, Catalog::builtin());

    let config = factory.load_config().expect("bundled config should load");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn loaded_context_drives_a_player() {
    let context = ContentFactory::bundled()
        .load_context()
        .expect("bundled content should load");
    let mut player = Player::new(123u64.into(), &context);
    let froglin = player
        .capture_froglin(FroglinType::TreeFroglin, 2u64.into())
        .expect("capture should succeed");
    assert_eq!(froglin.habitats[0], ZoneId::Forest);
}

#[test]
fn edited_catalog_is_validated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundled = ContentFactory::bundled();
    let catalog = fs::read_to_string(bundled.data_dir().join("catalog.ron"))
        .expect("bundled catalog readable");

    // Give the tree froglin the desert froglin's type id.
    let edited = catalog.replacen("type_id: 2", "type_id: 1", 1);
    fs::write(dir.path().join("catalog.ron"), edited).expect("write catalog");

    let err = ContentFactory::new(dir.path())
        .load_catalog()
        .expect_err("duplicate type id should be rejected");
    assert!(err.to_string().contains("type id 1"));
}

#[test]
fn missing_files_report_their_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ContentFactory::new(dir.path())
        .load_config()
        .expect_err("no config.toml");
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn config_with_wrong_depth_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("config.toml"),
        "item_slots = 8\nfroglin_slots = 8\nstash_depth = 32\n",
    )
    .expect("write config");

    let err = ContentFactory::new(dir.path())
        .load_context()
        .expect_err("depth differs from circuits");
    assert!(err.to_string().contains("stash_depth"));
}
