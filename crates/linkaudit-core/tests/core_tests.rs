use std::path::{MAIN_SEPARATOR_STR, PathBuf};

use linkaudit_core::{
    CategoryPlan, ExclusionSet, LinkScan, MediaCategory, ScanConfig, Settings, group_key,
};

#[test]
fn test_category_defaults_flow_into_scan_config() {
    for (category, index, label) in [
        (MediaCategory::Tv, -3, "UNKNOWN_SHOW"),
        (MediaCategory::Movies, -2, "UNKNOWN_MOVIE"),
    ] {
        let config = ScanConfig::for_category(category, "/media", vec![".mkv".to_string()]);
        assert_eq!(config.group_index, index);
        assert_eq!(config.fallback_label, label);
    }
}

#[test]
fn test_same_title_from_different_depths_merges() {
    let shallow = ["ShowA", "Season 01", "ep1.mkv"].join(MAIN_SEPARATOR_STR);
    let nested = ["Collection", "ShowA", "Season 02", "ep1.mkv"].join(MAIN_SEPARATOR_STR);

    let mut scan = LinkScan::new();
    for path in [shallow, nested] {
        scan.record_candidate();
        let key = group_key(&path, -3, "UNKNOWN_SHOW").to_string();
        scan.record_kept(&key, path);
    }

    assert_eq!(scan.group_count(), 1);
    assert_eq!(scan.groups["ShowA"].len(), 2);
}

#[test]
fn test_exclusion_set_from_iterator() {
    let set: ExclusionSet = ["a.mkv".to_string(), "a.mkv".to_string(), "b.mkv".to_string()]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains("a.mkv"));
    assert!(!set.contains("c.mkv"));
}

#[test]
fn test_settings_file_round_trip() {
    let temp = tempfile::TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    std::fs::create_dir(&config_dir).unwrap();
    let path = config_dir.join("config.json");
    std::fs::write(
        &path,
        r#"{
            "verbose": false,
            "video_extensions": [".mkv"],
            "reports_dir": "out",
            "tv": { "root_dir": "/media/tv", "exclusion_file": "tv.txt" }
        }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert!(!settings.verbose);
    assert_eq!(settings.reports_dir, Some(PathBuf::from("out")));
    assert_eq!(settings.config_dir(), config_dir.as_path());

    match settings.plan(MediaCategory::Tv) {
        CategoryPlan::Ready(run) => {
            assert_eq!(run.category, MediaCategory::Tv);
            assert_eq!(run.exclusion_file, config_dir.join("tv.txt"));
        }
        other => panic!("expected a ready plan, got {other:?}"),
    }
}
