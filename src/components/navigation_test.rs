use super::*;

#[test]
fn brand_links_home() {
    assert_eq!(BRAND, ("Workout Builder", "/"));
}

#[test]
fn nav_links_have_fixed_labels_and_targets() {
    assert_eq!(
        NAV_LINKS,
        [
            ("Home", "/"),
            ("Workouts", "/workouts"),
            ("Progress", "/progress"),
            ("Profile", "/profile"),
        ]
    );
}

#[test]
fn nav_targets_are_absolute_paths() {
    for (_, target) in NAV_LINKS {
        assert!(target.starts_with('/'), "target {target} must be absolute");
    }
}
