use super::*;

#[test]
fn exactly_three_plans() {
    assert_eq!(PLANS.len(), 3);
}

#[test]
fn plan_titles_in_display_order() {
    let titles: Vec<&str> = PLANS.iter().map(|(title, _)| *title).collect();
    assert_eq!(titles, ["Beginner Plan", "Intermediate Plan", "Advanced Plan"]);
}

#[test]
fn plan_descriptions_are_nonempty() {
    for (title, description) in PLANS {
        assert!(!description.is_empty(), "plan {title} has no description");
    }
}
