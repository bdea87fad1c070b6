use super::*;
use crate::catalog::Catalog;

#[test]
fn diff_six_is_high() {
    assert_eq!(get_acceptance_chance(106.0, 100.0).tier, ChanceTier::High);
}

#[test]
fn diff_minus_three_is_very_low() {
    assert_eq!(get_acceptance_chance(97.0, 100.0).tier, ChanceTier::VeryLow);
}

#[test]
fn boundaries_are_inclusive_lower_bounds() {
    assert_eq!(ChanceTier::from_diff(5.0), ChanceTier::High);
    assert_eq!(ChanceTier::from_diff(4.999), ChanceTier::Medium);
    assert_eq!(ChanceTier::from_diff(2.0), ChanceTier::Medium);
    assert_eq!(ChanceTier::from_diff(1.999), ChanceTier::Low);
    assert_eq!(ChanceTier::from_diff(-2.0), ChanceTier::Low);
    assert_eq!(ChanceTier::from_diff(-2.001), ChanceTier::VeryLow);
}

#[test]
fn bucketing_is_total_and_monotonic() {
    let mut previous = ChanceTier::VeryLow;
    let rank = |t: ChanceTier| match t {
        ChanceTier::VeryLow => 0,
        ChanceTier::Low => 1,
        ChanceTier::Medium => 2,
        ChanceTier::High => 3,
    };
    let mut diff = -20.0_f64;
    while diff <= 20.0 {
        let tier = ChanceTier::from_diff(diff);
        assert!(rank(tier) >= rank(previous), "tier decreased at {diff}");
        previous = tier;
        diff += 0.125;
    }
    assert_eq!(ChanceTier::from_diff(f64::NAN), ChanceTier::VeryLow);
    assert_eq!(ChanceTier::from_diff(f64::INFINITY), ChanceTier::High);
    assert_eq!(ChanceTier::from_diff(f64::NEG_INFINITY), ChanceTier::VeryLow);
}

#[test]
fn chance_carries_label_percentage_and_diff() {
    let chance = get_acceptance_chance(103.0, 100.0);
    assert_eq!(chance.tier, ChanceTier::Medium);
    assert_eq!(chance.label, "Medium chance");
    assert_eq!(chance.percentage, 65);
    assert!((chance.score_diff - 3.0).abs() < 1e-9);
}

#[test]
fn percentages_decrease_with_tier() {
    let tiers = [ChanceTier::High, ChanceTier::Medium, ChanceTier::Low, ChanceTier::VeryLow];
    assert!(tiers.windows(2).all(|w| w[0].percentage() > w[1].percentage()));
}

#[test]
fn compare_all_covers_every_specialty() {
    let catalog = Catalog::bundled().unwrap();
    let enit = catalog.get("enit").unwrap();
    let results = compare_all(enit, 150.0);
    assert_eq!(results.len(), enit.detailed_specialties.len());
    // ENIT-GC cutoff 152.4 -> diff -2.4
    assert_eq!(results[0].specialty.code, "ENIT-GC");
    assert_eq!(results[0].chance.tier, ChanceTier::VeryLow);
    // ENIT-GH cutoff 139.6 -> diff 10.4
    assert_eq!(results[3].chance.tier, ChanceTier::High);
}

#[test]
fn compare_all_honours_boundaries_on_real_cutoffs() {
    let catalog = Catalog::bundled().unwrap();
    let enit = catalog.get("enit").unwrap();
    let gc = &enit.detailed_specialties[0];
    assert_eq!(gc.code, "ENIT-GC");

    let tier_at = |offset: f64| compare_all(enit, gc.last_acceptable_score + offset)[0].chance.tier;
    assert_eq!(tier_at(5.0), ChanceTier::High);
    assert_eq!(tier_at(2.0), ChanceTier::Medium);
    assert_eq!(tier_at(1.999), ChanceTier::Low);
    assert_eq!(tier_at(-2.0), ChanceTier::Low);
    assert_eq!(tier_at(-2.001), ChanceTier::VeryLow);

    // Typed input at cutoff + 2 lands on the same boundary.
    let typed = parse_score("154,4").unwrap();
    assert_eq!(compare_all(enit, typed)[0].chance.tier, ChanceTier::Medium);
}

#[test]
fn tier_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&ChanceTier::VeryLow).unwrap(), r#""very_low""#);
}

#[test]
fn parse_score_accepts_comma_and_rejects_garbage() {
    assert_eq!(parse_score(" 142,5 "), Some(142.5));
    assert_eq!(parse_score("80.04"), Some(80.04));
    assert_eq!(parse_score(""), None);
    assert_eq!(parse_score("abc"), None);
    assert_eq!(parse_score("-3"), None);
    assert_eq!(parse_score("NaN"), None);
    assert_eq!(parse_score("inf"), None);
}
