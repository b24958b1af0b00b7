use super::*;
use proptest::prelude::*;

fn small_business() -> ScenarioInput {
    ScenarioInput::new("Solo Consultant", 5_000.0, 1_000.0, 1, 10.0)
}

fn large_business() -> ScenarioInput {
    ScenarioInput::new("Regional Distributor", 200_000.0, 30_000.0, 40, 90.0)
}

#[test]
fn test_conservative_small_business_below_platform_cost() {
    let result = RoiEstimator::conservative()
        .calculate(&small_business())
        .unwrap();

    assert_eq!(result.hourly_rate, 60);
    assert_eq!(result.time_savings_percent, 15);
    assert_eq!(result.time_freed, 1.5);
    assert_eq!(result.time_cost_savings, 90);
    assert_eq!(result.tools_savings, 30);
    assert_eq!(result.total_savings, 120);
    assert_eq!(result.monthly_savings, 0);
    assert_eq!(result.annual_savings, 0);
    assert_eq!(result.payback_months, 12.0);
    assert!((result.platform_cost_ratio - 3.98).abs() < 1e-9);
    assert!(!result.is_viable);
}

#[test]
fn test_conservative_large_business() {
    let result = RoiEstimator::conservative()
        .calculate(&large_business())
        .unwrap();

    assert_eq!(result.hourly_rate, 120);
    assert_eq!(result.time_savings_percent, 30);
    assert_eq!(result.time_freed, 27.0);
    assert_eq!(result.time_cost_savings, 3_240);
    assert_eq!(result.tools_savings, 1_000); // 3000 capped at 1000
    assert_eq!(result.total_savings, 4_240);
    assert_eq!(result.monthly_savings, 4_041);
    assert_eq!(result.annual_savings, 48_492);
    assert_eq!(result.payback_months, 1.0); // floored
    assert!(result.is_viable);
}

#[test]
fn test_improved_large_business() {
    let result = RoiEstimator::improved().calculate(&large_business()).unwrap();

    assert_eq!(result.hourly_rate, 140);
    assert_eq!(result.time_savings_percent, 40);
    assert_eq!(result.time_freed, 36.0);
    assert_eq!(result.time_cost_savings, 5_040);
    assert_eq!(result.tools_savings, 1_500);
    assert_eq!(result.total_savings, 6_540);
    assert_eq!(result.monthly_savings, 6_341);
    assert_eq!(result.annual_savings, 76_092);
    assert!(result.platform_cost_ratio > 0.09 && result.platform_cost_ratio < 0.11);
    assert_eq!(result.payback_months, 0.0);
    assert!(result.is_viable);
}

#[test]
fn test_improved_small_business_just_viable() {
    let result = RoiEstimator::improved().calculate(&small_business()).unwrap();

    // 2.5h * 80 = 200, tools 50, minus 199
    assert_eq!(result.time_cost_savings, 200);
    assert_eq!(result.tools_savings, 50);
    assert_eq!(result.monthly_savings, 51);
    assert_eq!(result.payback_months, 3.9);
    assert!(result.is_viable);
}

#[test]
fn test_conservative_threshold_discontinuity() {
    // Net savings of 56 clears the 50 threshold, so payback is computed.
    let bakery = ScenarioInput::new("Neighborhood Bakery", 8_000.0, 2_500.0, 3, 20.0);
    let result = RoiEstimator::conservative().calculate(&bakery).unwrap();

    assert_eq!(result.monthly_savings, 56);
    assert_eq!(result.payback_months, 3.6);
    // Payback is fine, but savings are under 100.
    assert!(!result.is_viable);
}

#[test]
fn test_conservative_savings_just_under_threshold_not_viable() {
    // 33.1667h * 15% * 60 = 298.5 gross, 99.5 net: reported as 100.
    let input = ScenarioInput::new("Edge", 5_000.0, 0.0, 1, 298.5 / 9.0);
    let result = RoiEstimator::conservative().calculate(&input).unwrap();

    assert_eq!(result.monthly_savings, 100);
    assert_eq!(result.payback_months, 2.0);
    assert!(!result.is_viable);
}

#[test]
fn test_improved_cost_ratio_just_over_threshold_not_viable() {
    // 199 / 3977 = 5.0038% of revenue, reported as 5.00.
    let input = ScenarioInput::new("Edge", 3_977.0, 0.0, 1, 100.0);
    let result = RoiEstimator::improved().calculate(&input).unwrap();

    assert_eq!(result.platform_cost_ratio, 5.0);
    assert!(result.monthly_savings >= 50);
    assert!(!result.is_viable);

    let at_limit = ScenarioInput::new("Edge", 3_980.0, 0.0, 1, 100.0);
    assert!(RoiEstimator::improved().calculate(&at_limit).unwrap().is_viable);
}

#[test]
fn test_unbounded_hours_rejected_instead_of_overflowing() {
    let input = ScenarioInput::new("Runaway", 200_000.0, 0.0, 1, 1.0e17);
    for estimator in [RoiEstimator::conservative(), RoiEstimator::improved()] {
        let err = estimator.calculate(&input).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("time_spent_hours"));
    }

    let huge = ScenarioInput::new("Runaway", 200_000.0, 0.0, 1, f64::MAX);
    assert!(RoiEstimator::improved().calculate(&huge).is_err());
}

#[test]
fn test_no_savings_uses_policy_fallback() {
    let idle = ScenarioInput::new("Idle", 20_000.0, 0.0, 2, 0.0);

    let conservative = RoiEstimator::conservative().calculate(&idle).unwrap();
    assert_eq!(conservative.monthly_savings, 0);
    assert_eq!(conservative.payback_months, 12.0);

    let improved = RoiEstimator::improved().calculate(&idle).unwrap();
    assert_eq!(improved.monthly_savings, 0);
    assert_eq!(improved.payback_months, 24.0);
    assert!(!improved.is_viable);
}

#[test]
fn test_zero_revenue_is_invalid_input() {
    let broken = ScenarioInput::new("Pre-revenue", 0.0, 1_000.0, 1, 10.0);
    let err = RoiEstimator::improved().calculate(&broken).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_custom_platform_cost_flows_through() {
    let policy = EstimatorPolicy::conservative().with_platform_cost(0.0);
    let result = RoiEstimator::new(policy)
        .calculate(&small_business())
        .unwrap();

    assert_eq!(result.monthly_savings, 120);
    assert_eq!(result.platform_cost_ratio, 0.0);
    // Floor applies: 0 / 120 is raised to one month.
    assert_eq!(result.payback_months, 1.0);
    assert!(result.is_viable);
}

#[test]
fn test_calculate_all_preserves_order_and_stops_on_error() {
    let estimator = RoiEstimator::conservative();
    let scenarios = vec![large_business(), small_business()];
    let results = estimator.calculate_all(&scenarios).unwrap();
    let names: Vec<&str> = results.iter().map(|(s, _)| s.name.as_str()).collect();
    assert_eq!(names, vec!["Regional Distributor", "Solo Consultant"]);

    let with_invalid = vec![
        small_business(),
        ScenarioInput::new("Negative", 5_000.0, -10.0, 1, 10.0),
    ];
    assert!(estimator.calculate_all(&with_invalid).is_err());
}

#[test]
fn test_round_to_ties_away_from_zero() {
    assert_eq!(round_to(6.25, 1), 6.3);
    assert_eq!(round_to(3.75, 1), 3.8);
    assert_eq!(round_to(0.031, 1), 0.0);
    assert_eq!(round_money(89.5), 90);
}

fn scenario_strategy() -> impl Strategy<Value = ScenarioInput> {
    (1.0..250_000.0f64, 0.0..40_000.0f64, 1u32..200, 0.0..500.0f64).prop_map(
        |(revenue, costs, team, hours)| ScenarioInput::new("generated", revenue, costs, team, hours),
    )
}

proptest! {
    #[test]
    fn annual_is_twelve_months(input in scenario_strategy()) {
        for estimator in [RoiEstimator::conservative(), RoiEstimator::improved()] {
            let result = estimator.calculate(&input).unwrap();
            prop_assert_eq!(result.annual_savings, result.monthly_savings * 12);
            prop_assert!(result.total_savings + 1 >= result.monthly_savings);
        }
    }

    #[test]
    fn conservative_viability_matches_thresholds(input in scenario_strategy()) {
        let result = RoiEstimator::conservative().calculate(&input).unwrap();
        // Rounding can hide a value just across a threshold, so only
        // figures clear of both edges pin the outcome down.
        if result.is_viable {
            prop_assert!(result.monthly_savings >= 100 && result.payback_months <= 6.0);
        }
        if result.monthly_savings >= 101 && result.payback_months <= 5.9 {
            prop_assert!(result.is_viable);
        }
        prop_assert!(result.payback_months >= 1.0 && result.payback_months <= 12.0);
    }

    #[test]
    fn improved_viability_implies_thresholds(input in scenario_strategy()) {
        let result = RoiEstimator::improved().calculate(&input).unwrap();
        if result.is_viable {
            prop_assert!(result.monthly_savings >= 50);
            prop_assert!(result.platform_cost_ratio <= 5.0);
        }
        prop_assert!(result.payback_months >= 0.0 && result.payback_months <= 24.0);
    }

    #[test]
    fn more_hours_never_reduce_time_savings(
        input in scenario_strategy(),
        extra in 0.0..200.0f64,
    ) {
        let busier = ScenarioInput {
            time_spent_hours: input.time_spent_hours + extra,
            ..input.clone()
        };
        for estimator in [RoiEstimator::conservative(), RoiEstimator::improved()] {
            let base = estimator.calculate(&input).unwrap();
            let more = estimator.calculate(&busier).unwrap();
            prop_assert!(more.time_cost_savings >= base.time_cost_savings);
            prop_assert_eq!(more.hourly_rate, base.hourly_rate);
        }
    }

    #[test]
    fn repeated_calculation_is_identical(input in scenario_strategy()) {
        let estimator = RoiEstimator::improved();
        prop_assert_eq!(estimator.calculate(&input).unwrap(), estimator.calculate(&input).unwrap());
    }
}
