use goscore::scoring::{compute_result, ScoreBreakdown, ScoringMethod};
use proptest::prelude::*;

// --- STRATEGIES ---

// Scores stay within what a real board can produce, plus some slack.
fn arb_points() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0u32..1000).prop_map(f64::from),
        (-1000.0..1000.0f64),
    ]
}

// Komi in half points, as rule sets use it.
fn arb_komi() -> impl Strategy<Value = f64> {
    (-40i32..=40).prop_map(|half| half as f64 / 2.0)
}

fn arb_method() -> impl Strategy<Value = ScoringMethod> {
    prop_oneof![Just(ScoringMethod::Area), Just(ScoringMethod::Territory)]
}

prop_compose! {
    fn arb_breakdown()(
        a0 in arb_points(), a1 in arb_points(),
        t0 in arb_points(), t1 in arb_points(),
        c0 in arb_points(), c1 in arb_points()
    ) -> ScoreBreakdown {
        ScoreBreakdown::new([a0, a1], [t0, t1], [c0, c1])
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_result_is_deterministic(
        method in arb_method(),
        b in arb_breakdown(),
        komi in arb_komi()
    ) {
        let first = compute_result(method, &b, komi).unwrap();
        let second = compute_result(method, &b, komi).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_label_matches_sign_of_margin(
        method in arb_method(),
        b in arb_breakdown(),
        komi in arb_komi()
    ) {
        let r = compute_result(method, &b, komi).unwrap();

        if r.margin > 0.0 {
            let numeral = r.label.strip_prefix("B+").expect("black label");
            prop_assert_eq!(numeral.parse::<f64>().unwrap(), r.margin);
        } else if r.margin < 0.0 {
            let numeral = r.label.strip_prefix("W+").expect("white label");
            prop_assert_eq!(numeral.parse::<f64>().unwrap(), -r.margin);
        } else {
            prop_assert_eq!(r.label.as_str(), "Draw");
        }

        prop_assert_eq!(r.label == "Draw", r.margin == 0.0);
    }

    #[test]
    fn test_komi_shifts_margin_towards_white(
        method in arb_method(),
        b in arb_breakdown(),
        komi in arb_komi()
    ) {
        let base = compute_result(method, &b, 0.0).unwrap();
        let with_komi = compute_result(method, &b, komi).unwrap();
        prop_assert!((base.margin - komi - with_komi.margin).abs() < 1e-9);
    }

    #[test]
    fn test_area_ignores_territory_ledgers(
        b in arb_breakdown(),
        other in arb_breakdown(),
        komi in arb_komi()
    ) {
        let mut mixed = other;
        mixed.area = b.area;
        let r1 = compute_result(ScoringMethod::Area, &b, komi).unwrap();
        let r2 = compute_result(ScoringMethod::Area, &mixed, komi).unwrap();
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn test_territory_ignores_area_ledger(
        b in arb_breakdown(),
        area in (arb_points(), arb_points()),
        komi in arb_komi()
    ) {
        let mut mixed = b;
        mixed.area = [area.0, area.1];
        let r1 = compute_result(ScoringMethod::Territory, &b, komi).unwrap();
        let r2 = compute_result(ScoringMethod::Territory, &mixed, komi).unwrap();
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn test_swapping_colours_mirrors_integer_result(
        method in arb_method(),
        pts in proptest::collection::vec(0u32..400, 6)
    ) {
        let p: Vec<f64> = pts.into_iter().map(f64::from).collect();
        let b = ScoreBreakdown::new([p[0], p[1]], [p[2], p[3]], [p[4], p[5]]);
        let swapped = ScoreBreakdown::new([p[1], p[0]], [p[3], p[2]], [p[5], p[4]]);

        let r = compute_result(method, &b, 0.0).unwrap();
        let s = compute_result(method, &swapped, 0.0).unwrap();
        prop_assert_eq!(r.margin, -s.margin);
        prop_assert_eq!(r.winner().map(|w| w.index()), s.winner().map(|w| 1 - w.index()));
    }
}
