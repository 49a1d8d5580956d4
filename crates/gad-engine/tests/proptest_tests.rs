//! Property-based tests for drawing-generation invariants using `proptest`.

mod common;

use proptest::prelude::*;

use bridge_types::Component;
use gad_engine::abutment::{derive_chain, profile_points, Mirror, Side};
use gad_engine::{generate, generate_piers, generate_superstructure, GenOptions, ScaleContext};

use common::params_with;

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_coord() -> impl Strategy<Value = f64> {
    -10_000.0f64..10_000.0
}

fn arb_scale() -> impl Strategy<Value = f64> {
    1.0f64..500.0
}

/// Batter runs long enough to keep the profile well away from degenerate.
fn arb_run() -> impl Strategy<Value = f64> {
    0.5f64..25.0
}

// ---------------------------------------------------------------------------
// 1. Transforms leave left and datum fixed
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn left_and_datum_are_fixed(
        left in arb_coord(),
        datum in arb_coord(),
        scale1 in arb_scale(),
        scale2 in arb_scale(),
    ) {
        let ctx = ScaleContext::from_raw(
            scale1,
            scale2,
            0.0,
            datum,
            left,
            left + 100.0,
            datum + 10.0,
        )
        .unwrap();
        prop_assert_eq!(ctx.hpos(left), left);
        prop_assert_eq!(ctx.vpos(datum), datum);
        prop_assert_eq!(ctx.h2pos(left), left);
        prop_assert_eq!(ctx.v2pos(datum), datum);
    }
}

// ---------------------------------------------------------------------------
// 2. Equal scales collapse plan transforms onto elevation transforms
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn unit_plan_scale_matches_elevation(
        scale in arb_scale(),
        a in arb_coord(),
        b in arb_coord(),
    ) {
        let ctx = ScaleContext::from_raw(scale, scale, 0.0, 95.0, 0.0, 100.0, 105.0).unwrap();
        prop_assert_eq!(ctx.sc, 1.0);
        prop_assert_eq!(ctx.h2pos(a), ctx.hpos(a));
        prop_assert_eq!(ctx.v2pos(b), ctx.vpos(b));
    }
}

// ---------------------------------------------------------------------------
// 3. Span and pier counts follow nspan
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn component_counts_follow_span_count(nspan in 1u32..12) {
        let params = params_with(&[("nspan", f64::from(nspan))]);
        let ctx = ScaleContext::new(&params).unwrap();
        let options = GenOptions::default();

        let spans = generate_superstructure(&params, &ctx, &options).unwrap();
        prop_assert_eq!(spans.len(), nspan as usize);

        let piers = generate_piers(&params, &ctx).unwrap();
        prop_assert_eq!(piers.len(), 3 * (nspan as usize - 1));

        let scene = generate(&params, &options).unwrap();
        prop_assert_eq!(
            scene.primitives_of(Component::PlanView).len(),
            2 * (nspan as usize - 1) + 3
        );
    }
}

// ---------------------------------------------------------------------------
// 4. Right abutment mirrors the left about left + lbridge
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn abutments_mirror_about_bridge_end(
        alfb in arb_run(),
        altb in arb_run(),
        albb in arb_run(),
        lbridge in 20.0f64..200.0,
    ) {
        let params = params_with(&[
            ("alfb", alfb),
            ("altb", altb),
            ("albb", albb),
            ("lbridge", lbridge),
        ]);
        let ctx = ScaleContext::new(&params).unwrap();
        let left = profile_points(
            &derive_chain(&params, Side::Left).unwrap(),
            Mirror::IDENTITY,
            &ctx,
        );
        let right = profile_points(
            &derive_chain(&params, Side::Right).unwrap(),
            Mirror::about(params.right_edge()),
            &ctx,
        );

        // With left = 0, hpos(x) + hpos(re - x) = hhs * re.
        let expected = ctx.hhs * params.right_edge();
        for (l, r) in left.iter().zip(right.iter()) {
            prop_assert!((l.x + r.x - expected).abs() < TOL * expected.max(1.0),
                "x pair ({}, {}) does not sum to {}", l.x, r.x, expected);
            prop_assert_eq!(l.y, r.y);
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Sections tile the scene
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sections_tile_the_scene(nspan in 1u32..8, yincr in 0.5f64..5.0, xincr in 1.0f64..20.0) {
        let params = params_with(&[
            ("nspan", f64::from(nspan)),
            ("yincr", yincr),
            ("xincr", xincr),
        ]);
        let scene = generate(&params, &GenOptions::default()).unwrap();

        let mut next = 0;
        for (section, component) in scene.sections().iter().zip(Component::ALL) {
            prop_assert_eq!(section.component, component);
            prop_assert_eq!(section.range.start, next);
            next = section.range.end;
        }
        prop_assert_eq!(next, scene.len());
    }
}
