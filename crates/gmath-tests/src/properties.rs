//! Property-based tests.

use gmath_color::{Color, Color8, Color16, Color32, Color64};
use gmath_core::{Random, atan2_approx, fast_round_to_int, lerp, sin_approx};
use gmath_linalg::{DMat4, Matrix, Vec3, vec3};
use proptest::prelude::*;

fn rows<const R: usize, const C: usize>(flat: &[f64]) -> [[f64; C]; R] {
    std::array::from_fn(|r| std::array::from_fn(|c| flat[r * C + c]))
}

/// Random matrix with a dominant diagonal, so it is well conditioned.
fn dominant_matrix() -> impl Strategy<Value = DMat4> {
    prop::array::uniform16(-1.0f64..1.0).prop_map(|flat| {
        let mut m = DMat4::from_rows(rows::<4, 4>(&flat));
        for i in 0..4 {
            m[(i, i)] += 10.0;
        }
        m
    })
}

fn channels() -> impl Strategy<Value = [u8; 4]> {
    prop::array::uniform4(any::<u8>())
}

proptest! {
    #[test]
    fn normalized_has_unit_magnitude(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0, z in -1000.0f32..1000.0) {
        let v: Vec3 = vec3(x, y, z);
        prop_assume!((x * x + y * y + z * z).sqrt() > 1e-3);
        let n = v.normalized();
        prop_assert!((n.magnitude() - 1.0).abs() < 0.005, "magnitude {}", n.magnitude());
    }

    #[test]
    fn hex_round_trips_for_every_width(hex in any::<u32>()) {
        prop_assert_eq!(Color8::from_hex(hex).get_hex(), hex);
        prop_assert_eq!(Color16::from_hex(hex).get_hex(), hex);
        prop_assert_eq!(Color32::from_hex(hex).get_hex(), hex);
        prop_assert_eq!(Color64::from_hex(hex).get_hex(), hex);
    }

    #[test]
    fn inverse_of_inverse(m in dominant_matrix()) {
        let back = m.inverse().inverse();
        for k in 0..16 {
            prop_assert!((back[k] - m[k]).abs() < 1e-9, "index {}: {} vs {}", k, back[k], m[k]);
        }
        let product = m * m.inverse();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!((product[(i, j)] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn identity_is_neutral(m in dominant_matrix()) {
        prop_assert_eq!(DMat4::identity() * m, m);
        prop_assert_eq!(m * DMat4::identity(), m);
    }

    #[test]
    fn double_transpose_is_identity(flat in prop::array::uniform15(-1000.0f64..1000.0)) {
        let m = Matrix::<f64, 3, 5>::from_rows(rows::<3, 5>(&flat));
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn lerp_stays_between_endpoints(a in -1e6f64..1e6, b in -1e6f64..1e6, t in -1.0f32..2.0) {
        let v = lerp(a, b, t);
        let eps = 1e-9 * (a.abs() + b.abs() + 1.0);
        prop_assert!(v >= a.min(b) - eps && v <= a.max(b) + eps);
    }

    #[test]
    fn fast_round_matches_ties_even(x in -1e9f64..1e9) {
        prop_assert_eq!(fast_round_to_int(x), x.round_ties_even() as i32);
    }

    #[test]
    fn sin_error_bound(x in -100.0f64..100.0) {
        prop_assert!((sin_approx(x) - x.sin()).abs() < 4e-4);
    }

    #[test]
    fn atan2_error_bound(y in -100.0f64..100.0, x in -100.0f64..100.0) {
        prop_assume!(y != 0.0 || x != 0.0);
        prop_assert!((atan2_approx(y, x) - y.atan2(x)).abs() < 2e-3);
    }

    #[test]
    fn color_ops_saturate_like_u8(a in channels(), b in channels()) {
        let (ca, cb) = (Color::from_array(a), Color::from_array(b));
        let add = ca + cb;
        let sub = ca - cb;
        let mul = ca * cb;
        for i in 0..4 {
            prop_assert_eq!(add[i], a[i].saturating_add(b[i]));
            prop_assert_eq!(sub[i], a[i].saturating_sub(b[i]));
            prop_assert_eq!(mul[i], a[i].saturating_mul(b[i]));
        }
    }

    #[test]
    fn uniform_stays_in_range(seed in any::<u64>(), lo in -1000i32..0, hi in 0i32..1000) {
        let mut rng = Random::from_seed(seed);
        for _ in 0..32 {
            let i = rng.uniform(lo, hi);
            prop_assert!((lo..=hi).contains(&i));
            let f = rng.uniform(lo as f64, hi as f64);
            prop_assert!(f >= lo as f64 && f <= hi as f64 + 1e-9);
        }
    }
}
