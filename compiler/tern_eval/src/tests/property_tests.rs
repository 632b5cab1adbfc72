use proptest::prelude::*;

use super::eval_display;

/// `(n)` so negative values parse as a negated literal.
fn lit(n: i64) -> String {
    format!("({n})")
}

proptest! {
    #[test]
    fn defaults_follow_earlier_parameters(x in -10_000i64..10_000, z in -10_000i64..10_000) {
        let source = format!(
            "f(x, y=x+1, z=0) = x+y+z\n[f({}), f({}, z={})]",
            lit(x), lit(x), lit(z)
        );
        let expected = format!("[{}, {}]", 2 * x + 1, 2 * x + 1 + z);
        prop_assert_eq!(eval_display(&source), expected);
    }

    #[test]
    fn closures_see_the_latest_binding(a in -1_000i64..1_000, b in -1_000i64..1_000) {
        let source = format!(
            "f(x) = x + y\ny = {}\nfirst = f(3)\ny = {}\n[first, f(3)]",
            lit(a), lit(b)
        );
        prop_assert_eq!(eval_display(&source), format!("[{}, {}]", a + 3, b + 3));
    }

    #[test]
    fn arithmetic_matches_checked_integers(
        a in -1_000_000_000_000i64..1_000_000_000_000,
        b in -1_000_000i64..1_000_000,
    ) {
        prop_assume!(b != 0);
        let source = format!(
            "[{a} + {b}, {a} - {b}, {a} * {b}, {a} / {b}, {a} % {b}]",
            a = lit(a),
            b = lit(b)
        );
        let expected = format!("[{}, {}, {}, {}, {}]", a + b, a - b, a * b, a / b, a % b);
        prop_assert_eq!(eval_display(&source), expected);
    }

    #[test]
    fn loops_count_like_ranges(n in 0i64..200) {
        let source = format!("n = 0\nfor i in range({n}) {{ n = n + i }}\nn");
        prop_assert_eq!(eval_display(&source), ((0..n).sum::<i64>()).to_string());
    }
}
