//! Property-based tests for shape geometry and rendering.
//!
//! Trees come from the replay-token sampler, so any failure is reproducible
//! from the `(seed, index)` pair proptest prints.

use nalgebra::Vector2;
use proptest::prelude::*;
use shapes::prelude::*;
use shapes::rand::{draw_tree, ReplayToken, TreeCfg};

fn eps_for(scale: f64) -> f64 {
    1e-9 * scale.max(1.0)
}

/// Declared bounding box of `s`, centred on the origin.
fn declared(s: &Shape) -> Extent {
    let half = Vector2::new(s.width() / 2.0, s.height() / 2.0);
    Extent {
        min: -half,
        max: half,
    }
}

/// Anchor of each top-level child of a compound (pen at its `gsave`).
fn child_anchors(cmds: &[Command]) -> Vec<Vector2<f64>> {
    let mut depth = 0usize;
    let mut pen = Vector2::zeros();
    let mut anchors = Vec::new();
    for c in cmds {
        match c {
            Command::Gsave => {
                if depth == 1 {
                    anchors.push(pen);
                }
                depth += 1;
            }
            Command::Grestore => depth -= 1,
            Command::MoveRel(d) if depth == 1 => pen += *d,
            _ => {}
        }
    }
    anchors
}

fn rotation_strategy() -> impl Strategy<Value = Rotation> {
    prop_oneof![
        Just(Rotation::R90),
        Just(Rotation::R180),
        Just(Rotation::R270)
    ]
}

proptest! {
    #[test]
    fn circle_box_is_diameter(r in 1e-3f64..1e3) {
        let c = circle(r).unwrap();
        prop_assert_eq!(c.width(), 2.0 * r);
        prop_assert_eq!(c.height(), 2.0 * r);
        let arc = Command::Arc { radius: r };
        prop_assert!(c.commands().contains(&arc));
    }

    #[test]
    fn polygon_box_matches_drawn_outline(n in 3usize..40, s in 0.1f64..100.0) {
        let p = polygon(n, s).unwrap();
        prop_assert!(p.width() > 0.0 && p.height() > 0.0);
        let cmds = p.commands();
        let explicit = cmds.iter().filter(|c| matches!(c, Command::LineRel(_))).count();
        prop_assert_eq!(explicit, n - 1);
        let ink = ink_extent(&cmds).unwrap().unwrap();
        let eps = eps_for(p.width().max(p.height()));
        prop_assert!((ink.width() - p.width()).abs() < eps);
        prop_assert!((ink.height() - p.height()).abs() < eps);
        prop_assert!(ink.center().norm() < eps);
    }

    #[test]
    fn square_and_triangle_match_polygon(s in 0.1f64..100.0) {
        prop_assert_eq!(square(s).unwrap().to_postscript(), polygon(4, s).unwrap().to_postscript());
        prop_assert_eq!(triangle(s).unwrap().to_postscript(), polygon(3, s).unwrap().to_postscript());
    }

    #[test]
    fn rotation_box(w in 0.1f64..100.0, h in 0.1f64..100.0, rot in rotation_strategy()) {
        let r = rotated(rectangle(w, h).unwrap(), rot);
        if rot == Rotation::R180 {
            prop_assert_eq!((r.width(), r.height()), (w, h));
        } else {
            prop_assert_eq!((r.width(), r.height()), (h, w));
        }
    }

    #[test]
    fn vertical_pair_centres(h1 in 0.1f64..50.0, h2 in 0.1f64..50.0, w in 0.1f64..50.0) {
        let v = vertical([rectangle(w, h1).unwrap(), circle(h2 / 2.0).unwrap()]).unwrap();
        prop_assert_eq!(v.width(), w.max(h2));
        prop_assert!((v.height() - (h1 + h2)).abs() < eps_for(h1 + h2));
        let a = child_anchors(&v.commands());
        prop_assert!(((a[1].y - a[0].y) - (h1 + h2) / 2.0).abs() < eps_for(h1 + h2));
        prop_assert!(a[0].x == 0.0 && a[1].x == 0.0);
    }

    #[test]
    fn horizontal_pair_centres(w1 in 0.1f64..50.0, w2 in 0.1f64..50.0, h in 0.1f64..50.0) {
        let s = horizontal([rectangle(w1, h).unwrap(), spacer(w2, 0.0).unwrap(), rectangle(w2, h).unwrap()]).unwrap();
        prop_assert!((s.width() - (w1 + 2.0 * w2)).abs() < eps_for(s.width()));
        prop_assert_eq!(s.height(), h);
        let a = child_anchors(&s.commands());
        prop_assert_eq!(a.len(), 2);
        prop_assert!(((a[1].x - a[0].x) - (w1 / 2.0 + w2 + w2 / 2.0)).abs() < eps_for(s.width()));
    }

    #[test]
    fn ink_stays_inside_declared_box(seed in any::<u64>(), index in 0u64..1_000) {
        let tree = draw_tree(TreeCfg::default(), ReplayToken { seed, index });
        prop_assert!(tree.width() >= 0.0 && tree.height() >= 0.0);
        if let Some(ink) = ink_extent(&tree.commands()).unwrap() {
            let eps = eps_for(tree.width().max(tree.height()));
            prop_assert!(ink.within_eps(&declared(&tree), eps));
        }
    }

    #[test]
    fn ink_fills_declared_box_without_spacers(seed in any::<u64>(), index in 0u64..1_000) {
        let cfg = TreeCfg { spacers: false, ..TreeCfg::default() };
        let tree = draw_tree(cfg, ReplayToken { seed, index });
        let ink = ink_extent(&tree.commands()).unwrap().unwrap();
        let eps = eps_for(tree.width().max(tree.height()));
        prop_assert!((ink.width() - tree.width()).abs() < eps, "{} vs {}", ink.width(), tree.width());
        prop_assert!((ink.height() - tree.height()).abs() < eps, "{} vs {}", ink.height(), tree.height());
        prop_assert!(ink.center().norm() < eps);
    }

    #[test]
    fn queries_are_idempotent(seed in any::<u64>()) {
        let tree = draw_tree(TreeCfg::default(), ReplayToken { seed, index: 0 });
        prop_assert_eq!(tree.width(), tree.width());
        prop_assert_eq!(tree.height(), tree.height());
        prop_assert_eq!(tree.to_postscript(), tree.to_postscript());
    }
}
