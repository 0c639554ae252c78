use super::*;
use crate::cfg::RenderCfg;
use crate::error::ReplayError;
use nalgebra::vector;

#[test]
fn text_is_one_command_per_line() {
    let cmds = [
        Command::Gsave,
        Command::MoveRel(vector![-5.0, -2.5]),
        Command::LineRel(vector![10.0, 0.0]),
        Command::Arc { radius: 5.0 },
        Command::Rotate(90.0),
        Command::Scale(2.0, 0.5),
        Command::Grestore,
    ];
    let text = to_text(&cmds, &RenderCfg { precision: 1 });
    assert_eq!(
        text,
        "gsave\n-5.0 -2.5 rmoveto\n10.0 0.0 rlineto\n0 0 5.0 0 360 arc\n90.0 rotate\n2.0 0.5 scale\ngrestore\n"
    );
}

#[test]
fn affine_compose_matches_sequential_application() {
    let r = Affine2::rotation(90.0);
    let s = Affine2::scaling(2.0, 3.0);
    let rs = r.compose(&s);
    let p = vector![1.0, 1.0];
    let direct = r.apply(s.apply(p));
    assert!((rs.apply(p) - direct).norm() < 1e-12);
    // (1,1) -> scale (2,3) -> rotate 90° ccw -> (-3, 2)
    assert!((direct - vector![-3.0, 2.0]).norm() < 1e-12);
}

#[test]
fn replay_square_path_extent() {
    let cmds = [
        Command::Gsave,
        Command::MoveRel(vector![-1.0, -1.0]),
        Command::LineRel(vector![2.0, 0.0]),
        Command::LineRel(vector![0.0, 2.0]),
        Command::LineRel(vector![-2.0, 0.0]),
        Command::ClosePath,
        Command::Stroke,
        Command::Grestore,
    ];
    let e = ink_extent(&cmds).unwrap().unwrap();
    assert!((e.min - vector![-1.0, -1.0]).norm() < 1e-12);
    assert!((e.max - vector![1.0, 1.0]).norm() < 1e-12);
}

#[test]
fn replay_scaled_circle_is_an_ellipse_box() {
    let cmds = [
        Command::Gsave,
        Command::Scale(2.0, 1.0),
        Command::Rotate(90.0),
        Command::TranslateToCurrentPoint,
        Command::NewPath,
        Command::Arc { radius: 1.0 },
        Command::ClosePath,
        Command::Stroke,
        Command::Grestore,
    ];
    let e = ink_extent(&cmds).unwrap().unwrap();
    assert!((e.width() - 4.0).abs() < 1e-12);
    assert!((e.height() - 2.0).abs() < 1e-12);
    assert!(e.center().norm() < 1e-12);
}

#[test]
fn replay_unstroked_path_leaves_no_ink() {
    let cmds = [Command::MoveRel(vector![1.0, 1.0]), Command::LineRel(vector![1.0, 0.0])];
    assert_eq!(ink_extent(&cmds).unwrap(), None);
}

#[test]
fn replay_reports_structural_errors() {
    assert_eq!(
        ink_extent(&[Command::Grestore]),
        Err(ReplayError::UnbalancedRestore { index: 0 })
    );
    let cmds = [Command::NewPath, Command::MoveRel(vector![1.0, 0.0])];
    assert_eq!(
        ink_extent(&cmds),
        Err(ReplayError::NoCurrentPoint { index: 1 })
    );
}
