use nalgebra::Vector2;

use crate::cfg::RenderCfg;

/// A single PostScript operator with its operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Gsave,
    Grestore,
    NewPath,
    /// `currentpoint translate`: move the origin to the pen.
    TranslateToCurrentPoint,
    /// `dx dy rmoveto`
    MoveRel(Vector2<f64>),
    /// `dx dy rlineto`
    LineRel(Vector2<f64>),
    /// Full circle around the origin: `0 0 r 0 360 arc`.
    Arc { radius: f64 },
    ClosePath,
    Stroke,
    /// Counter-clockwise, in degrees.
    Rotate(f64),
    Scale(f64, f64),
}

impl Command {
    /// Append this command as one line of text.
    pub fn write(&self, out: &mut String, cfg: &RenderCfg) {
        match *self {
            Command::Gsave => out.push_str("gsave"),
            Command::Grestore => out.push_str("grestore"),
            Command::NewPath => out.push_str("newpath"),
            Command::TranslateToCurrentPoint => out.push_str("currentpoint translate"),
            Command::MoveRel(d) => write_pair(out, cfg, d.x, d.y, "rmoveto"),
            Command::LineRel(d) => write_pair(out, cfg, d.x, d.y, "rlineto"),
            Command::Arc { radius } => {
                out.push_str("0 0 ");
                cfg.write_num(out, radius);
                out.push_str(" 0 360 arc");
            }
            Command::ClosePath => out.push_str("closepath"),
            Command::Stroke => out.push_str("stroke"),
            Command::Rotate(deg) => {
                cfg.write_num(out, deg);
                out.push_str(" rotate");
            }
            Command::Scale(sx, sy) => write_pair(out, cfg, sx, sy, "scale"),
        }
        out.push('\n');
    }
}

fn write_pair(out: &mut String, cfg: &RenderCfg, a: f64, b: f64, op: &str) {
    cfg.write_num(out, a);
    out.push(' ');
    cfg.write_num(out, b);
    out.push(' ');
    out.push_str(op);
}

/// Render a command list to PostScript text.
pub fn to_text(commands: &[Command], cfg: &RenderCfg) -> String {
    let mut out = String::with_capacity(commands.len() * 24);
    for c in commands {
        c.write(&mut out, cfg);
    }
    out
}
