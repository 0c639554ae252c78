//! Render configuration.
//!
//! Policy
//! - Defaults reproduce the classic fixed six-digit notation. Callers that
//!   want shorter output lower `precision`; nothing else is tunable.

/// Output formatting knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCfg {
    /// Digits after the decimal point for every emitted number.
    pub precision: usize,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

impl RenderCfg {
    /// Append `value` in fixed notation; never writes `-0.000…`.
    ///
    /// A nonzero value too small for `precision` falls back to the shortest
    /// round-trip decimal, so it never collapses to zero.
    pub fn write_num(&self, out: &mut String, value: f64) {
        let fixed = format!("{:.*}", self.precision, value);
        let digits = fixed.strip_prefix('-').unwrap_or(&fixed);
        if digits.bytes().all(|b| b == b'0' || b == b'.') {
            if value == 0.0 {
                out.push_str(digits);
            } else {
                out.push_str(&format!("{value}"));
            }
        } else {
            out.push_str(&fixed);
        }
    }

    pub fn fmt_num(&self, value: f64) -> String {
        let mut s = String::new();
        self.write_num(&mut s, value);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_six_digits_by_default() {
        let cfg = RenderCfg::default();
        assert_eq!(cfg.fmt_num(5.0), "5.000000");
        assert_eq!(cfg.fmt_num(-2.5), "-2.500000");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        let cfg = RenderCfg::default();
        assert_eq!(cfg.fmt_num(-0.0), "0.000000");
        let short = RenderCfg { precision: 0 };
        assert_eq!(short.fmt_num(-3.0), "-3");
    }

    #[test]
    fn tiny_values_keep_their_magnitude() {
        let cfg = RenderCfg::default();
        assert_eq!(cfg.fmt_num(1e-7), "0.0000001");
        assert_eq!(cfg.fmt_num(-2.5e-9), "-0.0000000025");
        let short = RenderCfg { precision: 0 };
        assert_eq!(short.fmt_num(-0.2), "-0.2");
        assert_eq!(short.fmt_num(0.4), "0.4");
        for v in [1e-7, 3.3e-12, -4.0e-300] {
            let text = cfg.fmt_num(v);
            assert_eq!(text.parse::<f64>().unwrap(), v);
        }
    }
}
