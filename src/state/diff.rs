use crate::state::data_model::clean_number;

/// Signed deviation of `actual` from `estimated` in percent, two decimals.
///
/// `None` when either side has no number in it or the estimate is zero.
pub fn percent_diff(estimated: &str, actual: &str) -> Option<String> {
    let estimated = clean_number(estimated)?;
    let actual = clean_number(actual)?;
    if estimated == 0.0 {
        return None;
    }
    let diff = (actual - estimated) / estimated * 100.0;
    Some(format!("{:.2}", round_half_away(diff)))
}

/// `{:.2}` breaks exact ties towards even; quotes round them away from zero.
///
/// A binary float sits exactly on a third-decimal 5 only when eight times it is
/// an odd integer (`x.125`, `x.375`, ...), so only those values are nudged.
fn round_half_away(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}

/// Badge text for a deviation, with an explicit `+` on increases.
pub fn diff_label(diff: &str) -> String {
    if is_increase(diff) {
        format!("+{diff}%")
    } else {
        format!("{diff}%")
    }
}

pub fn is_increase(diff: &str) -> bool {
    diff.parse::<f64>().is_ok_and(|value| value > 0.0)
}
