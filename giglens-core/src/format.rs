//! Display formatting helpers shared by the result views.
//!
//! Components do no computation beyond these: percentage and currency
//! strings, and class names picked by threshold or kind.

use crate::types::{HighlightKind, Impact};

/// USD amount with thousands separators, e.g. `$150,000`.
pub fn currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}

/// Percentage string, e.g. `85%`.
pub fn percent(value: u8) -> String {
    format!("{value}%")
}

/// Client rating with one decimal, e.g. `5.0`.
pub fn rating(value: f32) -> String {
    format!("{value:.1}")
}

/// Check or cross mark for a device verdict.
pub fn device_mark(supported: bool) -> &'static str {
    if supported {
        "\u{2713}"
    } else {
        "\u{2717}"
    }
}

/// Pill class for a suggestion's impact level.
pub fn impact_class(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "impact-pill high",
        Impact::Medium => "impact-pill medium",
        Impact::Low => "impact-pill low",
    }
}

/// Marker class for a visual-guide annotation.
pub fn highlight_class(kind: HighlightKind) -> &'static str {
    match kind {
        HighlightKind::Improvement => "guide-dot improvement",
        HighlightKind::Good => "guide-dot good",
        HighlightKind::Warning => "guide-dot warning",
    }
}

/// Score color class by threshold: 80+ good, 60+ fair, below that weak.
pub fn score_class(score: u8) -> &'static str {
    if score >= 80 {
        "score good"
    } else if score >= 60 {
        "score fair"
    } else {
        "score weak"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(0), "$0");
        assert_eq!(currency(85), "$85");
        assert_eq!(currency(1_500), "$1,500");
        assert_eq!(currency(150_000), "$150,000");
        assert_eq!(currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn device_marks_match_verdicts() {
        assert_eq!(device_mark(true), "\u{2713}");
        assert_eq!(device_mark(false), "\u{2717}");
    }

    #[test]
    fn score_classes_follow_thresholds() {
        assert_eq!(score_class(85), "score good");
        assert_eq!(score_class(80), "score good");
        assert_eq!(score_class(68), "score fair");
        assert_eq!(score_class(55), "score weak");
    }

    #[test]
    fn impact_pills_by_level() {
        assert_eq!(impact_class(Impact::High), "impact-pill high");
        assert_eq!(impact_class(Impact::Low), "impact-pill low");
    }

    #[test]
    fn ratings_show_one_decimal() {
        assert_eq!(rating(5.0), "5.0");
        assert_eq!(rating(4.75), "4.8");
    }
}
