//! Score Buckets
//!
//! Maps 0-100 quality scores to display categories and CSS classes.

/// Five score categories, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCategory {
    VeryGood,
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl ScoreCategory {
    /// Bucket a score. Lower bounds are inclusive; anything below 20
    /// (including NaN and negatives) is `VeryPoor`.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreCategory::VeryGood
        } else if score >= 60.0 {
            ScoreCategory::Good
        } else if score >= 40.0 {
            ScoreCategory::Moderate
        } else if score >= 20.0 {
            ScoreCategory::Poor
        } else {
            ScoreCategory::VeryPoor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::VeryGood => "Very Good",
            ScoreCategory::Good => "Good",
            ScoreCategory::Moderate => "Moderate",
            ScoreCategory::Poor => "Poor",
            ScoreCategory::VeryPoor => "Very Poor",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreCategory::VeryGood => "very-good",
            ScoreCategory::Good => "good",
            ScoreCategory::Moderate => "moderate",
            ScoreCategory::Poor => "poor",
            ScoreCategory::VeryPoor => "very-poor",
        }
    }
}

pub fn score_to_category(score: f64) -> &'static str {
    ScoreCategory::from_score(score).label()
}

pub fn score_to_color_class(score: f64) -> &'static str {
    ScoreCategory::from_score(score).css_class()
}

/// Render a score to one decimal, dropping ".0" when integral.
///
/// A value just under a bucket bound is truncated instead of rounded, so the
/// shown number never lands in a different category than the score itself.
pub fn format_score(score: f64) -> String {
    let mut shown = (score * 10.0).round() / 10.0;
    if ScoreCategory::from_score(shown) != ScoreCategory::from_score(score) {
        shown = (score * 10.0).floor() / 10.0;
    }
    if shown.fract() == 0.0 {
        format!("{:.0}", shown)
    } else {
        format!("{:.1}", shown)
    }
}
