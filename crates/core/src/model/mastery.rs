use serde::{Deserialize, Serialize};

/// Segments whose share is below this are drawn without an inline label.
pub const INLINE_LABEL_MIN_PERCENT: f64 = 12.0;

/// How many practiced characters fall into each proficiency bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryDistribution {
    pub mastered: u32,
    pub learning: u32,
    pub needs_practice: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MasteryLevel {
    Mastered,
    Learning,
    NeedsPractice,
}

impl MasteryLevel {
    pub const ALL: [MasteryLevel; 3] = [
        MasteryLevel::Mastered,
        MasteryLevel::Learning,
        MasteryLevel::NeedsPractice,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MasteryLevel::Mastered => "Mastered",
            MasteryLevel::Learning => "Learning",
            MasteryLevel::NeedsPractice => "Needs Practice",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            MasteryLevel::Mastered => "90%+ accuracy",
            MasteryLevel::Learning => "In progress",
            MasteryLevel::NeedsPractice => "<70% accuracy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasterySegment {
    pub level: MasteryLevel,
    pub count: u32,
    pub percent: f64,
}

impl MasterySegment {
    /// Zero-width segments are not drawn at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.percent > 0.0
    }

    #[must_use]
    pub fn shows_inline_label(&self) -> bool {
        self.percent >= INLINE_LABEL_MIN_PERCENT
    }
}

/// `value / total * 100`, or 0 for an empty distribution.
#[must_use]
pub fn percentage(value: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(value) / f64::from(total) * 100.0
}

/// Fixed-point rendering with ties rounded away from zero.
#[must_use]
pub fn format_fixed(value: f64, digits: u32) -> String {
    let scale = 10_f64.powi(i32::try_from(digits).unwrap_or(0));
    let scaled = (value * scale).round() / scale;
    format!("{scaled:.prec$}", prec = digits as usize)
}

impl MasteryDistribution {
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.total > 0
    }

    #[must_use]
    pub fn count(&self, level: MasteryLevel) -> u32 {
        match level {
            MasteryLevel::Mastered => self.mastered,
            MasteryLevel::Learning => self.learning,
            MasteryLevel::NeedsPractice => self.needs_practice,
        }
    }

    #[must_use]
    pub fn segments(&self) -> Vec<MasterySegment> {
        MasteryLevel::ALL
            .iter()
            .map(|&level| {
                let count = self.count(level);
                MasterySegment {
                    level,
                    count,
                    percent: percentage(count, self.total),
                }
            })
            .collect()
    }

    /// Sum of the three segment percentages; 100 for a consistent distribution.
    #[must_use]
    pub fn percentage_sum(&self) -> f64 {
        self.segments().iter().map(|s| s.percent).sum()
    }

    #[must_use]
    pub fn display_values(&self) -> MasteryDisplayValues {
        let fmt = |level| format!("{}%", format_fixed(percentage(self.count(level), self.total), 1));
        MasteryDisplayValues {
            mastered_percent: fmt(MasteryLevel::Mastered),
            learning_percent: fmt(MasteryLevel::Learning),
            needs_practice_percent: fmt(MasteryLevel::NeedsPractice),
            percentage_sum: self.percentage_sum(),
            has_data: self.has_data(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MasteryDisplayValues {
    pub mastered_percent: String,
    pub learning_percent: String,
    pub needs_practice_percent: String,
    pub percentage_sum: f64,
    pub has_data: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(mastered: u32, learning: u32, needs_practice: u32) -> MasteryDistribution {
        MasteryDistribution {
            mastered,
            learning,
            needs_practice,
            total: mastered + learning + needs_practice,
        }
    }

    #[test]
    fn percentage_of_empty_total_is_zero() {
        assert!(percentage(5, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_values_use_one_decimal() {
        let values = dist(1, 1, 1).display_values();
        assert_eq!(values.mastered_percent, "33.3%");
        assert_eq!(values.learning_percent, "33.3%");
        assert_eq!(values.needs_practice_percent, "33.3%");
        assert!((values.percentage_sum - 100.0).abs() < 1e-9);
        assert!(values.has_data);
    }

    #[test]
    fn empty_distribution_has_no_data() {
        let values = MasteryDistribution::default().display_values();
        assert_eq!(values.mastered_percent, "0.0%");
        assert!(!values.has_data);
        assert!(values.percentage_sum.abs() < f64::EPSILON);
    }

    #[test]
    fn inline_label_threshold() {
        let segments = dist(88, 12, 0).segments();
        assert!(segments[0].shows_inline_label());
        assert!(segments[1].shows_inline_label());
        assert!(!segments[2].is_visible());

        let segments = dist(89, 11, 0).segments();
        assert!(!segments[1].shows_inline_label());
        assert!(segments[1].is_visible());
    }

    #[test]
    fn format_fixed_rounds_ties_up() {
        assert_eq!(format_fixed(12.25, 1), "12.3");
        assert_eq!(format_fixed(66.666, 0), "67");
        assert_eq!(format_fixed(0.0, 1), "0.0");
    }

    #[test]
    fn segment_copy() {
        let labels: Vec<_> = MasteryLevel::ALL
            .iter()
            .map(|l| (l.label(), l.description()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Mastered", "90%+ accuracy"),
                ("Learning", "In progress"),
                ("Needs Practice", "<70% accuracy"),
            ]
        );
    }
}
