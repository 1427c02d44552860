use dojo_core::model::{MasteryDistribution, MasteryLevel, format_fixed};

#[derive(Clone, Debug, PartialEq)]
pub struct MasterySegmentVm {
    pub class: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub count: u32,
    pub width_style: String,
    pub percent_str: String,
    pub inline_label: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MasteryChartVm {
    pub total: u32,
    /// Bar segments with a non-zero share, in level order.
    pub bar: Vec<MasterySegmentVm>,
    /// Legend rows for every level, including empty ones.
    pub legend: Vec<MasterySegmentVm>,
}

fn level_class(level: MasteryLevel) -> &'static str {
    match level {
        MasteryLevel::Mastered => "mastery-mastered",
        MasteryLevel::Learning => "mastery-learning",
        MasteryLevel::NeedsPractice => "mastery-needs-practice",
    }
}

/// `None` when nothing has been practiced yet.
#[must_use]
pub fn map_mastery_chart(distribution: &MasteryDistribution) -> Option<MasteryChartVm> {
    if !distribution.has_data() {
        return None;
    }

    let legend: Vec<MasterySegmentVm> = distribution
        .segments()
        .into_iter()
        .map(|segment| MasterySegmentVm {
            class: level_class(segment.level),
            label: segment.level.label(),
            description: segment.level.description(),
            count: segment.count,
            width_style: format!("width: {}%", format_fixed(segment.percent, 1)),
            percent_str: format!("{}%", format_fixed(segment.percent, 1)),
            inline_label: segment.shows_inline_label(),
        })
        .collect();
    let bar = legend
        .iter()
        .filter(|segment| segment.count > 0)
        .cloned()
        .collect();

    Some(MasteryChartVm {
        total: distribution.total,
        bar,
        legend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_distribution_has_no_chart() {
        assert!(map_mastery_chart(&MasteryDistribution::default()).is_none());
    }

    #[test]
    fn small_segments_hide_inline_label() {
        let distribution = MasteryDistribution {
            mastered: 45,
            learning: 50,
            needs_practice: 5,
            total: 100,
        };
        let vm = map_mastery_chart(&distribution).unwrap();
        assert_eq!(vm.bar.len(), 3);
        assert!(vm.bar[0].inline_label);
        assert!(!vm.bar[2].inline_label);
        assert_eq!(vm.bar[2].percent_str, "5.0%");
        assert_eq!(vm.bar[1].width_style, "width: 50.0%");
    }

    #[test]
    fn zero_segments_stay_in_legend_only() {
        let distribution = MasteryDistribution {
            mastered: 1,
            learning: 2,
            needs_practice: 0,
            total: 3,
        };
        let vm = map_mastery_chart(&distribution).unwrap();
        assert_eq!(vm.bar.len(), 2);
        assert_eq!(vm.legend.len(), 3);
        assert_eq!(vm.legend[0].percent_str, "33.3%");
        assert_eq!(vm.legend[2].label, "Needs Practice");
    }
}
