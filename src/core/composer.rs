use crate::core::banding::BandThresholds;
use crate::core::types::{ClassifiedPeriod, PeriodKind};
use std::fmt;

const SEPARATOR: &str = ", ";
const LEAD_JOIN: &str = "and";
const FOLLOW_JOIN: &str = "with";

/// Builds the one-sentence summary from classified periods, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ForecastSummary {
    periods: Vec<ClassifiedPeriod>,
    bands: BandThresholds,
}

impl ForecastSummary {
    pub fn new(bands: BandThresholds) -> Self {
        Self {
            periods: Vec::new(),
            bands,
        }
    }

    pub fn add_period(&mut self, period: ClassifiedPeriod) {
        self.periods.push(period);
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Renders the sentence. Empty when no periods were added.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (position, period) in self.periods.iter().enumerate() {
            let follows = position > 0;
            if follows {
                out.push_str(SEPARATOR);
            }
            let join = if follows { FOLLOW_JOIN } else { LEAD_JOIN };
            out.push_str(&format!(
                "{} {} {} {}",
                kind_phrase(period.kind),
                self.bands.phrase(period.temperature, follows),
                join,
                period.short_description
            ));
        }
        out
    }
}

impl fmt::Display for ForecastSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

pub fn kind_phrase(kind: PeriodKind) -> String {
    match kind {
        PeriodKind::Today | PeriodKind::Tonight => format!("For {}", kind),
        PeriodKind::Afternoon => format!("In the {}", kind),
    }
}
