use crate::core::types::{ClassifiedPeriod, PeriodKind, RawPeriod};

const THIS_AFTERNOON: &str = "this afternoon";
const TODAY: &str = "today";
const NIGHT: &str = "night";

/// Maps an upstream period name onto a kind. `None` means the name is not one of
/// the near-term periods and the caller must stop reading the stream.
///
/// Order matters: "this afternoon" is checked before "today" since some
/// upstream names carry both.
pub fn classify_name(name: &str) -> Option<PeriodKind> {
    let normalized = name.to_lowercase();
    if normalized.contains(THIS_AFTERNOON) {
        Some(PeriodKind::Afternoon)
    } else if normalized.contains(TODAY) {
        Some(PeriodKind::Today)
    } else if normalized.contains(NIGHT) {
        Some(PeriodKind::Tonight)
    } else {
        None
    }
}

pub fn classify(period: &RawPeriod) -> Option<ClassifiedPeriod> {
    let kind = classify_name(&period.name)?;
    Some(ClassifiedPeriod::new(
        kind,
        period.temperature,
        period.short_description.clone(),
    ))
}

/// Classifies periods in order, dropping everything from the first
/// unrecognized name onward (even periods that would classify).
pub fn classify_periods<'a, I>(periods: I) -> Vec<ClassifiedPeriod>
where
    I: IntoIterator<Item = &'a RawPeriod>,
{
    let mut out = Vec::new();
    for period in periods {
        match classify(period) {
            Some(classified) => out.push(classified),
            None => {
                tracing::debug!("Stopping at unrecognized period '{}'", period.name);
                break;
            }
        }
    }
    out
}
