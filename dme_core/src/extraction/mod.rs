//! Rule-based extraction of a DME order from free-text physician notes.
//!
//! Extraction never fails: a note that matches nothing yields an
//! `Unknown` device with an `"Unknown"` provider. Device-specific rules
//! only run for the device the note was classified as.

mod rules;

use tracing::debug;

use crate::record::{DeviceType, DmeRecord};

/// Stateless extractor; safe to share and call concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn extract(&self, note: &str) -> DmeRecord {
        let lower = note.to_lowercase();
        let device = rules::classify_device(&lower);
        let provider = rules::ordering_provider(note);

        let record = match device {
            DeviceType::Cpap => DmeRecord::cpap(
                provider,
                rules::mask_type(&lower),
                rules::add_on(&lower),
                rules::apnea_hypopnea_index(&lower),
            ),
            DeviceType::OxygenTank => DmeRecord::oxygen_tank(
                provider,
                rules::tank_capacity_liters(note),
                rules::usage_context(&lower),
            ),
            DeviceType::Wheelchair | DeviceType::Unknown => DmeRecord::basic(device, provider),
        };

        debug!(
            "Extracted {} order from {} byte note (provider known: {})",
            record.device(),
            note.len(),
            record.ordering_provider() != "Unknown"
        );

        record
    }
}

/// Extract with the default [`Extractor`].
#[must_use]
pub fn extract(note: &str) -> DmeRecord {
    Extractor::new().extract(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AddOn, MaskType, UsageContext};

    #[test]
    fn empty_note_is_unknown() {
        let record = extract("");
        assert_eq!(record.device(), DeviceType::Unknown);
        assert_eq!(record.ordering_provider(), "Unknown");
    }

    #[test]
    fn sample_cpap_note() {
        let record = extract(crate::DEFAULT_FALLBACK_NOTE);

        assert_eq!(record.device(), DeviceType::Cpap);
        assert_eq!(record.mask_type(), MaskType::FullFace);
        assert_eq!(record.add_on(), AddOn::Humidifier);
        assert_eq!(record.apnea_hypopnea_index(), Some(20.0));
        assert_eq!(record.ordering_provider(), "Dr. Cameron");
    }

    #[test]
    fn cpap_rules_do_not_run_for_oxygen() {
        let record = extract("Oxygen 2L with humidifier, full face. AHI > 20.");

        assert_eq!(record.device(), DeviceType::OxygenTank);
        assert_eq!(record.mask_type(), MaskType::None);
        assert_eq!(record.add_on(), AddOn::None);
        assert_eq!(record.apnea_hypopnea_index(), None);
    }

    #[test]
    fn oxygen_rules_do_not_run_for_cpap() {
        let record = extract("CPAP 5L nightly during sleep.");

        assert_eq!(record.device(), DeviceType::Cpap);
        assert_eq!(record.oxygen_tank_capacity_liters(), None);
        assert_eq!(record.oxygen_usage_context(), UsageContext::None);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(extract("needs a cpap").device(), DeviceType::Cpap);
        assert_eq!(extract("OXYGEN").device(), DeviceType::OxygenTank);
        assert_eq!(extract("WheelChair").device(), DeviceType::Wheelchair);
    }
}
