//! Canonical JSON shape of an order as accepted by the intake endpoint.
//!
//! Each device has its own payload struct so the key set and key order
//! are fixed by the struct definition:
//!
//! - CPAP: `device`, `mask_type`, `add_ons` (list or null), `qualifier`
//!   (`"AHI > n"` or empty), `ordering_provider`
//! - Oxygen tank: `device`, `liters` (`"n L"` or null), `usage` (phrase or
//!   null), `ordering_provider`
//! - Wheelchair / unknown: `device`, `ordering_provider`
//!
//! Attributes belonging to other devices never appear. The processed
//! timestamp is not part of the payload, so serialization is
//! byte-for-byte deterministic for a given note.

use serde::Serialize;

use crate::record::{AddOn, DeviceType, DmeRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpapOrder {
    pub device: &'static str,
    pub mask_type: &'static str,
    pub add_ons: Option<Vec<&'static str>>,
    pub qualifier: String,
    pub ordering_provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OxygenTankOrder {
    pub device: &'static str,
    pub liters: Option<String>,
    pub usage: Option<&'static str>,
    pub ordering_provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicOrder {
    pub device: &'static str,
    pub ordering_provider: String,
}

/// Wire form of a [`DmeRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OrderPayload {
    Cpap(CpapOrder),
    OxygenTank(OxygenTankOrder),
    Basic(BasicOrder),
}

impl OrderPayload {
    #[must_use]
    pub fn from_record(record: &DmeRecord) -> Self {
        let device = record.device().as_str();
        let ordering_provider = record.ordering_provider().to_string();

        match record.device() {
            DeviceType::Cpap => Self::Cpap(CpapOrder {
                device,
                mask_type: record.mask_type().as_str(),
                add_ons: match record.add_on() {
                    AddOn::Humidifier => Some(vec![AddOn::Humidifier.as_str()]),
                    AddOn::None => None,
                },
                qualifier: record
                    .apnea_hypopnea_index()
                    .map(|ahi| format!("AHI > {ahi}"))
                    .unwrap_or_default(),
                ordering_provider,
            }),
            DeviceType::OxygenTank => Self::OxygenTank(OxygenTankOrder {
                device,
                liters: record
                    .oxygen_tank_capacity_liters()
                    .map(|liters| format!("{liters} L")),
                usage: record.oxygen_usage_context().phrase(),
                ordering_provider,
            }),
            DeviceType::Wheelchair | DeviceType::Unknown => Self::Basic(BasicOrder {
                device,
                ordering_provider,
            }),
        }
    }
}

impl From<&DmeRecord> for OrderPayload {
    fn from(record: &DmeRecord) -> Self {
        Self::from_record(record)
    }
}

/// Canonical payload for `record`.
#[must_use]
pub fn serialize(record: &DmeRecord) -> OrderPayload {
    OrderPayload::from_record(record)
}

/// Compact JSON text sent as the request body.
pub fn to_json(record: &DmeRecord) -> serde_json::Result<String> {
    serde_json::to_string(&serialize(record))
}

/// JSON object with keys in canonical order.
pub fn to_value(record: &DmeRecord) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(serialize(record))
}
