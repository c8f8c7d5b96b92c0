//! The DME order record and its enumerations.
//!
//! A record is built once by the extractor and never mutated afterwards;
//! fields are private and only readable through accessors. Fields that do
//! not apply to the classified device stay at their zero value.

use chrono::{DateTime, Utc};
use std::fmt;

/// Equipment category of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum DeviceType {
    Cpap = 0,
    OxygenTank = 1,
    Wheelchair = 2,
    #[default]
    Unknown = 255,
}

impl DeviceType {
    /// Name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cpap => "CPAP",
            Self::OxygenTank => "Oxygen Tank",
            Self::Wheelchair => "Wheelchair",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPAP mask style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MaskType {
    #[default]
    None = 0,
    FullFace = 1,
    Nasal = 2,
    NasalPillow = 3,
}

impl MaskType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::FullFace => "FullFace",
            Self::Nasal => "Nasal",
            Self::NasalPillow => "NasalPillow",
        }
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPAP accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AddOn {
    #[default]
    None = 0,
    Humidifier = 1,
}

impl AddOn {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Humidifier => "Humidifier",
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When supplemental oxygen is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum UsageContext {
    #[default]
    None = 0,
    Sleep = 1,
    Exertion = 2,
    SleepAndExertion = 3,
}

impl UsageContext {
    /// Lowercase phrase sent to the intake endpoint, `None` when no
    /// context was found.
    #[must_use]
    pub const fn phrase(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Sleep => Some("sleep"),
            Self::Exertion => Some("exertion"),
            Self::SleepAndExertion => Some("sleep and exertion"),
        }
    }
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase().unwrap_or("none"))
    }
}

/// Structured order extracted from one physician note.
#[derive(Debug, Clone)]
pub struct DmeRecord {
    device: DeviceType,
    ordering_provider: String,
    mask_type: MaskType,
    add_on: AddOn,
    apnea_hypopnea_index: Option<f64>,
    oxygen_tank_capacity_liters: Option<f64>,
    oxygen_usage_context: UsageContext,
    processed_timestamp: DateTime<Utc>,
}

impl DmeRecord {
    /// Record for a device with no device-specific attributes
    /// (wheelchair, unknown).
    pub(crate) fn basic(device: DeviceType, ordering_provider: String) -> Self {
        Self {
            device,
            ordering_provider,
            mask_type: MaskType::None,
            add_on: AddOn::None,
            apnea_hypopnea_index: None,
            oxygen_tank_capacity_liters: None,
            oxygen_usage_context: UsageContext::None,
            processed_timestamp: Utc::now(),
        }
    }

    pub(crate) fn cpap(
        ordering_provider: String,
        mask_type: MaskType,
        add_on: AddOn,
        apnea_hypopnea_index: Option<f64>,
    ) -> Self {
        Self {
            mask_type,
            add_on,
            apnea_hypopnea_index,
            ..Self::basic(DeviceType::Cpap, ordering_provider)
        }
    }

    pub(crate) fn oxygen_tank(
        ordering_provider: String,
        capacity_liters: Option<f64>,
        usage: UsageContext,
    ) -> Self {
        Self {
            oxygen_tank_capacity_liters: capacity_liters,
            oxygen_usage_context: usage,
            ..Self::basic(DeviceType::OxygenTank, ordering_provider)
        }
    }

    #[must_use]
    pub const fn device(&self) -> DeviceType {
        self.device
    }

    #[must_use]
    pub fn ordering_provider(&self) -> &str {
        &self.ordering_provider
    }

    #[must_use]
    pub const fn mask_type(&self) -> MaskType {
        self.mask_type
    }

    #[must_use]
    pub const fn add_on(&self) -> AddOn {
        self.add_on
    }

    #[must_use]
    pub const fn apnea_hypopnea_index(&self) -> Option<f64> {
        self.apnea_hypopnea_index
    }

    #[must_use]
    pub const fn oxygen_tank_capacity_liters(&self) -> Option<f64> {
        self.oxygen_tank_capacity_liters
    }

    #[must_use]
    pub const fn oxygen_usage_context(&self) -> UsageContext {
        self.oxygen_usage_context
    }

    #[must_use]
    pub const fn processed_timestamp(&self) -> DateTime<Utc> {
        self.processed_timestamp
    }
}
