use std::fmt;

use serde::{Deserialize, Serialize};

/// Vehicle categories priced by the toll schedule.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Moto,
    Car,
    Rv,
    Bus,
    Truck,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 5] = [
        VehicleCategory::Moto,
        VehicleCategory::Car,
        VehicleCategory::Rv,
        VehicleCategory::Bus,
        VehicleCategory::Truck,
    ];

    /// Fixed per-distance rate coefficient for this category.
    pub const fn rate_coefficient(&self) -> f64 {
        match self {
            VehicleCategory::Moto => 0.8,
            VehicleCategory::Car => 1.2,
            VehicleCategory::Rv => 1.5,
            VehicleCategory::Bus => 2.2,
            VehicleCategory::Truck => 3.6,
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleCategory::Moto => "moto",
            VehicleCategory::Car => "car",
            VehicleCategory::Rv => "rv",
            VehicleCategory::Bus => "bus",
            VehicleCategory::Truck => "truck",
        };
        write!(f, "{}", name)
    }
}
