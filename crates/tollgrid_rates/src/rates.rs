use serde::{Deserialize, Serialize};

use tollgrid_graph::edge::{DistancePair, NodeId};

use crate::category::VehicleCategory;

/// Per-category toll rates for a single origin/destination pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TollRates {
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl TollRates {
    /// Base rates: the distance scaled by each category's fixed coefficient.
    pub fn from_distance(distance: f64) -> Self {
        TollRates {
            moto: distance * VehicleCategory::Moto.rate_coefficient(),
            car: distance * VehicleCategory::Car.rate_coefficient(),
            rv: distance * VehicleCategory::Rv.rate_coefficient(),
            bus: distance * VehicleCategory::Bus.rate_coefficient(),
            truck: distance * VehicleCategory::Truck.rate_coefficient(),
        }
    }

    /// A copy with every category scaled by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        TollRates {
            moto: self.moto * factor,
            car: self.car * factor,
            rv: self.rv * factor,
            bus: self.bus * factor,
            truck: self.truck * factor,
        }
    }

    pub fn get(&self, category: VehicleCategory) -> f64 {
        match category {
            VehicleCategory::Moto => self.moto,
            VehicleCategory::Car => self.car,
            VehicleCategory::Rv => self.rv,
            VehicleCategory::Bus => self.bus,
            VehicleCategory::Truck => self.truck,
        }
    }
}

/// A distance pair priced per vehicle category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TollRateRow {
    pub id_start: NodeId,
    pub id_end: NodeId,
    pub distance: f64,
    #[serde(flatten)]
    pub rates: TollRates,
}

/// Derives one rate row per unrolled pair. Pure and order-independent.
pub fn base_rates(pairs: &[DistancePair]) -> Vec<TollRateRow> {
    pairs
        .iter()
        .map(|pair| TollRateRow {
            id_start: pair.id_start,
            id_end: pair.id_end,
            distance: pair.distance,
            rates: TollRates::from_distance(pair.distance),
        })
        .collect()
}
