//! Static series rendered by the water-quality and waste panels.
//!
//! These panels do not call their own resource routes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterQualitySample {
    /// Month in `YYYY-MM` form
    pub date: &'static str,
    pub ph: f64,
    pub turbidity: f64,
    pub ecoli: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteSlice {
    pub name: &'static str,
    pub value: f64,
}

pub const WATER_QUALITY_SERIES: [WaterQualitySample; 5] = [
    WaterQualitySample { date: "2024-01", ph: 7.2, turbidity: 5.0, ecoli: 10 },
    WaterQualitySample { date: "2024-02", ph: 7.1, turbidity: 6.0, ecoli: 15 },
    WaterQualitySample { date: "2024-03", ph: 7.3, turbidity: 4.0, ecoli: 8 },
    WaterQualitySample { date: "2024-04", ph: 7.0, turbidity: 7.0, ecoli: 20 },
    WaterQualitySample { date: "2024-05", ph: 7.4, turbidity: 3.0, ecoli: 5 },
];

pub const WASTE_COMPOSITION: [WasteSlice; 4] = [
    WasteSlice { name: "Organik", value: 400.0 },
    WasteSlice { name: "Plastik", value: 300.0 },
    WasteSlice { name: "Kertas", value: 200.0 },
    WasteSlice { name: "Logam", value: 100.0 },
];

/// Share of each waste slice in the total, in percent
pub fn waste_shares() -> Vec<(&'static str, f64)> {
    let total: f64 = WASTE_COMPOSITION.iter().map(|s| s.value).sum();
    WASTE_COMPOSITION
        .iter()
        .map(|s| (s.name, s.value * 100.0 / total))
        .collect()
}
