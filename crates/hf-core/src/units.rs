// hf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, Mass as UomMass, MassDensity as UomMassDensity,
    MassRate as UomMassRate, Pressure as UomPressure,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn psi(v: f64) -> Pressure {
    pa(v * constants::PSI_TO_PA)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn inches(v: f64) -> Length {
    m(v * constants::IN_TO_M)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

pub mod constants {
    pub const PSI_TO_PA: f64 = 6_894.757_293_168;
    pub const BAR_TO_PA: f64 = 1.0e5;
    pub const KPA_TO_PA: f64 = 1.0e3;
    pub const LB_TO_KG: f64 = 0.453_592_37;
    pub const IN_TO_M: f64 = 0.0254;
}

/// Unit of the raw numbers in a pressure column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PressureUnit {
    Pa,
    Kpa,
    Bar,
    #[default]
    Psi,
}

impl PressureUnit {
    pub fn to_pressure(self, raw: f64) -> Pressure {
        match self {
            PressureUnit::Pa => pa(raw),
            PressureUnit::Kpa => pa(raw * constants::KPA_TO_PA),
            PressureUnit::Bar => pa(raw * constants::BAR_TO_PA),
            PressureUnit::Psi => psi(raw),
        }
    }

    pub fn from_pressure(self, p: Pressure) -> f64 {
        let pascals = p.value;
        match self {
            PressureUnit::Pa => pascals,
            PressureUnit::Kpa => pascals / constants::KPA_TO_PA,
            PressureUnit::Bar => pascals / constants::BAR_TO_PA,
            PressureUnit::Psi => pascals / constants::PSI_TO_PA,
        }
    }
}

/// Unit of the raw numbers in a weight (scale) column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MassUnit {
    Kg,
    #[default]
    Lb,
}

impl MassUnit {
    pub fn to_mass(self, raw: f64) -> Mass {
        match self {
            MassUnit::Kg => kg(raw),
            MassUnit::Lb => kg(raw * constants::LB_TO_KG),
        }
    }

    /// Convert a rate in column units per second to kg/s.
    pub fn to_mass_rate(self, raw_per_s: f64) -> MassRate {
        kgps(self.to_mass(raw_per_s).value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_store_si_values() {
        assert_eq!(pa(101_325.0).value, 101_325.0);
        assert_eq!(kgps(1.2).value, 1.2);
        assert_eq!(m2(1e-4).value, 1e-4);
        assert_eq!(kg_per_m3(1141.0).value, 1141.0);
    }

    #[test]
    fn psi_converts_to_pascal() {
        let p = psi(1.0);
        assert!(nearly_equal(p.value, 6_894.757_293_168, Tolerances::default()));
    }

    #[test]
    fn inches_convert_to_meters() {
        assert!(nearly_equal(inches(1.0).value, 0.0254, Tolerances::default()));
    }

    #[test]
    fn pressure_unit_inverts() {
        for unit in [
            PressureUnit::Pa,
            PressureUnit::Kpa,
            PressureUnit::Bar,
            PressureUnit::Psi,
        ] {
            let p = unit.to_pressure(123.4);
            assert!(nearly_equal(
                unit.from_pressure(p),
                123.4,
                Tolerances::default()
            ));
        }
    }

    #[test]
    fn pound_rate_to_kilograms() {
        let rate = MassUnit::Lb.to_mass_rate(2.0);
        assert!(nearly_equal(rate.value, 0.907_184_74, Tolerances::default()));
        assert_eq!(MassUnit::Kg.to_mass_rate(2.0).value, 2.0);
    }
}
