//! Liquid density presets for common test fluids.

use hf_core::units::{Density, kg_per_m3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidPreset {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Nominal liquid density at test conditions.
    pub density_kg_m3: f64,
    pub aliases: &'static [&'static str],
}

impl FluidPreset {
    pub fn density(&self) -> Density {
        kg_per_m3(self.density_kg_m3)
    }

    /// Case-insensitive substring match on id, name and aliases.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    fn is_named(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name)
            || self.display_name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

const PRESETS: [FluidPreset; 5] = [
    FluidPreset {
        id: "water",
        display_name: "Water",
        density_kg_m3: 1000.0,
        aliases: &["h2o"],
    },
    FluidPreset {
        id: "lox",
        display_name: "Liquid Oxygen",
        density_kg_m3: 1141.0,
        aliases: &["lo2", "oxygen"],
    },
    FluidPreset {
        id: "n2o",
        display_name: "Nitrous Oxide",
        density_kg_m3: 1220.0,
        aliases: &["nitrous", "nitrous oxide"],
    },
    FluidPreset {
        id: "ethanol",
        display_name: "Ethanol",
        density_kg_m3: 789.0,
        aliases: &["etoh", "c2h5oh"],
    },
    FluidPreset {
        id: "rp1",
        display_name: "RP-1",
        density_kg_m3: 820.0,
        aliases: &["rp-1", "kerosene"],
    },
];

pub fn presets() -> &'static [FluidPreset] {
    &PRESETS
}

/// Exact (case-insensitive) lookup by id, display name or alias.
pub fn find_preset(name: &str) -> Option<&'static FluidPreset> {
    let name = name.trim();
    presets().iter().find(|p| p.is_named(name))
}

pub fn filter_presets(query: &str) -> Vec<FluidPreset> {
    presets()
        .iter()
        .copied()
        .filter(|p| p.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for p in presets() {
            assert!(seen.insert(p.id), "duplicate preset id: {}", p.id);
        }
    }

    #[test]
    fn lookup_by_alias() {
        let lox = find_preset("LO2").unwrap();
        assert_eq!(lox.density().value, 1141.0);
        assert_eq!(find_preset(" RP-1 ").unwrap().id, "rp1");
        assert!(find_preset("hydrazine").is_none());
    }

    #[test]
    fn search_is_substring() {
        let hits = filter_presets("nitro");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].density_kg_m3, 1220.0);
        assert_eq!(filter_presets("").len(), presets().len());
    }
}
