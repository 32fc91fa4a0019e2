use std::fmt;

/// NASA POWER daily parameters offered by the dashboard, with display labels.
pub const CATALOG: &[(&str, &str)] = &[
    ("T2M", "Temperature at 2 Meters (°C)"),
    ("T2M_MAX", "Max Temperature at 2 Meters (°C)"),
    ("T2M_MIN", "Min Temperature at 2 Meters (°C)"),
    ("PRECTOTCORR", "Precipitation (mm/day)"),
    ("RH2M", "Relative Humidity at 2 Meters (%)"),
    ("WS2M", "Wind Speed at 2 Meters (m/s)"),
    ("ALLSKY_SFC_SW_DWN", "Surface Shortwave Irradiance (kWh/m²/day)"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub id: String,
    pub label: String,
}

impl Parameter {
    /// Looks up the label for a known code; unknown codes label themselves.
    pub fn from_id(id: &str) -> Self {
        let id = id.trim().to_ascii_uppercase();
        let label = CATALOG
            .iter()
            .find(|(code, _)| *code == id)
            .map_or_else(|| id.clone(), |(_, label)| (*label).to_string());
        Self { id, label }
    }

    /// Next (or previous) catalog entry, wrapping around. Unknown codes jump
    /// to the start of the catalog.
    pub fn cycled(&self, direction: i8) -> Self {
        let len = CATALOG.len();
        let next = match CATALOG.iter().position(|(code, _)| *code == self.id) {
            Some(idx) if direction < 0 => (idx + len - 1) % len,
            Some(idx) => (idx + 1) % len,
            None => 0,
        };
        Self::from_id(CATALOG[next].0)
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Self::from_id("T2M")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_get_catalog_labels() {
        let parameter = Parameter::from_id("t2m");
        assert_eq!(parameter.id, "T2M");
        assert_eq!(parameter.label, "Temperature at 2 Meters (°C)");
    }

    #[test]
    fn unknown_codes_label_themselves() {
        let parameter = Parameter::from_id("QV2M");
        assert_eq!(parameter.label, "QV2M");
        assert_eq!(parameter.cycled(1).id, "T2M");
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let first = Parameter::default();
        assert_eq!(first.cycled(-1).id, "ALLSKY_SFC_SW_DWN");
        assert_eq!(first.cycled(1).id, "T2M_MAX");
        assert_eq!(first.cycled(-1).cycled(1), first);
    }
}
