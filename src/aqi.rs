/// Air quality index according to the German Federal Environmental Agency (UBA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AqiUbaIndex {
    /// Not (yet) reported or outside of the defined range.
    #[default]
    Unknown = 0,
    Excellent = 1,
    Good = 2,
    Moderate = 3,
    Poor = 4,
    Unhealthy = 5,
}

impl AqiUbaIndex {
    /// Decodes the DATA_AQI register. Only bits 0..=2 carry the index, anything
    /// outside of 1..=5 is [`AqiUbaIndex::Unknown`].
    pub fn from_register(value: u8) -> Self {
        match value & 0x07 {
            1 => Self::Excellent,
            2 => Self::Good,
            3 => Self::Moderate,
            4 => Self::Poor,
            5 => Self::Unhealthy,
            _ => Self::Unknown,
        }
    }

    /// UBA classification row for this index.
    pub fn definition(self) -> &'static AqiUbaRow {
        index_to_definition(self as u8)
    }
}

/// One row of the UBA air quality classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiUbaRow {
    /// Index this row classifies [0..5]
    pub index: AqiUbaIndex,
    /// Short rating, e.g. "Good"
    pub rating: &'static str,
    /// Hygienic assessment of the air
    pub hygienic_rating: &'static str,
    /// Recommended action, usually about ventilation
    pub recommendation: &'static str,
    /// Maximum recommended exposure time
    pub exposure_limit: &'static str,
}

/// UBA classification table, one row per index.
pub const AQI_UBA_DEFINITIONS: [AqiUbaRow; 6] = [
    AqiUbaRow {
        index: AqiUbaIndex::Unknown,
        rating: "-",
        hygienic_rating: "-",
        recommendation: "-",
        exposure_limit: "-",
    },
    AqiUbaRow {
        index: AqiUbaIndex::Excellent,
        rating: "Excellent",
        hygienic_rating: "No objections",
        recommendation: "Target",
        exposure_limit: "no limit",
    },
    AqiUbaRow {
        index: AqiUbaIndex::Good,
        rating: "Good",
        hygienic_rating: "No relevant objections",
        recommendation: "Sufficient ventilation recommended",
        exposure_limit: "no limit",
    },
    AqiUbaRow {
        index: AqiUbaIndex::Moderate,
        rating: "Moderate",
        hygienic_rating: "Some objections",
        recommendation: "Increased ventilation recommended, search for sources",
        exposure_limit: "<12 months",
    },
    AqiUbaRow {
        index: AqiUbaIndex::Poor,
        rating: "Poor",
        hygienic_rating: "Major objections",
        recommendation: "Intensified ventilation recommended, search for sources",
        exposure_limit: "<1 month",
    },
    AqiUbaRow {
        index: AqiUbaIndex::Unhealthy,
        rating: "Unhealthy",
        hygienic_rating: "Situation not acceptable",
        recommendation: "Use only if unavoidable, intensified ventilation recommended",
        exposure_limit: "hours",
    },
];

/// Looks up the classification row for a raw index. Unmatched indices get the
/// `Unknown` row.
pub fn index_to_definition(index: u8) -> &'static AqiUbaRow {
    AQI_UBA_DEFINITIONS
        .iter()
        .find(|row| row.index as u8 == index)
        .unwrap_or(&AQI_UBA_DEFINITIONS[0])
}
