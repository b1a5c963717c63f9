use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lower bound of the rating scale
pub const ATTRIBUTE_MIN: f64 = 1.0;
/// Upper bound of the rating scale
pub const ATTRIBUTE_MAX: f64 = 10.0;

pub const ATTRIBUTE_COUNT: usize = 11;

/// Player rating consumed by suitability providers.
///
/// Accepts both snake_case keys and the coaching form labels
/// (e.g. `"Sprint speed"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    #[serde(alias = "Sprint speed")]
    SprintSpeed,
    #[serde(alias = "Stamina")]
    Stamina,
    #[serde(alias = "Strength")]
    Strength,
    #[serde(alias = "Tactical Awareness")]
    TacticalAwareness,
    #[serde(alias = "Ball control")]
    BallControl,
    #[serde(alias = "Dribbling")]
    Dribbling,
    #[serde(alias = "Finishing")]
    Finishing,
    #[serde(alias = "Long passing")]
    LongPassing,
    #[serde(alias = "Short passing")]
    ShortPassing,
    #[serde(alias = "Shot power")]
    ShotPower,
    #[serde(alias = "Tackling")]
    Tackling,
}

impl Attribute {
    pub const ALL: [Attribute; ATTRIBUTE_COUNT] = [
        Attribute::SprintSpeed,
        Attribute::Stamina,
        Attribute::Strength,
        Attribute::TacticalAwareness,
        Attribute::BallControl,
        Attribute::Dribbling,
        Attribute::Finishing,
        Attribute::LongPassing,
        Attribute::ShortPassing,
        Attribute::ShotPower,
        Attribute::Tackling,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::SprintSpeed => "Sprint speed",
            Attribute::Stamina => "Stamina",
            Attribute::Strength => "Strength",
            Attribute::TacticalAwareness => "Tactical Awareness",
            Attribute::BallControl => "Ball control",
            Attribute::Dribbling => "Dribbling",
            Attribute::Finishing => "Finishing",
            Attribute::LongPassing => "Long passing",
            Attribute::ShortPassing => "Short passing",
            Attribute::ShotPower => "Shot power",
            Attribute::Tackling => "Tackling",
        }
    }
}

/// Fixed-size rating vector, every value clamped to [1, 10].
///
/// Missing attributes deserialize to the scale minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Attribute, f64>", into = "BTreeMap<Attribute, f64>")]
pub struct AttributeVector {
    values: [f64; ATTRIBUTE_COUNT],
}

fn clamp_rating(value: f64) -> f64 {
    if value.is_nan() {
        ATTRIBUTE_MIN
    } else {
        value.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX)
    }
}

impl AttributeVector {
    pub fn new(values: [f64; ATTRIBUTE_COUNT]) -> Self {
        Self { values: values.map(clamp_rating) }
    }

    /// Every attribute set to `value` (clamped).
    pub fn uniform(value: f64) -> Self {
        Self::new([value; ATTRIBUTE_COUNT])
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        self.values[attribute.index()]
    }

    pub fn with(mut self, attribute: Attribute, value: f64) -> Self {
        self.values[attribute.index()] = clamp_rating(value);
        self
    }

    pub fn values(&self) -> &[f64; ATTRIBUTE_COUNT] {
        &self.values
    }
}

impl From<BTreeMap<Attribute, f64>> for AttributeVector {
    fn from(map: BTreeMap<Attribute, f64>) -> Self {
        let mut values = [ATTRIBUTE_MIN; ATTRIBUTE_COUNT];
        for (attribute, value) in map {
            values[attribute.index()] = value;
        }
        Self::new(values)
    }
}

impl From<AttributeVector> for BTreeMap<Attribute, f64> {
    fn from(vector: AttributeVector) -> Self {
        Attribute::ALL.iter().map(|&a| (a, vector.get(a))).collect()
    }
}
