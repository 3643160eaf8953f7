use serde::{Deserialize, Serialize};

/// Broad item classification, stored in the `item_type` column of the
/// `items` table.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemType {
    Equipment,
    Educational,
    Tool,
}

impl ItemType {
    /// Column value as the game expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Equipment => "Equipment",
            ItemType::Educational => "Educational",
            ItemType::Tool => "Tool",
        }
    }
}

/// Item rarity tier. Also drives the base term of the balance power score.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Base power contributed by rarity alone. Doubles per tier.
    pub fn power_weight(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 2.0,
            Rarity::Rare => 4.0,
            Rarity::Epic => 8.0,
            Rarity::Legendary => 16.0,
        }
    }
}

/// Equipment slots used by the faction item set.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EquipmentSlot {
    Head,
    Neck,
    Ring,
    Chest,
    Back,
    MainHand,
}

/// What an Educational item does when used.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EducationalFunction {
    KnowledgeArchive,
}

/// Learning methods that LearningEfficiency bonuses can target.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LearningMethod {
    Study,
    Experimentation,
    Research,
    Teaching,
    Observation,
}
