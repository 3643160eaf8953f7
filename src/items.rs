use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{EducationalFunction, EquipmentSlot, ItemType, LearningMethod, Rarity};

/// One row of the `items` table, with the properties document still typed.
/// The properties are serialized to JSON only when written to the database;
/// the game reads them back as an opaque document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub properties: ItemProperties,
}

impl ItemDefinition {
    /// Serialized form of the properties document, as stored in the
    /// `properties` column.
    pub fn properties_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.properties)
    }
}

/// The semi-structured property document attached to every item. Optional
/// fields are omitted from the serialized JSON entirely so each stored
/// document keeps the shape it was authored with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItemProperties {
    pub weight: f64,
    pub value: u32,
    pub rarity: Rarity,
    pub durability: u32,
    pub max_durability: u32,
    pub magical: bool,

    // Equipment fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_slot: Option<EquipmentSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonuses: Option<Vec<ItemBonus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<ItemAbility>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concealment: Option<bool>,

    // Educational fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_function: Option<EducationalFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable_theories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_bonus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_risk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthesis_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grand_synthesis: Option<bool>,

    // Tool fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theory_focus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reward: Option<RiskReward>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_quality: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_risk: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<ItemRequirements>,
}

/// A single entry of an item's `bonuses` list. The JSON carries a `type`
/// discriminator, so the game can dispatch without knowing every shape.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ItemBonus {
    LearningEfficiency(LearningBonus),
    FactionBonus { faction: String, bonus: i32 },
    EnergyCostReduction { bonus: f64 },
    FatigueResistance { bonus: f64 },
}

impl ItemBonus {
    pub fn faction(faction: &str, bonus: i32) -> Self {
        ItemBonus::FactionBonus {
            faction: faction.to_string(),
            bonus,
        }
    }

    pub fn energy_cost_reduction(bonus: f64) -> Self {
        ItemBonus::EnergyCostReduction { bonus }
    }

    pub fn fatigue_resistance(bonus: f64) -> Self {
        ItemBonus::FatigueResistance { bonus }
    }
}

/// Payload of a LearningEfficiency bonus. Most entries only set method and
/// magnitude; a few also scope the bonus to an environment, a time of day,
/// or mark it as working across faction lines.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LearningBonus {
    pub method: LearningMethod,
    pub bonus: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_bonus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_faction: Option<bool>,
}

impl LearningBonus {
    pub fn new(method: LearningMethod, bonus: f64) -> Self {
        Self {
            method,
            bonus,
            environment: None,
            time_bonus: None,
            cross_faction: None,
        }
    }

    pub fn environment(mut self, environment: &str) -> Self {
        self.environment = Some(environment.to_string());
        self
    }

    pub fn time_bonus(mut self, time_bonus: &str) -> Self {
        self.time_bonus = Some(time_bonus.to_string());
        self
    }

    pub fn cross_faction(mut self) -> Self {
        self.cross_faction = Some(true);
        self
    }
}

impl From<LearningBonus> for ItemBonus {
    fn from(bonus: LearningBonus) -> Self {
        ItemBonus::LearningEfficiency(bonus)
    }
}

/// A named active or passive ability granted by an item. Cooldowns are in
/// game minutes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItemAbility {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakthrough_chance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlash_chance: Option<f64>,
}

impl ItemAbility {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: None,
            cooldown: None,
            effect: None,
            trigger: None,
            breakthrough_chance: None,
            backlash_chance: None,
        }
    }

    pub fn passive(mut self) -> Self {
        self.kind = Some("passive".to_string());
        self
    }

    pub fn triggered(mut self, trigger: &str) -> Self {
        self.kind = Some("triggered".to_string());
        self.trigger = Some(trigger.to_string());
        self
    }

    pub fn cooldown(mut self, minutes: u32) -> Self {
        self.cooldown = Some(minutes);
        self
    }

    pub fn effect(mut self, effect: &str) -> Self {
        self.effect = Some(effect.to_string());
        self
    }

    pub fn breakthrough_chance(mut self, chance: f64) -> Self {
        self.breakthrough_chance = Some(chance);
        self
    }

    pub fn backlash_chance(mut self, chance: f64) -> Self {
        self.backlash_chance = Some(chance);
        self
    }
}

/// Prerequisites the game checks before an item can be used or equipped.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ItemRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mental_acuity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resonance_sensitivity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faction_rep: Option<BTreeMap<String, i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl ItemRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mental_acuity(mut self, value: u32) -> Self {
        self.mental_acuity = Some(value);
        self
    }

    pub fn resonance_sensitivity(mut self, value: u32) -> Self {
        self.resonance_sensitivity = Some(value);
        self
    }

    pub fn faction_rep(mut self, faction: &str, reputation: i32) -> Self {
        self.faction_rep
            .get_or_insert_with(BTreeMap::new)
            .insert(faction.to_string(), reputation);
        self
    }

    pub fn theories(mut self, theories: &[&str]) -> Self {
        self.theories = Some(theories.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn environment(mut self, environment: &str) -> Self {
        self.environment = Some(environment.to_string());
        self
    }
}

/// Breakthrough/failure odds for tools that trade safety for speed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RiskReward {
    pub breakthrough_chance: f64,
    pub failure_chance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemType, LearningMethod, Rarity};
    use crate::items_database::builders::ItemBuilder;

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let item = ItemBuilder::new(
            "test_trinket",
            "Test Trinket",
            "A bare-bones item.",
            ItemType::Equipment,
        )
        .weight(1.0)
        .value(10)
        .rarity(Rarity::Common)
        .build();

        let json: serde_json::Value =
            serde_json::from_str(&item.properties_json().unwrap()).unwrap();
        let map = json.as_object().unwrap();
        assert!(map.contains_key("weight"));
        assert!(map.contains_key("rarity"));
        assert!(!map.contains_key("bonuses"));
        assert!(!map.contains_key("learning_bonus"));
        assert!(!map.contains_key("requirements"));
    }

    #[test]
    fn bonuses_carry_type_discriminator() {
        let bonus: ItemBonus = LearningBonus::new(LearningMethod::Study, 0.4).into();
        let json = serde_json::to_value(&bonus).unwrap();
        assert_eq!(json["type"], "LearningEfficiency");
        assert_eq!(json["method"], "Study");
        assert!(json.get("environment").is_none());

        let faction = ItemBonus::faction("MagistersCouncil", 2);
        let json = serde_json::to_value(&faction).unwrap();
        assert_eq!(json["type"], "FactionBonus");
        assert_eq!(json["bonus"], 2);
    }

    #[test]
    fn properties_round_trip_through_json() {
        let item = ItemBuilder::new(
            "test_circlet",
            "Test Circlet",
            "Round-trip check.",
            ItemType::Equipment,
        )
        .weight(0.5)
        .value(750)
        .rarity(Rarity::Rare)
        .magical()
        .equipment_slot(crate::models::EquipmentSlot::Head)
        .bonus(LearningBonus::new(LearningMethod::Study, 0.4))
        .bonus(ItemBonus::faction("MagistersCouncil", 2))
        .ability(ItemAbility::new("Academic Network").cooldown(720))
        .requirements(
            ItemRequirements::new()
                .mental_acuity(60)
                .faction_rep("MagistersCouncil", 75),
        )
        .build();

        let json = item.properties_json().unwrap();
        let parsed: ItemProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item.properties);
    }
}
