use crate::items::{
    ItemAbility, ItemBonus, ItemDefinition, ItemProperties, ItemRequirements, RiskReward,
};
use crate::models::{EducationalFunction, EquipmentSlot, ItemType, Rarity};

/// Fluent builder for catalog entries. Defaults mirror what nearly every
/// faction item shares (full durability, Common rarity) so the per-item
/// modules only state what differs.
pub struct ItemBuilder {
    inner: ItemDefinition,
}

impl ItemBuilder {
    pub fn new(id: &str, name: &str, description: &str, item_type: ItemType) -> Self {
        Self {
            inner: ItemDefinition {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                item_type,
                properties: ItemProperties {
                    weight: 0.0,
                    value: 0,
                    rarity: Rarity::Common,
                    durability: 100,
                    max_durability: 100,
                    magical: false,
                    equipment_slot: None,
                    bonuses: None,
                    abilities: None,
                    concealment: None,
                    educational_function: None,
                    learning_bonus: None,
                    applicable_theories: None,
                    seasonal_bonus: None,
                    commercial_value: None,
                    dangerous: None,
                    detection_risk: None,
                    synthesis_bonus: None,
                    grand_synthesis: None,
                    tool_function: None,
                    precision_bonus: None,
                    theory_focus: None,
                    risk_reward: None,
                    variable_quality: None,
                    legal_risk: None,
                    requirements: None,
                },
            },
        }
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.inner.properties.weight = weight;
        self
    }

    pub fn value(mut self, value: u32) -> Self {
        self.inner.properties.value = value;
        self
    }

    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.inner.properties.rarity = rarity;
        self
    }

    /// Current durability for items that start worn. Max stays at 100.
    pub fn durability(mut self, current: u32) -> Self {
        self.inner.properties.durability = current;
        self
    }

    pub fn magical(mut self) -> Self {
        self.inner.properties.magical = true;
        self
    }

    pub fn equipment_slot(mut self, slot: EquipmentSlot) -> Self {
        self.inner.properties.equipment_slot = Some(slot);
        self
    }

    pub fn bonus(mut self, bonus: impl Into<ItemBonus>) -> Self {
        self.inner
            .properties
            .bonuses
            .get_or_insert_with(Vec::new)
            .push(bonus.into());
        self
    }

    pub fn ability(mut self, ability: ItemAbility) -> Self {
        self.inner
            .properties
            .abilities
            .get_or_insert_with(Vec::new)
            .push(ability);
        self
    }

    pub fn concealment(mut self) -> Self {
        self.inner.properties.concealment = Some(true);
        self
    }

    pub fn educational(mut self, function: EducationalFunction, learning_bonus: f64) -> Self {
        self.inner.properties.educational_function = Some(function);
        self.inner.properties.learning_bonus = Some(learning_bonus);
        self
    }

    pub fn applicable_theories(mut self, theories: &[&str]) -> Self {
        self.inner.properties.applicable_theories =
            Some(theories.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn seasonal_bonus(mut self) -> Self {
        self.inner.properties.seasonal_bonus = Some(true);
        self
    }

    pub fn commercial_value(mut self) -> Self {
        self.inner.properties.commercial_value = Some(true);
        self
    }

    pub fn dangerous(mut self) -> Self {
        self.inner.properties.dangerous = Some(true);
        self
    }

    pub fn detection_risk(mut self, risk: f64) -> Self {
        self.inner.properties.detection_risk = Some(risk);
        self
    }

    pub fn synthesis_bonus(mut self, bonus: f64) -> Self {
        self.inner.properties.synthesis_bonus = Some(bonus);
        self
    }

    pub fn grand_synthesis(mut self) -> Self {
        self.inner.properties.grand_synthesis = Some(true);
        self
    }

    pub fn tool_function(mut self, function: &str) -> Self {
        self.inner.properties.tool_function = Some(function.to_string());
        self
    }

    pub fn precision_bonus(mut self, bonus: f64) -> Self {
        self.inner.properties.precision_bonus = Some(bonus);
        self
    }

    pub fn theory_focus(mut self, theory: &str) -> Self {
        self.inner.properties.theory_focus = Some(theory.to_string());
        self
    }

    pub fn risk_reward(mut self, breakthrough_chance: f64, failure_chance: f64) -> Self {
        self.inner.properties.risk_reward = Some(RiskReward {
            breakthrough_chance,
            failure_chance,
        });
        self
    }

    pub fn variable_quality(mut self) -> Self {
        self.inner.properties.variable_quality = Some(true);
        self
    }

    pub fn legal_risk(mut self) -> Self {
        self.inner.properties.legal_risk = Some(true);
        self
    }

    pub fn requirements(mut self, requirements: ItemRequirements) -> Self {
        self.inner.properties.requirements = Some(requirements);
        self
    }

    pub fn build(self) -> ItemDefinition {
        self.inner
    }
}
