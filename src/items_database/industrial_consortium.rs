use super::builders::ItemBuilder;
use crate::items::{ItemAbility, ItemBonus, ItemDefinition, ItemRequirements, LearningBonus};
use crate::models::{EducationalFunction, EquipmentSlot, ItemType, LearningMethod, Rarity};

const FACTION: &str = "IndustrialConsortium";

/// Consortium gear: throughput over tradition. Broad efficiency bonuses and
/// rapid-prototyping tools with an explicit risk/reward profile.
pub fn get_industrial_consortium_definitions() -> Vec<ItemDefinition> {
    vec![
        ItemBuilder::new(
            "efficiency_optimizer_goggles",
            "Efficiency Optimizer Goggles",
            "Advanced optical enhancement devices that analyze magical processes and suggest optimization pathways for maximum efficiency.",
            ItemType::Equipment,
        )
        .weight(1.2)
        .value(400)
        .rarity(Rarity::Uncommon)
        .durability(80)
        .magical()
        .equipment_slot(EquipmentSlot::Head)
        .bonus(LearningBonus::new(LearningMethod::Experimentation, 0.25))
        .bonus(LearningBonus::new(LearningMethod::Research, 0.35).environment("workshop"))
        .requirements(
            ItemRequirements::new()
                .mental_acuity(45)
                .faction_rep(FACTION, 25),
        )
        .ability(ItemAbility::new("Process Analysis").cooldown(240))
        .build(),

        ItemBuilder::new(
            "advanced_experimental_apparatus",
            "Advanced Experimental Apparatus",
            "Cutting-edge magical research equipment that enables rapid prototyping and parallel experimentation, with built-in safety protocols.",
            ItemType::Tool,
        )
        .weight(75.0)
        .value(2500)
        .rarity(Rarity::Rare)
        .durability(90)
        .magical()
        .tool_function("rapid_prototyping")
        .precision_bonus(0.6)
        .risk_reward(0.05, 0.05)
        .requirements(
            ItemRequirements::new()
                .mental_acuity(65)
                .faction_rep(FACTION, 75)
                .theories(&["resonance_amplification"]),
        )
        .build(),

        ItemBuilder::new(
            "innovation_database",
            "Innovation Database",
            "A crystalline storage device containing thousands of proprietary magical techniques and commercial applications developed by Consortium researchers.",
            ItemType::Educational,
        )
        .weight(1.0)
        .value(600)
        .rarity(Rarity::Uncommon)
        .magical()
        .educational(EducationalFunction::KnowledgeArchive, 0.3)
        .applicable_theories(&["light_manipulation", "resonance_amplification"])
        .commercial_value()
        .requirements(ItemRequirements::new().faction_rep(FACTION, 25))
        .build(),

        ItemBuilder::new(
            "productivity_enhancement_suite",
            "Productivity Enhancement Suite",
            "An integrated system of efficiency-boosting magical devices worn as a vest, optimizing workflow and enabling parallel learning processes.",
            ItemType::Equipment,
        )
        .weight(4.0)
        .value(1200)
        .rarity(Rarity::Rare)
        .durability(85)
        .magical()
        .equipment_slot(EquipmentSlot::Chest)
        .bonus(LearningBonus::new(LearningMethod::Study, 0.2))
        .bonus(LearningBonus::new(LearningMethod::Research, 0.2))
        .bonus(LearningBonus::new(LearningMethod::Experimentation, 0.2))
        .bonus(ItemBonus::energy_cost_reduction(0.4))
        .requirements(
            ItemRequirements::new()
                .mental_acuity(65)
                .faction_rep(FACTION, 75),
        )
        .ability(
            ItemAbility::new("Workflow Optimization")
                .cooldown(1440)
                .effect("parallel_learning"),
        )
        .build(),
    ]
}
