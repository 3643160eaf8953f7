use super::builders::ItemBuilder;
use crate::items::{ItemAbility, ItemDefinition, ItemRequirements, LearningBonus};
use crate::models::{EducationalFunction, EquipmentSlot, ItemType, LearningMethod, Rarity};

const FACTION: &str = "UndergroundNetwork";

/// Contraband of the Underground Network. High experimentation payoffs,
/// fragile gear, and abilities that can backfire.
pub fn get_underground_network_definitions() -> Vec<ItemDefinition> {
    vec![
        ItemBuilder::new(
            "forbidden_knowledge_cache",
            "Forbidden Knowledge Cache",
            "A concealed data crystal containing dangerous magical theories censored by authorities. Use with extreme caution.",
            ItemType::Educational,
        )
        .weight(0.5)
        .value(800)
        .rarity(Rarity::Rare)
        .magical()
        .educational(EducationalFunction::KnowledgeArchive, 0.5)
        .applicable_theories(&["sympathetic_networks", "theoretical_synthesis"])
        .dangerous()
        .detection_risk(0.1)
        .requirements(
            ItemRequirements::new()
                .faction_rep(FACTION, 25)
                .environment("hidden"),
        )
        .build(),

        ItemBuilder::new(
            "experimental_risk_amplifier",
            "Experimental Risk Amplifier",
            "An unstable magical device that dramatically increases experimental potential while risking catastrophic magical backlash.",
            ItemType::Equipment,
        )
        .weight(2.0)
        .value(1500)
        .rarity(Rarity::Rare)
        .durability(60)
        .magical()
        .equipment_slot(EquipmentSlot::MainHand)
        .bonus(LearningBonus::new(LearningMethod::Experimentation, 0.8))
        .requirements(
            ItemRequirements::new()
                .resonance_sensitivity(70)
                .faction_rep(FACTION, 75)
                .theories(&["sympathetic_networks"]),
        )
        .ability(
            ItemAbility::new("Dangerous Insights")
                .triggered("experimentation")
                .breakthrough_chance(0.15)
                .backlash_chance(0.15),
        )
        .build(),

        ItemBuilder::new(
            "revolutionaries_cloak",
            "Revolutionary's Cloak",
            "A dark cloak woven with concealment enchantments, allowing discrete magical research and communication with other revolutionaries.",
            ItemType::Equipment,
        )
        .weight(1.5)
        .value(450)
        .rarity(Rarity::Uncommon)
        .durability(90)
        .magical()
        .equipment_slot(EquipmentSlot::Back)
        .bonus(LearningBonus::new(LearningMethod::Study, 0.25))
        .bonus(LearningBonus::new(LearningMethod::Research, 0.25))
        .bonus(LearningBonus::new(LearningMethod::Experimentation, 0.25))
        .requirements(ItemRequirements::new().faction_rep(FACTION, 25))
        .ability(
            ItemAbility::new("Underground Network")
                .cooldown(360)
                .effect("knowledge_sharing"),
        )
        .concealment()
        .build(),

        ItemBuilder::new(
            "black_market_research_tools",
            "Black Market Research Tools",
            "A collection of illegal research instruments of varying quality, enabling banned magical procedures with unpredictable results.",
            ItemType::Tool,
        )
        .weight(10.0)
        .value(900)
        .rarity(Rarity::Uncommon)
        .durability(70)
        .magical()
        .tool_function("illegal_research")
        .precision_bonus(0.45)
        .variable_quality()
        .legal_risk()
        .requirements(ItemRequirements::new().faction_rep(FACTION, 75))
        .build(),
    ]
}
