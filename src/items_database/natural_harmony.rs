use super::builders::ItemBuilder;
use crate::items::{ItemAbility, ItemBonus, ItemDefinition, ItemRequirements, LearningBonus};
use crate::models::{EducationalFunction, EquipmentSlot, ItemType, LearningMethod, Rarity};

const FACTION: &str = "OrderOfNaturalHarmony";

/// Items for the Order of Natural Harmony: observation, meditation, and
/// bio-resonance work, strongest in natural environments.
pub fn get_natural_harmony_definitions() -> Vec<ItemDefinition> {
    vec![
        ItemBuilder::new(
            "harmony_meditation_stone",
            "Harmony Meditation Stone",
            "A smooth river stone that resonates with natural energy, enhancing focus during dawn and dusk meditation sessions.",
            ItemType::Equipment,
        )
        .weight(0.8)
        .value(250)
        .rarity(Rarity::Uncommon)
        .magical()
        .equipment_slot(EquipmentSlot::Neck)
        .bonus(
            LearningBonus::new(LearningMethod::Study, 0.35)
                .environment("natural")
                .time_bonus("dawn_dusk"),
        )
        .bonus(ItemBonus::energy_cost_reduction(0.25))
        .requirements(
            ItemRequirements::new()
                .resonance_sensitivity(40)
                .faction_rep(FACTION, 25),
        )
        .build(),

        ItemBuilder::new(
            "living_crystal_garden",
            "Living Crystal Garden",
            "A symbiotic collection of crystals that grow stronger as your understanding deepens, providing enhanced bio-resonance research capabilities.",
            ItemType::Tool,
        )
        .weight(50.0)
        .value(1500)
        .rarity(Rarity::Rare)
        .magical()
        .tool_function("symbiotic_research")
        .precision_bonus(0.4)
        .theory_focus("bio_resonance")
        .requirements(
            ItemRequirements::new()
                .resonance_sensitivity(50)
                .faction_rep(FACTION, 75)
                .theories(&["bio_resonance"]),
        )
        .build(),

        ItemBuilder::new(
            "natures_wisdom_tome",
            "Nature's Wisdom Tome",
            "An ancient book written on living bark that changes its teachings with the seasons, revealing different aspects of natural magic.",
            ItemType::Educational,
        )
        .weight(2.5)
        .value(800)
        .rarity(Rarity::Rare)
        .durability(90)
        .magical()
        .educational(EducationalFunction::KnowledgeArchive, 0.45)
        .applicable_theories(&["bio_resonance", "detection_arrays"])
        .seasonal_bonus()
        .requirements(ItemRequirements::new().faction_rep(FACTION, 75))
        .build(),

        ItemBuilder::new(
            "spiritual_balance_amulet",
            "Spiritual Balance Amulet",
            "A wooden amulet carved from sacred grove trees, providing protection against magical corruption and mental fatigue.",
            ItemType::Equipment,
        )
        .weight(0.3)
        .value(350)
        .rarity(Rarity::Uncommon)
        .magical()
        .equipment_slot(EquipmentSlot::Neck)
        .bonus(LearningBonus::new(LearningMethod::Observation, 0.3))
        .bonus(ItemBonus::fatigue_resistance(0.5))
        .requirements(ItemRequirements::new().faction_rep(FACTION, 25))
        .ability(
            ItemAbility::new("Inner Peace")
                .passive()
                .effect("stress_immunity"),
        )
        .build(),
    ]
}
