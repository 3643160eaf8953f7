use super::builders::ItemBuilder;
use crate::items::{ItemAbility, ItemDefinition, ItemRequirements, LearningBonus};
use crate::models::{EducationalFunction, EquipmentSlot, ItemType, LearningMethod, Rarity};

const FACTION: &str = "NeutralScholars";

/// Cross-faction synthesis items for the Neutral Scholars. Moderate bonuses
/// that apply to every learning method, capped by the grand synthesis
/// archive.
pub fn get_neutral_scholars_definitions() -> Vec<ItemDefinition> {
    vec![
        ItemBuilder::new(
            "diplomatic_synthesis_lens",
            "Diplomatic Synthesis Lens",
            "A crystalline monocle that reveals the underlying connections between different schools of magical thought.",
            ItemType::Equipment,
        )
        .weight(0.3)
        .value(350)
        .rarity(Rarity::Uncommon)
        .magical()
        .equipment_slot(EquipmentSlot::Head)
        .bonus(LearningBonus::new(LearningMethod::Study, 0.3).cross_faction())
        .bonus(LearningBonus::new(LearningMethod::Research, 0.3).cross_faction())
        .requirements(ItemRequirements::new().faction_rep(FACTION, 25))
        .ability(
            ItemAbility::new("Cross-Cultural Analysis")
                .passive()
                .effect("conflict_reduction"),
        )
        .build(),

        ItemBuilder::new(
            "universal_theory_framework",
            "Universal Theory Framework",
            "A comprehensive theoretical model that demonstrates the fundamental connections between all schools of magical thought.",
            ItemType::Educational,
        )
        .weight(5.0)
        .value(1200)
        .rarity(Rarity::Rare)
        .magical()
        .educational(EducationalFunction::KnowledgeArchive, 0.35)
        .applicable_theories(&[
            "harmonic_fundamentals",
            "crystal_structures",
            "mental_resonance",
            "bio_resonance",
            "detection_arrays",
            "light_manipulation",
            "resonance_amplification",
            "sympathetic_networks",
            "theoretical_synthesis",
        ])
        .synthesis_bonus(0.45)
        .requirements(
            ItemRequirements::new().faction_rep(FACTION, 75).theories(&[
                "harmonic_fundamentals",
                "bio_resonance",
                "light_manipulation",
                "sympathetic_networks",
            ]),
        )
        .build(),

        ItemBuilder::new(
            "scholars_neutrality_medallion",
            "Scholar's Neutrality Medallion",
            "A perfectly balanced medallion that allows safe interaction with opposing faction items and ideologies.",
            ItemType::Equipment,
        )
        .weight(0.2)
        .value(800)
        .rarity(Rarity::Rare)
        .magical()
        .equipment_slot(EquipmentSlot::Neck)
        .bonus(LearningBonus::new(LearningMethod::Study, 0.2))
        .bonus(LearningBonus::new(LearningMethod::Research, 0.2))
        .bonus(LearningBonus::new(LearningMethod::Experimentation, 0.2))
        .bonus(LearningBonus::new(LearningMethod::Teaching, 0.2))
        .bonus(LearningBonus::new(LearningMethod::Observation, 0.2))
        .requirements(ItemRequirements::new().faction_rep(FACTION, 75))
        .ability(
            ItemAbility::new("Diplomatic Immunity")
                .passive()
                .effect("faction_item_immunity"),
        )
        .build(),

        ItemBuilder::new(
            "synthesis_masters_archive",
            "Synthesis Master's Archive",
            "The ultimate repository of cross-faction magical knowledge, enabling the creation of entirely new magical disciplines through grand synthesis.",
            ItemType::Educational,
        )
        .weight(8.0)
        .value(5000)
        .rarity(Rarity::Legendary)
        .magical()
        .educational(EducationalFunction::KnowledgeArchive, 0.6)
        .applicable_theories(&[
            "theoretical_synthesis",
            "sympathetic_networks",
            "resonance_amplification",
            "light_manipulation",
        ])
        .grand_synthesis()
        .requirements(
            ItemRequirements::new()
                .mental_acuity(90)
                .resonance_sensitivity(80)
                .faction_rep(FACTION, 100)
                .theories(&[
                    "harmonic_fundamentals",
                    "crystal_structures",
                    "mental_resonance",
                    "bio_resonance",
                    "detection_arrays",
                    "light_manipulation",
                    "resonance_amplification",
                    "sympathetic_networks",
                ]),
        )
        .build(),
    ]
}
