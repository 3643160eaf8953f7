use super::builders::ItemBuilder;
use crate::items::{ItemAbility, ItemBonus, ItemDefinition, ItemRequirements, LearningBonus};
use crate::models::{EducationalFunction, EquipmentSlot, ItemType, LearningMethod, Rarity};

const FACTION: &str = "MagistersCouncil";

/// Items rewarding the Council's systematic, institution-first approach to
/// magical study. Strong on Study and Teaching, penalizes reckless
/// experimentation.
pub fn get_magisters_council_definitions() -> Vec<ItemDefinition> {
    vec![
        ItemBuilder::new(
            "council_scholars_circlet",
            "Council Scholar's Circlet",
            "An elegant circlet worn by senior academics, inscribed with formulas that enhance systematic learning while discouraging reckless experimentation.",
            ItemType::Equipment,
        )
        .weight(0.5)
        .value(750)
        .rarity(Rarity::Rare)
        .magical()
        .equipment_slot(EquipmentSlot::Head)
        .bonus(LearningBonus::new(LearningMethod::Study, 0.4))
        .bonus(LearningBonus::new(LearningMethod::Experimentation, -0.2))
        .bonus(ItemBonus::faction(FACTION, 2))
        .requirements(
            ItemRequirements::new()
                .mental_acuity(60)
                .faction_rep(FACTION, 75)
                .theories(&[
                    "harmonic_fundamentals",
                    "crystal_structures",
                    "mental_resonance",
                    "bio_resonance",
                    "detection_arrays",
                ]),
        )
        .ability(ItemAbility::new("Academic Network").cooldown(720))
        .build(),

        ItemBuilder::new(
            "codified_theory_compendium",
            "Codified Theory Compendium",
            "A comprehensive academic reference containing cross-indexed theories with detailed annotations from Council scholars.",
            ItemType::Educational,
        )
        .weight(3.0)
        .value(300)
        .rarity(Rarity::Uncommon)
        .durability(80)
        .magical()
        .educational(EducationalFunction::KnowledgeArchive, 0.3)
        .applicable_theories(&[
            "harmonic_fundamentals",
            "crystal_structures",
            "mental_resonance",
            "bio_resonance",
            "detection_arrays",
        ])
        .requirements(ItemRequirements::new().faction_rep(FACTION, 25))
        .build(),

        ItemBuilder::new(
            "academy_research_laboratory",
            "Academy Research Laboratory",
            "A complete controlled experimental facility that guarantees safe, precise magical research with zero risk of catastrophic failure.",
            ItemType::Tool,
        )
        .weight(100.0)
        .value(5000)
        .rarity(Rarity::Legendary)
        .magical()
        .tool_function("controlled_experimentation")
        .precision_bonus(1.0)
        .requirements(
            ItemRequirements::new()
                .mental_acuity(80)
                .faction_rep(FACTION, 100)
                .theories(&["harmonic_fundamentals", "detection_arrays"]),
        )
        .build(),

        ItemBuilder::new(
            "magistrates_seal_ring",
            "Magistrate's Seal Ring",
            "A gold ring bearing the official seal of the Magisters' Council, granting diplomatic privileges and teaching bonuses.",
            ItemType::Equipment,
        )
        .weight(0.1)
        .value(400)
        .rarity(Rarity::Uncommon)
        .magical()
        .equipment_slot(EquipmentSlot::Ring)
        .bonus(LearningBonus::new(LearningMethod::Teaching, 0.2))
        .bonus(ItemBonus::faction(FACTION, 1))
        .requirements(ItemRequirements::new().faction_rep(FACTION, 25))
        .ability(ItemAbility::new("Diplomatic Immunity").passive())
        .build(),
    ]
}
