//! Rarity-weighted fish selection.
//!
//! A catch is two independent uniform draws: the first picks the rarity tier
//! by cumulative probability, the second picks a species uniformly within
//! that tier.
//!
//! | Roll r       | Tier     |
//! |--------------|----------|
//! | r < 0.40     | Common   |
//! | r < 0.70     | Uncommon |
//! | r < 0.90     | Rare     |
//! | otherwise    | Epic     |

use rand::Rng;

use crate::shared::*;

/// Map a uniform roll in `[0, 1)` onto a rarity tier.
pub fn tier_for_roll(roll: f64) -> Rarity {
    if roll < 0.40 {
        Rarity::Common
    } else if roll < 0.70 {
        Rarity::Uncommon
    } else if roll < 0.90 {
        Rarity::Rare
    } else {
        Rarity::Epic
    }
}

/// Draw a tier, then a species within it.
///
/// Returns `None` only when the drawn tier is empty, which a catalog that
/// passed `FishCatalog::validate` never allows.
pub fn pick_species<R: Rng + ?Sized>(catalog: &FishCatalog, rng: &mut R) -> Option<SpeciesId> {
    let rarity = tier_for_roll(rng.gen::<f64>());
    let tier = catalog.tier(rarity);
    if tier.is_empty() {
        return None;
    }
    Some(tier[rng.gen_range(0..tier.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::standard_catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for_roll(0.0), Rarity::Common);
        assert_eq!(tier_for_roll(0.399), Rarity::Common);
        assert_eq!(tier_for_roll(0.40), Rarity::Uncommon);
        assert_eq!(tier_for_roll(0.699), Rarity::Uncommon);
        assert_eq!(tier_for_roll(0.70), Rarity::Rare);
        assert_eq!(tier_for_roll(0.899), Rarity::Rare);
        assert_eq!(tier_for_roll(0.90), Rarity::Epic);
        assert_eq!(tier_for_roll(0.9999), Rarity::Epic);
    }

    #[test]
    fn test_tier_frequencies_match_probabilities() {
        let catalog = standard_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(0xF15E);
        let draws = 100_000;
        let mut counts: HashMap<Rarity, usize> = HashMap::new();

        for _ in 0..draws {
            let id = pick_species(&catalog, &mut rng).expect("standard catalog has every tier");
            let rarity = catalog.get(id).map(|s| s.rarity).expect("id from catalog");
            *counts.entry(rarity).or_default() += 1;
        }

        for rarity in Rarity::ALL {
            let observed = counts.get(&rarity).copied().unwrap_or(0) as f64 / draws as f64;
            let expected = rarity.draw_probability();
            assert!(
                (observed - expected).abs() < 0.01,
                "{} drawn {:.4}, expected {:.2}",
                rarity,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_every_species_in_tier_is_reachable() {
        let catalog = standard_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = vec![false; catalog.len()];
        for _ in 0..5_000 {
            if let Some(id) = pick_species(&catalog, &mut rng) {
                seen[id.0] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "unreached species: {:?}", seen);
    }

    #[test]
    fn test_empty_tier_yields_none() {
        let mut catalog = standard_catalog();
        catalog.species.retain(|s| s.rarity == Rarity::Common);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcomes: Vec<Option<SpeciesId>> =
            (0..200).map(|_| pick_species(&catalog, &mut rng)).collect();
        assert!(outcomes.iter().any(|o| o.is_none()));
        assert!(outcomes.iter().flatten().all(|id| catalog.get(*id).is_some()));
    }
}
