use crate::shared::*;

/// Populate the FishCatalog with the eight encyclopedia species.
///
/// Catalog order is display order. Two species per rarity tier.
pub fn populate_fish(catalog: &mut FishCatalog) {
    catalog.species = vec![
        FishSpecies {
            name: "Emperor Angelfish".into(),
            scientific_name: "Pomacanthus imperator".into(),
            family: "Pomacanthidae".into(),
            habitat: "Indo-Pacific coral reefs".into(),
            size: "30-40 cm".into(),
            color: 0x4169E1,
            rarity: Rarity::Uncommon,
            pattern: "Blue body with yellow stripes".into(),
            diet: "Sponges, tunicates, algae".into(),
            description: "One of the most striking fish in the ocean, the Emperor Angelfish \
                displays magnificent blue and yellow horizontal stripes."
                .into(),
            fun_fact: "Young Emperor Angelfish look so different from adults that they were \
                once thought to be a separate species!"
                .into(),
        },
        FishSpecies {
            name: "Mandarin Fish".into(),
            scientific_name: "Synchiropus splendidus".into(),
            family: "Callionymidae".into(),
            habitat: "Western Pacific coral reefs".into(),
            size: "6 cm".into(),
            color: 0xFF6B35,
            rarity: Rarity::Rare,
            pattern: "Blue, orange, and green swirls".into(),
            diet: "Small crustaceans".into(),
            description: "Perhaps the most colorful fish in the sea, the Mandarin Fish is a \
                psychedelic masterpiece of blues, oranges, and greens."
                .into(),
            fun_fact: "They have no scales! Instead, their skin secretes a toxic mucus that \
                protects them."
                .into(),
        },
        FishSpecies {
            name: "Clownfish".into(),
            scientific_name: "Amphiprion ocellaris".into(),
            family: "Pomacentridae".into(),
            habitat: "Indo-Pacific anemones".into(),
            size: "11 cm".into(),
            color: 0xFF8C00,
            rarity: Rarity::Common,
            pattern: "Orange with white bands".into(),
            diet: "Algae, zooplankton".into(),
            description: "Clownfish have a special relationship with sea anemones. They're \
                immune to the anemone's sting and live safely among their tentacles."
                .into(),
            fun_fact: "All clownfish are born male! The dominant male will change sex to \
                become female if needed."
                .into(),
        },
        FishSpecies {
            name: "Lionfish".into(),
            scientific_name: "Pterois volitans".into(),
            family: "Scorpaenidae".into(),
            habitat: "Indo-Pacific and Atlantic reefs".into(),
            size: "30-38 cm".into(),
            color: 0xDC143C,
            rarity: Rarity::Rare,
            pattern: "Red, white, and brown stripes".into(),
            diet: "Small fish and invertebrates".into(),
            description: "The Lionfish is both beautiful and dangerous, with venomous spines \
                on its dorsal fins. They're voracious hunters."
                .into(),
            fun_fact: "Lionfish have become invasive in the Atlantic Ocean with no natural \
                predators!"
                .into(),
        },
        FishSpecies {
            name: "Royal Gramma".into(),
            scientific_name: "Gramma loreto".into(),
            family: "Grammatidae".into(),
            habitat: "Caribbean coral reefs".into(),
            size: "8 cm".into(),
            color: 0x9966FF,
            rarity: Rarity::Uncommon,
            pattern: "Purple front, yellow back".into(),
            diet: "Zooplankton, small crustaceans".into(),
            description: "This tiny Caribbean beauty displays stunning two-tone coloration: \
                deep royal purple on the front and bright golden yellow on the rear."
                .into(),
            fun_fact: "Royal Grammas can swim upside-down just as easily as right-side up!"
                .into(),
        },
        FishSpecies {
            name: "Regal Tang".into(),
            scientific_name: "Paracanthurus hepatus".into(),
            family: "Acanthuridae".into(),
            habitat: "Indo-Pacific coral reefs".into(),
            size: "30 cm".into(),
            color: 0x1E90FF,
            rarity: Rarity::Common,
            pattern: "Electric blue with black markings".into(),
            diet: "Plankton and algae".into(),
            description: "The Regal Tang has an electric blue body with bold black markings \
                and a bright yellow tail."
                .into(),
            fun_fact: "Regal Tangs can 'play dead' by lying on their side when threatened!"
                .into(),
        },
        FishSpecies {
            name: "Moorish Idol".into(),
            scientific_name: "Zanclus cornutus".into(),
            family: "Zanclidae".into(),
            habitat: "Indo-Pacific coral reefs".into(),
            size: "23 cm".into(),
            color: 0xFFD700,
            rarity: Rarity::Epic,
            pattern: "White, black, and yellow bands".into(),
            diet: "Sponges and tunicates".into(),
            description: "The Moorish Idol is one of the most recognizable reef fish with its \
                distinctive elongated dorsal fin."
                .into(),
            fun_fact: "Ancient Moors believed these fish brought happiness!".into(),
        },
        FishSpecies {
            name: "Discus Fish".into(),
            scientific_name: "Symphysodon aequifasciatus".into(),
            family: "Cichlidae".into(),
            habitat: "Amazon River Basin".into(),
            size: "20-25 cm".into(),
            color: 0xFF69B4,
            rarity: Rarity::Epic,
            pattern: "Round body with vibrant stripes".into(),
            diet: "Worms, crustaceans, plant matter".into(),
            description: "Known as the 'King of the Aquarium,' Discus fish are prized for \
                their perfectly round shape and stunning colors."
                .into(),
            fun_fact: "Discus parents produce special mucus that their babies feed on!".into(),
        },
    ];
}
