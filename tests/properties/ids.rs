//! Property tests for id generation.

use proptest::prelude::*;

use petfriends::domain::value_objects::{generate_id, id_prefix_for};

fn any_case(word: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Known species get their letter followed by the index, in any case.
    #[test]
    fn property_known_species_prefix(
        dog in any_case("dog"),
        cat in any_case("cat"),
        index in 1usize..10_000,
    ) {
        prop_assert_eq!(generate_id(&dog, index), format!("d{index}"));
        prop_assert_eq!(generate_id(&cat, index), format!("c{index}"));
    }

    /// PROPERTY: Anything else falls back to 'u'.
    #[test]
    fn property_unknown_species_prefix(species in "[a-zA-Z ]{0,12}") {
        let lower = species.to_lowercase();
        prop_assume!(lower != "dog" && lower != "cat");
        prop_assert_eq!(id_prefix_for(&species), 'u');
    }
}
