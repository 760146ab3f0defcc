//! Property tests for animal field handling.

use proptest::prelude::*;

use petfriends::domain::entities::{AnimalBuilder, DEFAULT_VALUE, UNKNOWN_AGE};

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ a-zA-Z0-9.,]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No field of a stored animal is ever blank.
    #[test]
    fn property_setters_never_leave_blanks(
        age in text(),
        physical in text(),
        personality in text(),
        nickname in text(),
    ) {
        let mut animal = AnimalBuilder::new()
            .with_species("cat")
            .with_id("c1")
            .build()
            .unwrap();

        animal.set_age(age.clone());
        animal.set_physical_description(physical.clone());
        animal.set_personality_description(personality.clone());
        animal.set_nickname(nickname.clone());

        for (value, input, sentinel) in [
            (animal.age(), &age, UNKNOWN_AGE),
            (animal.physical_description(), &physical, DEFAULT_VALUE),
            (animal.personality_description(), &personality, DEFAULT_VALUE),
            (animal.nickname(), &nickname, DEFAULT_VALUE),
        ] {
            prop_assert!(!value.trim().is_empty());
            if input.trim().is_empty() {
                prop_assert_eq!(value, sentinel);
            } else {
                prop_assert_eq!(value, input.as_str());
            }
        }
    }

    /// PROPERTY: A reused builder starts every animal from defaults.
    #[test]
    fn property_builder_does_not_leak_fields(
        age in text(),
        nickname in text(),
    ) {
        let mut builder = AnimalBuilder::new();
        builder
            .with_species("dog")
            .with_id("d1")
            .with_age(&age)
            .with_nickname(&nickname)
            .build()
            .unwrap();

        let second = builder.with_species("cat").with_id("c2").build().unwrap();

        prop_assert_eq!(second.age(), UNKNOWN_AGE);
        prop_assert_eq!(second.nickname(), DEFAULT_VALUE);
        prop_assert_eq!(second.physical_description(), DEFAULT_VALUE);
    }

    /// PROPERTY: Any piece of a description finds its animal, whatever the case.
    #[test]
    fn property_characteristic_substring_matches(
        physical in "[a-z ]{1,30}",
        start in 0usize..30,
        len in 1usize..10,
    ) {
        prop_assume!(!physical.trim().is_empty());
        let start = start % physical.len();
        let end = (start + len).min(physical.len());
        let needle = physical[start..end].to_uppercase();

        let dog = AnimalBuilder::new()
            .with_species("dog")
            .with_id("d1")
            .with_physical_description(&physical)
            .build()
            .unwrap();

        prop_assert!(dog.matches_characteristic("Dog", &needle));
        prop_assert!(!dog.matches_characteristic("cat", &needle));
    }
}
