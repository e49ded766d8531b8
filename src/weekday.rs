/// Weekday names as the timetable spells them, mandag = 1 through søndag = 7.
const WEEKDAYS: [(&str, u8); 7] = [
    ("mandag", 1),
    ("tirsdag", 2),
    ("onsdag", 3),
    ("torsdag", 4),
    ("fredag", 5),
    ("lørdag", 6),
    ("søndag", 7),
];

/// Looks up a weekday number from its name, ignoring casing and surrounding
/// whitespace. Anything outside the seven known names is rejected.
pub fn number_from_name(name: &str) -> Option<u8> {
    let wanted = name.trim().to_lowercase();
    WEEKDAYS
        .iter()
        .find(|(known, _)| *known == wanted)
        .map(|(_, number)| *number)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    WEEKDAYS.iter().map(|(name, _)| *name)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_arbitrary_strings_never_alias_a_weekday(name in "[a-zæøå]{1,12}") {
            prop_assume!(WEEKDAYS.iter().all(|(known, _)| *known != name));
            prop_assert_eq!(number_from_name(&name), None);
        }

        #[test]
        fn test_lookup_survives_shouting_and_padding(idx in 0usize..7) {
            let (name, number) = WEEKDAYS[idx];
            let spelling = format!("  {}  ", name.to_uppercase());
            prop_assert_eq!(number_from_name(&spelling), Some(number));
        }
    }
}
