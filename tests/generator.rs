use std::collections::HashSet;

use passmint::pass::{self, charset};
use passmint::{CharacterClass, GenError, PasswordConfig, PasswordGenerator};
use quickcheck_macros::quickcheck;

fn config(
    length: usize,
    capital: bool,
    lower: bool,
    number: bool,
    special: bool,
) -> PasswordConfig {
    PasswordConfig {
        length,
        has_capital: capital,
        has_lowercase: lower,
        has_number: number,
        has_special: special,
    }
}

fn class_count(password: &str, class: CharacterClass) -> usize {
    password.chars().filter(|c| class.contains(*c)).count()
}

#[test]
fn every_class_at_length_eight() {
    let config = config(8, true, true, true, true);
    let mut generator = PasswordGenerator::new();
    let password = generator.generate(&config).unwrap();

    assert_eq!(password.chars().count(), 8);
    for class in CharacterClass::ALL {
        assert!(class_count(&password, class) >= 1, "{class} missing from {password}");
    }
}

#[test]
fn lowercase_only_at_minimum_length() {
    let config = config(4, false, true, false, false);
    let password = PasswordGenerator::new().generate(&config).unwrap();

    assert_eq!(password.chars().count(), 4);
    assert_eq!(class_count(&password, CharacterClass::Lowercase), 4);
}

#[test]
fn all_disabled_returns_no_password() {
    let config = config(10, false, false, false, false);
    let mut generator = PasswordGenerator::new();

    let err = generator.generate(&config).unwrap_err();
    assert!(matches!(err, GenError::InvalidConfiguration(_)));
    assert_eq!(generator.history_len(), 0);
    assert!(charset::build(&config).universe.is_empty());
}

#[test]
fn same_generator_never_repeats() {
    let config = PasswordConfig::default();
    let mut generator = PasswordGenerator::seeded(2024);
    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        assert!(seen.insert(generator.generate(&config).unwrap()));
    }
    assert_eq!(generator.history_len(), 1_000);
}

#[test]
fn fresh_generator_starts_a_fresh_session() {
    let config = PasswordConfig::default();
    let first = PasswordGenerator::seeded(9).generate(&config).unwrap();

    let mut again = PasswordGenerator::seeded(9);
    assert!(!again.contains(&first));
    assert_eq!(again.generate(&config).unwrap(), first);
}

#[test]
fn disabled_classes_never_appear() {
    let config = config(16, true, false, true, false);
    let mut generator = PasswordGenerator::seeded(77);
    for password in generator.generate_batch(&config, 300).unwrap() {
        assert_eq!(class_count(&password, CharacterClass::Lowercase), 0);
        assert_eq!(class_count(&password, CharacterClass::Special), 0);
        assert!(pass::satisfies(&password, &config));
    }
}

#[test]
fn multibyte_letters_count_as_one_character() {
    let config = config(4, true, false, false, false);
    let mut generator = PasswordGenerator::seeded(0);
    let passwords = generator.generate_batch(&config, 2_000).unwrap();

    assert!(passwords.iter().all(|p| p.chars().count() == 4));
    assert!(passwords.iter().any(|p| p.contains('Ñ')));
}

#[test]
fn small_space_runs_out() {
    let config = config(4, false, false, true, false);
    let mut generator = PasswordGenerator::seeded(1).with_max_attempts(1);

    let result = (0..10_001).try_for_each(|_| generator.generate(&config).map(drop));
    assert!(matches!(result, Err(GenError::ExhaustedUniqueSpace { .. })));
    assert!(generator.history_len() < 10_001);
}

#[quickcheck]
fn length_and_representation_hold(seed: u64, extra: u8, mask: u8) -> bool {
    let mask = (mask % 15) + 1;
    let config = config(
        4 + (extra as usize % 60),
        mask & 1 != 0,
        mask & 2 != 0,
        mask & 4 != 0,
        mask & 8 != 0,
    );
    let mut generator = PasswordGenerator::seeded(seed);
    generator
        .generate(&config)
        .is_ok_and(|password| pass::satisfies(&password, &config))
}
