//! Character classes and pool building for password generation.

use std::fmt;

use super::config::PasswordConfig;

const CAPITAL: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'ñ', 'o', 'p', 'q',
    'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const SPECIAL: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', ':', '/', '<', '>',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Capital,
    Lowercase,
    Number,
    Special,
}

impl CharacterClass {
    /// Universe concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Capital,
        CharacterClass::Lowercase,
        CharacterClass::Number,
        CharacterClass::Special,
    ];

    /// Repair order. A class's index here is its slot counted back from the
    /// end of the password.
    pub const REPAIR_ORDER: [CharacterClass; 4] = [
        CharacterClass::Special,
        CharacterClass::Number,
        CharacterClass::Lowercase,
        CharacterClass::Capital,
    ];

    pub fn chars(self) -> &'static [char] {
        match self {
            CharacterClass::Capital => CAPITAL,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Number => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(&c)
    }

    /// Which class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Position from the end of the password this class repairs into.
    pub fn repair_slot(self) -> usize {
        match self {
            CharacterClass::Special => 0,
            CharacterClass::Number => 1,
            CharacterClass::Lowercase => 2,
            CharacterClass::Capital => 3,
        }
    }

    /// Short label used by the interactive form.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Capital => "ABC",
            CharacterClass::Lowercase => "abc",
            CharacterClass::Number => "123",
            CharacterClass::Special => "#@!",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Capital => "capital",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Number => "number",
            CharacterClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// Active pools for one configuration. Disabled classes are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    pub capital: Vec<char>,
    pub lowercase: Vec<char>,
    pub number: Vec<char>,
    pub special: Vec<char>,
    pub universe: Vec<char>,
}

impl Pools {
    pub fn pool(&self, class: CharacterClass) -> &[char] {
        match class {
            CharacterClass::Capital => &self.capital,
            CharacterClass::Lowercase => &self.lowercase,
            CharacterClass::Number => &self.number,
            CharacterClass::Special => &self.special,
        }
    }
}

/// Build the character pools for a configuration.
pub fn build(config: &PasswordConfig) -> Pools {
    let pick = |class: CharacterClass| -> Vec<char> {
        if config.enabled(class) {
            class.chars().to_vec()
        } else {
            Vec::new()
        }
    };

    let capital = pick(CharacterClass::Capital);
    let lowercase = pick(CharacterClass::Lowercase);
    let number = pick(CharacterClass::Number);
    let special = pick(CharacterClass::Special);

    let mut universe = Vec::with_capacity(size(config));
    universe.extend(&capital);
    universe.extend(&lowercase);
    universe.extend(&number);
    universe.extend(&special);

    Pools {
        capital,
        lowercase,
        number,
        special,
        universe,
    }
}

/// Size of the sampling universe (for entropy calculation).
pub fn size(config: &PasswordConfig) -> usize {
    config.enabled_classes().map(|class| class.chars().len()).sum()
}
