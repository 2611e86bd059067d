//! Character-pool password generator.
//!
//! Builds a pool from the enabled character classes, applies the configured
//! exclusions and draws every character uniformly from the union. In strict
//! mode one character of every enabled class is placed first and the result
//! is shuffled.

use zeroize::{Zeroize, Zeroizing};

use crate::services::random_source::{shuffle, RandomSource, SystemRandomSource};
use crate::types::errors::GenerationError;
use crate::types::generator::CharacterClass;
use crate::types::options::PasswordGenOptions;
use crate::types::settings::GeneratorSettings;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()+_-=}{[]|:;\"/?.><,`~";

/// Characters dropped by `exclude_similar_characters`.
pub const SIMILAR_CHARACTERS: &str = "ilLI|`oO0";

/// Trait defining the password generation function.
pub trait PasswordGenerator {
    fn generate(&self, options: &PasswordGenOptions) -> Result<Zeroizing<String>, GenerationError>;
}

/// Returns the full alphabet of a character class.
pub fn charset(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Lowercase => LOWERCASE,
        CharacterClass::Uppercase => UPPERCASE,
        CharacterClass::Numbers => NUMBERS,
        CharacterClass::Symbols => SYMBOLS,
    }
}

fn is_enabled(options: &PasswordGenOptions, class: CharacterClass) -> bool {
    match class {
        CharacterClass::Lowercase => options.lowercase,
        CharacterClass::Uppercase => options.uppercase,
        CharacterClass::Numbers => options.numbers,
        CharacterClass::Symbols => options.symbols,
    }
}

/// Builds one filtered pool per enabled class.
///
/// A class emptied by the exclusions is skipped, unless `strict` demands a
/// character from it. At least one pool must survive.
pub fn build_pools(options: &PasswordGenOptions) -> Result<Vec<(CharacterClass, Vec<char>)>, GenerationError> {
    let mut pools = Vec::new();
    let mut emptied = Vec::new();
    for class in CharacterClass::ALL {
        if !is_enabled(options, class) {
            continue;
        }
        let pool: Vec<char> = charset(class)
            .chars()
            .filter(|c| !(options.exclude_similar_characters && SIMILAR_CHARACTERS.contains(*c)))
            .filter(|c| !options.exclude.contains(*c))
            .collect();
        if pool.is_empty() {
            if options.strict {
                return Err(GenerationError::EmptyPool(class.to_string()));
            }
            emptied.push(class.as_str());
            continue;
        }
        pools.push((class, pool));
    }

    if pools.is_empty() {
        if emptied.is_empty() {
            return Err(GenerationError::NoCharacterClasses);
        }
        return Err(GenerationError::EmptyPool(emptied.join(", ")));
    }
    Ok(pools)
}

/// Checks that the exclusions leave every class with at least one character.
pub fn check_exclusions(settings: &GeneratorSettings) -> Result<(), GenerationError> {
    let options = PasswordGenOptions {
        length: CharacterClass::ALL.len(),
        uppercase: true,
        lowercase: true,
        numbers: true,
        symbols: true,
        exclude_similar_characters: settings.exclude_similar_characters,
        exclude: settings.exclude.clone(),
        strict: true,
    };
    build_pools(&options).map(|_| ())
}

/// Default generator drawing from the class alphabets.
pub struct CharsetPasswordGenerator<R: RandomSource = SystemRandomSource> {
    rng: R,
}

impl CharsetPasswordGenerator<SystemRandomSource> {
    pub fn new() -> Self {
        Self {
            rng: SystemRandomSource::new(),
        }
    }
}

impl Default for CharsetPasswordGenerator<SystemRandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> CharsetPasswordGenerator<R> {
    pub fn with_random_source(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> PasswordGenerator for CharsetPasswordGenerator<R> {
    fn generate(&self, options: &PasswordGenOptions) -> Result<Zeroizing<String>, GenerationError> {
        if options.length == 0 {
            return Err(GenerationError::InvalidLength(0));
        }

        let pools = build_pools(options)?;
        if options.strict && options.length < pools.len() {
            return Err(GenerationError::StrictTooShort {
                required: pools.len(),
                length: options.length,
            });
        }

        let all: Vec<char> = pools.iter().flat_map(|(_, pool)| pool.iter().copied()).collect();
        let mut chars: Vec<char> = Vec::with_capacity(options.length);

        if options.strict {
            for (_, pool) in &pools {
                chars.push(pool[self.rng.index_below(pool.len())?]);
            }
        }
        while chars.len() < options.length {
            chars.push(all[self.rng.index_below(all.len())?]);
        }
        if options.strict {
            shuffle(&self.rng, &mut chars)?;
        }

        let password = Zeroizing::new(chars.iter().collect::<String>());
        chars.zeroize();
        Ok(password)
    }
}
