//! Password generation.

use log::{debug, trace};
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use zeroize::Zeroize;

use super::charset::{self, CharacterClass, Pools};
use super::config::PasswordConfig;
use super::history::SessionHistory;
use crate::error::{GenError, Result};

/// Duplicate candidates tolerated per `generate` call.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

// Every effective pass repairs a class that was never repaired before, so
// one pass per class plus a final clean pass always reaches a fixed point.
const MAX_REPAIR_PASSES: usize = CharacterClass::REPAIR_ORDER.len() + 1;

/// Generates passwords and remembers every one it handed out.
///
/// The history lives exactly as long as the generator. Create a new
/// generator to start a new session.
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
    history: SessionHistory,
    max_attempts: usize,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator<StdRng> {
    /// Reproducible generator, same seed gives the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            history: SessionHistory::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether this session already produced `password`.
    pub fn contains(&self, password: &str) -> bool {
        self.history.contains(password)
    }

    /// Generate a password that has every enabled class and was not produced
    /// before by this generator.
    pub fn generate(&mut self, config: &PasswordConfig) -> Result<String> {
        config.validate()?;
        let pools = charset::build(config);
        if pools.universe.is_empty() {
            return Err(GenError::InvalidConfiguration(
                "sampling universe is empty".into(),
            ));
        }

        let issued = self.history.issued_for(config) as u128;
        if space_size(pools.universe.len(), config.length) <= issued {
            return Err(GenError::ExhaustedUniqueSpace { attempts: 0 });
        }

        for attempt in 1..=self.max_attempts {
            let mut candidate = sample(&mut self.rng, &pools.universe, config.length);
            let passes = repair(&mut self.rng, &mut candidate, &pools);
            let mut password: String = candidate.iter().collect();
            candidate.zeroize();
            debug_assert!(satisfies(&password, config));

            if self.history.contains(&password) {
                debug!("attempt {attempt}: duplicate after {passes} repair pass(es)");
                password.zeroize();
                continue;
            }

            self.history.record(password.clone(), config);
            trace!(
                "accepted password on attempt {attempt}, {} in session",
                self.history.len()
            );
            return Ok(password);
        }

        debug!("gave up after {} duplicate candidates", self.max_attempts);
        Err(GenError::ExhaustedUniqueSpace {
            attempts: self.max_attempts,
        })
    }

    /// Generate `count` distinct passwords, stopping at the first error.
    pub fn generate_batch(
        &mut self,
        config: &PasswordConfig,
        count: usize,
    ) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate(config)).collect()
    }
}

/// True if `password` has the configured length and at least one character of
/// every enabled class, and nothing from a disabled class.
pub fn satisfies(password: &str, config: &PasswordConfig) -> bool {
    password.chars().count() == config.length
        && config
            .enabled_classes()
            .all(|class| password.chars().any(|c| class.contains(c)))
        && password
            .chars()
            .all(|c| CharacterClass::of(c).is_some_and(|class| config.enabled(class)))
}

/// Upper bound on distinct strings of `length` over `universe_len` characters.
fn space_size(universe_len: usize, length: usize) -> u128 {
    u32::try_from(length)
        .ok()
        .and_then(|exp| (universe_len as u128).checked_pow(exp))
        .unwrap_or(u128::MAX)
}

fn sample<R: Rng>(rng: &mut R, universe: &[char], length: usize) -> Vec<char> {
    (0..length)
        .map(|_| universe[rng.random_range(0..universe.len())])
        .collect()
}

/// Patch missing classes until a pass changes nothing. Returns passes run.
fn repair<R: Rng>(rng: &mut R, candidate: &mut [char], pools: &Pools) -> usize {
    for pass in 1..=MAX_REPAIR_PASSES {
        if !repair_pass(rng, candidate, pools) {
            return pass;
        }
    }
    MAX_REPAIR_PASSES
}

fn repair_pass<R: Rng>(rng: &mut R, candidate: &mut [char], pools: &Pools) -> bool {
    let mut changed = false;

    for class in CharacterClass::REPAIR_ORDER {
        if candidate.iter().any(|&c| class.contains(c)) {
            continue;
        }
        let Some(&replacement) = pools.pool(class).choose(rng) else {
            // disabled
            continue;
        };
        let Some(index) = candidate.len().checked_sub(class.repair_slot() + 1) else {
            continue;
        };
        trace!("{class} missing, patching index {index}");
        candidate[index] = replacement;
        changed = true;
    }

    changed
}
