// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smol_str::SmolStr;

/// Length of generated step names.
pub const GENERATED_NAME_LEN: usize = 7;

const NAME_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The unique, immutable identifier of a step.
///
/// Generated names are short lowercase-alphanumeric strings; names loaded
/// from an existing steps file are accepted as-is. The only rule is
/// non-emptiness, so display layers always have something to label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepName {
    value: SmolStr,
}

impl StepName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, NameError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self { value: SmolStr::new(value) })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for StepName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for StepName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for StepName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StepName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    Empty,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("step name must not be empty"),
        }
    }
}

impl std::error::Error for NameError {}

/// Source of fresh step names.
///
/// Seedable so tests and fixtures get deterministic boards.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    rng: StdRng,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Draws one 7-char lowercase-alphanumeric name.
    pub fn generate(&mut self) -> StepName {
        let mut buf = [0u8; GENERATED_NAME_LEN];
        for slot in &mut buf {
            *slot = NAME_ALPHABET[self.rng.random_range(0..NAME_ALPHABET.len())];
        }
        let value = std::str::from_utf8(&buf).expect("alphabet is ascii");
        StepName { value: SmolStr::new(value) }
    }

    /// Draws names until one is not `taken`. The alphabet gives 36^7
    /// candidates, so the loop terminates for any realistic board.
    pub fn generate_unique(&mut self, mut taken: impl FnMut(&StepName) -> bool) -> StepName {
        loop {
            let candidate = self.generate();
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}
