use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// An exercise profile value was not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("unknown age group: {0:?} (expected 3-5, 7-9 or 10-12)")]
    UnknownAgeGroup(String),

    #[error("unknown operation: {0:?} (expected suma, resta, multiplicacion or division)")]
    UnknownOperation(String),

    #[error("unknown level: {0:?} (expected facil, intermedio or dificil)")]
    UnknownLevel(String),
}

//
// ─── AGE GROUP ─────────────────────────────────────────────────────────────────
//

/// Coarse age bucket selecting the numeric ranges for addition and subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "7-9")]
    SevenToNine,
    #[serde(rename = "10-12")]
    TenToTwelve,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [
        AgeGroup::ThreeToFive,
        AgeGroup::SevenToNine,
        AgeGroup::TenToTwelve,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::ThreeToFive => "3-5",
            AgeGroup::SevenToNine => "7-9",
            AgeGroup::TenToTwelve => "10-12",
        }
    }

    /// Operand bounds used by `suma` and `resta` at the given level.
    #[must_use]
    pub fn operand_range(self, level: Level) -> RangeInclusive<u32> {
        match (self, level) {
            (AgeGroup::ThreeToFive, Level::Facil) => 1..=5,
            (AgeGroup::ThreeToFive, Level::Intermedio) => 1..=10,
            (AgeGroup::ThreeToFive, Level::Dificil) => 1..=15,
            (AgeGroup::SevenToNine, Level::Facil) => 1..=20,
            (AgeGroup::SevenToNine, Level::Intermedio) => 1..=50,
            (AgeGroup::SevenToNine, Level::Dificil) => 1..=100,
            (AgeGroup::TenToTwelve, Level::Facil) => 1..=50,
            (AgeGroup::TenToTwelve, Level::Intermedio) => 1..=100,
            (AgeGroup::TenToTwelve, Level::Dificil) => 1..=200,
        }
    }
}

impl FromStr for AgeGroup {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3-5" => Ok(AgeGroup::ThreeToFive),
            "7-9" => Ok(AgeGroup::SevenToNine),
            "10-12" => Ok(AgeGroup::TenToTwelve),
            other => Err(ProfileError::UnknownAgeGroup(other.to_owned())),
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── OPERATION ─────────────────────────────────────────────────────────────────
//

/// Arithmetic operation practiced by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Suma,
    Resta,
    Multiplicacion,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Suma,
        Operation::Resta,
        Operation::Multiplicacion,
        Operation::Division,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Suma => "suma",
            Operation::Resta => "resta",
            Operation::Multiplicacion => "multiplicacion",
            Operation::Division => "division",
        }
    }
}

impl FromStr for Operation {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "suma" => Ok(Operation::Suma),
            "resta" => Ok(Operation::Resta),
            "multiplicacion" => Ok(Operation::Multiplicacion),
            "division" => Ok(Operation::Division),
            other => Err(ProfileError::UnknownOperation(other.to_owned())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty tier within an age group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Facil,
    Intermedio,
    Dificil,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Facil, Level::Intermedio, Level::Dificil];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Facil => "facil",
            Level::Intermedio => "intermedio",
            Level::Dificil => "dificil",
        }
    }

    /// Bounds for both factors of a multiplication; age group plays no part.
    #[must_use]
    pub fn factor_range(self) -> RangeInclusive<u32> {
        match self {
            Level::Facil => 1..=5,
            Level::Intermedio => 1..=10,
            Level::Dificil => 1..=12,
        }
    }

    /// Divisor and quotient bounds for an exact division.
    #[must_use]
    pub fn division_ranges(self) -> (RangeInclusive<u32>, RangeInclusive<u32>) {
        match self {
            Level::Facil => (2..=5, 1..=10),
            Level::Intermedio => (2..=10, 1..=20),
            Level::Dificil => (2..=12, 1..=50),
        }
    }
}

impl FromStr for Level {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "facil" => Ok(Level::Facil),
            "intermedio" => Ok(Level::Intermedio),
            "dificil" => Ok(Level::Dificil),
            other => Err(ProfileError::UnknownLevel(other.to_owned())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

/// The (age group, operation, level) triple an exercise is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseProfile {
    pub age_group: AgeGroup,
    pub operation: Operation,
    pub level: Level,
}

impl ExerciseProfile {
    #[must_use]
    pub fn new(age_group: AgeGroup, operation: Operation, level: Level) -> Self {
        Self {
            age_group,
            operation,
            level,
        }
    }

    /// Parse a profile from its wire strings.
    ///
    /// # Errors
    ///
    /// Returns the `ProfileError` for the first unrecognized field, checked
    /// in the order age group, operation, level.
    pub fn parse(age_group: &str, operation: &str, level: &str) -> Result<Self, ProfileError> {
        Ok(Self {
            age_group: age_group.parse()?,
            operation: operation.parse()?,
            level: level.parse()?,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
