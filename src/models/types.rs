//! Common domain type definitions
//!
//! This module contains the enum types shared by the entity models.
//! Each set is closed: parsing an unknown spelling is an error rather
//! than a silent fallback, since the population contract promises
//! already-validated values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Medical specialization of a doctor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    /// Heart and circulatory system
    Cardiology,
    /// Nervous system
    Neurology,
    /// Children's medicine
    Pediatrics,
    /// Operative treatment
    Surgery,
    /// General internal medicine
    Therapy,
    /// Skin conditions
    Dermatology,
    /// Eye conditions
    Ophthalmology,
}

impl FromStr for Specialization {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cardiology" => Ok(Self::Cardiology),
            "neurology" => Ok(Self::Neurology),
            "pediatrics" => Ok(Self::Pediatrics),
            "surgery" => Ok(Self::Surgery),
            "therapy" => Ok(Self::Therapy),
            "dermatology" => Ok(Self::Dermatology),
            "ophthalmology" => Ok(Self::Ophthalmology),
            other => Err(RegistryError::InvalidValue(format!(
                "unknown specialization: {other}"
            ))),
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cardiology => "cardiology",
            Self::Neurology => "neurology",
            Self::Pediatrics => "pediatrics",
            Self::Surgery => "surgery",
            Self::Therapy => "therapy",
            Self::Dermatology => "dermatology",
            Self::Ophthalmology => "ophthalmology",
        };
        f.write_str(name)
    }
}

/// Sex of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl FromStr for Sex {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            other => Err(RegistryError::InvalidValue(format!("unknown sex: {other}"))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

/// Blood type in the ABO system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    /// Type A
    A,
    /// Type B
    B,
    /// Type AB
    Ab,
    /// Type O
    O,
}

impl FromStr for BloodType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "AB" => Ok(Self::Ab),
            "O" | "0" => Ok(Self::O),
            other => Err(RegistryError::InvalidValue(format!(
                "unknown blood type: {other}"
            ))),
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
            Self::Ab => f.write_str("AB"),
            Self::O => f.write_str("O"),
        }
    }
}

/// Rh factor of a patient's blood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RhFactor {
    /// Rh positive
    Positive,
    /// Rh negative
    Negative,
}

impl FromStr for RhFactor {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "positive" | "pos" => Ok(Self::Positive),
            "-" | "negative" | "neg" => Ok(Self::Negative),
            other => Err(RegistryError::InvalidValue(format!(
                "unknown rh factor: {other}"
            ))),
        }
    }
}

impl fmt::Display for RhFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("+"),
            Self::Negative => f.write_str("-"),
        }
    }
}
