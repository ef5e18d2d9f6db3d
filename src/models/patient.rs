//! Patient entity model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::traits::EntityModel;
use crate::models::types::{BloodType, RhFactor, Sex};

/// A patient registered with the hospital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier
    pub id: i32,
    /// Passport number
    pub passport: String,
    /// Full name
    pub full_name: String,
    /// Sex of the patient
    pub sex: Sex,
    /// Date of birth; carries a time component with no clinical
    /// significance, kept as a date-time for temporal comparisons
    pub birth_date: NaiveDateTime,
    /// Residential address
    pub address: String,
    /// Blood type in the ABO system
    pub blood_type: BloodType,
    /// Rh factor
    pub rh_factor: RhFactor,
    /// Contact phone number
    pub phone_number: String,
}

impl EntityModel for Patient {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        format!("patient:{}", self.id)
    }
}
