//! Doctor entity model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::traits::EntityModel;
use crate::models::types::Specialization;

/// A medical doctor on the hospital staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique identifier
    pub id: i32,
    /// Passport number
    pub passport: String,
    /// Full name
    pub full_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Medical specialization
    pub specialization: Specialization,
    /// Years of work experience
    pub work_experience: i32,
}

impl EntityModel for Doctor {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        format!("doctor:{}", self.id)
    }
}
