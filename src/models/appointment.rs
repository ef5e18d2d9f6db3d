//! Appointment entity model
//!
//! An appointment links one doctor and one patient by id. The ids are
//! plain foreign-key fields; resolving them against the record store is
//! the query layer's job, and a dangling id is only detected there.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::traits::EntityModel;

/// A scheduled visit of a patient to a doctor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier
    pub id: i32,
    /// Id of the attending doctor
    pub doctor_id: i32,
    /// Id of the visiting patient
    pub patient_id: i32,
    /// Room (office) number where the visit takes place
    pub room_number: i32,
    /// Scheduled date and time of the visit
    pub appointment_time: NaiveDateTime,
    /// Whether this is a follow-up (repeat) visit rather than a new
    /// consultation
    pub is_follow_up: bool,
}

impl EntityModel for Appointment {
    type Id = i32;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        format!("appointment:{}", self.id)
    }
}
