//! Record store implementation
//!
//! This module provides the in-memory dataset the queries operate over:
//! three insertion-ordered collections of doctors, patients and
//! appointments, with id indexes for the two entities that appear on
//! the many side of a join. The store is populated once by an external
//! collaborator and is read-only afterwards; queries receive `&RecordStore`
//! and results hand out `Arc` clones, so callers can never reach a
//! mutable handle through a query result.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{Appointment, Doctor, Patient};

/// The in-memory, read-only dataset a query session operates over
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Doctors in insertion order
    doctors: Vec<Arc<Doctor>>,
    /// Patients in insertion order
    patients: Vec<Arc<Patient>>,
    /// Appointments in insertion order
    appointments: Vec<Arc<Appointment>>,
    /// Doctors indexed by id
    doctors_by_id: HashMap<i32, Arc<Doctor>>,
    /// Patients indexed by id
    patients_by_id: HashMap<i32, Arc<Patient>>,
}

impl RecordStore {
    /// Create a new empty `RecordStore`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `RecordStore` populated with the given collections
    #[must_use]
    pub fn with_records(
        doctors: Vec<Doctor>,
        patients: Vec<Patient>,
        appointments: Vec<Appointment>,
    ) -> Self {
        let mut store = Self::new();
        for doctor in doctors {
            store.add_doctor(doctor);
        }
        for patient in patients {
            store.add_patient(patient);
        }
        for appointment in appointments {
            store.add_appointment(appointment);
        }
        store
    }

    /// Add a doctor to the store. A record with a duplicate id replaces
    /// the index entry but keeps its own slot in insertion order; the
    /// population contract promises unique ids, so this is not expected
    /// in practice.
    pub fn add_doctor(&mut self, doctor: Doctor) {
        let doctor = Arc::new(doctor);
        self.doctors_by_id.insert(doctor.id, Arc::clone(&doctor));
        self.doctors.push(doctor);
    }

    /// Add a patient to the store
    pub fn add_patient(&mut self, patient: Patient) {
        let patient = Arc::new(patient);
        self.patients_by_id.insert(patient.id, Arc::clone(&patient));
        self.patients.push(patient);
    }

    /// Add an appointment to the store. Foreign ids are not validated
    /// here; a dangling reference surfaces later, when a query joins
    /// through it.
    pub fn add_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(Arc::new(appointment));
    }

    /// All doctors in insertion order
    #[must_use]
    pub fn doctors(&self) -> &[Arc<Doctor>] {
        &self.doctors
    }

    /// All patients in insertion order
    #[must_use]
    pub fn patients(&self) -> &[Arc<Patient>] {
        &self.patients
    }

    /// All appointments in insertion order
    #[must_use]
    pub fn appointments(&self) -> &[Arc<Appointment>] {
        &self.appointments
    }

    /// Get a doctor by id
    #[must_use]
    pub fn doctor(&self, id: i32) -> Option<&Arc<Doctor>> {
        self.doctors_by_id.get(&id)
    }

    /// Get a patient by id
    #[must_use]
    pub fn patient(&self, id: i32) -> Option<&Arc<Patient>> {
        self.patients_by_id.get(&id)
    }

    /// Number of doctors in the store
    #[must_use]
    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    /// Number of patients in the store
    #[must_use]
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Number of appointments in the store
    #[must_use]
    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }
}
