//! Shared test fixtures
//!
//! Builds the reference dataset used across the integration tests:
//! 10 doctors, 12 patients and 14 appointments arranged so that every
//! query has matches, near-misses and boundary cases.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use clinic_registry::models::types::{BloodType, RhFactor, Sex, Specialization};
use clinic_registry::{Appointment, Doctor, Patient, RecordStore};

/// Shorthand for a date-time literal
pub fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn doctor(id: i32, full_name: &str, specialization: Specialization, experience: i32) -> Doctor {
    Doctor {
        id,
        passport: format!("D{id:06}"),
        full_name: full_name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
        specialization,
        work_experience: experience,
    }
}

pub fn patient(id: i32, full_name: &str, birth_date: NaiveDateTime) -> Patient {
    Patient {
        id,
        passport: format!("P{id:06}"),
        full_name: full_name.to_string(),
        sex: if id % 2 == 0 { Sex::Female } else { Sex::Male },
        birth_date,
        address: format!("{id} Main Street"),
        blood_type: BloodType::O,
        rh_factor: RhFactor::Positive,
        phone_number: format!("+45 0000 {id:04}"),
    }
}

pub fn appointment(
    id: i32,
    doctor_id: i32,
    patient_id: i32,
    room_number: i32,
    time: NaiveDateTime,
    is_follow_up: bool,
) -> Appointment {
    Appointment {
        id,
        doctor_id,
        patient_id,
        room_number,
        appointment_time: time,
        is_follow_up,
    }
}

/// The reference dataset.
///
/// Invariants the tests rely on:
/// - exactly 8 doctors with >= 10 years of experience, doctor 1 first;
/// - doctor 1 sees patients 3, 5 and 7 only, whose names sort as
///   Alice Carter < Brian Shaw < Clara Young;
/// - exactly 7 follow-up appointments on or after 2025-09-20;
/// - patients 11 and 12 are the only ones over 30 (at 2025-10-20) with
///   more than one distinct doctor, and patient 11 is born first;
/// - room 101 hosts exactly two October 2025 appointments, on the 15th
///   and the 20th, plus one in August and one in November.
pub fn sample_store() -> RecordStore {
    let _ = env_logger::builder().is_test(true).try_init();

    let doctors = vec![
        doctor(1, "Elena Morris", Specialization::Cardiology, 15),
        doctor(2, "Victor Hale", Specialization::Neurology, 20),
        doctor(3, "Nora Quinn", Specialization::Pediatrics, 7),
        doctor(4, "Paul Draper", Specialization::Surgery, 12),
        doctor(5, "Irene Walsh", Specialization::Therapy, 10),
        doctor(6, "Oscar Flint", Specialization::Dermatology, 25),
        doctor(7, "Maya Brooks", Specialization::Ophthalmology, 5),
        doctor(8, "Adam Pierce", Specialization::Cardiology, 11),
        doctor(9, "Ruth Calder", Specialization::Surgery, 18),
        doctor(10, "Felix Monroe", Specialization::Therapy, 13),
    ];

    let patients = vec![
        patient(1, "George Abbot", dt(1950, 6, 10, 0, 0)),
        patient(2, "Hanna Blake", dt(1990, 1, 25, 0, 0)),
        patient(3, "Alice Carter", dt(2000, 5, 14, 0, 0)),
        patient(4, "Ian Dorsey", dt(1988, 9, 3, 0, 0)),
        patient(5, "Brian Shaw", dt(1998, 11, 2, 0, 0)),
        patient(6, "Julia Erikson", dt(1999, 4, 18, 0, 0)),
        patient(7, "Clara Young", dt(2001, 8, 21, 0, 0)),
        patient(8, "Kevin Foster", dt(1997, 12, 30, 0, 0)),
        patient(9, "Laura Grant", dt(1992, 2, 11, 0, 0)),
        patient(10, "Marc Hedley", dt(1996, 7, 7, 0, 0)),
        patient(11, "Nina Ivers", dt(1960, 3, 12, 0, 0)),
        patient(12, "Oliver Jones", dt(1975, 7, 1, 0, 0)),
    ];

    let appointments = vec![
        appointment(1, 1, 3, 101, dt(2025, 10, 15, 0, 0), false),
        appointment(2, 1, 5, 102, dt(2025, 10, 10, 9, 0), true),
        appointment(3, 1, 7, 103, dt(2025, 9, 25, 10, 30), true),
        appointment(4, 2, 11, 101, dt(2025, 10, 20, 0, 0), true),
        appointment(5, 4, 11, 104, dt(2025, 9, 22, 14, 0), true),
        appointment(6, 2, 12, 105, dt(2025, 10, 1, 11, 0), true),
        appointment(7, 5, 12, 106, dt(2025, 10, 5, 13, 15), false),
        appointment(8, 6, 1, 101, dt(2025, 8, 30, 10, 0), true),
        appointment(9, 8, 2, 107, dt(2025, 9, 20, 8, 0), true),
        appointment(10, 9, 4, 108, dt(2025, 10, 18, 15, 45), true),
        appointment(11, 10, 6, 101, dt(2025, 11, 2, 9, 30), false),
        appointment(12, 3, 8, 109, dt(2025, 10, 12, 10, 0), false),
        appointment(13, 7, 9, 110, dt(2025, 7, 15, 12, 0), true),
        appointment(14, 5, 10, 102, dt(2025, 10, 19, 16, 0), false),
    ];

    RecordStore::with_records(doctors, patients, appointments)
}
