//! Analytical queries over a populated record store
//!
//! Each query is a pure function of a `&RecordStore` snapshot (and, for
//! the temporal ones, a reference date), returning a deterministic,
//! ordered result. Nothing here mutates the store, so concurrent
//! callers may share one snapshot freely.
//!
//! Parameter validation happens before any data scan; a dangling
//! foreign id inside an appointment is only detected when a join
//! dereferences it. An empty result is an ordinary `Ok` value, never an
//! error.

use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDateTime};
use itertools::Itertools;

use crate::collections::RecordStore;
use crate::error::{RegistryError, Result};
use crate::models::{Appointment, Doctor, Patient};

/// Doctors with at least `min_experience` years of work experience, in
/// the store's insertion order.
///
/// Rejects a negative threshold with [`RegistryError::InvalidParameter`].
pub fn experienced_doctors(
    store: &RecordStore,
    min_experience: i32,
) -> Result<Vec<Arc<Doctor>>> {
    if min_experience < 0 {
        return Err(RegistryError::InvalidParameter(format!(
            "experience threshold must be non-negative, got {min_experience}"
        )));
    }

    let matched: Vec<Arc<Doctor>> = store
        .doctors()
        .iter()
        .filter(|doctor| doctor.work_experience >= min_experience)
        .cloned()
        .collect();

    log::debug!(
        "experienced_doctors(min={min_experience}): {} of {} doctors",
        matched.len(),
        store.doctor_count()
    );
    Ok(matched)
}

/// Patients seen by the given doctor, ordered by full name ascending.
///
/// This is the raw inner join of the doctor's appointments against the
/// patient collection: a patient with several appointments with this
/// doctor appears once per appointment. Ties in the name ordering keep
/// the original appointment order. An unknown doctor id yields an empty
/// result; an appointment whose `patient_id` does not resolve yields
/// [`RegistryError::InconsistentReference`].
pub fn patients_of_doctor(store: &RecordStore, doctor_id: i32) -> Result<Vec<Arc<Patient>>> {
    let mut joined: Vec<Arc<Patient>> = Vec::new();
    for appointment in store
        .appointments()
        .iter()
        .filter(|a| a.doctor_id == doctor_id)
    {
        let patient = store.patient(appointment.patient_id).ok_or(
            RegistryError::InconsistentReference {
                appointment_id: appointment.id,
                entity: "patient",
                id: appointment.patient_id,
            },
        )?;
        joined.push(Arc::clone(patient));
    }

    // Stable sort: equal names keep appointment order.
    joined.sort_by(|a, b| a.full_name.cmp(&b.full_name));

    log::debug!(
        "patients_of_doctor({doctor_id}): {} appointments joined",
        joined.len()
    );
    Ok(joined)
}

/// Count of follow-up appointments in the one-calendar-month lookback
/// window, i.e. with `appointment_time >= reference - 1 month`.
///
/// The subtraction is calendar-aware: one month before a 31st lands on
/// the last valid day of the shorter month.
pub fn follow_up_count(store: &RecordStore, reference: NaiveDateTime) -> Result<usize> {
    let cutoff = sub_months(reference, 1)?;

    let count = store
        .appointments()
        .iter()
        .filter(|a| a.is_follow_up && a.appointment_time >= cutoff)
        .count();

    log::debug!("follow_up_count(since {cutoff}): {count}");
    Ok(count)
}

/// Patients at least `age_threshold_years` old at `reference` that have
/// appointments with more than one distinct doctor, ordered by birth
/// date ascending with ties broken by patient id.
///
/// The distinct-doctor step resolves every referenced doctor id; a
/// dangling `doctor_id` yields [`RegistryError::InconsistentReference`].
pub fn senior_multi_doctor_patients(
    store: &RecordStore,
    reference: NaiveDateTime,
    age_threshold_years: u32,
) -> Result<Vec<Arc<Patient>>> {
    let months = age_threshold_years
        .checked_mul(12)
        .ok_or_else(|| {
            RegistryError::InvalidParameter(format!(
                "age threshold out of range: {age_threshold_years}"
            ))
        })?;
    let birth_cutoff = sub_months(reference, months)?;

    let mut seniors: Vec<Arc<Patient>> = Vec::new();
    for patient in store.patients() {
        if patient.birth_date > birth_cutoff {
            continue;
        }

        let mut distinct_doctors = 0usize;
        for appointment in store
            .appointments()
            .iter()
            .filter(|a| a.patient_id == patient.id)
            .unique_by(|a| a.doctor_id)
        {
            if store.doctor(appointment.doctor_id).is_none() {
                return Err(RegistryError::InconsistentReference {
                    appointment_id: appointment.id,
                    entity: "doctor",
                    id: appointment.doctor_id,
                });
            }
            distinct_doctors += 1;
        }

        if distinct_doctors > 1 {
            seniors.push(Arc::clone(patient));
        }
    }

    seniors.sort_by(|a, b| {
        a.birth_date
            .cmp(&b.birth_date)
            .then_with(|| a.id.cmp(&b.id))
    });

    log::debug!(
        "senior_multi_doctor_patients(born on/before {birth_cutoff}): {} patients",
        seniors.len()
    );
    Ok(seniors)
}

/// Appointments in the given room during the given calendar month,
/// ordered by appointment time ascending; identical timestamps keep
/// insertion order.
///
/// This is a whole-calendar-month window, not a rolling lookback.
/// Rejects a non-positive room number or a month outside 1..=12 with
/// [`RegistryError::InvalidParameter`].
pub fn room_schedule(
    store: &RecordStore,
    room_number: i32,
    year: i32,
    month: u32,
) -> Result<Vec<Arc<Appointment>>> {
    if room_number <= 0 {
        return Err(RegistryError::InvalidParameter(format!(
            "room number must be positive, got {room_number}"
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(RegistryError::InvalidParameter(format!(
            "month must be in 1..=12, got {month}"
        )));
    }

    let mut schedule: Vec<Arc<Appointment>> = store
        .appointments()
        .iter()
        .filter(|a| {
            a.room_number == room_number
                && a.appointment_time.year() == year
                && a.appointment_time.month() == month
        })
        .cloned()
        .collect();

    // Stable sort: identical timestamps keep insertion order.
    schedule.sort_by_key(|a| a.appointment_time);

    log::debug!(
        "room_schedule(room {room_number}, {year}-{month:02}): {} appointments",
        schedule.len()
    );
    Ok(schedule)
}

/// Calendar-aware month subtraction. Fails only when the result would
/// fall outside the representable date range.
fn sub_months(reference: NaiveDateTime, months: u32) -> Result<NaiveDateTime> {
    reference
        .checked_sub_months(Months::new(months))
        .ok_or_else(|| {
            RegistryError::InvalidParameter(format!(
                "reference date {reference} cannot be shifted back {months} months"
            ))
        })
}
