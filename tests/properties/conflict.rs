//! Property tests for appointment overlap and conflict rejection.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use dental::{create_clinic_service, Appointment, ClinicError};

/// Minute offset from the clinic's opening hour on the test day.
fn minute(offset: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
        + Duration::minutes(offset)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `overlaps` matches half-open interval intersection.
    #[test]
    fn property_overlap_matches_interval_intersection(
        a in 0i64..300,
        len_a in 1i64..120,
        b in 0i64..300,
        len_b in 1i64..120,
    ) {
        let appointment =
            Appointment::new("a-1", "p-1", "d-1", minute(a), minute(a + len_a));

        let expected = a < b + len_b && b < a + len_a;
        prop_assert_eq!(appointment.overlaps(minute(b), minute(b + len_b)), expected);
    }

    /// PROPERTY: overlap is symmetric between two bookings.
    #[test]
    fn property_overlap_is_symmetric(
        a in 0i64..300,
        len_a in 1i64..120,
        b in 0i64..300,
        len_b in 1i64..120,
    ) {
        let first = Appointment::new("a-1", "p-1", "d-1", minute(a), minute(a + len_a));
        let second = Appointment::new("a-2", "p-1", "d-1", minute(b), minute(b + len_b));

        prop_assert_eq!(
            first.overlaps(second.start_time(), second.end_time()),
            second.overlaps(first.start_time(), first.end_time())
        );
    }
}

proptest! {
    // Each case spins up a real store on disk, so keep the count modest.
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second booking on the same dentist succeeds exactly
    /// when the requested window is free.
    #[test]
    fn property_second_booking_succeeds_iff_window_free(
        a in 0i64..180,
        len_a in 1i64..90,
        b in 0i64..180,
        len_b in 1i64..90,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let service = create_clinic_service(dir.path());

        let patient = service.register_patient("Alice", "555-0100").unwrap();
        let dentist = service.add_dentist("Dr. Smith", "Orthodontics").unwrap();

        service
            .schedule_appointment(patient.id(), dentist.id(), minute(a), minute(a + len_a), None)
            .unwrap();
        let second = service.schedule_appointment(
            patient.id(),
            dentist.id(),
            minute(b),
            minute(b + len_b),
            None,
        );

        let window_free = a + len_a <= b || b + len_b <= a;
        prop_assert_eq!(second.is_ok(), window_free);
    }

    /// PROPERTY: an empty or inverted range is always rejected, with
    /// nothing persisted.
    #[test]
    fn property_inverted_range_is_always_rejected(
        s in 0i64..180,
        back in 0i64..60,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let service = create_clinic_service(dir.path());

        let patient = service.register_patient("Alice", "555-0100").unwrap();
        let dentist = service.add_dentist("Dr. Smith", "Orthodontics").unwrap();

        let result = service.schedule_appointment(
            patient.id(),
            dentist.id(),
            minute(s),
            minute(s - back),
            None,
        );

        prop_assert!(
            matches!(result, Err(ClinicError::InvalidRange { .. })),
            "assertion failed: matches!(result, Err(ClinicError::InvalidRange {{ .. }}))"
        );
        prop_assert!(service.list_appointments().unwrap().is_empty());
    }

    /// PROPERTY: cancelling a booking always frees its window.
    #[test]
    fn property_cancel_always_frees_the_window(
        a in 0i64..180,
        len_a in 1i64..90,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let service = create_clinic_service(dir.path());

        let patient = service.register_patient("Alice", "555-0100").unwrap();
        let dentist = service.add_dentist("Dr. Smith", "Orthodontics").unwrap();

        let booked = service
            .schedule_appointment(patient.id(), dentist.id(), minute(a), minute(a + len_a), None)
            .unwrap();
        service.cancel_appointment(booked.id()).unwrap();

        let rebooked = service.schedule_appointment(
            patient.id(),
            dentist.id(),
            minute(a),
            minute(a + len_a),
            None,
        );
        prop_assert!(rebooked.is_ok());
    }
}
