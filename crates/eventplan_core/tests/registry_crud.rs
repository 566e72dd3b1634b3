use eventplan_core::{CollectionKind, PlanningRegistry, RegistryError};

#[test]
fn events_accumulate_one_per_call_in_call_order() {
    let mut registry = PlanningRegistry::new();

    assert!(registry.events().is_empty());
    registry.create_event("Launch", "2025-01-01", "10:00");
    assert_eq!(registry.events().len(), 1);
    registry.create_event("Retro", "2025-02-01", "15:00");
    assert_eq!(registry.events().len(), 2);
    registry.create_event("Launch", "2025-03-01", "09:00");
    assert_eq!(registry.events().len(), 3);

    let names: Vec<&str> = registry.events().iter().map(|event| event.name()).collect();
    assert_eq!(names, ["Launch", "Retro", "Launch"]);

    let listed: Vec<String> = registry
        .list_event_details()
        .map(|details| details.name)
        .collect();
    assert_eq!(listed, ["Launch", "Retro", "Launch"]);
}

#[test]
fn venues_accumulate_without_merging_or_dedup() {
    let mut registry = PlanningRegistry::new();
    let facilities = vec!["AV".to_string()];

    let first = registry.add_venue("Hall A", 200, &facilities);
    let second = registry.add_venue("Hall A", 200, &facilities);

    assert_eq!(registry.venues().len(), 2);
    assert_ne!(first, second, "equal field values still get distinct ids");
    assert_eq!(registry.venues()[0].name(), "Hall A");
    assert_eq!(registry.venues()[1].name(), "Hall A");
}

#[test]
fn empty_strings_are_accepted_as_given() {
    let mut registry = PlanningRegistry::new();
    registry.create_event("", "", "");

    let details = registry.list_event_details().next().unwrap();
    assert_eq!(details.name, "");
    assert_eq!(details.date, "");
    assert_eq!(details.time, "");
}

#[test]
fn register_attendee_appends_to_the_target_event_only() {
    let mut registry = PlanningRegistry::new();
    registry.create_event("Launch", "2025-01-01", "10:00");
    registry.create_event("Retro", "2025-02-01", "15:00");

    registry
        .register_attendee(1, "Ana", "ana@x.com", 1)
        .unwrap();
    registry
        .register_attendee(1, "Ben", "ben@x.com", 3)
        .unwrap();

    assert!(registry.events()[0].attendees().is_empty());
    let retro_attendees = registry.events()[1].attendees();
    assert_eq!(retro_attendees.len(), 2);
    assert_eq!(retro_attendees[0].name(), "Ana");
    assert_eq!(retro_attendees[1].name(), "Ben");
}

#[test]
fn empty_events_fail_with_precondition_never_not_found() {
    let mut registry = PlanningRegistry::new();

    let err = registry
        .register_attendee(0, "Ana", "ana@x.com", 1)
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::PreconditionFailed(CollectionKind::Events)
    );

    let err = registry.assign_venue(0, 0).unwrap_err();
    assert_eq!(
        err,
        RegistryError::PreconditionFailed(CollectionKind::Events)
    );
}

#[test]
fn empty_venues_fail_with_precondition_after_events_exist() {
    let mut registry = PlanningRegistry::new();
    registry.create_event("Launch", "2025-01-01", "10:00");

    let err = registry.assign_venue(0, 3).unwrap_err();
    assert_eq!(
        err,
        RegistryError::PreconditionFailed(CollectionKind::Venues)
    );
}

#[test]
fn out_of_bounds_event_index_is_not_found() {
    let mut registry = PlanningRegistry::new();
    registry.create_event("Launch", "2025-01-01", "10:00");

    let err = registry
        .register_attendee(2, "Ana", "ana@x.com", 1)
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotFound {
            collection: CollectionKind::Events,
            index: 2,
        }
    );
}

#[test]
fn out_of_bounds_assign_fails_and_mutates_nothing() {
    let mut registry = PlanningRegistry::new();
    registry.create_event("Launch", "2025-01-01", "10:00");
    registry.create_event("Retro", "2025-02-01", "15:00");
    registry.add_venue("Hall A", 200, &[]);

    let err = registry.assign_venue(5, 0).unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotFound {
            collection: CollectionKind::Events,
            index: 5,
        }
    );
    assert!(registry.events().iter().all(|event| event.venue().is_none()));

    let err = registry.assign_venue(0, 7).unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotFound {
            collection: CollectionKind::Venues,
            index: 7,
        }
    );
    assert!(registry.events().iter().all(|event| event.venue().is_none()));
}

#[test]
fn end_to_end_gala_scenario() {
    let mut registry = PlanningRegistry::new();

    registry.create_event("Gala", "2025-06-01", "19:00");
    registry.add_venue(
        "Hall A",
        200,
        &["AV".to_string(), "Catering".to_string()],
    );
    registry.assign_venue(0, 0).unwrap();
    registry
        .register_attendee(0, "Ana", "ana@x.com", 2)
        .unwrap();

    let records: Vec<_> = registry.list_event_details().collect();
    assert_eq!(records.len(), 1);

    let gala = &records[0];
    assert_eq!(gala.name, "Gala");
    assert_eq!(gala.date, "2025-06-01");
    assert_eq!(gala.time, "19:00");

    let venue = gala.venue.as_ref().unwrap();
    assert_eq!(venue.name, "Hall A");
    assert_eq!(venue.capacity, 200);
    assert_eq!(venue.facilities, ["AV", "Catering"]);

    assert_eq!(gala.attendees.len(), 1);
    assert_eq!(gala.attendees[0].name, "Ana");
    assert_eq!(gala.attendees[0].access, "Access to VIP Lounge.");
}
