use anyhow::Result;
use workout_ledger_lib::{
    AddWorkoutParams, AppService, Config, Day, LoginError, MuscleGroup, Status, StoreError,
    ValidationError,
};

// Helper function to create a test service that never touches the real config dir
fn create_test_service() -> Result<AppService> {
    let config = Config {
        default_day: "Monday".to_string(),
        ..Default::default()
    };
    Ok(AppService::with_config(config, "test_config.toml".into()))
}

fn bench_press() -> AddWorkoutParams<'static> {
    AddWorkoutParams {
        title: "Bench Press",
        group: "Chest",
        sets: "4",
        reps: "8",
        weight: "135",
        day: "Monday",
    }
}

#[test]
fn test_add_bench_press_scenario() -> Result<()> {
    let mut service = create_test_service()?;
    let record = service.add_workout(&bench_press())?;

    assert_eq!(record.status, Status::Idle);
    assert_eq!(record.day, Day::Monday);
    assert_eq!(record.group, MuscleGroup::Chest);
    assert_eq!(service.workouts().len(), 1);

    let dashboard = service.dashboard();
    let monday = dashboard.day(Day::Monday).unwrap();
    assert_eq!(monday.rows.len(), 1);
    assert_eq!(
        monday.rows[0].cells().join(" | "),
        "Bench Press | Chest | 4 x 8 | 135"
    );
    assert_eq!(dashboard.muscles.count(MuscleGroup::Chest), 1);
    assert_eq!(dashboard.summary.idle, 1);
    assert_eq!(dashboard.summary.completion_percent, 0);

    // Mark it done
    service.mark_done(record.id)?;
    let summary = service.dashboard().summary;
    assert_eq!(summary.done, 1);
    assert_eq!(summary.idle, 0);
    assert_eq!(summary.completion_percent, 100);

    Ok(())
}

#[test]
fn test_rejected_input_leaves_store_unchanged() -> Result<()> {
    let mut service = create_test_service()?;

    let cases: Vec<(AddWorkoutParams, &str)> = vec![
        (AddWorkoutParams { title: "", ..bench_press() }, "Fill Workout, Target, and Day"),
        (AddWorkoutParams { group: "", ..bench_press() }, "Fill Workout, Target, and Day"),
        (AddWorkoutParams { day: "", ..bench_press() }, "Fill Workout, Target, and Day"),
        (AddWorkoutParams { sets: "four", ..bench_press() }, "Sets and Reps must be numbers"),
        (AddWorkoutParams { reps: "", ..bench_press() }, "Sets and Reps must be numbers"),
        (AddWorkoutParams { sets: "0", ..bench_press() }, "Sets and Reps must be positive"),
        (AddWorkoutParams { reps: "-1", ..bench_press() }, "Sets and Reps must be positive"),
        (AddWorkoutParams { weight: "-10", ..bench_press() }, "Weight/Time must be 0 or more"),
        (AddWorkoutParams { weight: "heavy", ..bench_press() }, "Weight/Time must be 0 or more"),
    ];

    for (params, expected) in cases {
        let err = service.add_workout(&params).unwrap_err();
        assert_eq!(err.to_string(), expected, "input: {params:?}");
    }
    assert!(service.workouts().is_empty());

    // Monday still shows the empty placeholder
    let dashboard = service.dashboard();
    assert!(dashboard.day(Day::Monday).unwrap().placeholder().is_some());
    Ok(())
}

#[test]
fn test_zero_sets_after_valid_entry_keeps_rows() -> Result<()> {
    let mut service = create_test_service()?;
    service.add_workout(&bench_press())?;

    let result = service.add_workout(&AddWorkoutParams { sets: "0", ..bench_press() });
    assert!(matches!(
        result,
        Err(ValidationError::NonPositiveQuantity { value: 0, .. })
    ));
    let dashboard = service.dashboard();
    assert_eq!(dashboard.day(Day::Monday).unwrap().rows.len(), 1);
    Ok(())
}

#[test]
fn test_empty_weight_renders_placeholder() -> Result<()> {
    let mut service = create_test_service()?;
    let record = service.add_workout(&AddWorkoutParams {
        weight: "",
        day: "Thursday",
        ..bench_press()
    })?;
    assert_eq!(record.weight, None);

    let dashboard = service.dashboard();
    let row = &dashboard.day(Day::Thursday).unwrap().rows[0];
    assert_eq!(row.weight, "-");
    Ok(())
}

#[test]
fn test_set_status_only_touches_target() -> Result<()> {
    let mut service = create_test_service()?;
    let first = service.add_workout(&bench_press())?;
    let second = service.add_workout(&AddWorkoutParams {
        title: "Plank",
        group: "Core",
        weight: "60",
        ..bench_press()
    })?;

    service.mark_skipped(second.id)?;
    assert_eq!(service.get_workout(first.id), Some(&first));
    let updated = service.get_workout(second.id).unwrap();
    assert_eq!(updated.status, Status::Skipped);
    assert_eq!(updated.title, "Plank");

    // Status can move freely between values
    service.mark_done(second.id)?;
    service.set_status(second.id, Status::Idle)?;
    assert_eq!(service.get_workout(second.id).unwrap().status, Status::Idle);

    assert_eq!(service.mark_done(999), Err(StoreError::NotFound(999)));
    Ok(())
}

#[test]
fn test_delete_removes_exactly_one() -> Result<()> {
    let mut service = create_test_service()?;
    let a = service.add_workout(&bench_press())?;
    let b = service.add_workout(&bench_press())?;
    let c = service.add_workout(&bench_press())?;

    let removed = service.delete_workout(b.id);
    assert_eq!(removed.map(|r| r.id), Some(b.id));
    let ids: Vec<_> = service.workouts().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);

    // Deleting again is a no-op
    assert!(service.delete_workout(b.id).is_none());
    assert_eq!(service.workouts().len(), 2);
    Ok(())
}

#[test]
fn test_summary_and_focus_invariants() -> Result<()> {
    let mut service = create_test_service()?;
    let groups = ["Shoulders", "Chest", "Back", "Legs", "Arms", "Core", "Legs"];
    let mut ids = Vec::new();
    for group in groups {
        ids.push(service.add_workout(&AddWorkoutParams { group, ..bench_press() })?.id);
    }
    service.mark_done(ids[0])?;
    service.mark_done(ids[1])?;
    service.mark_skipped(ids[2])?;

    let dashboard = service.dashboard();
    let summary = dashboard.summary;
    assert_eq!(summary.total, 7);
    assert_eq!(summary.idle + summary.done + summary.skipped, summary.total);
    assert_eq!(summary.completion_percent, 29); // 2/7 = 28.57
    assert_eq!(dashboard.muscles.total(), 7);
    assert_eq!(dashboard.muscles.count(MuscleGroup::Legs), 2);
    Ok(())
}

#[test]
fn test_login_and_logout() -> Result<()> {
    let mut service = create_test_service()?;
    assert!(!service.is_logged_in());

    assert_eq!(
        service.login("", "secret").unwrap_err(),
        LoginError::InvalidCredentials
    );
    assert!(!service.is_logged_in());

    let session = service.login("sam", "pass")?;
    assert_eq!(session.username(), "sam");
    assert!(service.is_logged_in());

    service.add_workout(&bench_press())?;
    service.logout();
    assert!(service.session().is_none());
    // Workouts survive a logout within the same process
    assert_eq!(service.workouts().len(), 1);
    Ok(())
}

#[test]
fn test_default_day_from_config() -> Result<()> {
    let mut service = create_test_service()?;
    assert_eq!(service.default_day(), Day::Monday);
    service.config.default_day = "nonsense".to_string();
    assert_eq!(service.default_day(), Day::Monday);
    service.config.default_day = "Friday".to_string();
    assert_eq!(service.default_day(), Day::Friday);
    Ok(())
}
