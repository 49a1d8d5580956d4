//! Tests for driving a design from sheet rows through to a saved file.

use bridge_params::ParamError;
use bridge_types::Component;
use design_file::DesignStatus;
use gad_engine::{GenError, GenOptions};
use test_harness::fixtures::{reference_map, reference_rows};
use test_harness::{DesignRun, HarnessError};

#[test]
fn rows_to_generated_design() {
    let mut run =
        DesignRun::from_rows("River Crossing", "gad_input.xlsx", reference_rows()).unwrap();
    assert_eq!(run.metadata.status, DesignStatus::Processing);

    let primitives = run.generate().unwrap().len();
    assert_eq!(primitives, 124);
    assert_eq!(run.metadata.status, DesignStatus::Generated);
    assert_eq!(run.metadata.source_filename.as_deref(), Some("gad_input.xlsx"));
}

#[test]
fn rows_and_map_produce_the_same_scene() {
    let mut from_rows = DesignRun::from_rows("a", "a.xlsx", reference_rows()).unwrap();
    let mut from_map = DesignRun::new("b", reference_map());
    assert_eq!(from_rows.parameters, from_map.parameters);
    assert_eq!(from_rows.generate().unwrap(), from_map.generate().unwrap());
}

#[test]
fn missing_rows_are_all_reported() {
    let rows: Vec<_> = reference_rows()
        .into_iter()
        .filter(|r| r.variable != "DATUM" && r.variable != "CAPB")
        .collect();
    let err = DesignRun::from_rows("broken", "broken.xlsx", rows).err().unwrap();
    match err {
        HarnessError::Parameters(report) => {
            assert_eq!(report.missing_names(), vec!["DATUM", "CAPB"]);
        }
        other => panic!("expected parameter report, got {:?}", other),
    }
}

#[test]
fn failed_generation_marks_the_design() {
    let mut run = DesignRun::new("bad batter", reference_map());
    run.set("battr", 0.0);

    let err = run.generate().unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Generation(GenError::DegenerateBatter { parameter: "battr", .. })
    ));
    match &run.metadata.status {
        DesignStatus::Failed { message } => assert!(message.contains("battr"), "{}", message),
        other => panic!("expected failed status, got {:?}", other),
    }
    assert!(matches!(run.scene(), Err(HarnessError::NoScene { .. })));
}

#[test]
fn missing_parameter_fails_generation() {
    let mut map = reference_map();
    map.remove("sofl");
    let mut run = DesignRun::new("no soffit", map);
    let err = run.generate().unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Generation(GenError::Param(ParamError::MissingRequiredParameter { ref name }))
            if name == "sofl"
    ));
}

#[test]
fn fixing_a_parameter_recovers() {
    let mut run = DesignRun::new("retry", reference_map());
    run.set("alfb", 0.0);
    assert!(run.generate().is_err());

    run.set("alfb", 10.0);
    run.generate().unwrap();
    assert_eq!(run.metadata.status, DesignStatus::Generated);
}

#[test]
fn saved_design_reopens_with_the_same_drawing() {
    let mut run = DesignRun::new("River Crossing", reference_map());
    let original = run.generate().unwrap().clone();
    let json = run.save().unwrap();

    let mut reopened = DesignRun::from_json(&json).unwrap();
    assert_eq!(reopened.metadata, run.metadata);
    assert!(reopened.scene().is_err());
    assert_eq!(reopened.generate().unwrap(), &original);
}

#[test]
fn run_options_move_the_plan_view() {
    let mut default_run = DesignRun::new("default", reference_map());
    let mut shifted_run = DesignRun::new("shifted", reference_map())
        .with_options(GenOptions::with_plan_offset(-9000.0));

    let default_plan = default_run.generate().unwrap().primitives_of(Component::PlanView)[6]
        .bounding_box()
        .unwrap();
    let shifted_plan = shifted_run.generate().unwrap().primitives_of(Component::PlanView)[6]
        .bounding_box()
        .unwrap();

    assert!((shifted_plan.max.y - (default_plan.max.y - 4000.0)).abs() < 1e-6);
    assert_eq!(shifted_plan.min.x, default_plan.min.x);
    // The shift is less than the deck width, so the two outlines overlap.
    assert!(default_plan.contains(shifted_plan.max));
    assert!(!default_plan.contains(shifted_plan.min));
}
