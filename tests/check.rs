//! Comparison tests against files on disk.

mod common;

use cfn_param_check::check::{validate_files, LoadOptions, Violation};
use common::{params_json, write_temp, ENV_REGION_TEMPLATE, INTRINSIC_YAML_TEMPLATE};

#[test]
fn matching_files_pass() {
    let template = write_temp(".json", ENV_REGION_TEMPLATE);
    let params = write_temp(".json", &params_json(&[("Env", "prod")]));

    let report = validate_files(template.path(), params.path(), &LoadOptions::default()).unwrap();
    assert!(report.is_ok());
    assert_eq!(report.parameter_file(), params.path());
    assert_eq!(
        report.lines(),
        vec![format!("✅ Parameter file OK: {}", params.path().display())]
    );
}

#[test]
fn extra_parameter_names_template() {
    let template = write_temp(".json", ENV_REGION_TEMPLATE);
    let params = write_temp(".json", &params_json(&[("Env", "prod"), ("Extra", "x")]));

    let report = validate_files(template.path(), params.path(), &LoadOptions::default()).unwrap();
    assert_eq!(
        report.violations(),
        &[Violation::ExtraParameter {
            name: "Extra".to_string(),
            template: template.path().to_path_buf(),
        }]
    );
    assert_eq!(
        report.lines(),
        vec![format!(
            "❌ Parameter 'Extra' is in JSON but NOT in template: {}",
            template.path().display()
        )]
    );
}

#[test]
fn missing_parameter_names_parameter_file() {
    let template = write_temp(".json", r#"{"Parameters": {"Env": {"Type": "String"}}}"#);
    let params = write_temp(".json", "[]");

    let report = validate_files(template.path(), params.path(), &LoadOptions::default()).unwrap();
    assert_eq!(report.missing().collect::<Vec<_>>(), vec!["Env"]);
    assert_eq!(
        report.lines(),
        vec![format!(
            "❌ Required parameter 'Env' missing from JSON file: {}",
            params.path().display()
        )]
    );
}

#[test]
fn every_violation_reported_once() {
    let template = write_temp(
        ".json",
        r#"{"Parameters": {"A": {}, "B": {}, "C": {"Default": "c"}}}"#,
    );
    let params = write_temp(
        ".json",
        &params_json(&[("X", "1"), ("Y", "2"), ("X", "3"), ("A", "a")]),
    );

    let report = validate_files(template.path(), params.path(), &LoadOptions::default()).unwrap();
    assert_eq!(report.extra().collect::<Vec<_>>(), vec!["X", "Y"]);
    assert_eq!(report.missing().collect::<Vec<_>>(), vec!["B"]);
    assert_eq!(report.lines().len(), 3);
    let names: Vec<_> = report.violations().iter().map(Violation::name).collect();
    assert_eq!(names, vec!["X", "Y", "B"]);
}

#[test]
fn yaml_template_with_intrinsics() {
    let template = write_temp(".yaml", INTRINSIC_YAML_TEMPLATE);
    let params = write_temp(".json", &params_json(&[("Env", "prod")]));

    let report = validate_files(template.path(), params.path(), &LoadOptions::default()).unwrap();
    assert!(report.is_ok(), "{report}");
}

#[test]
fn template_without_parameters_rejects_any_supplied() {
    let template = write_temp(".yaml", "Resources: {}\n");
    let params = write_temp(".json", &params_json(&[("Env", "prod")]));

    let report = validate_files(template.path(), params.path(), &LoadOptions::default()).unwrap();
    assert_eq!(report.extra().collect::<Vec<_>>(), vec!["Env"]);
}

#[test]
fn load_error_short_circuits() {
    let template = write_temp(".json", ENV_REGION_TEMPLATE);
    let params = write_temp(".json", "not json");

    let err = validate_files(template.path(), params.path(), &LoadOptions::default()).unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.path(), params.path());
}
