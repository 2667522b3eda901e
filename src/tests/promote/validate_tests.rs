use super::*;

fn opts() -> PromoteOptions {
    PromoteOptions {
        project: "my-project".to_string(),
        freight_name: "abc123".to_string(),
        target_stage: "qa".to_string(),
        ..PromoteOptions::default()
    }
}

#[test]
fn freight_name_and_stage_become_typed_request() {
    let req = validate(&opts()).expect("valid options");
    assert_eq!(
        req,
        PromoteRequest {
            project: "my-project".to_string(),
            freight: FreightRef::ByName("abc123".to_string()),
            selector: Selector::ByStage("qa".to_string()),
        }
    );
}

#[test]
fn freight_alias_and_subscribers_become_typed_request() {
    let o = PromoteOptions {
        project: "my-project".to_string(),
        freight_alias: "wonky-wombat".to_string(),
        subscribers_of_stage: "qa".to_string(),
        ..PromoteOptions::default()
    };
    let req = validate(&o).expect("valid options");
    assert_eq!(req.freight, FreightRef::ByAlias("wonky-wombat".to_string()));
    assert_eq!(req.selector, Selector::BySubscribersOf("qa".to_string()));
}

#[test]
fn missing_project_is_reported() {
    let o = PromoteOptions {
        project: String::new(),
        ..opts()
    };
    let errs = validate(&o).unwrap_err();
    assert_eq!(errs.errors(), &[ValidationError::MissingProject]);
    assert_eq!(errs.to_string(), "project is required");
}

#[test]
fn every_missing_field_is_reported_in_check_order() {
    let errs = validate(&PromoteOptions::default()).unwrap_err();
    assert_eq!(
        errs.errors(),
        &[
            ValidationError::MissingProject,
            ValidationError::MissingFreight,
            ValidationError::MissingSelector,
        ]
    );
    assert_eq!(
        errs.to_string(),
        "project is required\n\
         either freight name or freight alias is required\n\
         either target stage or subscribers-of stage is required"
    );
}

#[test]
fn missing_selector_mentions_both_flags() {
    let o = PromoteOptions {
        target_stage: String::new(),
        ..opts()
    };
    let errs = validate(&o).unwrap_err();
    let text = errs.to_string();
    assert!(text.contains("target stage"));
    assert!(text.contains("subscribers-of stage"));
    assert_eq!(errs.errors().len(), 1);
}

#[test]
fn both_freight_fields_conflict() {
    let o = PromoteOptions {
        freight_alias: "wonky-wombat".to_string(),
        ..opts()
    };
    let errs = validate(&o).unwrap_err();
    assert_eq!(errs.errors(), &[ValidationError::ConflictingFreight]);
}

#[test]
fn both_selectors_conflict() {
    let o = PromoteOptions {
        subscribers_of_stage: "uat".to_string(),
        ..opts()
    };
    let errs = validate(&o).unwrap_err();
    assert_eq!(errs.errors(), &[ValidationError::ConflictingSelector]);
}

#[test]
fn conflicts_follow_missing_checks() {
    let o = PromoteOptions {
        project: String::new(),
        freight_alias: "wonky-wombat".to_string(),
        target_stage: String::new(),
        ..opts()
    };
    let errs = validate(&o).unwrap_err();
    assert_eq!(
        errs.errors(),
        &[
            ValidationError::MissingProject,
            ValidationError::MissingSelector,
            ValidationError::ConflictingFreight,
        ]
    );
}

#[test]
fn unknown_output_format_is_rejected() {
    let o = PromoteOptions {
        output_format: Some("toml".to_string()),
        ..opts()
    };
    let errs = validate(&o).unwrap_err();
    assert!(errs.contains(&ValidationError::UnsupportedOutputFormat("toml".to_string())));
    assert!(errs.to_string().contains("allowed: json, yaml, name"));
}

#[test]
fn known_or_empty_output_format_is_accepted() {
    for format in ["json", "yaml", "name", ""] {
        let o = PromoteOptions {
            output_format: Some(format.to_string()),
            ..opts()
        };
        assert!(validate(&o).is_ok(), "format {:?} should validate", format);
    }
}
