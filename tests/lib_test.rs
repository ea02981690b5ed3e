//! Library integration tests.

use predeploy::PredeployError;

#[test]
fn error_types_are_public() {
    let err = PredeployError::ConfigValidationError {
        message: "services.legacy cannot be empty".into(),
    };
    assert!(err.to_string().contains("services.legacy"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> predeploy::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use predeploy::cli::{Cli, Commands};

    let cli = Cli::parse_from(["predeploy", "list", "--json"]);

    if let Some(Commands::List(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn custom_validator_runs_in_pipeline() {
    use predeploy::validator::{
        Level, ValidationPipeline, ValidationResult, Validator, ValidatorError, ValidatorId,
        ValidatorRegistry,
    };

    struct AlwaysPasses;

    impl Validator for AlwaysPasses {
        fn id(&self) -> ValidatorId {
            ValidatorId::new("always-passes")
        }
        fn name(&self) -> &str {
            "Always Passes"
        }
        fn description(&self) -> &str {
            "Never blocks a deployment"
        }
        fn level(&self) -> Level {
            Level::Warning
        }
        fn validate(&self) -> Result<ValidationResult, ValidatorError> {
            Ok(ValidationResult::Success)
        }
    }

    let mut registry = ValidatorRegistry::new();
    registry.register(Box::new(AlwaysPasses));

    let report = ValidationPipeline::new().run(&registry).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.passed_count(), 1);
}
