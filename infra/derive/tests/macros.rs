#[test]
fn macro_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/nwatch_error_pass.rs");
    t.pass("tests/ui/api_model_pass.rs");
}

mod error_enum {
    use nwatch_derive::nwatch_error;
    use std::borrow::Cow;

    #[nwatch_error]
    pub enum DemoError {
        #[error("IO error{}: {source}", format_context(.context))]
        Io { source: std::io::Error, context: Option<Cow<'static, str>> },

        #[error("Internal error{}: {message}", format_context(.context))]
        Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    }

    fn failing_io() -> Result<(), std::io::Error> {
        Err(std::io::Error::other("disk gone"))
    }

    #[test]
    fn source_errors_convert_with_context() {
        let err = failing_io().context("Reading settings").unwrap_err();
        assert!(matches!(err, DemoError::Io { .. }));
        assert_eq!(err.to_string(), "IO error (Reading settings): disk gone");
    }

    #[test]
    fn question_mark_converts_without_context() {
        fn run() -> Result<(), DemoError> {
            failing_io()?;
            Ok(())
        }

        let err = run().unwrap_err();
        assert_eq!(err.to_string(), "IO error: disk gone");
    }

    #[test]
    fn strings_become_internal_errors() {
        let err: DemoError = "unexpected state".into();
        assert_eq!(err.to_string(), "Internal error: unexpected state");

        let err: DemoError = format!("code {}", 7).into();
        let err = Err::<(), _>(err).context("Settling").unwrap_err();
        assert_eq!(err.to_string(), "Internal error (Settling): code 7");
    }
}

mod wire_model {
    use nwatch_derive::api_model;

    #[api_model]
    pub struct Payload {
        pub full_name: String,
        pub notification_enabled: bool,
    }

    #[api_model(deny_unknown_fields = false)]
    pub struct Relaxed {
        pub full_name: String,
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&Payload {
            full_name: "Jo Li".to_owned(),
            notification_enabled: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"fullName":"Jo Li","notificationEnabled":true}"#);
    }

    #[test]
    fn strict_models_reject_unknown_fields() {
        let raw = r#"{"fullName":"Jo Li","notificationEnabled":true,"extra":1}"#;
        assert!(serde_json::from_str::<Payload>(raw).is_err());

        let relaxed: Relaxed = serde_json::from_str(r#"{"fullName":"Jo Li","id":3}"#).unwrap();
        assert_eq!(relaxed.full_name, "Jo Li");
    }
}
