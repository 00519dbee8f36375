use std::io::Write;

use anyhow::ensure;
use contact_form_core_validation_contracts::ContactFormValidationService;

use super::FieldArgs;
use crate::environment::Provider;

pub fn validate(provider: &Provider, args: FieldArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let fields = args.fields();
    let validation = provider.validation().validate(&fields);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &validation)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", provider.view().render_form(&fields, &validation)?)?;
    }

    ensure!(
        validation.is_valid(),
        "The contact form has {} invalid field(s)",
        validation.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use contact_form_demo::{FIRST_NAME, LAST_NAME, SHORT_FIRST_NAME};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::environment::tests::provider;

    #[test]
    fn valid_json() {
        // Arrange
        let args = FieldArgs {
            first_name: FIRST_NAME.into(),
            last_name: LAST_NAME.into(),
            email: "zhangjiec@gmail.com".into(),
            json: true,
            ..Default::default()
        };
        let mut out = Vec::new();

        // Act
        let result = validate(&provider(), args, &mut out);

        // Assert
        result.unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&out).unwrap(),
            json!({"is_valid": true, "errors": {}})
        );
    }

    #[test]
    fn invalid_json() {
        // Arrange
        let args = FieldArgs {
            first_name: SHORT_FIRST_NAME.into(),
            json: true,
            ..Default::default()
        };
        let mut out = Vec::new();

        // Act
        let result = validate(&provider(), args, &mut out);

        // Assert
        result.unwrap_err();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&out).unwrap(),
            json!({
                "is_valid": false,
                "errors": {
                    "firstName": "firstName must have at least 5 characters.",
                    "lastName": "lastName is a required field.",
                    "email": "email must be a valid email address.",
                },
            })
        );
    }

    #[test]
    fn invalid_text() {
        // Arrange
        let args = FieldArgs {
            first_name: FIRST_NAME.into(),
            last_name: LAST_NAME.into(),
            ..Default::default()
        };
        let mut out = Vec::new();

        // Act
        let result = validate(&provider(), args, &mut out);

        // Assert
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("1 invalid field(s)"));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Contact Form"));
        assert!(output.contains("email must be a valid email address."));
        assert!(!output.contains("lastName is a required field."));
    }
}
