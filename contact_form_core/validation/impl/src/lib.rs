use contact_form_core_validation_contracts::{
    ContactFormFieldError, ContactFormValidation, ContactFormValidationService,
};
use contact_form_models::contact_form::{
    ContactFormEmail, ContactFormFields, ContactFormFirstName, ContactFormLastName,
    ContactFormSubmission,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormValidationServiceImpl;

impl ContactFormValidationService for ContactFormValidationServiceImpl {
    fn validate(&self, fields: &ContactFormFields) -> ContactFormValidation {
        let validation = self.parse(fields).err().unwrap_or_default();
        debug!(errors = validation.len(), "validated contact form");
        validation
    }

    fn parse(
        &self,
        fields: &ContactFormFields,
    ) -> Result<ContactFormSubmission, ContactFormValidation> {
        let first_name = ContactFormFirstName::try_new(fields.first_name.clone())
            .map_err(|_| ContactFormFieldError::FirstNameTooShort);
        let last_name = ContactFormLastName::try_new(fields.last_name.clone())
            .map_err(|_| ContactFormFieldError::LastNameRequired);
        let email = ContactFormEmail::try_new(fields.email.clone())
            .map_err(|_| ContactFormFieldError::EmailInvalid);

        match (first_name, last_name, email) {
            (Ok(first_name), Ok(last_name), Ok(email)) => Ok(ContactFormSubmission {
                first_name,
                last_name,
                email,
                message: fields.message.clone().into(),
            }),
            (first_name, last_name, email) => Err([first_name.err(), last_name.err(), email.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use contact_form_demo::{
        COMPLETE, COMPLETE_SUBMISSION, EMPTY, INVALID_EMAIL_ONLY, MISSING_EMAIL,
        MISSING_LAST_NAME, SHORT_FIRST_NAME_ONLY, WITHOUT_MESSAGE, WITHOUT_MESSAGE_SUBMISSION,
    };
    use contact_form_models::contact_form::ContactFormField;
    use contact_form_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_first_name() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.validate(&SHORT_FIRST_NAME_ONLY);

        // Assert
        assert_eq!(
            result.error(ContactFormField::FirstName),
            Some(ContactFormFieldError::FirstNameTooShort)
        );
        assert_eq!(
            result.errors()[&ContactFormField::FirstName].to_string(),
            "firstName must have at least 5 characters."
        );
        assert_eq!(
            result.error(ContactFormField::LastName),
            Some(ContactFormFieldError::LastNameRequired)
        );
        assert_eq!(
            result.error(ContactFormField::Email),
            Some(ContactFormFieldError::EmailInvalid)
        );
    }

    #[test]
    fn whitespace_first_name() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;
        let fields = ContactFormFields {
            first_name: "  abc   ".into(),
            ..WITHOUT_MESSAGE.clone()
        };

        // Act
        let result = sut.validate(&fields);

        // Assert
        assert_eq!(
            result,
            [ContactFormFieldError::FirstNameTooShort]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn all_empty() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.validate(&EMPTY);

        // Assert
        assert!(!result.is_valid());
        assert_eq!(result.len(), 3);
        assert_eq!(
            result.errors().keys().copied().collect::<Vec<_>>(),
            [
                ContactFormField::FirstName,
                ContactFormField::LastName,
                ContactFormField::Email
            ]
        );
    }

    #[test]
    fn missing_email() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.validate(&MISSING_EMAIL);

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.errors()[&ContactFormField::Email].to_string(),
            "email must be a valid email address."
        );
    }

    #[test]
    fn invalid_email() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.validate(&INVALID_EMAIL_ONLY);

        // Assert
        assert_eq!(
            result.error(ContactFormField::Email),
            Some(ContactFormFieldError::EmailInvalid)
        );
    }

    #[test]
    fn missing_last_name() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.validate(&MISSING_LAST_NAME);

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.errors()[&ContactFormField::LastName].to_string(),
            "lastName is a required field."
        );
    }

    #[test]
    fn ok_without_message() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let validation = sut.validate(&WITHOUT_MESSAGE);
        let result = sut.parse(&WITHOUT_MESSAGE);

        // Assert
        assert!(validation.is_valid());
        assert!(validation.is_empty());
        let submission = result.unwrap();
        assert_eq!(submission, *WITHOUT_MESSAGE_SUBMISSION);
        assert_eq!(submission.message(), None);
    }

    #[test]
    fn ok_complete() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.parse(&COMPLETE);

        // Assert
        let submission = result.unwrap();
        assert_eq!(submission, *COMPLETE_SUBMISSION);
        assert_eq!(submission.into_fields(), *COMPLETE);
    }

    #[test]
    fn parse_invalid() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.parse(&MISSING_LAST_NAME);

        // Assert
        assert_matches!(result, Err(validation) if validation.len() == 1);
    }

    #[test]
    fn pure_and_consistent() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;
        let inputs = [
            &*EMPTY,
            &*SHORT_FIRST_NAME_ONLY,
            &*MISSING_EMAIL,
            &*INVALID_EMAIL_ONLY,
            &*MISSING_LAST_NAME,
            &*WITHOUT_MESSAGE,
            &*COMPLETE,
        ];

        for fields in inputs {
            let before = fields.clone();

            // Act
            let first = sut.validate(fields);
            let second = sut.validate(fields);

            // Assert
            assert_eq!(first, second);
            assert_eq!(first.is_valid(), first.errors().is_empty());
            assert_eq!(first.is_valid(), sut.parse(fields).is_ok());
            assert_eq!(*fields, before);
        }
    }
}
