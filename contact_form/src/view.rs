use contact_form_config::FormConfig;
use contact_form_core_validation_contracts::ContactFormValidation;
use contact_form_models::contact_form::{ContactFormField, ContactFormFields, ContactFormSubmission};
use contact_form_templates_contracts::{
    ContactFormSubmissionTemplate, ContactFormSubmissionTemplateField, ContactFormTemplate,
    ContactFormTemplateField, TemplateService,
};

/// Turns form state into text using the configured labels and placeholders.
#[derive(Debug, Clone)]
pub struct ContactFormView<Templates> {
    templates: Templates,
    form: FormConfig,
}

impl<Templates: TemplateService> ContactFormView<Templates> {
    pub fn new(templates: Templates, form: FormConfig) -> Self {
        Self { templates, form }
    }

    /// Render the form with every error contained in `validation`.
    pub fn render_form(
        &self,
        fields: &ContactFormFields,
        validation: &ContactFormValidation,
    ) -> anyhow::Result<String> {
        self.templates.render(&self.form_template(fields, validation))
    }

    pub fn render_submission(&self, submission: &ContactFormSubmission) -> anyhow::Result<String> {
        self.templates
            .render(&self.submission_template(submission))
    }

    fn form_template(
        &self,
        fields: &ContactFormFields,
        validation: &ContactFormValidation,
    ) -> ContactFormTemplate {
        ContactFormTemplate {
            title: self.form.title.clone(),
            fields: ContactFormField::ALL
                .into_iter()
                .map(|field| {
                    let config = self.form.field(field);
                    ContactFormTemplateField {
                        label: config.label.clone(),
                        placeholder: config.placeholder.clone(),
                        value: fields.get(field).into(),
                        error: validation.error(field).map(|err| err.to_string()),
                    }
                })
                .collect(),
        }
    }

    fn submission_template(&self, submission: &ContactFormSubmission) -> ContactFormSubmissionTemplate {
        let fields = submission.to_fields();
        ContactFormSubmissionTemplate {
            title: self.form.title.clone(),
            fields: ContactFormField::ALL
                .into_iter()
                .map(|field| ContactFormSubmissionTemplateField {
                    label: self.form.field(field).label.clone(),
                    value: fields.get(field).into(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use contact_form_core_validation_contracts::ContactFormFieldError;
    use contact_form_demo::{SHORT_FIRST_NAME_ONLY, WITHOUT_MESSAGE_SUBMISSION};
    use contact_form_templates_contracts::MockTemplateService;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::environment::tests::provider;

    #[test]
    fn form_template() {
        // Arrange
        let validation = [ContactFormFieldError::FirstNameTooShort]
            .into_iter()
            .collect::<ContactFormValidation>();

        let expected = ContactFormTemplate {
            title: "Contact Form".into(),
            fields: vec![
                ContactFormTemplateField {
                    label: "First Name".into(),
                    placeholder: "Edd".into(),
                    value: "dwd".into(),
                    error: Some("firstName must have at least 5 characters.".into()),
                },
                ContactFormTemplateField {
                    label: "Last Name".into(),
                    placeholder: "Burke".into(),
                    value: "".into(),
                    error: None,
                },
                ContactFormTemplateField {
                    label: "Email".into(),
                    placeholder: "bluebill1049@hotmail.com".into(),
                    value: "".into(),
                    error: None,
                },
                ContactFormTemplateField {
                    label: "Message".into(),
                    placeholder: "Your message".into(),
                    value: "".into(),
                    error: None,
                },
            ],
        };

        let templates = MockTemplateService::new().with_render(expected, "rendered".into());

        let sut = ContactFormView::new(templates, provider().config().form.clone());

        // Act
        let result = sut.render_form(&SHORT_FIRST_NAME_ONLY, &validation);

        // Assert
        assert_eq!(result.unwrap(), "rendered");
    }

    #[test]
    fn submission_template() {
        // Arrange
        let expected = ContactFormSubmissionTemplate {
            title: "Contact Form".into(),
            fields: vec![
                ContactFormSubmissionTemplateField {
                    label: "First Name".into(),
                    value: "adfewfwefe".into(),
                },
                ContactFormSubmissionTemplateField {
                    label: "Last Name".into(),
                    value: "sfew".into(),
                },
                ContactFormSubmissionTemplateField {
                    label: "Email".into(),
                    value: "zhangjiec@gmail.com".into(),
                },
                ContactFormSubmissionTemplateField {
                    label: "Message".into(),
                    value: "".into(),
                },
            ],
        };

        let templates = MockTemplateService::new().with_render(expected, "rendered".into());

        let sut = ContactFormView::new(templates, provider().config().form.clone());

        // Act
        let result = sut.render_submission(&WITHOUT_MESSAGE_SUBMISSION);

        // Assert
        assert_eq!(result.unwrap(), "rendered");
    }

    #[test]
    fn rendered_form_shows_header_and_errors() {
        // Arrange
        let sut = provider().view();
        let validation = [
            ContactFormFieldError::FirstNameTooShort,
            ContactFormFieldError::LastNameRequired,
            ContactFormFieldError::EmailInvalid,
        ]
        .into_iter()
        .collect::<ContactFormValidation>();

        // Act
        let result = sut.render_form(&SHORT_FIRST_NAME_ONLY, &validation);

        // Assert
        let output = result.unwrap();
        assert!(output.contains("Contact Form"));
        for err in validation.errors().values() {
            assert_eq!(output.matches(&err.to_string()).count(), 1);
        }
    }
}
