use contact_form_core_submission_contracts::{
    ContactFormSubmissionHandler, ContactFormSubmitError, ContactFormSubmitService,
};
use contact_form_core_validation_contracts::ContactFormValidationService;
use contact_form_models::contact_form::{ContactFormFields, ContactFormSubmission};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ContactFormSubmitServiceImpl<Validation, Handler> {
    validation: Validation,
    handler: Handler,
}

impl<Validation, Handler> ContactFormSubmitServiceImpl<Validation, Handler> {
    pub fn new(validation: Validation, handler: Handler) -> Self {
        Self {
            validation,
            handler,
        }
    }
}

impl<Validation, Handler> ContactFormSubmitService
    for ContactFormSubmitServiceImpl<Validation, Handler>
where
    Validation: ContactFormValidationService,
    Handler: ContactFormSubmissionHandler,
{
    fn submit(
        &self,
        fields: &ContactFormFields,
    ) -> Result<ContactFormSubmission, ContactFormSubmitError> {
        let submission = self.validation.parse(fields).map_err(|validation| {
            let fields = validation
                .errors()
                .keys()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            warn!(?fields, "rejected contact form with invalid fields");
            ContactFormSubmitError::Invalid(validation)
        })?;

        self.handler.handle(&submission)?;

        info!(
            with_message = submission.message().is_some(),
            "accepted contact form submission"
        );

        Ok(submission)
    }
}
