use contact_form_core_validation_contracts::ContactFormValidation;
use contact_form_models::contact_form::{ContactFormFields, ContactFormSubmission};
use thiserror::Error;

/// Gate between a filled-in contact form and its submission handler.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormSubmitService: Send + Sync + 'static {
    /// Submit the form if all fields are valid.
    ///
    /// On success the submission handler has received the returned snapshot.
    /// An invalid form is rejected with all of its errors and never reaches
    /// the handler.
    fn submit(
        &self,
        fields: &ContactFormFields,
    ) -> Result<ContactFormSubmission, ContactFormSubmitError>;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("The contact form has {} invalid field(s).", .0.len())]
    Invalid(ContactFormValidation),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Receives every successfully submitted contact form.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormSubmissionHandler: Send + Sync + 'static {
    fn handle(&self, submission: &ContactFormSubmission) -> anyhow::Result<()>;
}

impl<F> ContactFormSubmissionHandler for F
where
    F: Fn(&ContactFormSubmission) -> anyhow::Result<()> + Send + Sync + 'static,
{
    fn handle(&self, submission: &ContactFormSubmission) -> anyhow::Result<()> {
        self(submission)
    }
}

#[cfg(feature = "mock")]
impl MockContactFormSubmissionHandler {
    pub fn with_handle(
        mut self,
        submission: ContactFormSubmission,
        result: anyhow::Result<()>,
    ) -> Self {
        self.expect_handle()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| result);
        self
    }
}
