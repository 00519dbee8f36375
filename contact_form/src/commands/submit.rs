use std::{
    io::Write,
    sync::mpsc::{self, Receiver},
};

use anyhow::anyhow;
use contact_form_core_submission_contracts::{
    ContactFormSubmissionHandler, ContactFormSubmitError, ContactFormSubmitService,
};
use contact_form_models::contact_form::ContactFormSubmission;

use super::FieldArgs;
use crate::environment::Provider;

pub fn submit(provider: &Provider, args: FieldArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let fields = args.fields();
    let (handler, outbox) = outbox();
    let service = provider.submit(handler);

    match service.submit(&fields) {
        Ok(_) => {
            for submission in outbox.try_iter() {
                if args.json {
                    serde_json::to_writer_pretty(&mut *out, &submission)?;
                    writeln!(out)?;
                } else {
                    write!(out, "{}", provider.view().render_submission(&submission)?)?;
                }
            }
            Ok(())
        }
        Err(ContactFormSubmitError::Invalid(validation)) => {
            if args.json {
                serde_json::to_writer_pretty(&mut *out, &validation)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", provider.view().render_form(&fields, &validation)?)?;
            }
            Err(ContactFormSubmitError::Invalid(validation).into())
        }
        Err(ContactFormSubmitError::Other(err)) => Err(err),
    }
}

/// In-memory submission handler that queues every accepted submission.
pub fn outbox() -> (
    impl ContactFormSubmissionHandler,
    Receiver<ContactFormSubmission>,
) {
    let (tx, rx) = mpsc::channel();
    let handler = move |submission: &ContactFormSubmission| -> anyhow::Result<()> {
        tx.send(submission.clone())
            .map_err(|_| anyhow!("The submission outbox has been closed"))
    };
    (handler, rx)
}
