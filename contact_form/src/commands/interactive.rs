use std::io::{BufRead, Write};

use contact_form_core_submission_contracts::{ContactFormSubmitError, ContactFormSubmitService};
use contact_form_core_validation_contracts::ContactFormValidationService;
use contact_form_models::contact_form::{
    ContactFormField, ContactFormState, UnknownContactFormFieldError,
};

use super::submit::outbox;
use crate::environment::Provider;

const HELP: &str = "\
Commands:
  <field> <value>  change a field (firstName, lastName, email, message)
  <field>          clear a field
  submit           submit the form
  help             show this help
  quit             leave without submitting";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Blank,
    Set(ContactFormField, String),
    Submit,
    Help,
    Quit,
}

impl Input {
    fn parse(line: &str) -> Result<Self, UnknownContactFormFieldError> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(Self::Blank);
        }
        let (command, value) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        match command {
            "submit" => Ok(Self::Submit),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            field => Ok(Self::Set(field.parse()?, value.into())),
        }
    }
}

/// Run a form session on a line based terminal.
///
/// Changing a field shows the errors of all fields changed so far. Submitting
/// shows the errors of all fields, or the submitted values and a fresh form.
pub fn interactive(
    provider: &Provider,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let validation = provider.validation();
    let view = provider.view();
    let (handler, outbox) = outbox();
    let service = provider.submit(handler);

    let mut state = ContactFormState::new();
    write!(out, "{}", view.render_form(&state.fields, &Default::default())?)?;
    writeln!(out, "{HELP}")?;

    for line in input.lines() {
        let input = match Input::parse(&line?) {
            Ok(input) => input,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match input {
            Input::Blank => {}
            Input::Set(field, value) => {
                state.set(field, value);
                let visible = validation.validate(&state.fields).visible(state.touched());
                write!(out, "{}", view.render_form(&state.fields, &visible)?)?;
            }
            Input::Submit => {
                state.touch_all();
                match service.submit(&state.fields) {
                    Ok(_) => {
                        for submission in outbox.try_iter() {
                            write!(out, "{}", view.render_submission(&submission)?)?;
                        }
                        state.reset();
                        write!(out, "{}", view.render_form(&state.fields, &Default::default())?)?;
                    }
                    Err(ContactFormSubmitError::Invalid(errors)) => {
                        write!(out, "{}", view.render_form(&state.fields, &errors)?)?;
                    }
                    Err(ContactFormSubmitError::Other(err)) => return Err(err),
                }
            }
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => break,
        }
    }

    Ok(())
}
