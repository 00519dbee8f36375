use std::sync::LazyLock;

use contact_form_models::contact_form::{ContactFormFields, ContactFormSubmission};

pub const FIRST_NAME: &str = "adfewfwefe";
pub const SHORT_FIRST_NAME: &str = "dwd";
pub const LAST_NAME: &str = "sfew";
pub const EMAIL: &str = "zhangjiec@gmail.com";
pub const INVALID_EMAIL: &str = "ssssss";
pub const MESSAGE: &str = "hahahahahaah";

pub static EMPTY: LazyLock<ContactFormFields> = LazyLock::new(ContactFormFields::default);

pub static SHORT_FIRST_NAME_ONLY: LazyLock<ContactFormFields> =
    LazyLock::new(|| ContactFormFields {
        first_name: SHORT_FIRST_NAME.into(),
        ..Default::default()
    });

pub static MISSING_EMAIL: LazyLock<ContactFormFields> = LazyLock::new(|| ContactFormFields {
    first_name: FIRST_NAME.into(),
    last_name: LAST_NAME.into(),
    ..Default::default()
});

pub static INVALID_EMAIL_ONLY: LazyLock<ContactFormFields> =
    LazyLock::new(|| ContactFormFields {
        email: INVALID_EMAIL.into(),
        ..Default::default()
    });

pub static MISSING_LAST_NAME: LazyLock<ContactFormFields> = LazyLock::new(|| ContactFormFields {
    first_name: FIRST_NAME.into(),
    email: EMAIL.into(),
    ..Default::default()
});

pub static WITHOUT_MESSAGE: LazyLock<ContactFormFields> = LazyLock::new(|| ContactFormFields {
    first_name: FIRST_NAME.into(),
    last_name: LAST_NAME.into(),
    email: EMAIL.into(),
    message: String::new(),
});

pub static COMPLETE: LazyLock<ContactFormFields> = LazyLock::new(|| ContactFormFields {
    message: MESSAGE.into(),
    ..WITHOUT_MESSAGE.clone()
});

pub static WITHOUT_MESSAGE_SUBMISSION: LazyLock<ContactFormSubmission> =
    LazyLock::new(|| submission(&WITHOUT_MESSAGE));

pub static COMPLETE_SUBMISSION: LazyLock<ContactFormSubmission> =
    LazyLock::new(|| submission(&COMPLETE));

fn submission(fields: &ContactFormFields) -> ContactFormSubmission {
    ContactFormSubmission {
        first_name: fields.first_name.clone().try_into().unwrap(),
        last_name: fields.last_name.clone().try_into().unwrap(),
        email: fields.email.clone().try_into().unwrap(),
        message: fields.message.clone().into(),
    }
}
