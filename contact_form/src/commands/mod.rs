use clap::Args;
use contact_form_models::contact_form::ContactFormFields;

pub mod interactive;
pub mod submit;
pub mod validate;

#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// First name, at least 5 characters
    #[arg(long, default_value_t)]
    pub first_name: String,
    /// Last name
    #[arg(long, default_value_t)]
    pub last_name: String,
    /// Email address
    #[arg(long, default_value_t)]
    pub email: String,
    /// Optional message
    #[arg(long, default_value_t)]
    pub message: String,
    /// Print json instead of text
    #[arg(long)]
    pub json: bool,
}

impl FieldArgs {
    pub fn fields(&self) -> ContactFormFields {
        ContactFormFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}
