use contact_form_core_submission_impl::ContactFormSubmitServiceImpl;
use contact_form_core_validation_impl::ContactFormValidationServiceImpl;
use contact_form_templates_impl::TemplateServiceImpl;

use crate::view::ContactFormView;

pub type Validation = ContactFormValidationServiceImpl;
pub type Submit<Handler> = ContactFormSubmitServiceImpl<Validation, Handler>;
pub type Templates = TemplateServiceImpl;
pub type View = ContactFormView<Templates>;
