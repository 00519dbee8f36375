use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactFormTemplate("contact_form.txt"),
    ContactFormSubmissionTemplate("contact_form_submission.txt"),
}

/// The form as the user currently sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplate {
    pub title: String,
    pub fields: Vec<ContactFormTemplateField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplateField {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub error: Option<String>,
}

/// A submitted form. Fields with an empty value are not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormSubmissionTemplate {
    pub title: String,
    pub fields: Vec<ContactFormSubmissionTemplateField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormSubmissionTemplateField {
    pub label: String,
    pub value: String,
}
