//! Demo contact form. Nothing is sent; the page only acknowledges input.

const ACCEPTED_COLOR: &str = "#ffc107";
const REJECTED_COLOR: &str = "red";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub request_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Input accepted; the form should be reset.
    Accepted(String),
    Rejected(String),
}

impl FormOutcome {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted(msg) | Self::Rejected(msg) => msg,
        }
    }

    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Accepted(_) => ACCEPTED_COLOR,
            Self::Rejected(_) => REJECTED_COLOR,
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

impl ContactForm {
    #[must_use]
    pub fn submit(&self) -> FormOutcome {
        let name = self.name.trim();
        let request_type = self.request_type.trim();
        if name.is_empty() || request_type.is_empty() {
            return FormOutcome::Rejected("Please fill in all fields!".to_string());
        }
        FormOutcome::Accepted(format!(
            "Thank you, {name}! Your '{request_type}' request has been received. We will contact you soon. (demo mode)"
        ))
    }
}
