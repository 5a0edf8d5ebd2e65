//! Result of one simulated request to `/`.

use crate::entropy::Entropy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Intentional 500 picked by the error-rate draw. Not a program failure.
    SyntheticError,
}

impl Outcome {
    /// Fail when the draw lands below `error_rate`.
    pub fn draw(error_rate: f64, entropy: &dyn Entropy) -> Self {
        Self::from_sample(entropy.unit(), error_rate)
    }

    pub fn from_sample(sample: f64, error_rate: f64) -> Self {
        if sample < error_rate {
            Outcome::SyntheticError
        } else {
            Outcome::Success
        }
    }

    pub fn status_code(self) -> u16 {
        match self {
            Outcome::Success => 200,
            Outcome::SyntheticError => 500,
        }
    }

    /// Value of the `status` label on `http_requests_total`.
    pub fn status_label(self) -> &'static str {
        match self {
            Outcome::Success => "200",
            Outcome::SyntheticError => "500",
        }
    }

    pub fn body(self, version: &str) -> String {
        match self {
            Outcome::Success => format!("Hello from version {version}!\n"),
            Outcome::SyntheticError => format!("Error from version {version}\n"),
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Outcome::SyntheticError)
    }
}
