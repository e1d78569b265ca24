use super::case::Case;

pub const TEXT_REQUIRED: &str =
    "Text to convert is required. Correct request is: \"/<TEXT_TO_CONVERT>?toCase=<CASE_NAME>\".";
pub const CASE_REQUIRED: &str =
    "\"toCase\" query param is required. Correct request is: \"/<TEXT_TO_CONVERT>?toCase=<CASE_NAME>\".";

/// Lists every name in [`Case::ALL`], in canonical order.
pub fn unsupported_case_message() -> String {
    let names: Vec<&str> = Case::ALL.iter().map(|c| c.as_str()).collect();
    format!("This case is not supported. Available cases: {}.", names.join(", "))
}

/// A client-input problem found before conversion is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A request that passed validation. Only built by [`validate_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub text: String,
    pub case: Case,
}

/// Collect every problem with the inputs, in detection order.
/// An empty `case` counts as missing.
pub fn validate(text: &str, case: Option<&str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let case = case.filter(|c| !c.is_empty());

    if text.is_empty() {
        errors.push(ValidationError::new(TEXT_REQUIRED));
    }

    match case {
        None => errors.push(ValidationError::new(CASE_REQUIRED)),
        Some(c) if c.parse::<Case>().is_err() => {
            errors.push(ValidationError::new(unsupported_case_message()))
        }
        Some(_) => {}
    }

    errors
}

/// Validate and, when there are no errors, return the typed request.
pub fn validate_request(
    text: &str,
    case: Option<&str>,
) -> Result<ConversionRequest, Vec<ValidationError>> {
    let errors = validate(text, case);
    if !errors.is_empty() {
        return Err(errors);
    }

    match case.map(str::parse::<Case>) {
        Some(Ok(case)) => Ok(ConversionRequest {
            text: text.to_string(),
            case,
        }),
        _ => Err(vec![ValidationError::new(unsupported_case_message())]),
    }
}
