use crate::api::protocol::*;
use crate::domain::case::convert;
use crate::domain::validate::validate_request;

/// Run one request through validation and conversion.
///
/// Validation problems become a 400 listing every error. A conversion fault
/// is logged and answered with the generic 500 body; its cause never reaches
/// the caller.
pub fn handle_conversion(text: &str, to_case: Option<&str>) -> ConversionResponse {
    let request = match validate_request(text, to_case) {
        Ok(r) => r,
        Err(errors) => {
            tracing::debug!("Rejected {:?} (toCase={:?}): {} error(s)", text, to_case, errors.len());
            return ConversionResponse::BadRequest(ErrorBody::validation(errors));
        }
    };

    match convert(&request.text, request.case) {
        Ok(result) => ConversionResponse::Success(ConversionBody {
            original_case: result.original_case,
            target_case: request.case,
            original_text: request.text,
            converted_text: result.converted_text,
        }),
        Err(e) => {
            tracing::error!("Conversion of {:?} to {} failed: {e:#}", request.text, request.case);
            ConversionResponse::Internal(ErrorBody::internal())
        }
    }
}
