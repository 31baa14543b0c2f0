//! Validation helpers for identifiers arriving in request paths.

use mongodb::bson::oid::ObjectId;
use validator::ValidationError;

/// Validates that an identifier string is a well-formed MongoDB ObjectId
/// (24 hexadecimal characters) and parses it.
///
/// Runs before any store access so malformed identifiers never reach the
/// database.
///
/// # Examples
///
/// ```ignore
/// parse_object_id("64f1c0ffee0123456789abcd") // Ok
/// parse_object_id("not-an-id")                // Err - bad charset
/// parse_object_id("64f1c0ffee")               // Err - too short
/// ```
pub fn parse_object_id(id: &str) -> Result<ObjectId, ValidationError> {
    ObjectId::parse_str(id).map_err(|_| {
        let mut err = ValidationError::new("object_id_format");
        err.message = Some("identifier must be a 24-character hexadecimal ObjectId".into());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        assert!(parse_object_id("64f1c0ffee0123456789abcd").is_ok());
        assert!(parse_object_id("000000000000000000000000").is_ok());
        assert!(parse_object_id("ffffffffffffffffffffffff").is_ok());
    }

    #[test]
    fn test_parse_object_id_invalid_length() {
        assert!(parse_object_id("64f1c0ffee0123456789abc").is_err()); // too short
        assert!(parse_object_id("64f1c0ffee0123456789abcde").is_err()); // too long
        assert!(parse_object_id("").is_err()); // empty
    }

    #[test]
    fn test_parse_object_id_invalid_format() {
        assert!(parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").is_err()); // invalid hex
        assert!(parse_object_id("64f1c0ffee 123456789abcd").is_err()); // space
        assert!(parse_object_id("not-an-object-id-at-all!").is_err());
    }

    #[test]
    fn test_parse_object_id_round_trips_to_hex() {
        let id = parse_object_id("64f1c0ffee0123456789abcd").unwrap();
        assert_eq!(id.to_hex(), "64f1c0ffee0123456789abcd");
    }
}
