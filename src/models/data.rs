use serde::{Deserialize, Serialize};

/// Terminal record of one extraction run.
///
/// Every field is independently absent-capable: empty strings and a null
/// age mean "not recovered", never a defaulted or clamped value. Field
/// names serialize in camelCase to match the JSON contract consumed at
/// the process boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub success: bool,
    pub is_passport: bool,
    pub passport_number: String,
    pub full_name: String,
    pub age: Option<u32>,
    pub nationality_code: String,
    pub nationality_raw: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_with_null_age() {
        let result = ExtractionResult {
            success: true,
            is_passport: true,
            passport_number: "E12345678".to_string(),
            full_name: "JOHN DOE".to_string(),
            age: None,
            nationality_code: "CN".to_string(),
            nationality_raw: "CHN".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["passportNumber"], "E12345678");
        assert_eq!(value["isPassport"], true);
        assert_eq!(value["fullName"], "JOHN DOE");
        assert!(value["age"].is_null());
        assert_eq!(value["nationalityCode"], "CN");
        assert_eq!(value["nationalityRaw"], "CHN");
    }

    #[test]
    fn test_round_trips_through_json() {
        let result = ExtractionResult {
            age: Some(34),
            ..Default::default()
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
