//! Dataset endpoint and response decoding.
//!
//! The plugin issues one `GET` to the dataset endpoint through Zellij's
//! `web_request` host call; the answer arrives later as a `WebRequestResult`
//! event carrying the status code and raw body. This module turns that pair
//! into a validated [`Dataset`] or a single [`AtlasError`].

use crate::domain::error::{AtlasError, Result};
use crate::domain::Country;
use serde_json::Value as JsonValue;

/// Default dataset endpoint, restricted to the fields the explorer renders.
pub const DEFAULT_ENDPOINT: &str =
    "https://restcountries.com/v3.1/all?fields=name,flags,capital,population,area,continents,subregion";

/// Context key attached to the web request so its result can be recognised.
pub const REQUEST_CONTEXT_KEY: &str = "zatlas_request";

/// Context value identifying the dataset request.
pub const REQUEST_CONTEXT_DATASET: &str = "dataset";

/// Validated countries, in payload order, plus the number of refused records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub countries: Vec<Country>,
    pub rejected: usize,
}

/// Interprets the outcome of the dataset request.
///
/// # Errors
///
/// - [`AtlasError::Transport`] when the host reports status `0`
/// - [`AtlasError::Http`] for any other non-2xx status
/// - [`AtlasError::Parse`] when the body is not a JSON array
/// - [`AtlasError::EmptyDataset`] when no record survives validation
///
/// # Examples
///
/// ```
/// use zatlas::infrastructure::dataset::interpret_response;
///
/// let body = br#"[{"name":{"common":"Chad"},"flags":{"png":"chad.png"},
///     "population":17000000,"area":1284000,"continents":["Africa"]}]"#;
/// let dataset = interpret_response(200, body)?;
/// assert_eq!(dataset.countries.len(), 1);
/// assert!(interpret_response(503, b"").is_err());
/// # Ok::<(), zatlas::AtlasError>(())
/// ```
pub fn interpret_response(status: u16, body: &[u8]) -> Result<Dataset> {
    let _span = tracing::debug_span!("interpret_response", status, body_len = body.len()).entered();

    if status == 0 {
        let reason = String::from_utf8_lossy(body).trim().to_string();
        return Err(AtlasError::Transport(if reason.is_empty() {
            "no response from host".to_string()
        } else {
            reason
        }));
    }
    if !(200..300).contains(&status) {
        return Err(AtlasError::Http { status });
    }

    parse_dataset(body)
}

/// Parses a JSON array of country records, refusing malformed entries.
///
/// A record is refused when it lacks a required field or breaks one of the
/// [`Country::validate`] invariants; the rest of the payload still loads.
///
/// # Errors
///
/// Returns [`AtlasError::Parse`] if the body is not a JSON array, or
/// [`AtlasError::EmptyDataset`] if every record is refused.
pub fn parse_dataset(body: &[u8]) -> Result<Dataset> {
    let records: Vec<JsonValue> = serde_json::from_slice(body)?;
    let total = records.len();

    let mut countries = Vec::with_capacity(total);
    let mut rejected = 0;

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Country>(record) {
            Ok(country) => match country.validate() {
                Ok(()) => countries.push(country),
                Err(reason) => {
                    rejected += 1;
                    tracing::debug!(
                        index,
                        name = %country.common_name(),
                        reason = ?reason,
                        "record failed validation"
                    );
                }
            },
            Err(e) => {
                rejected += 1;
                tracing::debug!(index, error = %e, "record missing required fields");
            }
        }
    }

    if rejected > 0 {
        tracing::warn!(rejected, total, "refused malformed country records");
    }

    if countries.is_empty() {
        return Err(AtlasError::EmptyDataset { rejected });
    }

    tracing::debug!(loaded = countries.len(), rejected, "dataset parsed");
    Ok(Dataset { countries, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_COUNTRIES: &str = r#"[
        {"name":{"common":"Chad"},"flags":{"png":"td.png"},"capital":["N'Djamena"],
         "population":17000000,"area":1284000,"continents":["Africa"],"subregion":"Middle Africa"},
        {"name":{"common":"Togo"},"flags":{"png":"tg.png"},"capital":["Lomé"],
         "population":8000000,"area":56785,"continents":["Africa"],"subregion":"Western Africa"}
    ]"#;

    #[test]
    fn success_keeps_payload_order() {
        let dataset = interpret_response(200, TWO_COUNTRIES.as_bytes()).unwrap();
        let names: Vec<&str> = dataset.countries.iter().map(Country::common_name).collect();
        assert_eq!(names, ["Chad", "Togo"]);
        assert_eq!(dataset.rejected, 0);
    }

    #[test]
    fn non_success_status_is_http_error() {
        let err = interpret_response(404, TWO_COUNTRIES.as_bytes()).unwrap_err();
        assert!(matches!(err, AtlasError::Http { status: 404 }));
    }

    #[test]
    fn status_zero_is_transport_error() {
        let err = interpret_response(0, b"dns error: no such host").unwrap_err();
        assert_eq!(err.to_string(), "Dataset request failed: dns error: no such host");
    }

    #[test]
    fn non_array_body_is_parse_error() {
        let err = interpret_response(200, br#"{"status":404,"message":"Not Found"}"#).unwrap_err();
        assert!(matches!(err, AtlasError::Parse(_)));
    }

    #[test]
    fn malformed_records_are_refused_individually() {
        let body = r#"[
            {"name":{"common":"Chad"},"flags":{"png":"td.png"},"population":1,"area":1,"continents":["Africa"]},
            {"name":{"common":"NoFlag"},"population":1,"area":1,"continents":["Africa"]},
            {"name":{"common":"Nowhere"},"flags":{"png":"x.png"},"population":1,"area":1,"continents":[]}
        ]"#;
        let dataset = parse_dataset(body.as_bytes()).unwrap();
        assert_eq!(dataset.countries.len(), 1);
        assert_eq!(dataset.rejected, 2);
    }

    #[test]
    fn all_refused_is_empty_dataset() {
        let err = parse_dataset(br#"[{"name":{"common":"X"}}]"#).unwrap_err();
        assert!(matches!(err, AtlasError::EmptyDataset { rejected: 1 }));

        let err = parse_dataset(b"[]").unwrap_err();
        assert!(matches!(err, AtlasError::EmptyDataset { rejected: 0 }));
    }
}
