use serde_json::Value;

/// A decoded response body.
///
/// The service has no fixed schema: depending on the endpoint the body is a
/// JSON object or an array of objects, and it is handed back unmodified.
pub type Payload = Value;

/// Key the service uses to report a date without a trading session.
const OFF_DAY_KEY: &str = "Error";

/// Whether `payload` is the service's "no trading on this date" answer.
///
/// The service returns HTTP 200 with an object holding an `"Error"` key
/// instead of an error status. Only the symbol information endpoints are
/// known to do this.
pub fn is_off_day_payload(payload: &Payload) -> bool {
    payload
        .as_object()
        .is_some_and(|map| map.contains_key(OFF_DAY_KEY))
}
