// API models and data fetching for the IoT traffic-signal service
//
// API Endpoint:
// - Signal data: https://prayalabs.com/rest/api/iot
//
// Optional relay (bypasses browser cross-origin rules, forwards the body verbatim):
// - https://api.allorigins.win/raw?url=<target>
//
// Expected body, keyed by direction:
//   { "east": { "signal": "green", "duration": "1000", "status": "on" }, ... }

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;
use reqwest::blocking;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

// ============================================================================
// Data Structures
// ============================================================================

/// The four sensors the dashboard always shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// Fixed order used when synthesizing missing entries.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
            Direction::South => "south",
        }
    }

    /// Case-insensitive lookup. Returns `None` for anything that is not one
    /// of the four cardinal sensors.
    pub fn parse(name: &str) -> Option<Direction> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sensor reading. `duration` is in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub direction: String,
    pub signal: String,
    pub duration: u64,
    pub status: String,
}

impl SignalRecord {
    /// Default entry used for a direction the API did not report.
    pub fn placeholder(direction: Direction) -> Self {
        SignalRecord {
            direction: direction.as_str().to_string(),
            signal: ISMModels::DEFAULT_SIGNAL.to_string(),
            duration: ISMModels::DEFAULT_DURATION_MS,
            status: ISMModels::DEFAULT_STATUS.to_string(),
        }
    }

    pub fn required_direction(&self) -> Option<Direction> {
        Direction::parse(&self.direction)
    }

    pub fn signal_color(&self) -> SignalColor {
        SignalColor::from_signal(&self.signal)
    }

    pub fn status_level(&self) -> StatusLevel {
        StatusLevel::from_status(&self.status)
    }
}

// ============================================================================
// Color tables (shared by the terminal and GUI views)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalColor {
    Green,
    Yellow,
    Red,
    /// "0" or anything unrecognised.
    Unknown,
}

impl SignalColor {
    pub fn from_signal(signal: &str) -> Self {
        match signal.trim().to_lowercase().as_str() {
            "green" => SignalColor::Green,
            "yellow" => SignalColor::Yellow,
            "red" => SignalColor::Red,
            _ => SignalColor::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    On,
    Warning,
    Off,
}

impl StatusLevel {
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "on" => StatusLevel::On,
            "warning" => StatusLevel::Warning,
            _ => StatusLevel::Off,
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum ISMError {
    NetworkError(String),
    HttpStatus(u16, String),
    ParseError(String),
    ConfigError(String),
}

impl std::fmt::Display for ISMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ISMError::NetworkError(e) => write!(f, "Network error: {}", e),
            ISMError::HttpStatus(code, reason) => {
                write!(f, "Failed to fetch IoT data: {} {}", code, reason)
            }
            ISMError::ParseError(e) => write!(f, "Parse error: {}", e),
            ISMError::ConfigError(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for ISMError {}

pub type Result<T> = std::result::Result<T, ISMError>;

/// Rejection reasons for the "update all durations" input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationInputError {
    Empty,
    NotANumber,
    Negative,
    NotWholeNumber,
}

impl std::fmt::Display for DurationInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            DurationInputError::Empty => "Please enter a duration value",
            DurationInputError::NotANumber => "Please enter a valid number",
            DurationInputError::Negative => "Duration cannot be negative",
            DurationInputError::NotWholeNumber => {
                "Duration must be a whole number of milliseconds"
            }
        };
        f.write_str(message)
    }
}

impl std::error::Error for DurationInputError {}

lazy_static! {
    static ref WHOLE_NUMBER: Regex = Regex::new(r"^\d+$").expect("whole-number pattern compiles");
}

// ============================================================================
// Data sources
// ============================================================================

/// Anything that can hand back the raw, un-normalized API body.
pub trait SignalSource: Send + Sync {
    fn fetch_raw(&self) -> Result<Value>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String {
        "signal source".to_string()
    }
}

/// Single blocking GET against the (possibly relayed) endpoint. No retries.
pub struct HttpSignalSource {
    client: blocking::Client,
    url: Url,
}

impl HttpSignalSource {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = blocking::Client::builder()
            .user_agent(concat!("ISM/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ISMError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(url, client))
    }

    pub fn with_client(url: Url, client: blocking::Client) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl SignalSource for HttpSignalSource {
    fn fetch_raw(&self) -> Result<Value> {
        log::debug!("GET {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|e| ISMError::NetworkError(format!("Failed to fetch signal data: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ISMError::HttpStatus(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown").to_string(),
            ));
        }

        let body = response
            .text()
            .map_err(|e| ISMError::NetworkError(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| ISMError::ParseError(format!("Invalid JSON response: {}", e)))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

// ============================================================================
// Main Implementation
// ============================================================================

pub struct ISMModels;

impl ISMModels {
    pub const DEFAULT_SIGNAL: &'static str = "0";
    pub const DEFAULT_DURATION_MS: u64 = 1000;
    pub const DEFAULT_STATUS: &'static str = "off";

    /// Four placeholder records, one per direction, in `Direction::ALL` order.
    pub fn default_records() -> Vec<SignalRecord> {
        Direction::ALL
            .iter()
            .map(|d| SignalRecord::placeholder(*d))
            .collect()
    }

    /// Fetch and normalize. Failures come back as a typed error; the caller
    /// decides whether to fall back (see [`ISMModels::fetch_or_default`]).
    pub fn fetch_signal_data(source: &dyn SignalSource) -> Result<Vec<SignalRecord>> {
        let raw = source.fetch_raw()?;
        Self::normalize_response(&raw)
    }

    /// Never empty: any fetch or parse failure yields the four defaults.
    pub fn fetch_or_default(source: &dyn SignalSource) -> Vec<SignalRecord> {
        match Self::fetch_signal_data(source) {
            Ok(records) => {
                log::info!("Loaded {} signal records from {}", records.len(), source.describe());
                records
            }
            Err(e) => {
                log::error!("Error fetching IoT data from {}: {}", source.describe(), e);
                Self::default_records()
            }
        }
    }

    /// Reshape the raw API object into a complete record set.
    ///
    /// Entries keep their original key order, lower-cased directions are
    /// deduplicated first-wins, and every cardinal direction the body did not
    /// mention is appended as a placeholder in `Direction::ALL` order.
    pub fn normalize_response(raw: &Value) -> Result<Vec<SignalRecord>> {
        let entries = raw.as_object().ok_or_else(|| {
            ISMError::ParseError(format!(
                "Expected a JSON object keyed by direction, got {}",
                Self::json_kind(raw)
            ))
        })?;

        let mut records: Vec<SignalRecord> = Vec::with_capacity(entries.len().max(Direction::ALL.len()));

        for (key, value) in entries {
            let candidate = Self::candidate_from_entry(key, value);
            if records.iter().any(|r| r.direction == candidate.direction) {
                log::debug!("Dropping duplicate direction '{}'", key);
                continue;
            }
            records.push(candidate);
        }

        for direction in Direction::ALL {
            if !records.iter().any(|r| r.direction == direction.as_str()) {
                log::debug!("No data for '{}', using placeholder", direction);
                records.push(SignalRecord::placeholder(direction));
            }
        }

        Ok(records)
    }

    /// Replace every duration, keep everything else.
    pub fn bulk_update_durations(records: &[SignalRecord], duration: u64) -> Vec<SignalRecord> {
        records
            .iter()
            .map(|r| SignalRecord {
                duration,
                ..r.clone()
            })
            .collect()
    }

    /// Validate what the user typed into the duration field.
    pub fn parse_duration_input(input: &str) -> std::result::Result<u64, DurationInputError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DurationInputError::Empty);
        }

        let number: f64 = input.parse().map_err(|_| DurationInputError::NotANumber)?;
        if !number.is_finite() {
            return Err(DurationInputError::NotANumber);
        }
        if number < 0.0 {
            return Err(DurationInputError::Negative);
        }
        if !WHOLE_NUMBER.is_match(input) {
            return Err(DurationInputError::NotWholeNumber);
        }

        input.parse::<u64>().map_err(|_| DurationInputError::NotANumber)
    }

    /// Raw `duration` as sent by the API. Strings use leading-integer
    /// semantics (`"250ms"` is 250). `None` means unusable.
    pub fn parse_raw_duration(value: &Value) -> Option<u64> {
        match value {
            Value::String(s) => Self::parse_integer_prefix(s),
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && *f < u64::MAX as f64)
                    .map(|f| f.trunc() as u64)
            }),
            _ => None,
        }
    }

    fn candidate_from_entry(key: &str, value: &Value) -> SignalRecord {
        let direction = key.to_lowercase();

        let duration = Self::parse_raw_duration(&value["duration"]).unwrap_or_else(|| {
            log::warn!(
                "Unusable duration {} for '{}', using {} ms",
                value["duration"],
                direction,
                Self::DEFAULT_DURATION_MS
            );
            Self::DEFAULT_DURATION_MS
        });

        SignalRecord {
            signal: Self::text_field(&value["signal"])
                .unwrap_or_else(|| Self::DEFAULT_SIGNAL.to_string()),
            status: Self::text_field(&value["status"])
                .unwrap_or_else(|| Self::DEFAULT_STATUS.to_string()),
            duration,
            direction,
        }
    }

    fn text_field(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn parse_integer_prefix(text: &str) -> Option<u64> {
        let trimmed = text.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits_end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        unsigned[..digits_end].parse::<u64>().ok()
    }

    fn json_kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    struct StaticSource(Value);

    impl SignalSource for StaticSource {
        fn fetch_raw(&self) -> Result<Value> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl SignalSource for FailingSource {
        fn fetch_raw(&self) -> Result<Value> {
            Err(ISMError::NetworkError("connection reset".to_string()))
        }
    }

    fn record(direction: &str, signal: &str, duration: u64, status: &str) -> SignalRecord {
        SignalRecord {
            direction: direction.to_string(),
            signal: signal.to_string(),
            duration,
            status: status.to_string(),
        }
    }

    fn count_direction(records: &[SignalRecord], direction: Direction) -> usize {
        records
            .iter()
            .filter(|r| r.required_direction() == Some(direction))
            .count()
    }

    /// Serves exactly one canned HTTP response on a loopback port.
    fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        Url::parse(&format!("http://{}/rest/api/iot", addr)).unwrap()
    }

    fn local_source(url: Url) -> HttpSignalSource {
        let client = blocking::Client::builder().no_proxy().build().unwrap();
        HttpSignalSource::with_client(url, client)
    }

    #[test]
    fn test_normalize_complete_response() {
        let raw = json!({
            "east": { "signal": "green", "duration": "1000", "status": "on" },
            "west": { "signal": "red", "duration": "2000", "status": "off" },
            "north": { "signal": "yellow", "duration": "500", "status": "warning" },
            "south": { "signal": "green", "duration": "1500", "status": "on" }
        });

        let records = ISMModels::normalize_response(&raw).unwrap();

        assert_eq!(
            records,
            vec![
                record("east", "green", 1000, "on"),
                record("west", "red", 2000, "off"),
                record("north", "yellow", 500, "warning"),
                record("south", "green", 1500, "on"),
            ]
        );
    }

    #[test]
    fn test_normalize_empty_object_yields_defaults() {
        let records = ISMModels::normalize_response(&json!({})).unwrap();
        assert_eq!(records, ISMModels::default_records());
    }

    #[test]
    fn test_normalize_always_one_per_direction() {
        let inputs = vec![
            json!({}),
            json!({ "EAST": { "signal": "red", "duration": "1", "status": "on" } }),
            json!({ "south": {}, "South": {}, "SOUTH": {} }),
            json!({ "north": { "signal": "green" }, "northeast": { "signal": "red" } }),
        ];

        for raw in inputs {
            let records = ISMModels::normalize_response(&raw).unwrap();
            for direction in Direction::ALL {
                assert_eq!(count_direction(&records, direction), 1, "{} in {}", direction, raw);
            }
        }
    }

    #[test]
    fn test_normalize_deduplicates_case_insensitively() {
        let raw = json!({
            "East": { "signal": "green", "duration": "100", "status": "on" },
            "east": { "signal": "red", "duration": "900", "status": "off" }
        });

        let records = ISMModels::normalize_response(&raw).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0], record("east", "green", 100, "on"));
        assert_eq!(count_direction(&records, Direction::East), 1);
    }

    #[test]
    fn test_normalize_fills_missing_directions() {
        let raw = json!({ "east": { "signal": "green", "duration": "750", "status": "on" } });

        let records = ISMModels::normalize_response(&raw).unwrap();

        assert_eq!(
            records,
            vec![
                record("east", "green", 750, "on"),
                record("west", "0", 1000, "off"),
                record("north", "0", 1000, "off"),
                record("south", "0", 1000, "off"),
            ]
        );
    }

    #[test]
    fn test_normalize_keeps_original_key_order() {
        let raw = json!({
            "south": { "signal": "red", "duration": "1", "status": "on" },
            "north": { "signal": "red", "duration": "2", "status": "on" }
        });

        let records = ISMModels::normalize_response(&raw).unwrap();
        let order: Vec<&str> = records.iter().map(|r| r.direction.as_str()).collect();

        assert_eq!(order, vec!["south", "north", "east", "west"]);
    }

    #[test]
    fn test_normalize_keeps_signal_and_status_verbatim() {
        let raw = json!({ "west": { "signal": "Flashing-Amber", "duration": "10", "status": "MAINTENANCE" } });

        let records = ISMModels::normalize_response(&raw).unwrap();

        assert_eq!(records[0], record("west", "Flashing-Amber", 10, "MAINTENANCE"));
    }

    #[test]
    fn test_normalize_rejects_non_object() {
        assert!(matches!(
            ISMModels::normalize_response(&json!([1, 2, 3])),
            Err(ISMError::ParseError(_))
        ));
        assert!(matches!(
            ISMModels::normalize_response(&Value::Null),
            Err(ISMError::ParseError(_))
        ));
    }

    #[test]
    fn test_normalize_missing_fields_use_defaults() {
        let raw = json!({ "north": { "duration": 42 }, "east": "green" });

        let records = ISMModels::normalize_response(&raw).unwrap();

        assert_eq!(records[0], record("north", "0", 42, "off"));
        assert_eq!(records[1], record("east", "0", 1000, "off"));
    }

    #[test]
    fn test_parse_raw_duration() {
        assert_eq!(ISMModels::parse_raw_duration(&json!("250")), Some(250));
        assert_eq!(ISMModels::parse_raw_duration(&json!("  250ms")), Some(250));
        assert_eq!(ISMModels::parse_raw_duration(&json!("+30")), Some(30));
        assert_eq!(ISMModels::parse_raw_duration(&json!(1200)), Some(1200));
        assert_eq!(ISMModels::parse_raw_duration(&json!(12.9)), Some(12));
        assert_eq!(ISMModels::parse_raw_duration(&json!("abc")), None);
        assert_eq!(ISMModels::parse_raw_duration(&json!("")), None);
        assert_eq!(ISMModels::parse_raw_duration(&json!("-5")), None);
        assert_eq!(ISMModels::parse_raw_duration(&json!(-5)), None);
        assert_eq!(ISMModels::parse_raw_duration(&json!(null)), None);
    }

    #[test]
    fn test_non_numeric_duration_falls_back_to_default() {
        let raw = json!({ "east": { "signal": "green", "duration": "abc", "status": "on" } });

        let records = ISMModels::normalize_response(&raw).unwrap();

        assert_eq!(records[0], record("east", "green", ISMModels::DEFAULT_DURATION_MS, "on"));
    }

    #[test]
    fn test_fetch_or_default_on_source_error() {
        assert!(ISMModels::fetch_signal_data(&FailingSource).is_err());
        assert_eq!(ISMModels::fetch_or_default(&FailingSource), ISMModels::default_records());
    }

    #[test]
    fn test_fetch_or_default_on_malformed_body() {
        let source = StaticSource(json!("not an object"));
        assert_eq!(ISMModels::fetch_or_default(&source), ISMModels::default_records());
    }

    #[test]
    fn test_fetch_signal_data_success() {
        let source = StaticSource(json!({ "west": { "signal": "red", "duration": "300", "status": "on" } }));

        let records = ISMModels::fetch_signal_data(&source).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0], record("west", "red", 300, "on"));
    }

    #[test]
    fn test_http_source_parses_body() {
        let url = serve_once(
            "200 OK",
            r#"{"north":{"signal":"yellow","duration":"250","status":"warning"}}"#,
        );

        let records = ISMModels::fetch_signal_data(&local_source(url)).unwrap();

        assert_eq!(records[0], record("north", "yellow", 250, "warning"));
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_http_source_non_success_status() {
        let url = serve_once("500 Internal Server Error", "{}");
        let source = local_source(url);

        match source.fetch_raw() {
            Err(ISMError::HttpStatus(code, _)) => assert_eq!(code, 500),
            other => panic!("expected HttpStatus error, got {:?}", other),
        }
    }

    #[test]
    fn test_http_source_malformed_json() {
        let url = serve_once("200 OK", "<html>relay down</html>");
        let source = local_source(url);

        assert!(matches!(source.fetch_raw(), Err(ISMError::ParseError(_))));
        assert_eq!(ISMModels::fetch_or_default(&source), ISMModels::default_records());
    }

    #[test]
    fn test_http_source_unreachable_host() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let url = Url::parse(&format!("http://{}/rest/api/iot", addr)).unwrap();
        let source = local_source(url);

        assert!(matches!(source.fetch_raw(), Err(ISMError::NetworkError(_))));
        assert_eq!(ISMModels::fetch_or_default(&source), ISMModels::default_records());
    }

    #[test]
    fn test_bulk_update_replaces_only_duration() {
        let records = vec![
            record("east", "green", 1000, "on"),
            record("west", "red", 2000, "warning"),
            record("northeast", "0", 5, "off"),
        ];

        let updated = ISMModels::bulk_update_durations(&records, 4200);

        assert_eq!(updated.len(), records.len());
        for (before, after) in records.iter().zip(&updated) {
            assert_eq!(after.duration, 4200);
            assert_eq!(after.direction, before.direction);
            assert_eq!(after.signal, before.signal);
            assert_eq!(after.status, before.status);
        }
        // input untouched
        assert_eq!(records[0].duration, 1000);
    }

    #[test]
    fn test_bulk_update_is_last_value_wins() {
        let records = ISMModels::default_records();

        let twice = ISMModels::bulk_update_durations(&ISMModels::bulk_update_durations(&records, 10), 20);
        let once = ISMModels::bulk_update_durations(&records, 20);

        assert_eq!(twice, once);
    }

    #[test]
    fn test_parse_duration_input() {
        assert_eq!(ISMModels::parse_duration_input("1500"), Ok(1500));
        assert_eq!(ISMModels::parse_duration_input(" 0 "), Ok(0));
        assert_eq!(ISMModels::parse_duration_input(""), Err(DurationInputError::Empty));
        assert_eq!(ISMModels::parse_duration_input("   "), Err(DurationInputError::Empty));
        assert_eq!(ISMModels::parse_duration_input("abc"), Err(DurationInputError::NotANumber));
        assert_eq!(ISMModels::parse_duration_input("NaN"), Err(DurationInputError::NotANumber));
        assert_eq!(ISMModels::parse_duration_input("-5"), Err(DurationInputError::Negative));
        assert_eq!(ISMModels::parse_duration_input("1.5"), Err(DurationInputError::NotWholeNumber));
        assert_eq!(
            ISMModels::parse_duration_input("99999999999999999999999"),
            Err(DurationInputError::NotANumber)
        );
    }

    #[test]
    fn test_duration_input_messages() {
        assert_eq!(DurationInputError::Empty.to_string(), "Please enter a duration value");
        assert_eq!(DurationInputError::Negative.to_string(), "Duration cannot be negative");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("EAST"), Some(Direction::East));
        assert_eq!(Direction::parse("south"), Some(Direction::South));
        assert_eq!(Direction::parse("northeast"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn test_color_tables() {
        assert_eq!(SignalColor::from_signal("Green"), SignalColor::Green);
        assert_eq!(SignalColor::from_signal("yellow"), SignalColor::Yellow);
        assert_eq!(SignalColor::from_signal("RED"), SignalColor::Red);
        assert_eq!(SignalColor::from_signal("0"), SignalColor::Unknown);

        assert_eq!(StatusLevel::from_status("ON"), StatusLevel::On);
        assert_eq!(StatusLevel::from_status("warning"), StatusLevel::Warning);
        assert_eq!(StatusLevel::from_status("off"), StatusLevel::Off);
        assert_eq!(StatusLevel::from_status("broken"), StatusLevel::Off);
    }
}
