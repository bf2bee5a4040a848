// Telemetry feed state - row-set ownership with request sequencing
use crate::application::telemetry_repository::FetchError;
use crate::domain::telemetry::EnvRecord;

/// The one operator-visible failure message. Transport and upstream
/// failures are deliberately indistinguishable here.
pub const FETCH_FAILED_MESSAGE: &str = "failed to fetch telemetry data";

/// Token tying a response back to the request that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Holder of the displayed row set.
///
/// Rapid control edits fire overlapping fetches with no network
/// cancellation, so responses can complete out of order. Each fetch takes
/// a monotonically increasing token; only the response matching the latest
/// issued token is applied, superseded results are discarded on arrival.
#[derive(Debug, Default)]
pub struct TelemetryFeed {
    issued: u64,
    rows: Vec<EnvRecord>,
    loading: bool,
    error: Option<&'static str>,
}

impl TelemetryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[EnvRecord] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Start a fetch cycle. The returned token supersedes every earlier
    /// one; the loading flag stays up until the newest request settles.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.loading = true;
        RequestToken(self.issued)
    }

    /// Apply a completed fetch. Returns false (and changes nothing) when
    /// the token has been superseded. A successful result replaces the
    /// row set wholesale and clears any earlier error; a failure clears
    /// the rows and raises the generic message.
    pub fn apply(
        &mut self,
        token: RequestToken,
        result: Result<Vec<EnvRecord>, FetchError>,
    ) -> bool {
        if token.0 != self.issued {
            return false;
        }
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
            }
            Err(_) => {
                self.rows.clear();
                self.error = Some(FETCH_FAILED_MESSAGE);
            }
        }
        true
    }
}
