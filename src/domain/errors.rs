use derive_more::Display;

/// Error taxonomy of the dashboard pipeline.
///
/// `MalformedRecord` stays contained at the record level (skip and keep
/// going), `FetchFailure` escalates to the controller boundary and is
/// reported, `EmptySelection` is rejected before any network call. None of
/// them ever takes the session down.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DashboardError {
    #[display(fmt = "Malformed record: {}", _0)]
    MalformedRecord(String),
    #[display(fmt = "Fetch failure: {}", _0)]
    FetchFailure(String),
    #[display(fmt = "No company selected")]
    EmptySelection,
}

impl std::error::Error for DashboardError {}

pub type FetchResult<T> = Result<T, DashboardError>;
