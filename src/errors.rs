use thiserror::Error;

/// Failures of the refresh scheduler itself.
///
/// Query failures from the discovery backend travel as `anyhow::Error` with
/// context attached; these variants cover the scheduler's own lifecycle.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("registry refresh already started")]
    AlreadyStarted,

    #[error("registry refresh task exited before the bootstrap cycle completed")]
    TaskAborted,

    #[error("registry refresh interval must be greater than zero")]
    ZeroInterval,
}
