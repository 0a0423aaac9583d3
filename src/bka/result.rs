/// Result for the csv and argument plumbing. Account operations return `AccountError` directly.
pub type Result<T = ()> = anyhow::Result<T>;
