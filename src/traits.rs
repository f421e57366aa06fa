use std::error::Error;

use async_trait::async_trait;

use crate::client::LaunchRecord;

/// A source of upcoming space launches
#[async_trait]
pub trait LaunchSource {
    /// Returns the launch records this source currently lists, in the order of the source.
    /// This function may trigger a network request (that can be a long process, or that can even fail)
    async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, Box<dyn Error>>;
}
