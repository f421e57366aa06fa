//! This module provides a client to fetch upcoming launches from the Launch Library API

use std::error::Error;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{self, LAUNCH_API_URL, LAUNCH_FETCH_LIMIT};
use crate::traits::LaunchSource;


/// The body of a launch listing
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LaunchList {
    #[serde(default)]
    pub results: Vec<LaunchRecord>,
}

/// A launch, as described by the API.
///
/// Every field the calendar does not strictly need is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LaunchRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// The launch time (No Earlier Than), as an ISO 8601 timestamp
    #[serde(default)]
    pub net: Option<String>,
    #[serde(default)]
    pub launch_service_provider: Option<Named>,
    #[serde(default)]
    pub mission: Option<Mission>,
    #[serde(default)]
    pub pad: Option<Pad>,
    #[serde(default, rename = "vidURLs")]
    pub vid_urls: Vec<VideoUrl>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Mission {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Pad {
    #[serde(default)]
    pub location: Option<Named>,
}

/// Older API versions list bare URLs, newer ones list objects
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum VideoUrl {
    Plain(String),
    Detailed { url: String },
}

impl VideoUrl {
    pub fn as_str(&self) -> &str {
        match self {
            VideoUrl::Plain(url) => url,
            VideoUrl::Detailed { url } => url,
        }
    }
}

impl LaunchRecord {
    pub fn agency_name(&self) -> Option<&str> {
        self.launch_service_provider.as_ref()?.name.as_deref()
    }

    pub fn mission_description(&self) -> Option<&str> {
        self.mission.as_ref()?.description.as_deref()
    }

    pub fn location_name(&self) -> Option<&str> {
        self.pad.as_ref()?.location.as_ref()?.name.as_deref()
    }
}

/// Parse the JSON body of a launch listing
pub fn parse_launch_list(body: &str) -> Result<Vec<LaunchRecord>, Box<dyn Error>> {
    let list: LaunchList = serde_json::from_str(body)
        .map_err(|err| format!("Unable to parse launch list: {}", err))?;
    Ok(list.results)
}


/// A [`LaunchSource`] that fetches its data from the Launch Library HTTP API
pub struct LaunchClient {
    url: Url,
}

impl LaunchClient {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        Ok(Self{ url })
    }

    /// Create a client for the endpoint set in [`crate::config::LAUNCH_API_URL`]
    pub fn from_config() -> Result<Self, Box<dyn Error>> {
        Self::new(config::get(&LAUNCH_API_URL))
    }

    /// The URL that is actually requested
    pub fn request_url(&self) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &LAUNCH_FETCH_LIMIT.to_string())
            .append_pair("mode", "detailed");
        url
    }
}

#[async_trait]
impl LaunchSource for LaunchClient {
    async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, Box<dyn Error>> {
        let url = self.request_url();
        log::debug!("Fetching launches from {}", url);

        let res = reqwest::Client::new()
            .get(url.as_str())
            .send()
            .await?;
        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status {} from {}", res.status(), url).into());
        }

        let text = res.text().await?;
        let records = parse_launch_list(&text)?;
        log::info!("Fetched {} launches", records.len());
        Ok(records)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_LIST: &str = r#"{
        "count": 2,
        "results": [
            {
                "name": "Falcon 9 Block 5 | Starlink Group 10-1",
                "net": "2030-03-01T12:30:00Z",
                "launch_service_provider": { "id": 121, "name": "SpaceX" },
                "mission": { "description": "A batch of Starlink satellites." },
                "pad": { "location": { "name": "Cape Canaveral, FL, USA" } },
                "vidURLs": [ { "priority": 10, "url": "https://www.youtube.com/watch?v=abc" } ]
            },
            {
                "net": "2030-04-01T00:00:00Z",
                "mission": null,
                "vidURLs": [ "https://youtu.be/xyz" ]
            }
        ]
    }"#;

    #[test]
    fn test_launch_list_parsing() {
        let records = parse_launch_list(EXAMPLE_LIST).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.agency_name(), Some("SpaceX"));
        assert_eq!(first.mission_description(), Some("A batch of Starlink satellites."));
        assert_eq!(first.location_name(), Some("Cape Canaveral, FL, USA"));
        assert_eq!(first.vid_urls[0].as_str(), "https://www.youtube.com/watch?v=abc");

        let second = &records[1];
        assert_eq!(second.name, None);
        assert_eq!(second.agency_name(), None);
        assert_eq!(second.mission_description(), None);
        assert_eq!(second.vid_urls, vec![VideoUrl::Plain("https://youtu.be/xyz".to_string())]);
    }

    #[test]
    fn test_malformed_list() {
        assert!(parse_launch_list("<html>Too many requests</html>").is_err());
        assert!(parse_launch_list("{}").unwrap().is_empty());
    }

    #[test]
    fn test_request_url() {
        let client = LaunchClient::new("https://ll.example.com/2.2.0/launch/upcoming/").unwrap();
        assert_eq!(client.request_url().as_str(), "https://ll.example.com/2.2.0/launch/upcoming/?limit=100&mode=detailed");
        assert!(LaunchClient::new("not a url").is_err());
    }
}
