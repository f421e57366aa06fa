//! Where launches are streamed
//!
//! Agencies are matched by an ordered list of rules: the first rule whose needle appears in the agency name wins.
//! E.g. "SpaceX Starship" is matched by the `SpaceX` rule.

use url::Url;

/// Maps agencies whose name contains `needle` to a YouTube channel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRule {
    pub needle: &'static str,
    pub url: &'static str,
}

impl ChannelRule {
    pub fn matches(&self, agency: &str) -> bool {
        agency.contains(self.needle)
    }
}

/// Known agencies, in match order
pub static AGENCY_CHANNELS: &[ChannelRule] = &[
    ChannelRule { needle: "SpaceX", url: "https://www.youtube.com/@SpaceX" },
    ChannelRule { needle: "NASA", url: "https://www.youtube.com/nasa" },
    ChannelRule { needle: "National Aeronautics and Space Administration", url: "https://www.youtube.com/nasa" },
    ChannelRule { needle: "Rocket Lab", url: "https://www.youtube.com/@RocketLabNZ" },
    ChannelRule { needle: "Blue Origin", url: "https://www.youtube.com/@blueorigin" },
    ChannelRule { needle: "United Launch Alliance", url: "https://www.youtube.com/@ulalaunch" },
    ChannelRule { needle: "Arianespace", url: "https://www.youtube.com/@arianespace" },
    ChannelRule { needle: "European Space Agency", url: "https://www.youtube.com/@EuropeanSpaceAgency" },
    ChannelRule { needle: "Indian Space Research Organization", url: "https://www.youtube.com/@isroofficial5866" },
    ChannelRule { needle: "Japan Aerospace Exploration Agency", url: "https://www.youtube.com/@JAXA_en" },
];

/// Returns the channel of the first rule that matches `agency`
pub fn channel_for<'r>(rules: &'r [ChannelRule], agency: &str) -> Option<&'r ChannelRule> {
    rules.iter().find(|rule| rule.matches(agency))
}

/// Whether `url` points to a streaming platform we can open
pub fn is_stream_url(url: &Url) -> bool {
    match url.host_str() {
        Some(host) => {
            let host = host.trim_start_matches("www.").trim_start_matches("m.");
            host == "youtube.com" || host == "youtu.be"
        },
        None => false,
    }
}

/// Find where a launch is streamed: the agency channel if it is known, else the first video URL if it is a stream
pub fn resolve_stream_url<'a, I>(rules: &[ChannelRule], agency: Option<&str>, video_urls: I) -> Option<Url>
where
    I: IntoIterator<Item = &'a str>,
{
    if let Some(rule) = agency.and_then(|agency| channel_for(rules, agency)) {
        match Url::parse(rule.url) {
            Ok(url) => return Some(url),
            Err(err) => log::warn!("Invalid channel URL {} for {}: {}", rule.url, rule.needle, err),
        }
    }

    video_urls.into_iter()
        .next()
        .and_then(|first| Url::parse(first).ok())
        .filter(is_stream_url)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match() {
        let url = resolve_stream_url(AGENCY_CHANNELS, Some("SpaceX Starship"), vec![]);
        assert_eq!(url.unwrap().as_str(), "https://www.youtube.com/@SpaceX");
    }

    #[test]
    fn first_rule_wins() {
        let rules = [
            ChannelRule { needle: "Rocket", url: "https://www.youtube.com/first" },
            ChannelRule { needle: "Rocket Lab", url: "https://www.youtube.com/second" },
        ];
        assert_eq!(channel_for(&rules, "Rocket Lab USA").unwrap().url, "https://www.youtube.com/first");
        assert!(channel_for(&rules, "rocket lab").is_none());
    }

    #[test]
    fn fallback_to_video_urls() {
        let videos = vec!["https://youtu.be/abc", "https://www.twitch.tv/live"];
        let url = resolve_stream_url(AGENCY_CHANNELS, Some("Galactic Energy"), videos.clone());
        assert_eq!(url.unwrap().as_str(), "https://youtu.be/abc");

        let url = resolve_stream_url(AGENCY_CHANNELS, None, videos);
        assert_eq!(url.unwrap().as_str(), "https://youtu.be/abc");

        assert!(resolve_stream_url(AGENCY_CHANNELS, None, vec![]).is_none());
    }

    #[test]
    fn only_the_first_video_url_is_considered() {
        let videos = vec!["https://www.twitch.tv/live", "https://youtu.be/abc"];
        assert!(resolve_stream_url(AGENCY_CHANNELS, Some("Galactic Energy"), videos).is_none());

        let videos = vec!["not a url", "https://www.youtube.com/watch?v=def"];
        assert!(resolve_stream_url(AGENCY_CHANNELS, None, videos).is_none());
    }
}
