//! Links to external services: map directions and blog reviews.

use url::form_urlencoded::{Serializer, byte_serialize};

use crate::event::Event;

const KAKAO_MAP_BASE: &str = "https://map.kakao.com/link";
const NAVER_SEARCH_URL: &str = "https://search.naver.com/search.naver";

/// Suffix appended to the title when searching for blog reviews ("blog review").
const BLOG_QUERY_SUFFIX: &str = "블로그 후기";

fn encode(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}

/// Deep link that opens turn-by-turn directions to the event.
pub fn directions_link(event: &Event) -> Option<String> {
    let at = event.coordinates()?;
    Some(format!(
        "{}/to/{},{},{}",
        KAKAO_MAP_BASE,
        encode(&event.title),
        at.lat,
        at.lng
    ))
}

/// Link that shows the event location on the map.
pub fn map_link(event: &Event) -> Option<String> {
    let at = event.coordinates()?;
    Some(format!(
        "{}/map/{},{},{}",
        KAKAO_MAP_BASE,
        encode(&event.title),
        at.lat,
        at.lng
    ))
}

/// Blog search for reviews of the event.
pub fn blog_search_link(event: &Event) -> String {
    let query = format!("{} {}", event.title, BLOG_QUERY_SUFFIX);

    let params = Serializer::new(String::new())
        .append_pair("where", "blog")
        .append_pair("query", &query)
        .finish();
    format!("{}?{}", NAVER_SEARCH_URL, params)
}
