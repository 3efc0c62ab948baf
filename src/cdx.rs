/// Archive-index (CDX) fetch orchestration.
///
/// One GET per lookup; the response is a JSON array whose first row is a
/// header and whose remaining rows each carry a single original URL.
use crate::domain;
use crate::error::Result;
use crate::tree::{self, Branch};

pub const CDX_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";

/// Query for every recorded URL under `domain` (including subdomains),
/// collapsed by URL key and capped at `limit` rows.
pub fn query_url(domain: &str, limit: u32) -> String {
    format!(
        "{}?url=*.{}/*&output=json&fl=original&collapse=urlkey&limit={}",
        CDX_ENDPOINT, domain, limit
    )
}

/// Flatten response rows into URLs, dropping the header row.
pub fn parse_rows(rows: Vec<Vec<String>>) -> Vec<String> {
    rows.into_iter()
        .skip(1)
        .filter_map(|row| row.into_iter().next())
        .collect()
}

pub async fn fetch_urls(domain: &str, limit: u32) -> Result<Vec<String>> {
    let rows: Vec<Vec<String>> = reqwest::get(query_url(domain, limit))
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(parse_rows(rows))
}

/// Full lookup: validate the domain, query the index once, build the tree.
/// Fails atomically; a transport error leaves the caller's current tree
/// untouched because no partial result is ever returned.
pub async fn lookup(domain: &str, limit: u32, blocklist: &[String]) -> Result<Branch> {
    domain::check_domain(domain, blocklist)?;
    let urls = fetch_urls(domain, limit).await?;
    Ok(tree::build(urls))
}
