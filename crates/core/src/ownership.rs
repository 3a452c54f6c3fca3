//! SteamSpy ownership ranking

use crate::constants::OWNERS_RANGE_SEPARATOR;
use crate::error::CoreError;
use crate::models::SteamSpyEntry;

/// Lower bound of an owners range such as `"1,000,000 .. 2,000,000"`
pub fn parse_owners_lower_bound(owners: &str) -> Result<u64, CoreError> {
    let low = owners
        .split(OWNERS_RANGE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .replace(',', "");
    low.trim()
        .parse()
        .map_err(|_| CoreError::Parse(owners.to_string()))
}

/// App ids ordered by estimated owners, highest first, at most `limit` of them.
///
/// Entries whose owners range cannot be parsed are ranked after every
/// parsable one. Equal bounds keep their input order.
pub fn rank_by_owners_descending(entries: &[SteamSpyEntry], limit: usize) -> Vec<u64> {
    let mut ranked: Vec<(Option<u64>, u64)> = entries
        .iter()
        .map(|e| (parse_owners_lower_bound(&e.owners).ok(), e.appid))
        .collect();

    // None < Some(_), so a reversed comparison puts unparsable entries last
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked.into_iter().take(limit).map(|(_, appid)| appid).collect()
}
