//! Request input helpers.
//!
//! Turns free-form text into a clean request list and generates random
//! request queues for demonstrations.

use rand::seq::index;
use rand::Rng;
use tracing::warn;

use crate::models::Track;

/// Result of parsing a textual request list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRequests {
    /// Accepted tracks, first occurrence order, no duplicates.
    pub tracks: Vec<Track>,
    /// Tokens dropped because they were not integers or lay outside
    /// `[0, max_track]`.
    pub rejected: Vec<String>,
    /// Number of duplicate tokens dropped.
    pub duplicates: usize,
}

/// Parses comma- or whitespace-separated track numbers.
///
/// Malformed and out-of-range tokens are dropped rather than failing the
/// whole input; they are reported in [`ParsedRequests::rejected`].
///
/// ```
/// use disk_sched::input::parse_requests;
///
/// let parsed = parse_requests("98, 183, x, 37, 400, 98", 199);
/// assert_eq!(parsed.tracks, vec![98, 183, 37]);
/// assert_eq!(parsed.rejected, vec!["x", "400"]);
/// assert_eq!(parsed.duplicates, 1);
/// ```
pub fn parse_requests(text: &str, max_track: Track) -> ParsedRequests {
    let mut parsed = ParsedRequests::default();

    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<Track>() {
            Ok(track) if (0..=max_track).contains(&track) => {
                if parsed.tracks.contains(&track) {
                    parsed.duplicates += 1;
                } else {
                    parsed.tracks.push(track);
                }
            }
            _ => parsed.rejected.push(token.to_string()),
        }
    }

    if !parsed.rejected.is_empty() {
        warn!(
            rejected = ?parsed.rejected,
            max_track,
            "dropped malformed or out-of-range request tokens"
        );
    }

    parsed
}

/// Draws `count` distinct tracks from `[0, max_track]`.
///
/// `count` is clamped to the number of available tracks. The result is in
/// draw order, which serves as arrival order.
pub fn random_requests<R: Rng + ?Sized>(count: usize, max_track: Track, rng: &mut R) -> Vec<Track> {
    let Ok(available) = usize::try_from(max_track.saturating_add(1)) else {
        return Vec::new();
    };
    let amount = count.min(available);
    index::sample(rng, available, amount)
        .into_iter()
        .map(|i| i as Track)
        .collect()
}
