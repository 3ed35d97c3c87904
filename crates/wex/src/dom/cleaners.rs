// ABOUTME: Noise pruner removing non-content elements from the article subtree.
// ABOUTME: Drops script, style, nav, header, footer and aside descendants in place.

use dom_query::{Matcher, Selection};
use once_cell::sync::Lazy;

/// Element kinds treated as page clutter rather than article content.
pub const NOISE_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "aside"];

static NOISE_MATCHER: Lazy<Matcher> =
    Lazy::new(|| Matcher::new(&NOISE_TAGS.join(", ")).expect("valid noise selector"));

/// Removes every noise element below `candidate`, at any depth.
///
/// Only descendants are touched; siblings and ancestors of the candidate are
/// left as they are. Running it again on the same subtree is a no-op.
pub fn prune_noise(candidate: &Selection) {
    candidate.select_matcher(&NOISE_MATCHER).remove();
}
