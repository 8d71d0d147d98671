//! Replace in-archive references inside the primary HTML with data URIs.

use tracing::trace;

use crate::model::resource::ResourceMap;

/// Replace every literal occurrence of each resource key in `html` with its data URI.
///
/// Keys are applied longest first so that a key which is a prefix of another
/// (`img/a.png` vs `img/a.png?v=2`) cannot break the longer one's matches.
/// References without a matching key are left untouched.
pub fn rewrite_links(html: &str, resources: &ResourceMap) -> String {
    let mut result = html.to_string();

    for (key, data_uri) in resources.longest_first() {
        if key.is_empty() || !result.contains(key) {
            continue;
        }
        trace!(key, "Inlining reference");
        result = result.replace(key, data_uri);
    }

    result
}
