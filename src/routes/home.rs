//! Root informational page.

use crate::config::ROOT_MESSAGE;

/// Plaintext notice pointing at `/calculate`.
pub async fn index() -> &'static str {
    ROOT_MESSAGE
}
