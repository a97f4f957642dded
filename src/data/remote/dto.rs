use serde::Deserialize;

use crate::domain::QuoteId;

/// Quote exactly as the server sends it.
///
/// The server calls the text field `quote`; anything beyond the three
/// fields below is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteDto {
    pub id: QuoteId,
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
}
