/// Identifier of a quote on the remote service.
pub type QuoteId = u32;

/// A quote as the rest of the application sees it.
///
/// Only [`crate::data::mapper`] knows about both this type and the wire
/// shape in [`crate::data::remote::QuoteDto`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: QuoteId,
    pub text: String,
    pub author: String,
}
