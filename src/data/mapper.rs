//! The single translation point between wire and domain quotes.

use crate::data::remote::QuoteDto;
use crate::domain::Quote;

/// Convert a wire record into a domain quote. Pure and total.
pub fn to_domain(dto: QuoteDto) -> Quote {
    Quote {
        id: dto.id,
        text: dto.text,
        author: dto.author,
    }
}

impl From<QuoteDto> for Quote {
    fn from(dto: QuoteDto) -> Self {
        to_domain(dto)
    }
}
