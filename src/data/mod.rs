//! Data layer: remote fetch client, DTO mapping and the repository.

pub mod mapper;
pub mod remote;
mod repository;

pub use repository::QuoteRepository;
