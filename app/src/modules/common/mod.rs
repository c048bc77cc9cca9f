pub mod dto;
pub mod extractors;
pub mod responses;
pub mod validators;
