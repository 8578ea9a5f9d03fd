//! Mapping profile between entities, DTOs and commands.
//!
//! Every conversion destructures its source exhaustively, so adding a field
//! to any shape fails to compile until the mapping accounts for it.

mod domain_to_dto;
mod dto_to_command;

/// Map an optional source; an absent source maps to an absent result.
pub fn map_optional<S, T: From<S>>(source: Option<S>) -> Option<T> {
    source.map(T::from)
}

/// Map a sequence element by element, preserving order and count.
pub fn map_all<S, T: From<S>>(sources: impl IntoIterator<Item = S>) -> Vec<T> {
    sources.into_iter().map(T::from).collect()
}
