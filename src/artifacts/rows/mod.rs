//! Progressive disclosure of a diff result
//!
//! - `row_model`: numbered display rows with long unchanged runs collapsed
//! - `placeholder`: a collapsed run and the reveal actions it offers
//!
//! A row model is built once per diff result and then only mutated through
//! reveal actions; a newer diff result replaces it wholesale.

pub mod placeholder;
pub mod row_model;
