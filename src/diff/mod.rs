//! Diff engine - byte comparison and range extraction

mod compare;

pub use compare::compare;
