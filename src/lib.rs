//! Search typeahead: substring matching over a client-side suggestion list,
//! keyboard and pointer navigation, and a terminal front end.
//!
//! The behavior lives in [`matcher`] and [`typeahead`]; [`app`] is one
//! possible host that renders the state with ratatui.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod matcher;
pub mod theme;
pub mod typeahead;
pub mod widgets;


pub use error::{Result, TypeaheadError};
