//! snipgen: snippet template expansion
//!
//! Each template runs through an ordered list of generation commands derived from
//! its language and keywords; every command works on its own copy of the template
//! and may emit derived snippets or cancel. A separate pass turns
//! `meta-alternative-shortcut:<value>` tags into sibling snippets.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod output;
pub mod snippet;
pub mod source;
