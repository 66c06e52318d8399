//! Integration tests for snippet generation

mod alternative_shortcuts;
mod generation_pipeline;
mod test_utils;
