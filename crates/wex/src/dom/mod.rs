// ABOUTME: DOM traversal and mutation helpers for article extraction.
// ABOUTME: Holds the content selector priority list and the noise pruner.

//! DOM utilities for locating and cleaning the article subtree.
//!
//! - `selectors`: the fixed, ordered list of structural patterns used to pick
//!   the article root.
//! - `cleaners`: in-place removal of non-content elements from that root.

pub mod cleaners;
pub mod selectors;
