//! Article content scrapers.
//!
//! The feed only carries headlines and links; the body text that gets
//! classified and rewritten is scraped from each linked page.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`article`] | Generic paragraph extraction for any HTML article page |
//!
//! Scrapers never fail the batch: an article that cannot be retrieved comes
//! back as `None` and the pipeline skips it with a warning.

pub mod article;
