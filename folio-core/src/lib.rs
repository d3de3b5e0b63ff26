//! Platform-free state for the portfolio site.
//!
//! This crate provides:
//! - `config`: `SiteConfig` with the DOM contract, timings and particle parameters
//! - `router`: the page router state machine (active page, one-time skills animation)
//! - `modal`: modal open/close phases and the copy confirmation flash
//! - `particles`: the particle field behind the animated header background
//!
//! Nothing here touches the DOM; `folio-web` applies the results to the page.

pub mod config;
pub mod modal;
pub mod particles;
pub mod router;
