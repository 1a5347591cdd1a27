//! Companion hue derivation over an Oklch Pareto frontier.
//!
//! Given a base hue for one role, [`frontier::compute_pareto`] lists, for
//! every minimum hue separation from 0 to 180 degrees, the cheapest
//! companion hue and what it costs in chroma (or chroma and lightness).
//! [`interaction::Interaction`] keeps the per-bucket tradeoff choices and
//! turns pointer gestures into updates; [`render::StripView`] paints it all
//! onto any [`render::Surface`].

pub mod bucket;
pub mod cli;
pub mod color;
pub mod frontier;
pub mod gamut;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod report;
pub mod resolve;
pub mod tui;
