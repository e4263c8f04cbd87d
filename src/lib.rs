//! State-tracking and rendering core of a panel that visualizes ARIA
//! live-region activity on an inspected page.
//!
//! Inbound: relayed page events go through [`panel::controller::Panel::receive`]
//! into the router, which updates the region registry and the event log and
//! hands the new entries to the log renderer. Outbound: UI intents and page
//! loads turn into commands posted through a [`command::transport::Transport`].

pub mod cli;
pub mod command;
pub mod event;
pub mod format;
pub mod log;
pub mod panel;
pub mod region;
pub mod report;
pub mod trace;
