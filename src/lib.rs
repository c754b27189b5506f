//! Djombi's waitlist signup: the "join the waiting list" modal, wired to the
//! external waitlist API, and a small server that renders it.

pub mod configuration;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod submission;
pub mod telemetry;
pub mod utils;
pub mod waitlist_client;
