pub mod client;

pub use client::{FETCH_FAILED_MESSAGE, LiveClient, LiveTimings};
