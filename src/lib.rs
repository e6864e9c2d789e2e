#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classifier;
pub mod error;
pub mod pagination;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classifier::{
    Classification, DEFAULT_RECORD, ErrorClassifier, ErrorInput, ErrorRecord, ErrorSink,
    FailureKind, HostValue, SIGNATURES, TracingSink, classify, dispatch,
};
pub use error::Error;
pub use pagination::{PageRequest, PageWindow, PaginationPlanner, plan};
pub use types::{Event, RawEvent, RawTicket, RawUint, Ticket, parse_event, parse_ticket};
