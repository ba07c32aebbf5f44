/// Cancellation signal shared between a sort and its caller.
pub mod cancel;

/// Name and description of an algorithm.
pub mod descriptor;

/// Events emitted while sorting and the observers receiving them.
pub mod event;

/// Per-call execution parameters.
pub mod options;

/// How a sort call ended.
pub mod outcome;
