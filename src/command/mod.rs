//! Per-object command accumulation and encoding.

/// Argument types shared by the timed commands.
pub mod args;
/// The [`Commandable`](commandable::Commandable) operation set.
pub mod commandable;
/// Line encoders.
pub mod encode;
/// The command accumulator and trigger state machine.
pub mod list;
