//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod prepare;

pub(crate) use check::CheckArgs;
pub(crate) use prepare::PrepareArgs;
