//! Validation gates for the mflags configuration engine.
//!
//! Two independent gates run over the same declared settings before any
//! flag derivation:
//! - the **compiler gate** checks the declared language standard and the
//!   compiler version against a static minimum-version table;
//! - the **bare-metal validator** checks that a bare-metal target is a
//!   combination the supported toolchains can actually build, under an
//!   injectable [`CompatibilityPolicy`].
//!
//! Both gates are pure; a failure aborts the invocation before derivation.

pub mod compiler_gate;
pub mod error;
pub mod policy;
pub mod validator;

pub use compiler_gate::check_compiler;
pub use error::{GateError, Result};
pub use policy::CompatibilityPolicy;
pub use validator::{run_gates, BareMetalValidator};
