//! Model parameters and the time grid they are evaluated on
//!
//! A [`ParameterSet`] is a plain `Copy` value. It is never mutated in place:
//! every change goes through [`ParameterSet::with`], which validates the new
//! value and hands back a fresh set. This is the input boundary of the crate,
//! so the evaluator can rely on the invariants below.
//!
//! | Parameter | Unit | Constraint |
//! |-----------|------|------------|
//! | μmax | h⁻¹ | ≥ 0 |
//! | Ki (compound 1, 2) | mmol/L | > 0 |
//! | ka, ke | h⁻¹ | ≥ 0 |
//! | C0 | mmol/L | ≥ 0 |
//! | N0, Kmax | cells/mL | > 0 |
//! | t_end | h | > 0 |
//! | time points | - | ≥ 1 |

mod compound;
mod grid;
mod parameter;
mod set;

pub use compound::Compound;
pub use grid::{TimeGrid, MAX_INTERVALS};
pub use parameter::{Bound, Parameter};
pub use set::ParameterSet;
