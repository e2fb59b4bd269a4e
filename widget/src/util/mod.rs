//! Browser helpers kept out of component code.

pub mod dom;
