mod registry;
mod token;

pub(crate) use registry::*;
pub(crate) use token::*;
