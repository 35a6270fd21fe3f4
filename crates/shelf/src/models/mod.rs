mod object;

pub use object::{CreateObject, UpdateObject, ValidationError};
