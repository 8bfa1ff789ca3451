//! Request guards used by the controller layer.

pub mod auth;

#[cfg(test)]
mod test;
