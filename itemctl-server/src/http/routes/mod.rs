//! Route handlers organized by resource

pub mod health;
pub mod items;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;
