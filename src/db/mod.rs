pub mod entities;
pub mod enums;
pub mod mock_data;
pub mod schema;
pub mod services;

#[cfg(test)]
pub(crate) mod test_utils;
