pub mod bridge;
pub mod id;
pub mod reference;

#[cfg(test)]
pub mod test_fixtures;
