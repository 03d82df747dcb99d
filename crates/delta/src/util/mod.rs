pub mod json;

#[cfg(test)]
pub mod test;
