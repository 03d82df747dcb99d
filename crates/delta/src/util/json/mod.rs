mod validator;

pub use validator::Validate;
