pub mod aws_credentials;
pub mod profile;
pub mod snippet;
