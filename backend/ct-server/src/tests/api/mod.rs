mod contact;
mod error;
