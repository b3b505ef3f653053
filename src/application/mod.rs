pub mod aggregate;
pub mod classify;
pub mod emails;
pub mod insights;
pub mod recommend;
pub mod rules;
pub mod vectorize;
