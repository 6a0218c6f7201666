pub mod posts;
pub mod projects;
pub mod run;
