pub mod classify;
pub mod document;
pub mod line;
pub mod run;
