// Presentation helpers used by the command-line front end.

pub mod views;
