mod analysis;
mod common;
mod rules;
