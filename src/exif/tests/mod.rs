#![cfg(test)]

mod rational_tests;
mod tag_names_tests;
mod decoder_tests;
