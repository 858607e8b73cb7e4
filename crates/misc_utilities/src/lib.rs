pub mod rounding_that_works_with_integers;
pub use rounding_that_works_with_integers::RoundingThatWorksWithIntegers;

mod trait_alias_macro;
