// Adapted from https://github.com/abcperf/trait-alias-macro

/// Declares a trait that is automatically implemented for every type meeting its bounds.
/// Attributes (doc comments included) are carried over to the generated trait.
///
/// ```
/// misc_utilities::trait_alias!(
///     /// Anything that can be copied around and ordered.
///     pub trait Scalar = Copy + PartialOrd + std::fmt::Debug
/// );
///
/// fn largest<T: Scalar>(a: T, b: T) -> T {
///     if a < b { b } else { a }
/// }
/// assert_eq!(largest(3, 7), 7);
/// assert_eq!(largest(-1.5, -2.5), -1.5);
/// ```
#[macro_export]
macro_rules! trait_alias {
    ($(#[$attr:meta])* $vis:vis trait $name:ident = $($base:tt)+) => {
        $(#[$attr])*
        $vis trait $name: $($base)+ {}
        impl<T: $($base)+> $name for T {}
    };
}
