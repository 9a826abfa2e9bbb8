// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Build a [`crate::Colr`] from text and optional `fore`, `back`, and `style` names.
/// Evaluates to a [`crate::ColrResult`] since every name is parsed at runtime.
///
/// ```
/// use r3bl_colr::colr;
/// let it = colr!("hello", fore: "red").unwrap();
/// assert_eq!(it.to_string(), "\x1b[31mhello\x1b[0m");
/// ```
#[macro_export]
macro_rules! colr {
    ($text:expr $(, $key:ident : $value:expr)* $(,)?) => {{
        (|| -> $crate::ColrResult<$crate::Colr> {
            #[allow(unused_mut)]
            let mut style = $crate::ColrStyle::default();
            $( $crate::colr!(@set style, $key, $value); )*
            let it = $crate::Colr::default().styled($text, &style);
            Ok(it)
        })()
    }};
    (@set $style:ident, fore, $value:expr) => {
        $style.fore = Some($crate::ColorSpec::parse($value, false)?);
    };
    (@set $style:ident, back, $value:expr) => {
        $style.back = Some($crate::ColorSpec::parse($value, false)?);
    };
    (@set $style:ident, style, $value:expr) => {
        $style.style = Some($crate::StyleCode::parse($value)?);
    };
}
