/// Builds a `Details` list from `key => value` pairs, keeping the order in
/// which they are written.
///
/// Every failing check attaches a few context values to its error, and
/// spelling out `Details::new().with(..).with(..)` at each of them hides
/// what is actually reported.
///
/// ```ignore
/// let details = details! { "expected" => min, "got" => len };
/// ```
macro_rules! details {
    () => {
        $crate::phonevalidator::errors::Details::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        $crate::phonevalidator::errors::Details::new()
            $(.with($key, $value))+
    }};
}

pub(crate) use details;
