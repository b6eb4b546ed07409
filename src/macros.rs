// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Append `value` to the `field` string, separated by `sep` unless `field`
/// is still empty.
#[macro_export]
macro_rules! append_sep {
    ($field:expr, $sep:expr, $value:expr) => {{
        let value: &str = $value;
        if !value.is_empty() {
            if !$field.is_empty() {
                $field.push_str($sep);
            }
            $field.push_str(value);
        }
    }};
}
