pub const fn contact_form_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the predicate")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn assert_matches_pattern() {
        assert_matches!(Some(42), Some(_));
        assert_matches!(Some(42), Some(x) if *x == 42);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_wrong_pattern() {
        assert_matches!(None::<i32>, Some(_));
    }

    #[test]
    #[should_panic(expected = "does not match predicate")]
    fn assert_matches_wrong_predicate() {
        assert_matches!(Some(7), Some(x) if *x == 42);
    }
}
