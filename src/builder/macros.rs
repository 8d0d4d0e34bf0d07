//! Macros for ergonomic label definitions.

/// Generate a unit-variant label enum and its `Label` implementation.
///
/// The variant named after `fail:` becomes the fail sentinel. The generated
/// enum derives serde's `Serialize` and `Deserialize`, so the calling crate
/// must depend on `serde`.
///
/// # Example
///
/// ```
/// use polymatch::core::Label;
/// use polymatch::label_enum;
///
/// label_enum! {
///     pub enum Token {
///         NoMatch,
///         Number,
///         Identifier,
///     }
///     fail: NoMatch
/// }
///
/// assert!(Token::fail().is_fail());
/// assert_eq!(Token::Number.name(), "Number");
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        fail: $fail:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Variant name, for display and logging.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::core::Label for $name {
            fn fail() -> Self {
                Self::$fail
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Label;

    label_enum! {
        enum TestLabel {
            Fail,
            Lower,
            Upper,
        }
        fail: Fail
    }

    #[test]
    fn label_enum_macro_generates_trait() {
        assert_eq!(TestLabel::fail(), TestLabel::Fail);
        assert!(TestLabel::Fail.is_fail());
        assert!(!TestLabel::Lower.is_fail());
        assert!(!TestLabel::Upper.is_fail());
    }

    #[test]
    fn label_enum_generates_names() {
        assert_eq!(TestLabel::Fail.name(), "Fail");
        assert_eq!(TestLabel::Upper.name(), "Upper");
    }

    #[test]
    fn label_enum_supports_visibility() {
        // The macro should work with pub visibility
        label_enum! {
            pub enum PublicLabel {
                Miss,
                Hit,
            }
            fail: Miss
        }

        assert!(PublicLabel::Miss.is_fail());
        assert!(!PublicLabel::Hit.is_fail());
    }

    #[test]
    fn label_enum_serializes_correctly() {
        let json = serde_json::to_string(&TestLabel::Lower).unwrap();
        let deserialized: TestLabel = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, TestLabel::Lower);
    }
}
