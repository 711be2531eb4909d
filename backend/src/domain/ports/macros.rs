//! Helper macro for generating domain port error enums.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = concat!("Build the `", stringify!($variant), "` variant.")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        /// Example error for macro coverage.
        pub enum ExamplePortError {
            /// Single string field.
            Foo { message: String } => "foo: {message}",
            /// Non-string field.
            Bar { count: u32 } => "bar: {count}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::foo("hello");
        assert_eq!(err.to_string(), "foo: hello");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::bar(42_u32);
        assert_eq!(err.to_string(), "bar: 42");
    }
}
