//! Helper macro for declaring port error enums.
//!
//! `define_port_error!` expands to a `thiserror` enum plus one snake_case
//! constructor per variant. Constructor parameters accept `impl Into<T>` so
//! adapters can pass `&str` or formatted strings directly.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant [] [] $( $($field : $ty,)* )?);
            )*
        }
    };

    // Accumulate `field: impl Into<ty>` parameters and `field: field.into()`
    // initialisers one field at a time.
    (
        @constructor $variant:ident [$($params:tt)*] [$($inits:tt)*]
        $field:ident : $ty:ty, $($rest:tt)*
    ) => {
        define_port_error!(
            @constructor
            $variant
            [$($params)* $field: impl Into<$ty>,]
            [$($inits)* $field: $field.into(),]
            $($rest)*
        );
    };

    (@constructor $variant:ident [] []) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@constructor $variant:ident [$($params:tt)+] [$($inits:tt)+]) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)+) -> Self {
                Self::$variant { $($inits)+ }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SamplePortError {
            Unavailable => "backend unavailable",
            Rejected { reason: String } => "rejected: {reason}",
            Limited { reason: String, retries: u8 } => "limited: {reason} after {retries}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SamplePortError::unavailable(), SamplePortError::Unavailable);
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::rejected("bad token");
        assert_eq!(err.to_string(), "rejected: bad token");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::limited(String::from("busy"), 3_u8);
        assert_eq!(err.to_string(), "limited: busy after 3");
    }
}
