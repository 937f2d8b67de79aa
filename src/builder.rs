//! `BuilderConfig::builder()` generation.

/// Generate `$Config::builder()` and a `$Builder` whose `build()` cannot fail.
///
/// Every field falls back to the value in `$Config::default()`, so there is
/// no required group and nothing to validate: `build()` returns `$Config`
/// directly instead of a `Result`. Setters take `impl Into<T>` so that
/// `prefix("Set")` works without a `.to_string()`.
///
/// - `optional { field: T }`: a plain field, unset means `defaults.field`.
/// - `optional_or { field: T }`: a field stored as `Option<T>` on the config;
///   the setter takes `T`, and unset keeps `defaults.field` (usually `None`).
macro_rules! impl_builder {
    (
        $Config:ident, $Builder:ident {
            optional { $( $opt_field:ident : $opt_ty:ty ),* $(,)? }
            optional_or { $( $optor_field:ident : $optor_ty:ty ),* $(,)? }
        }
    ) => {
        #[derive(Debug, Default)]
        pub struct $Builder {
            $( $opt_field: Option<$opt_ty>, )*
            $( $optor_field: Option<$optor_ty>, )*
        }

        impl $Config {
            pub fn builder() -> $Builder {
                $Builder::default()
            }
        }

        impl $Builder {
            $(
                pub fn $opt_field(mut self, value: impl Into<$opt_ty>) -> Self {
                    self.$opt_field = Some(value.into());
                    self
                }
            )*

            $(
                pub fn $optor_field(mut self, value: impl Into<$optor_ty>) -> Self {
                    self.$optor_field = Some(value.into());
                    self
                }
            )*

            pub fn build(self) -> $Config {
                let defaults = $Config::default();
                $Config {
                    $( $opt_field: self.$opt_field.unwrap_or(defaults.$opt_field), )*
                    $( $optor_field: self.$optor_field.or(defaults.$optor_field), )*
                }
            }
        }
    };
}

pub(crate) use impl_builder;
