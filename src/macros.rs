//! Macros for declaring the turnstile's name-bearing enums.

/// Declare a fieldless enum whose variants carry their own textual names.
///
/// The generated enum derives the usual value traits plus serde, and gets
/// `ALL`, `name()`, `Display` and `FromStr`. Parsing an unknown name yields
/// the [`ParseError`](crate::ParseError) variant given after `unknown:`.
///
/// # Example
///
/// ```
/// use turnstile::named_enum;
///
/// named_enum! {
///     pub enum Lamp {
///         Red,
///         Green,
///     }
///     unknown: UnknownState
/// }
///
/// assert_eq!(Lamp::Red.name(), "Red");
/// assert_eq!("Green".parse::<Lamp>().unwrap(), Lamp::Green);
/// assert!("Blue".parse::<Lamp>().is_err());
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        unknown: $unknown:ident
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
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// The variant's identifier as text.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(Self::$variant),)*
                    other => Err($crate::ParseError::$unknown(other.to_owned())),
                }
            }
        }
    };
}
