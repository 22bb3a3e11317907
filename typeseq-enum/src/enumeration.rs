use crate::error::Result;
use crate::table::{EnumTable, Ordinal};

/// A closed enumeration with a name for each of its members.
///
/// Implementors provide the lookup table, usually built once behind a
/// `OnceLock`; the [`enumeration!`](crate::enumeration!) macro does this
/// for you.
pub trait Enumeration: Ordinal + Clone + Sized + 'static {
    fn table() -> &'static EnumTable<Self>;

    /// The name of this member.
    fn name(&self) -> &'static str;

    /// The name of the member with this ordinal, if there is one.
    fn to_str(ordinal: i64) -> Option<&'static str> {
        Self::table().to_str(ordinal)
    }

    /// The member with exactly this name.
    fn parse(text: &str) -> Result<Self> {
        Self::table().parse(text)
    }

    /// Parse `text` into `out`, leaving `out` untouched on failure.
    fn try_parse(out: &mut Self, text: &str) -> bool {
        Self::table().try_parse(out, text)
    }
}

/// Declare a fieldless enum along with its [`Enumeration`] implementation.
///
/// Members may be given explicit ordinals; the rest follow the usual
/// discriminant rules. The enum derives `Debug`, `Clone`, `Copy`,
/// `PartialEq`, `Eq` and `Hash`.
///
/// ```
/// use typeseq_enum::{enumeration, Enumeration};
///
/// enumeration! {
///     pub enum Level {
///         /// The default.
///         Low,
///         High = 10,
///     }
/// }
///
/// assert_eq!(Level::to_str(10), Some("High"));
/// assert_eq!(Level::parse("Low"), Ok(Level::Low));
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident $(= $ordinal:expr)?),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant $(= $ordinal)?),*
        }

        impl $crate::Ordinal for $name {
            fn ordinal(&self) -> i64 {
                *self as i64
            }
        }

        impl $crate::Enumeration for $name {
            fn table() -> &'static $crate::EnumTable<Self> {
                static TABLE: ::std::sync::OnceLock<$crate::EnumTable<$name>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    $crate::EnumTable::new([
                        $((stringify!($variant), $name::$variant as i64, $name::$variant)),*
                    ])
                })
            }

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
