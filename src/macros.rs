macro_rules! coded_values {
    ($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident {
        $($(#[$meta:meta])* $id:ident : [$($code:literal),+]),* ;
        sentinel $sentinel:ident
    }) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        $vis enum $enum_id {
            $($(#[$meta])* $id,)*
            $sentinel,
        }

        impl $enum_id {
            /// Maps an AAMVA code to its value; anything unrecognized
            /// decodes to the sentinel variant.
            pub fn from_code(code: &str) -> Self {
                match code {
                    $($($code)|+ => Self::$id,)*
                    _ => Self::$sentinel,
                }
            }

            /// The canonical AAMVA code for this value, or `None` for the
            /// sentinel.
            pub fn code(&self) -> Option<&'static str> {
                match self {
                    $(Self::$id => Some($crate::macros::coded_values!(@first $($code),+)),)*
                    Self::$sentinel => None,
                }
            }
        }

        impl std::str::FromStr for $enum_id {
            type Err = $crate::codes::UnrecognizedCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($($code)|+ => Ok(Self::$id),)*
                    _ => Err($crate::codes::UnrecognizedCode(s.to_owned())),
                }
            }
        }
    };
    (@first $a:literal $(, $rest:literal)*) => {
        $a
    };
}

pub(crate) use coded_values;
