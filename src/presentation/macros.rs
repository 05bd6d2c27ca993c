/// Declares a closed set of upstream string constants.
///
/// Each variant maps to the exact string the gateway expects. The generated type
/// gets `as_str`, `name`, an `ALL` table, `Display`, `FromStr` (accepting the
/// symbolic name, the wire value or an alias listed after `|`) and the conversions needed to use it as a
/// [`Selector`](crate::presentation::selector::Selector).
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident $(| $alias:literal)* => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Value sent to the gateway
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }

            /// Symbolic name of the variant
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }

            /// Other names accepted when parsing
            #[must_use]
            pub const fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $( $name::$variant => &[ $( $alias ),* ], )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == s || v.as_str() == s || v.aliases().contains(&s))
                    .ok_or_else(|| {
                        crate::error::AppError::InvalidInput(format!(
                            concat!("unknown ", stringify!($name), " {:?}"),
                            s
                        ))
                    })
            }
        }

        impl crate::presentation::selector::ApiValue for $name {
            fn api_value(&self) -> &'static str {
                self.as_str()
            }
        }

        impl From<$name> for crate::presentation::selector::Selector<$name> {
            fn from(value: $name) -> Self {
                crate::presentation::selector::Selector::Symbolic(value)
            }
        }
    };
}
