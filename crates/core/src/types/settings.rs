//! Enumerations stored in settings, records and backups.
//!
//! Every enum is persisted by a stable upper-case name (e.g. `"SYSTEM"`).
//! Parsing an unknown name fails with [`UnknownName`]; callers reading from
//! storage substitute the enum's default instead of propagating that error.

use thiserror::Error;

/// An enumeration name that matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name: {name}")]
pub struct UnknownName {
    /// Enumeration being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub name: String,
}

/// Macro to define a settings enumeration with stored names.
///
/// Generates:
/// - The enum with `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
///   `Serialize`, `Deserialize` (serialized by stored name) and `Default`
/// - `ALL` with every variant in declaration order
/// - `name()` returning the stored name
/// - `Display` and `FromStr` over the stored name
#[macro_export]
macro_rules! define_setting_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $stored:literal ),+ $(,)?
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $stored)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The name this variant is stored under.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $stored,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::settings::UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($stored => Ok(Self::$variant),)+
                    other => Err($crate::types::settings::UnknownName {
                        kind: stringify!($name),
                        name: other.to_owned(),
                    }),
                }
            }
        }
    };
}

define_setting_enum! {
    /// Application night theme.
    NightTheme {
        Disabled => "DISABLED",
        Enabled => "ENABLED",
        /// Follow the operating system.
        System => "SYSTEM",
    }
    default = System
}

define_setting_enum! {
    /// Text size used across lists and the widget.
    FontSize {
        Small => "SMALL",
        Medium => "MEDIUM",
        Large => "LARGE",
        Huge => "HUGE",
        VeryHuge => "VERY_HUGE",
    }
    default = Medium
}

define_setting_enum! {
    /// Ordering of shopping lists or products.
    SortBy {
        Created => "CREATED",
        LastModified => "LAST_MODIFIED",
        Name => "NAME",
        Total => "TOTAL",
    }
    default = Created
}

define_setting_enum! {
    /// Where completed products are shown.
    DisplayCompleted {
        First => "FIRST",
        Last => "LAST",
        Hide => "HIDE",
        /// Completed products stay in place.
        NoSplit => "NO_SPLIT",
    }
    default = Last
}

define_setting_enum! {
    /// Which money field is derived from the other two while editing a product.
    LockProductElement {
        Quantity => "QUANTITY",
        PricePerUnit => "PRICE_PER_UNIT",
        Total => "TOTAL",
    }
    default = Total
}

define_setting_enum! {
    /// What happens after a product is saved from the editor.
    AfterAddProduct {
        Close => "CLOSE",
        AddAnother => "ADD_ANOTHER",
    }
    default = Close
}

define_setting_enum! {
    /// Theme of the home-screen product widget.
    WidgetTheme {
        Light => "LIGHT",
        Dark => "DARK",
        System => "SYSTEM",
    }
    default = System
}

define_setting_enum! {
    /// Which screen a shopping list lives in.
    ShoppingLocation {
        Purchases => "PURCHASES",
        Archive => "ARCHIVE",
        Trash => "TRASH",
    }
    default = Purchases
}
