//! Lifecycle status enums for video jobs and products.
//!
//! Statuses are stored as lowercase text columns (guarded by CHECK
//! constraints), so each variant maps to exactly one string literal.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in lifecycle order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The string stored in the database and sent over the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }

            /// Parse a stored status string. Returns `None` for unknown values.
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $( $val => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_status_enum! {
    /// Video job lifecycle: `pending -> scraping -> generating -> completed | failed`.
    VideoJobStatus {
        Pending = "pending",
        Scraping = "scraping",
        Generating = "generating",
        Completed = "completed",
        Failed = "failed",
    }
}

define_status_enum! {
    /// Per-product video generation status.
    ProductStatus {
        Pending = "pending",
        Generating = "generating",
        Completed = "completed",
        Failed = "failed",
    }
}

impl VideoJobStatus {
    /// Completed and failed jobs never change status again.
    pub fn is_terminal(self) -> bool {
        matches!(self, VideoJobStatus::Completed | VideoJobStatus::Failed)
    }
}

impl ProductStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ProductStatus::Completed | ProductStatus::Failed)
    }
}
