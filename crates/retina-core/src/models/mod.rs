use crate::error::CoreError;

/// A fixed choice list rendered by the presentation layer.
///
/// `value` is the wire form accepted by the API, `label` is what a person
/// reads (and what goes into the prompt).
pub trait Choice: Sized + Copy + 'static {
    const KIND: &'static str;

    fn all() -> &'static [Self];
    fn value(self) -> &'static str;

    fn label(self) -> &'static str {
        self.value()
    }

    fn from_value(value: &str) -> Result<Self, CoreError> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.value() == value)
            .ok_or_else(|| CoreError::UnknownLabel {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

/// Declares a choice enum whose wire value and label are the same string.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize, ts_rs::TS,
        )]
        #[ts(export)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::models::Choice for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::models::Choice::label(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::models::Choice>::from_value(s)
            }
        }
    };
}

pub mod clinical;
pub mod evaluation;
pub mod metric;
pub mod options;
pub mod patient;
