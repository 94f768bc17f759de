// ── Three-valued attribute ──
//
// Every model field distinguishes "not known yet" from "explicitly null"
// from "has a value". In plan/state JSON an absent key is `Unset`, a
// `null` is `Null` and anything else is `Value`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Attr<T> {
    /// Not known yet: computed by the remote side or left out of the plan.
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Attr<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Known and not null.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Attr<&T> {
        match self {
            Self::Unset => Attr::Unset,
            Self::Null => Attr::Null,
            Self::Value(v) => Attr::Value(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attr<U> {
        match self {
            Self::Unset => Attr::Unset,
            Self::Null => Attr::Null,
            Self::Value(v) => Attr::Value(f(v)),
        }
    }

    /// Keep `self` unless it is `Unset`, in which case take `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Unset => other,
            known => known,
        }
    }
}

impl<T: PartialEq> Attr<T> {
    /// `true` when `self` holds a value that differs from `previous`.
    ///
    /// Used to gate update steps: unknown and null plan values never trigger
    /// a remote call.
    pub fn is_set_and_changed(&self, previous: &Self) -> bool {
        match self {
            Self::Value(v) => previous.value() != Some(v),
            _ => false,
        }
    }
}

impl Attr<String> {
    pub fn as_deref(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

impl<T> From<Option<T>> for Attr<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T: Serialize> Serialize for Attr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Attr<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Into::into)
    }
}
