//! The accessor seam: typed views layered over a record.

use super::error::Result;
use super::value::FieldValue;
use super::Record;

/// Read surface shared by every typed view over a [`Record`].
///
/// The precedence contract: a declared accessor strictly wins over the raw
/// fallback, and the fallback only engages for names with no accessor. A
/// name that is neither declared nor stored fails with
/// [`RecordError::UnknownField`](super::RecordError) carrying the requested
/// name.
pub trait FieldAccess {
    fn record(&self) -> &Record;

    /// Names with a declared typed accessor.
    fn accessor_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Typed dispatch for declared names; `None` when `name` is undeclared.
    fn accessor(&self, name: &str) -> Option<Result<FieldValue>> {
        let _ = name;
        None
    }

    /// Dynamic read with accessor precedence.
    fn field(&self, name: &str) -> Result<FieldValue> {
        if let Some(rendered) = self.accessor(name) {
            return rendered;
        }
        self.record()
            .raw(name)
            .map(|raw| FieldValue::Text(raw.to_string()))
    }
}

/// A bare record reads everything through the fallback.
impl FieldAccess for Record {
    fn record(&self) -> &Record {
        self
    }
}

/// Declares a typed view over a [`Record`].
///
/// Generates the view struct, a `new` constructor, one fallible typed getter
/// per declared field, and the [`FieldAccess`] impl wiring those getters
/// into [`FieldAccess::field`] dispatch.
///
/// ```
/// use protected_record::{field_accessors, FieldAccess, Record};
/// use uuid::Uuid;
///
/// field_accessors! {
///     /// Typed view over one backup manifest entry.
///     pub struct BackupManifest {
///         count: u32 => "count",
///         backup_set: Uuid => "backup_set",
///     }
/// }
///
/// # fn demo() -> protected_record::Result<()> {
/// let record = Record::builder()
///     .field("count", "162")
///     .field("backup_set", "76144912-5d67-4a6a-9f7d-3631bc901ad8")
///     .field("type", "full")
///     .build()?;
/// let manifest = BackupManifest::new(record);
/// assert_eq!(manifest.count()?, 162);
/// // Undeclared fields stay reachable through the fallback.
/// assert_eq!(manifest.field("type")?.to_string(), "full");
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
#[macro_export]
macro_rules! field_accessors {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$getter_meta:meta])*
                $getter:ident : $ty:ty => $field:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            record: $crate::Record,
        }

        impl $name {
            $vis fn new(record: $crate::Record) -> Self {
                Self { record }
            }

            $(
                $(#[$getter_meta])*
                $vis fn $getter(&self) -> $crate::Result<$ty> {
                    self.record.get($field)
                }
            )*
        }

        impl $crate::FieldAccess for $name {
            fn record(&self) -> &$crate::Record {
                &self.record
            }

            fn accessor_names(&self) -> &'static [&'static str] {
                &[$($field),*]
            }

            fn accessor(
                &self,
                name: &str,
            ) -> ::core::option::Option<$crate::Result<$crate::FieldValue>> {
                match name {
                    $(
                        $field => ::core::option::Option::Some(
                            self.$getter().map($crate::FieldValue::from),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::record::error::RecordError;
    use crate::record::{FieldAccess, FieldValue, Record};

    field_accessors! {
        struct Message {
            message_id: i64 => "message_id",
        }
    }

    fn sample() -> Record {
        Record::builder()
            .source(vec![
                ("message_id".to_string(), "42".to_string()),
                ("extra".to_string(), "ignored".to_string()),
            ])
            .expect("source")
            .build()
            .expect("build")
    }

    #[test]
    fn declared_accessor_wins_over_fallback() {
        let view = Message::new(sample());
        assert_eq!(
            view.field("message_id").expect("declared"),
            FieldValue::Integer(42)
        );
    }

    #[test]
    fn fallback_serves_undeclared_fields_raw() {
        let view = Message::new(sample());
        assert_eq!(
            view.field("extra").expect("stored"),
            FieldValue::Text("ignored".to_string())
        );
    }

    #[test]
    fn missing_field_fails_with_requested_name() {
        let view = Message::new(sample());
        match view.field("missing_field") {
            Err(RecordError::UnknownField(name)) => assert_eq!(name, "missing_field"),
            other => panic!("expected UnknownField, got {:?}", other),
        }
    }

    #[test]
    fn bare_record_reads_through_fallback_only() {
        let record = sample();
        assert!(record.accessor("message_id").is_none());
        assert_eq!(
            record.field("message_id").expect("stored"),
            FieldValue::Text("42".to_string())
        );
    }
}
