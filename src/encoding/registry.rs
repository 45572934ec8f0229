// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type-keyed codec registry.
//!
//! The registry maps a Rust type to its default codec. Tuple codecs use it to
//! resolve one codec per slot when no explicit codecs are supplied.
//!
//! # Example
//!
//! ```
//! use tuplecodec::encoding::CodecRegistry;
//! use tuplecodec::io::encode_to_value;
//!
//! # fn main() -> tuplecodec::Result<()> {
//! let registry = CodecRegistry::with_builtins();
//! let codec = registry.tuple_codec::<(i32, String, bool)>()?;
//! let tree = encode_to_value(&codec, &(1, "a".to_string(), true))?;
//! assert_eq!(tree.as_array().map(|a| a.len()), Some(3));
//! # Ok(())
//! # }
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use super::adapters::NullableCodec;
use super::codec::{Codec, SharedCodec};
use super::primitive::{
    BoolCodec, BytesCodec, Float64Codec, Int32Codec, Int64Codec, StringCodec, ValueCodec,
};
use super::tuple::DefaultTupleCodec;
use crate::core::{CodecError, CodecValue, Result};

struct Registration {
    type_name: &'static str,
    /// Always a `SharedCodec<T>` for the `TypeId` it is stored under.
    codec: Box<dyn Any + Send + Sync>,
}

/// Registry of default codecs keyed by value type.
///
/// Uses RwLock for concurrent resolution with exclusive registration.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: RwLock<HashMap<TypeId, Registration>>,
}

impl CodecRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding codecs for the builtin types.
    ///
    /// Registers `bool`, `i32`, `i64`, `f64`, `String`, `Vec<u8>` and
    /// [`CodecValue`], plus `Option<_>` of each.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register_builtins();
        registry
    }

    fn register_builtins(&self) {
        fn both<T, C>(registry: &CodecRegistry, codec: C)
        where
            T: 'static,
            C: Codec<T> + Clone + 'static,
        {
            registry.insert::<T>(Arc::new(codec.clone()));
            registry.insert::<Option<T>>(Arc::new(NullableCodec::new(codec)));
        }

        both::<bool, _>(self, BoolCodec);
        both::<i32, _>(self, Int32Codec);
        both::<i64, _>(self, Int64Codec);
        both::<f64, _>(self, Float64Codec);
        both::<String, _>(self, StringCodec);
        both::<Vec<u8>, _>(self, BytesCodec);
        both::<CodecValue, _>(self, ValueCodec::any());
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<TypeId, Registration>>> {
        self.codecs
            .read()
            .map_err(|e| CodecError::Other(format!("Registry lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<TypeId, Registration>>> {
        self.codecs
            .write()
            .map_err(|e| CodecError::Other(format!("Registry lock poisoned: {e}")))
    }

    /// Insert ignoring lock poisoning; used while the registry is still private.
    fn insert<T: 'static>(&self, codec: SharedCodec<T>) {
        let registration = Registration {
            type_name: type_name::<T>(),
            codec: Box::new(codec),
        };
        let mut codecs = match self.codecs.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        codecs.insert(TypeId::of::<T>(), registration);
    }

    /// Register `codec` as the default codec for `T`.
    ///
    /// Replaces an existing registration for `T`.
    pub fn register<T, C>(&self, codec: C) -> Result<()>
    where
        T: 'static,
        C: Codec<T> + 'static,
    {
        self.register_shared::<T>(Arc::new(codec))
    }

    /// Register an already shared codec as the default codec for `T`.
    pub fn register_shared<T: 'static>(&self, codec: SharedCodec<T>) -> Result<()> {
        let registration = Registration {
            type_name: type_name::<T>(),
            codec: Box::new(codec),
        };
        let previous = self.write()?.insert(TypeId::of::<T>(), registration);
        if let Some(previous) = previous {
            warn!(type_name = previous.type_name, "replacing registered codec");
        }
        Ok(())
    }

    /// Resolve a tuple codec for `T` and register it as `T`'s default.
    ///
    /// Registering a tuple type makes it resolvable as a slot of another
    /// tuple, which is how the rest slot of an 8-tuple gets a nested codec.
    pub fn register_tuple<T: DefaultTupleCodec>(&self) -> Result<()> {
        let codec = T::resolve_codec(self)?;
        self.register::<T, _>(codec)
    }

    /// Resolve the default codec for `T`.
    ///
    /// # Errors
    ///
    /// [`CodecError::TypeNotFound`] if nothing is registered for `T`.
    pub fn resolve<T: 'static>(&self) -> Result<SharedCodec<T>> {
        let codecs = self.read()?;
        let registration = codecs.get(&TypeId::of::<T>()).ok_or_else(|| {
            let err = CodecError::type_not_found(type_name::<T>());
            debug!(fields = ?err.log_fields(), "codec lookup failed");
            err
        })?;
        let codec = registration
            .codec
            .downcast_ref::<SharedCodec<T>>()
            .ok_or_else(|| {
                CodecError::Other(format!(
                    "registration for '{}' holds a codec of another type",
                    registration.type_name
                ))
            })?;
        debug!(type_name = registration.type_name, "resolved codec");
        Ok(Arc::clone(codec))
    }

    /// Build a tuple codec for `T` with every slot resolved from this registry.
    ///
    /// # Errors
    ///
    /// [`CodecError::TypeNotFound`] naming the first slot type without a codec.
    pub fn tuple_codec<T: DefaultTupleCodec>(&self) -> Result<T::Resolved> {
        T::resolve_codec(self)
    }

    /// Check whether a codec is registered for `T`.
    pub fn contains<T: 'static>(&self) -> Result<bool> {
        Ok(self.read()?.contains_key(&TypeId::of::<T>()))
    }

    /// Remove the registration for `T`.
    ///
    /// Returns `true` if a codec was registered.
    pub fn unregister<T: 'static>(&self) -> Result<bool> {
        Ok(self.write()?.remove(&TypeId::of::<T>()).is_some())
    }

    /// Names of all registered types, sorted.
    pub fn registered_types(&self) -> Result<Vec<&'static str>> {
        let mut names: Vec<_> = self.read()?.values().map(|r| r.type_name).collect();
        names.sort_unstable();
        Ok(names)
    }

    /// Number of registered codecs.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("CodecRegistry");
        match self.registered_types() {
            Ok(types) => debug.field("types", &types),
            Err(_) => debug.field("types", &"<poisoned>"),
        };
        debug.finish()
    }
}

static GLOBAL_REGISTRY: OnceLock<CodecRegistry> = OnceLock::new();

/// Process-wide registry, initialised with the builtin codecs.
///
/// For isolated configuration, create a [`CodecRegistry`] directly.
pub fn global_registry() -> &'static CodecRegistry {
    GLOBAL_REGISTRY.get_or_init(CodecRegistry::with_builtins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::WithOptions;
    use crate::io::{decode_from_value, encode_to_value};
    use crate::CodecOptions;

    #[derive(Debug, PartialEq)]
    struct Unregistered;

    #[test]
    fn test_register_and_resolve() {
        let registry = CodecRegistry::new();
        assert!(registry.is_empty().unwrap());

        registry.register::<i32, _>(Int32Codec).unwrap();
        assert!(registry.contains::<i32>().unwrap());
        assert_eq!(registry.len().unwrap(), 1);

        let codec = registry.resolve::<i32>().unwrap();
        assert_eq!(encode_to_value(&codec, &3).unwrap(), CodecValue::Int32(3));
    }

    #[test]
    fn test_resolve_unknown_type() {
        let registry = CodecRegistry::with_builtins();
        let err = registry.resolve::<Unregistered>().err().unwrap();
        match err {
            CodecError::TypeNotFound { type_name } => assert!(type_name.ends_with("Unregistered")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unregister() {
        let registry = CodecRegistry::with_builtins();
        assert!(registry.unregister::<f64>().unwrap());
        assert!(!registry.unregister::<f64>().unwrap());
        assert!(!registry.contains::<f64>().unwrap());
    }

    #[test]
    fn test_builtins() {
        let registry = CodecRegistry::with_builtins();
        assert_eq!(registry.len().unwrap(), 14);
        assert!(registry.contains::<Option<String>>().unwrap());
        assert!(registry.contains::<Vec<u8>>().unwrap());
        assert!(registry.registered_types().unwrap().contains(&"bool"));
    }

    #[test]
    fn test_tuple_codec_from_registry() {
        let registry = CodecRegistry::with_builtins();
        let codec = registry.tuple_codec::<(i64, Option<bool>)>().unwrap();
        let tree = encode_to_value(&codec, &(4i64, None)).unwrap();
        assert_eq!(
            tree,
            CodecValue::Array(vec![CodecValue::Int64(4), CodecValue::Null])
        );
        let decoded: (i64, Option<bool>) = decode_from_value(&codec, &tree).unwrap();
        assert_eq!(decoded, (4, None));
    }

    #[test]
    fn test_tuple_codec_missing_slot_type() {
        let registry = CodecRegistry::with_builtins();
        let err = registry.tuple_codec::<(i32, Unregistered)>().err().unwrap();
        assert!(matches!(err, CodecError::TypeNotFound { .. }));
    }

    #[test]
    fn test_register_replaces() {
        let registry = CodecRegistry::new();
        registry.register::<i32, _>(Int32Codec).unwrap();
        registry
            .register::<i32, _>(WithOptions::new(Int32Codec, |o: &mut CodecOptions| {
                o.lenient_numbers = true
            }))
            .unwrap();
        assert_eq!(registry.len().unwrap(), 1);

        let codec = registry.resolve::<i32>().unwrap();
        let decoded: i32 = decode_from_value(&codec, &CodecValue::Float64(2.0)).unwrap();
        assert_eq!(decoded, 2);
    }

    #[test]
    fn test_concurrent_access() {
        use std::thread;

        let registry = Arc::new(CodecRegistry::with_builtins());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let codec = registry.tuple_codec::<(i32, String)>().unwrap();
                    let value = (n, n.to_string());
                    let tree = encode_to_value(&codec, &value).unwrap();
                    let decoded: (i32, String) = decode_from_value(&codec, &tree).unwrap();
                    assert_eq!(decoded, value);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_global_registry_has_builtins() {
        assert!(global_registry().contains::<String>().unwrap());
    }
}
