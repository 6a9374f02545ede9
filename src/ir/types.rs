//! IR type definitions
//!
//! A [`Type`] describes one *occurrence* of a type: the same struct may appear with different qualifiers,
//! precisions or array sizes. Struct and interface-block bodies live in shared definitions.

use std::sync::Arc;

use glslout_core::lang::image_formats::ImageFormat;
use glslout_core::lang::layout::{BlockStorage, MatrixPacking};
use glslout_core::lang::qualifiers::Qualifier;
use glslout_core::lang::types::{BasicType, Precision};

/// Identity of a struct definition, stable for a whole pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructId(pub u32);

/// Identity of an interface-block definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

/// Memory access qualifiers. Only legal on image types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryQualifiers {
    pub readonly: bool,
    pub writeonly: bool,
    pub coherent: bool,
    pub restrict: bool,
    pub volatile: bool,
}

impl MemoryQualifiers {
    /// Set flags paired with their keywords, in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.readonly, "readonly"),
            (self.writeonly, "writeonly"),
            (self.coherent, "coherent"),
            (self.restrict, "restrict"),
            (self.volatile, "volatile"),
        ]
        .into_iter()
        .filter_map(|(set, keyword)| set.then_some(keyword))
    }
}

/// Explicit placement / format annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutQualifier {
    pub location: Option<u32>,
    pub image_format: ImageFormat,
}

/// A named member of a struct or interface block.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self { name: name.into(), ty }
    }
}

/// User (or built-in) struct definition.
///
/// An empty name denotes an anonymous struct; anonymous structs are never recorded as declared.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub id: StructId,
    pub name: String,
    pub fields: Vec<Field>,
}

impl StructDef {
    pub fn new(id: StructId, name: impl Into<String>, fields: Vec<Field>) -> Arc<Self> {
        Arc::new(Self {
            id,
            name: name.into(),
            fields,
        })
    }
}

/// Uniform / buffer interface-block definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceBlockDef {
    pub id: BlockId,
    pub name: String,
    pub fields: Vec<Field>,
    pub storage: BlockStorage,
    pub packing: MatrixPacking,
}

impl InterfaceBlockDef {
    pub fn new(id: BlockId, name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id,
            name: name.into(),
            fields,
            storage: BlockStorage::Unspecified,
            packing: MatrixPacking::Unspecified,
        }
    }

    pub fn with_layout(mut self, storage: BlockStorage, packing: MatrixPacking) -> Self {
        self.storage = storage;
        self.packing = packing;
        self
    }
}

/// Type descriptor carried by every typed node.
///
/// ## Notes
/// - `cols` is the vector size (or matrix column count), `rows` the matrix row count; scalars are `1x1`.
/// - `structure` is set exactly when `basic` is [`BasicType::Struct`], `interface_block` exactly when it is
///   [`BasicType::InterfaceBlock`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Type {
    pub basic: BasicType,
    pub precision: Precision,
    pub qualifier: Qualifier,
    pub invariant: bool,
    pub memory: MemoryQualifiers,
    pub layout: LayoutQualifier,
    pub cols: u8,
    pub rows: u8,
    pub array_size: Option<u32>,
    pub structure: Option<Arc<StructDef>>,
    pub interface_block: Option<Arc<InterfaceBlockDef>>,
}

impl Type {
    pub fn void() -> Self {
        Self::scalar(BasicType::Void)
    }

    pub fn scalar(basic: BasicType) -> Self {
        Self {
            basic,
            cols: 1,
            rows: 1,
            ..Self::default()
        }
    }

    pub fn vector(basic: BasicType, size: u8) -> Self {
        Self {
            cols: size,
            ..Self::scalar(basic)
        }
    }

    pub fn matrix(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            ..Self::scalar(BasicType::Float)
        }
    }

    pub fn structure(def: Arc<StructDef>) -> Self {
        Self {
            structure: Some(def),
            ..Self::scalar(BasicType::Struct)
        }
    }

    pub fn interface_block(def: Arc<InterfaceBlockDef>) -> Self {
        Self {
            interface_block: Some(def),
            ..Self::scalar(BasicType::InterfaceBlock)
        }
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_array_size(mut self, size: u32) -> Self {
        self.array_size = Some(size);
        self
    }

    pub fn with_memory(mut self, memory: MemoryQualifiers) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_layout(mut self, layout: LayoutQualifier) -> Self {
        self.layout = layout;
        self
    }

    pub fn invariant(mut self) -> Self {
        self.invariant = true;
        self
    }

    pub fn is_array(&self) -> bool {
        self.array_size.is_some()
    }

    /// The type of one array element (the type itself when not an array).
    pub fn element_type(&self) -> Type {
        Type {
            array_size: None,
            ..self.clone()
        }
    }

    /// Number of scalar components of one element (ignoring array size).
    pub fn element_component_count(&self) -> usize {
        match &self.structure {
            Some(def) => def.fields.iter().map(|f| f.ty.object_size()).sum(),
            None => usize::from(self.cols) * usize::from(self.rows),
        }
    }

    /// Number of scalar components of the whole object, array included.
    pub fn object_size(&self) -> usize {
        let count = self.array_size.map_or(1, |n| n as usize);
        self.element_component_count() * count
    }
}
