//! Interface-block layout enumerations.
//!
//! Block layouts are rendered as `layout(<storage>, <packing>) `. Unspecified values fall back to the GLSL defaults
//! (`shared`, `column_major`).

/// Memory layout of an interface block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockStorage {
    #[default]
    Unspecified,
    Shared,
    Packed,
    Std140,
}

/// Matrix packing inside an interface block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixPacking {
    #[default]
    Unspecified,
    ColumnMajor,
    RowMajor,
}

pub fn storage_keyword(storage: BlockStorage) -> &'static str {
    match storage {
        BlockStorage::Unspecified | BlockStorage::Shared => "shared",
        BlockStorage::Packed => "packed",
        BlockStorage::Std140 => "std140",
    }
}

pub fn packing_keyword(packing: MatrixPacking) -> &'static str {
    match packing {
        MatrixPacking::Unspecified | MatrixPacking::ColumnMajor => "column_major",
        MatrixPacking::RowMajor => "row_major",
    }
}
