//! Image internal formats for `layout(<format>)` on image declarations.

/// Internal format of an image uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Unspecified,
    Rgba32f,
    Rgba16f,
    R32f,
    Rgba32ui,
    Rgba16ui,
    Rgba8ui,
    R32ui,
    Rgba32i,
    Rgba16i,
    Rgba8i,
    R32i,
    Rgba8,
    Rgba8Snorm,
}

/// Every specified format with its layout keyword.
pub const IMAGE_FORMATS: &[(ImageFormat, &str)] = &[
    (ImageFormat::Rgba32f, "rgba32f"),
    (ImageFormat::Rgba16f, "rgba16f"),
    (ImageFormat::R32f, "r32f"),
    (ImageFormat::Rgba32ui, "rgba32ui"),
    (ImageFormat::Rgba16ui, "rgba16ui"),
    (ImageFormat::Rgba8ui, "rgba8ui"),
    (ImageFormat::R32ui, "r32ui"),
    (ImageFormat::Rgba32i, "rgba32i"),
    (ImageFormat::Rgba16i, "rgba16i"),
    (ImageFormat::Rgba8i, "rgba8i"),
    (ImageFormat::R32i, "r32i"),
    (ImageFormat::Rgba8, "rgba8"),
    (ImageFormat::Rgba8Snorm, "rgba8_snorm"),
];

/// Layout keyword for a format; `None` when the format is unspecified.
pub fn keyword(format: ImageFormat) -> Option<&'static str> {
    IMAGE_FORMATS
        .iter()
        .find(|(candidate, _)| *candidate == format)
        .map(|(_, spelling)| *spelling)
}
