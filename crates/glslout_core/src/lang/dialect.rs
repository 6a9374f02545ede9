//! Output dialects and shader stages.
//!
//! The renderer adapts its spelling to the dialect it targets. Every version-dependent decision is phrased as one
//! of the predicates below so that the thresholds live in exactly one place.

/// Target dialect of the rendered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum OutputDialect {
    /// OpenGL ES shading language (any version; the source version is carried separately).
    #[default]
    Essl,
    /// Desktop GLSL 1.10 compatibility profile.
    GlslCompatibility,
    Glsl130,
    Glsl140,
    Glsl150Core,
    Glsl330Core,
    Glsl400Core,
    Glsl410Core,
    Glsl420Core,
    Glsl430Core,
    Glsl440Core,
    Glsl450Core,
}

/// All dialects, in ascending order.
pub const DIALECTS: &[OutputDialect] = &[
    OutputDialect::Essl,
    OutputDialect::GlslCompatibility,
    OutputDialect::Glsl130,
    OutputDialect::Glsl140,
    OutputDialect::Glsl150Core,
    OutputDialect::Glsl330Core,
    OutputDialect::Glsl400Core,
    OutputDialect::Glsl410Core,
    OutputDialect::Glsl420Core,
    OutputDialect::Glsl430Core,
    OutputDialect::Glsl440Core,
    OutputDialect::Glsl450Core,
];

impl OutputDialect {
    /// Desktop GLSL version number, or `None` for ESSL.
    pub fn glsl_version(self) -> Option<u32> {
        match self {
            OutputDialect::Essl => None,
            OutputDialect::GlslCompatibility => Some(110),
            OutputDialect::Glsl130 => Some(130),
            OutputDialect::Glsl140 => Some(140),
            OutputDialect::Glsl150Core => Some(150),
            OutputDialect::Glsl330Core => Some(330),
            OutputDialect::Glsl400Core => Some(400),
            OutputDialect::Glsl410Core => Some(410),
            OutputDialect::Glsl420Core => Some(420),
            OutputDialect::Glsl430Core => Some(430),
            OutputDialect::Glsl440Core => Some(440),
            OutputDialect::Glsl450Core => Some(450),
        }
    }

    pub fn is_essl(self) -> bool {
        self == OutputDialect::Essl
    }

    /// `in`/`out` replaced `attribute`/`varying` in GLSL 1.30.
    pub fn is_glsl130_or_newer(self) -> bool {
        self.glsl_version().is_some_and(|v| v >= 130)
    }

    /// Desktop dialects that still reject `centroid`/`invariant` on ESSL 3 style interface variables.
    pub fn is_glsl410_or_older(self) -> bool {
        self.glsl_version().is_some_and(|v| v <= 410)
    }

    pub fn is_glsl420_or_newer(self) -> bool {
        self.glsl_version().is_some_and(|v| v >= 420)
    }

    /// Only ESSL carries precision qualifiers.
    pub fn writes_precision(self) -> bool {
        self.is_essl()
    }
}

/// Pipeline stage the shader belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShaderStage {
    Vertex,
    #[default]
    Fragment,
    Compute,
}
