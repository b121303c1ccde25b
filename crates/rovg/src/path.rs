//! Path objects, the core drawing primitive.
//!
//! A path is a sequence of segment commands (move, line, curve, arc) plus
//! the coordinate data those commands consume, stored inside the
//! implementation in one of four numeric datatypes. The segment/coordinate
//! split is also how data crosses the FFI boundary: commands travel as a
//! byte array and coordinates as a typed array, and this module validates
//! that the two agree before anything is handed to the native library.

use std::marker::PhantomData;

use rovg_sys::{consts, VGubyte};

use crate::{
    macros::imp_enum, mask::MaskOperation, paint::PaintMode, Handle,
    PathHandle, Vg, VgError, VgResult,
};

imp_enum! {
    /// The numeric type a path stores its coordinates in.
    PathDatatype: "VGPathDatatype" {
        /// Signed 8-bit coordinates.
        S8 = consts::VG_PATH_DATATYPE_S_8,
        /// Signed 16-bit coordinates.
        S16 = consts::VG_PATH_DATATYPE_S_16,
        /// Signed 32-bit coordinates.
        S32 = consts::VG_PATH_DATATYPE_S_32,
        /// 32-bit floating-point coordinates.
        F = consts::VG_PATH_DATATYPE_F,
    }
}

bitflags::bitflags! {
    /// Operations a path can accept.
    ///
    /// Capabilities not requested at creation (or later
    /// [removed](Path::remove_capabilities)) make the corresponding calls
    /// fail with [VgError::PathCapability](crate::VgError::PathCapability).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PathCapabilities: u32 {
        /// Use as the source of [Path::append].
        const APPEND_FROM = consts::VG_PATH_CAPABILITY_APPEND_FROM;
        /// Use as the target of [Path::append] and [Path::append_data].
        const APPEND_TO = consts::VG_PATH_CAPABILITY_APPEND_TO;
        /// Use as the target of [Path::modify_coords].
        const MODIFY = consts::VG_PATH_CAPABILITY_MODIFY;
        /// Use as the source of [Path::transform_from].
        const TRANSFORM_FROM = consts::VG_PATH_CAPABILITY_TRANSFORM_FROM;
        /// Use as the target of [Path::transform_from].
        const TRANSFORM_TO = consts::VG_PATH_CAPABILITY_TRANSFORM_TO;
        /// Use as an endpoint of [Path::interpolate_between].
        const INTERPOLATE_FROM =
            consts::VG_PATH_CAPABILITY_INTERPOLATE_FROM;
        /// Use as the target of [Path::interpolate_between].
        const INTERPOLATE_TO = consts::VG_PATH_CAPABILITY_INTERPOLATE_TO;
        /// Query [Path::length].
        const PATH_LENGTH = consts::VG_PATH_CAPABILITY_PATH_LENGTH;
        /// Query the point of [Path::point_along].
        const POINT_ALONG_PATH =
            consts::VG_PATH_CAPABILITY_POINT_ALONG_PATH;
        /// Query the tangent of [Path::point_along].
        const TANGENT_ALONG_PATH =
            consts::VG_PATH_CAPABILITY_TANGENT_ALONG_PATH;
        /// Query [Path::bounds].
        const PATH_BOUNDS = consts::VG_PATH_CAPABILITY_PATH_BOUNDS;
        /// Query [Path::transformed_bounds].
        const PATH_TRANSFORMED_BOUNDS =
            consts::VG_PATH_CAPABILITY_PATH_TRANSFORMED_BOUNDS;
    }
}

/// One of the thirteen segment command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SegmentType {
    /// Close the current subpath.
    ClosePath = 0,
    /// Start a new subpath.
    MoveTo = 1,
    /// Straight line.
    LineTo = 2,
    /// Horizontal line.
    HLineTo = 3,
    /// Vertical line.
    VLineTo = 4,
    /// Quadratic Bézier.
    QuadTo = 5,
    /// Cubic Bézier.
    CubicTo = 6,
    /// Smooth quadratic Bézier.
    SQuadTo = 7,
    /// Smooth cubic Bézier.
    SCubicTo = 8,
    /// Small counter-clockwise elliptical arc.
    SccwArcTo = 9,
    /// Small clockwise elliptical arc.
    ScwArcTo = 10,
    /// Large counter-clockwise elliptical arc.
    LccwArcTo = 11,
    /// Large clockwise elliptical arc.
    LcwArcTo = 12,
}

impl SegmentType {
    /// How many coordinates this segment kind consumes.
    pub fn coord_count(self) -> usize {
        match self {
            Self::ClosePath => 0,
            Self::HLineTo | Self::VLineTo => 1,
            Self::MoveTo | Self::LineTo | Self::SQuadTo => 2,
            Self::QuadTo | Self::SCubicTo => 4,
            Self::SccwArcTo
            | Self::ScwArcTo
            | Self::LccwArcTo
            | Self::LcwArcTo => 5,
            Self::CubicTo => 6,
        }
    }

    fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::ClosePath,
            1 => Self::MoveTo,
            2 => Self::LineTo,
            3 => Self::HLineTo,
            4 => Self::VLineTo,
            5 => Self::QuadTo,
            6 => Self::CubicTo,
            7 => Self::SQuadTo,
            8 => Self::SCubicTo,
            9 => Self::SccwArcTo,
            10 => Self::ScwArcTo,
            11 => Self::LccwArcTo,
            12 => Self::LcwArcTo,
            _ => return None,
        })
    }
}

/// A complete segment command: a [SegmentType] plus the absolute/relative
/// flag, encoded as OpenVG stores it (`type << 1 | relative`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentCommand(VGubyte);

impl SegmentCommand {
    /// A command taking absolute coordinates.
    pub const fn absolute(ty: SegmentType) -> Self {
        Self((ty as VGubyte) << 1)
    }

    /// A command taking coordinates relative to the current point.
    pub const fn relative(ty: SegmentType) -> Self {
        Self((ty as VGubyte) << 1 | 1)
    }

    /// The segment kind.
    pub fn segment_type(self) -> SegmentType {
        // Constructible only through the two constructors above, so the
        // index is always in range.
        SegmentType::from_index(self.0 >> 1).unwrap_or(SegmentType::ClosePath)
    }

    /// Whether coordinates are relative to the current point.
    pub fn is_relative(self) -> bool {
        self.0 & 1 == 1
    }

    /// The encoded command byte.
    pub fn raw(self) -> VGubyte {
        self.0
    }
}

/// Coordinate data for [Path::append_data] or [Path::modify_coords], typed
/// to match the path's [PathDatatype].
#[derive(Debug, Clone, Copy)]
pub enum PathData<'a> {
    /// Signed 8-bit coordinates.
    S8(&'a [i8]),
    /// Signed 16-bit coordinates.
    S16(&'a [i16]),
    /// Signed 32-bit coordinates.
    S32(&'a [i32]),
    /// 32-bit floating-point coordinates.
    F(&'a [f32]),
}

impl PathData<'_> {
    /// The datatype this buffer holds.
    pub fn datatype(&self) -> PathDatatype {
        match self {
            Self::S8(_) => PathDatatype::S8,
            Self::S16(_) => PathDatatype::S16,
            Self::S32(_) => PathDatatype::S32,
            Self::F(_) => PathDatatype::F,
        }
    }

    /// The number of coordinates in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Self::S8(v) => v.len(),
            Self::S16(v) => v.len(),
            Self::S32(v) => v.len(),
            Self::F(v) => v.len(),
        }
    }

    /// Whether the buffer holds no coordinates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_ptr(&self) -> *const std::ffi::c_void {
        match self {
            Self::S8(v) => v.as_ptr().cast(),
            Self::S16(v) => v.as_ptr().cast(),
            Self::S32(v) => v.as_ptr().cast(),
            Self::F(v) => v.as_ptr().cast(),
        }
    }
}

/// Coordinates consumed by a command sequence.
fn expected_coords(commands: &[SegmentCommand]) -> usize {
    commands.iter().map(|c| c.segment_type().coord_count()).sum()
}

fn validate_append(
    datatype: PathDatatype,
    commands: &[SegmentCommand],
    data: &PathData<'_>,
) -> VgResult<()> {
    if data.datatype() != datatype {
        return Err(VgError::data(format!(
            "path stores {datatype:?} coordinates, data is {:?}",
            data.datatype()
        )));
    }
    let expected = expected_coords(commands);
    if expected != data.len() {
        return Err(VgError::data(format!(
            "{} segment(s) need {expected} coordinate(s), got {}",
            commands.len(),
            data.len()
        )));
    }
    Ok(())
}

/// How to create a path: the arguments of `vgCreatePath`.
#[derive(Debug, Clone, Copy)]
pub struct PathSpec {
    /// The command format. Only
    /// [VG_PATH_FORMAT_STANDARD](rovg_sys::consts::VG_PATH_FORMAT_STANDARD)
    /// is defined by OpenVG 1.1.
    pub format: i32,
    /// The coordinate datatype.
    pub datatype: PathDatatype,
    /// Scale applied to all incoming coordinates. Must be nonzero.
    pub scale: f32,
    /// Bias applied to all incoming coordinates.
    pub bias: f32,
    /// Expected number of segments, as an allocation hint. Zero for no hint.
    pub segment_capacity_hint: i32,
    /// Expected number of coordinates, as an allocation hint. Zero for no
    /// hint.
    pub coord_capacity_hint: i32,
    /// The operations this path should accept.
    pub capabilities: PathCapabilities,
}

impl Default for PathSpec {
    fn default() -> Self {
        Self {
            format: consts::VG_PATH_FORMAT_STANDARD,
            datatype: PathDatatype::S32,
            scale: 1.0,
            bias: 0.0,
            segment_capacity_hint: 0,
            coord_capacity_hint: 0,
            capabilities: PathCapabilities::all(),
        }
    }
}

/// The point and tangent at a distance along a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOnPath {
    /// The point, in user coordinates.
    pub point: (f32, f32),
    /// The unnormalized tangent direction at that point.
    pub tangent: (f32, f32),
}

/// An axis-aligned bounding box in user coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathBounds {
    /// Left edge.
    pub min_x: f32,
    /// Bottom edge.
    pub min_y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// An owned OpenVG path object.
///
/// Created through [Vg::create_path]; the native object is destroyed on
/// drop. Like all OpenVG objects it belongs to the context that was current
/// at creation and must be used on a thread where that context (or one
/// sharing its resources) is current.
#[derive(Debug)]
pub struct Path {
    vg: Vg,
    handle: PathHandle,
    datatype: PathDatatype,
    capabilities: PathCapabilities,
    _not_send: PhantomData<*const ()>,
}

impl Path {
    pub(crate) fn create(vg: &Vg, spec: &PathSpec) -> VgResult<Self> {
        let raw = unsafe {
            (vg.lib().vgCreatePath)(
                spec.format,
                spec.datatype.raw(),
                spec.scale,
                spec.bias,
                spec.segment_capacity_hint,
                spec.coord_capacity_hint,
                spec.capabilities.bits(),
            )
        };
        vg.check(())?;
        let handle = Handle::new(raw)
            .ok_or(VgError::CreationFailed { what: "path" })?;
        Ok(Self {
            vg: vg.clone(),
            handle: handle.into(),
            datatype: spec.datatype,
            capabilities: spec.capabilities,
            _not_send: PhantomData,
        })
    }

    /// The underlying handle.
    pub fn handle(&self) -> PathHandle {
        self.handle
    }

    /// The coordinate datatype this path stores.
    pub fn datatype(&self) -> PathDatatype {
        self.datatype
    }

    /// The capabilities currently enabled, as reported by the
    /// implementation.
    pub fn capabilities(&self) -> VgResult<PathCapabilities> {
        let raw =
            unsafe { (self.vg.lib().vgGetPathCapabilities)(self.handle.raw()) };
        self.vg
            .check(PathCapabilities::from_bits_truncate(raw))
    }

    /// Permanently disable `capabilities` on this path.
    pub fn remove_capabilities(
        &self,
        capabilities: PathCapabilities,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgRemovePathCapabilities)(
                self.handle.raw(),
                capabilities.bits(),
            )
        };
        self.vg.check(())
    }

    /// Remove all segment and coordinate data, keeping the object itself.
    ///
    /// `capabilities` replaces the path's capability set; `None` keeps the
    /// set it was created with.
    pub fn clear(
        &self,
        capabilities: Option<PathCapabilities>,
    ) -> VgResult<()> {
        let caps = capabilities.unwrap_or(self.capabilities);
        unsafe { (self.vg.lib().vgClearPath)(self.handle.raw(), caps.bits()) };
        self.vg.check(())
    }

    /// Append a copy of all segments of `src` to this path.
    pub fn append(&self, src: &Path) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgAppendPath)(self.handle.raw(), src.handle.raw())
        };
        self.vg.check(())
    }

    /// Append segment commands and their coordinate data.
    ///
    /// `data` must match the path's [datatype](Path::datatype) and contain
    /// exactly the number of coordinates the commands consume; both are
    /// checked here before the native call. An empty command slice is a
    /// no-op.
    pub fn append_data(
        &self,
        commands: &[SegmentCommand],
        data: &PathData<'_>,
    ) -> VgResult<()> {
        validate_append(self.datatype, commands, data)?;
        if commands.is_empty() {
            return Ok(());
        }
        let bytes: Vec<VGubyte> = commands.iter().map(|c| c.raw()).collect();
        unsafe {
            (self.vg.lib().vgAppendPathData)(
                self.handle.raw(),
                commands.len() as i32,
                bytes.as_ptr(),
                data.as_ptr(),
            )
        };
        self.vg.check(())
    }

    /// Overwrite the coordinates of `num_segments` segments starting at
    /// `start_segment`, leaving the commands in place.
    ///
    /// `data` must match the path's datatype; the coordinate count is
    /// checked by the implementation against the existing commands.
    pub fn modify_coords(
        &self,
        start_segment: i32,
        num_segments: i32,
        data: &PathData<'_>,
    ) -> VgResult<()> {
        if data.datatype() != self.datatype {
            return Err(VgError::data(format!(
                "path stores {:?} coordinates, data is {:?}",
                self.datatype,
                data.datatype()
            )));
        }
        unsafe {
            (self.vg.lib().vgModifyPathCoords)(
                self.handle.raw(),
                start_segment,
                num_segments,
                data.as_ptr(),
            )
        };
        self.vg.check(())
    }

    /// Append all segments of `src`, transformed by the current
    /// path-user-to-surface matrix.
    pub fn transform_from(&self, src: &Path) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgTransformPath)(
                self.handle.raw(),
                src.handle.raw(),
            )
        };
        self.vg.check(())
    }

    /// Append the interpolation of `start` and `end` at `amount` (0 is
    /// `start`, 1 is `end`; values outside that range extrapolate).
    ///
    /// Returns whether the two paths were compatible enough to interpolate.
    pub fn interpolate_between(
        &self,
        start: &Path,
        end: &Path,
        amount: f32,
    ) -> VgResult<bool> {
        let ok = unsafe {
            (self.vg.lib().vgInterpolatePath)(
                self.handle.raw(),
                start.handle.raw(),
                end.handle.raw(),
                amount,
            )
        };
        self.vg.check(ok != consts::VG_FALSE)
    }

    /// The geometric length of `num_segments` segments starting at
    /// `start_segment`.
    pub fn length(
        &self,
        start_segment: i32,
        num_segments: i32,
    ) -> VgResult<f32> {
        let len = unsafe {
            (self.vg.lib().vgPathLength)(
                self.handle.raw(),
                start_segment,
                num_segments,
            )
        };
        self.vg.check(len)
    }

    /// The point and tangent at `distance` along the given segment range.
    pub fn point_along(
        &self,
        start_segment: i32,
        num_segments: i32,
        distance: f32,
    ) -> VgResult<PointOnPath> {
        let (mut x, mut y, mut tx, mut ty) = (0.0f32, 0.0f32, 0.0f32, 0.0f32);
        unsafe {
            (self.vg.lib().vgPointAlongPath)(
                self.handle.raw(),
                start_segment,
                num_segments,
                distance,
                &mut x,
                &mut y,
                &mut tx,
                &mut ty,
            )
        };
        self.vg.check(PointOnPath {
            point: (x, y),
            tangent: (tx, ty),
        })
    }

    /// The bounding box of the path geometry, in user coordinates.
    pub fn bounds(&self) -> VgResult<PathBounds> {
        let (mut min_x, mut min_y, mut width, mut height) =
            (0.0f32, 0.0f32, 0.0f32, 0.0f32);
        unsafe {
            (self.vg.lib().vgPathBounds)(
                self.handle.raw(),
                &mut min_x,
                &mut min_y,
                &mut width,
                &mut height,
            )
        };
        self.vg.check(PathBounds {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// The bounding box of the path geometry after the current
    /// path-user-to-surface transform.
    pub fn transformed_bounds(&self) -> VgResult<PathBounds> {
        let (mut min_x, mut min_y, mut width, mut height) =
            (0.0f32, 0.0f32, 0.0f32, 0.0f32);
        unsafe {
            (self.vg.lib().vgPathTransformedBounds)(
                self.handle.raw(),
                &mut min_x,
                &mut min_y,
                &mut width,
                &mut height,
            )
        };
        self.vg.check(PathBounds {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// Fill and/or stroke this path onto the drawing surface.
    pub fn draw(&self, paint_modes: PaintMode) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgDrawPath)(self.handle.raw(), paint_modes.bits())
        };
        self.vg.check(())
    }

    /// Render this path into the surface mask instead of the color buffer.
    pub fn render_to_mask(
        &self,
        paint_modes: PaintMode,
        operation: MaskOperation,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgRenderToMask)(
                self.handle.raw(),
                paint_modes.bits(),
                operation.raw(),
            )
        };
        self.vg.check(())
    }

    /// The command format, as stored by the implementation.
    pub fn format(&self) -> VgResult<i32> {
        self.get_parami(consts::VG_PATH_FORMAT)
    }

    /// The coordinate scale factor.
    pub fn scale(&self) -> VgResult<f32> {
        self.get_paramf(consts::VG_PATH_SCALE)
    }

    /// The coordinate bias.
    pub fn bias(&self) -> VgResult<f32> {
        self.get_paramf(consts::VG_PATH_BIAS)
    }

    /// The number of segments currently stored.
    pub fn num_segments(&self) -> VgResult<i32> {
        self.get_parami(consts::VG_PATH_NUM_SEGMENTS)
    }

    /// The number of coordinates currently stored.
    pub fn num_coords(&self) -> VgResult<i32> {
        self.get_parami(consts::VG_PATH_NUM_COORDS)
    }

    pub(crate) fn vg(&self) -> &Vg {
        &self.vg
    }

    fn get_parami(&self, param: i32) -> VgResult<i32> {
        let value = unsafe {
            (self.vg.lib().vgGetParameteri)(self.handle.raw(), param)
        };
        self.vg.check(value)
    }

    fn get_paramf(&self, param: i32) -> VgResult<f32> {
        let value = unsafe {
            (self.vg.lib().vgGetParameterf)(self.handle.raw(), param)
        };
        self.vg.check(value)
    }
}

impl Drop for Path {
    fn drop(&mut self) {
        unsafe { (self.vg.lib().vgDestroyPath)(self.handle.raw()) };
        if let Some(err) = self.vg.last_error() {
            tracing::debug!(handle = %self.handle, %err, "vgDestroyPath failed");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn segment_command_encoding_fixtures() {
        const F: &[(SegmentCommand, u8)] = &[
            (SegmentCommand::absolute(SegmentType::ClosePath), 0),
            (SegmentCommand::absolute(SegmentType::MoveTo), 2),
            (SegmentCommand::relative(SegmentType::MoveTo), 3),
            (SegmentCommand::absolute(SegmentType::LineTo), 4),
            (SegmentCommand::relative(SegmentType::CubicTo), 13),
            (SegmentCommand::absolute(SegmentType::SccwArcTo), 18),
            (SegmentCommand::relative(SegmentType::LcwArcTo), 25),
        ];

        for (command, raw) in F.iter() {
            assert_eq!(*raw, command.raw());
        }
    }

    #[test]
    fn segment_command_round_trip() {
        let c = SegmentCommand::relative(SegmentType::QuadTo);
        assert_eq!(SegmentType::QuadTo, c.segment_type());
        assert!(c.is_relative());

        let c = SegmentCommand::absolute(SegmentType::VLineTo);
        assert_eq!(SegmentType::VLineTo, c.segment_type());
        assert!(!c.is_relative());
    }

    #[test]
    fn coord_counts() {
        const F: &[(SegmentType, usize)] = &[
            (SegmentType::ClosePath, 0),
            (SegmentType::MoveTo, 2),
            (SegmentType::LineTo, 2),
            (SegmentType::HLineTo, 1),
            (SegmentType::VLineTo, 1),
            (SegmentType::QuadTo, 4),
            (SegmentType::CubicTo, 6),
            (SegmentType::SQuadTo, 2),
            (SegmentType::SCubicTo, 4),
            (SegmentType::SccwArcTo, 5),
            (SegmentType::ScwArcTo, 5),
            (SegmentType::LccwArcTo, 5),
            (SegmentType::LcwArcTo, 5),
        ];

        for (ty, count) in F.iter() {
            assert_eq!(*count, ty.coord_count());
        }
    }

    #[test]
    fn append_validation_counts_coords() {
        let commands = [
            SegmentCommand::absolute(SegmentType::MoveTo),
            SegmentCommand::absolute(SegmentType::CubicTo),
            SegmentCommand::absolute(SegmentType::ClosePath),
        ];
        assert_eq!(8, expected_coords(&commands));

        // Matching data passes.
        let data = PathData::F(&[0.0; 8]);
        assert!(validate_append(PathDatatype::F, &commands, &data).is_ok());

        // Short data is rejected.
        let data = PathData::F(&[0.0; 7]);
        assert!(validate_append(PathDatatype::F, &commands, &data).is_err());

        // A datatype mismatch is rejected even with the right count.
        let data = PathData::S32(&[0; 8]);
        assert!(validate_append(PathDatatype::F, &commands, &data).is_err());
    }

    #[test]
    fn spec_default_matches_creation_defaults() {
        let spec = PathSpec::default();
        assert_eq!(consts::VG_PATH_FORMAT_STANDARD, spec.format);
        assert_eq!(PathDatatype::S32, spec.datatype);
        assert_eq!(1.0, spec.scale);
        assert_eq!(0.0, spec.bias);
        assert_eq!(PathCapabilities::all(), spec.capabilities);
        assert_eq!(0xFFF, PathCapabilities::all().bits());
    }
}
