//! Higher-level path builders and projective warps from the optional VGU
//! utility library.
//!
//! VGU entry points differ from the core API in two ways. They report errors
//! through their return status (not the error trap), and an implementation
//! may omit them entirely: all functions here fail with
//! [VgError::VguUnavailable](crate::VgError::VguUnavailable) when the loaded
//! library exported no VGU symbols.

use rovg_sys::VGenum;

use crate::{macros::imp_enum, Angle, Matrix, Path, Vg, VgError, VgResult};

imp_enum! {
    /// How [Path::append_arc] closes the arc.
    ArcKind: "VGUArcType" {
        /// Leave the arc unclosed.
        Open = rovg_sys::consts::VGU_ARC_OPEN,
        /// Close with a chord between the endpoints.
        Chord = rovg_sys::consts::VGU_ARC_CHORD,
        /// Close with lines through the ellipse center.
        Pie = rovg_sys::consts::VGU_ARC_PIE,
    }
}

fn vgu_check(status: VGenum) -> VgResult<()> {
    match VgError::from_vgu_code(status) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}

impl Path {
    /// Append a line segment from `(x0, y0)` to `(x1, y1)`.
    pub fn append_line(
        &self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    ) -> VgResult<()> {
        let vgu = self.vg().vgu_syms()?;
        let status = unsafe {
            (vgu.vguLine)(self.handle().raw(), x0, y0, x1, y1)
        };
        vgu_check(status)
    }

    /// Append a polyline through `points`, optionally closed into a
    /// polygon.
    pub fn append_polygon(
        &self,
        points: &[(f32, f32)],
        closed: bool,
    ) -> VgResult<()> {
        if points.is_empty() {
            return Ok(());
        }
        let vgu = self.vg().vgu_syms()?;
        let mut flat = Vec::with_capacity(points.len() * 2);
        for (x, y) in points {
            flat.push(*x);
            flat.push(*y);
        }
        let status = unsafe {
            (vgu.vguPolygon)(
                self.handle().raw(),
                flat.as_ptr(),
                points.len() as i32,
                crate::vg_bool(closed),
            )
        };
        vgu_check(status)
    }

    /// Append an axis-aligned rectangle.
    pub fn append_rect(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> VgResult<()> {
        let vgu = self.vg().vgu_syms()?;
        let status = unsafe {
            (vgu.vguRect)(self.handle().raw(), x, y, width, height)
        };
        vgu_check(status)
    }

    /// Append an axis-aligned rectangle with elliptically rounded corners.
    pub fn append_round_rect(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        arc_width: f32,
        arc_height: f32,
    ) -> VgResult<()> {
        let vgu = self.vg().vgu_syms()?;
        let status = unsafe {
            (vgu.vguRoundRect)(
                self.handle().raw(),
                x,
                y,
                width,
                height,
                arc_width,
                arc_height,
            )
        };
        vgu_check(status)
    }

    /// Append an axis-aligned ellipse centered on `(cx, cy)`.
    pub fn append_ellipse(
        &self,
        cx: f32,
        cy: f32,
        width: f32,
        height: f32,
    ) -> VgResult<()> {
        let vgu = self.vg().vgu_syms()?;
        let status = unsafe {
            (vgu.vguEllipse)(self.handle().raw(), cx, cy, width, height)
        };
        vgu_check(status)
    }

    /// Append an elliptical arc.
    ///
    /// The arc lies on the ellipse bounded by `(x, y, width, height)`,
    /// starting at `start` and sweeping `extent` (counter-clockwise for
    /// positive extents).
    #[allow(clippy::too_many_arguments)]
    pub fn append_arc(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        start: Angle,
        extent: Angle,
        kind: ArcKind,
    ) -> VgResult<()> {
        let vgu = self.vg().vgu_syms()?;
        let status = unsafe {
            (vgu.vguArc)(
                self.handle().raw(),
                x,
                y,
                width,
                height,
                start.degrees(),
                extent.degrees(),
                kind.raw(),
            )
        };
        vgu_check(status)
    }
}

impl Vg {
    /// The projective transform mapping an arbitrary quadrilateral onto the
    /// unit square.
    ///
    /// `quad` is the four corners in order. Degenerate quads fail with
    /// [VgError::BadWarp](crate::VgError::BadWarp).
    pub fn warp_quad_to_square(
        &self,
        quad: [(f32, f32); 4],
    ) -> VgResult<Matrix> {
        let vgu = self.vgu_syms()?;
        let [(x0, y0), (x1, y1), (x2, y2), (x3, y3)] = quad;
        let mut flat = [0.0f32; 9];
        let status = unsafe {
            (vgu.vguComputeWarpQuadToSquare)(
                x0,
                y0,
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                flat.as_mut_ptr(),
            )
        };
        vgu_check(status)?;
        Ok(Matrix::from_flat(flat))
    }

    /// The projective transform mapping the unit square onto an arbitrary
    /// quadrilateral.
    pub fn warp_square_to_quad(
        &self,
        quad: [(f32, f32); 4],
    ) -> VgResult<Matrix> {
        let vgu = self.vgu_syms()?;
        let [(x0, y0), (x1, y1), (x2, y2), (x3, y3)] = quad;
        let mut flat = [0.0f32; 9];
        let status = unsafe {
            (vgu.vguComputeWarpSquareToQuad)(
                x0,
                y0,
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                flat.as_mut_ptr(),
            )
        };
        vgu_check(status)?;
        Ok(Matrix::from_flat(flat))
    }

    /// The projective transform mapping one quadrilateral onto another.
    pub fn warp_quad_to_quad(
        &self,
        dst: [(f32, f32); 4],
        src: [(f32, f32); 4],
    ) -> VgResult<Matrix> {
        let vgu = self.vgu_syms()?;
        let [(dx0, dy0), (dx1, dy1), (dx2, dy2), (dx3, dy3)] = dst;
        let [(sx0, sy0), (sx1, sy1), (sx2, sy2), (sx3, sy3)] = src;
        let mut flat = [0.0f32; 9];
        let status = unsafe {
            (vgu.vguComputeWarpQuadToQuad)(
                dx0,
                dy0,
                dx1,
                dy1,
                dx2,
                dy2,
                dx3,
                dy3,
                sx0,
                sy0,
                sx1,
                sy1,
                sx2,
                sy2,
                sx3,
                sy3,
                flat.as_mut_ptr(),
            )
        };
        vgu_check(status)?;
        Ok(Matrix::from_flat(flat))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arc_kind_values() {
        assert_eq!(0xF100, ArcKind::Open.raw());
        assert_eq!(0xF101, ArcKind::Chord.raw());
        assert_eq!(0xF102, ArcKind::Pie.raw());
    }

    #[test]
    fn vgu_status_passthrough() {
        assert!(vgu_check(0).is_ok());
        assert_eq!(Err(VgError::BadWarp), vgu_check(0xF004));
    }
}
