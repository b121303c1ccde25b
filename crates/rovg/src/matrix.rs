//! 3×3 transform matrices.
//!
//! OpenVG keeps one "current" matrix per [matrix
//! mode](crate::context::MatrixMode) and applies all matrix operations to it.
//! [Matrix] here is inert row-major data: nothing changes native state until
//! an explicit [Context] call loads, multiplies, or reads back the current
//! matrix.

use crate::{Context, VgResult};

/// A 3×3 transform matrix, row-major.
///
/// The native layout OpenVG consumes is column-major
/// (`{sx, shy, w0, shx, sy, w1, tx, ty, w2}`); [Matrix::to_flat] and
/// [Matrix::from_flat] convert between the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix(pub [[f32; 3]; 3]);

impl Matrix {
    /// The identity transform.
    pub fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Build from the flat column-major array OpenVG uses.
    pub fn from_flat(flat: [f32; 9]) -> Self {
        let mut rows = [[0.0f32; 3]; 3];
        for (i, value) in flat.iter().enumerate() {
            rows[i % 3][i / 3] = *value;
        }
        Self(rows)
    }

    /// Flatten into the column-major array OpenVG uses.
    pub fn to_flat(&self) -> [f32; 9] {
        let mut flat = [0.0f32; 9];
        for (i, value) in flat.iter_mut().enumerate() {
            *value = self.0[i % 3][i / 3];
        }
        flat
    }

    /// Whether the bottom row is `[0, 0, 1]`.
    ///
    /// Path and glyph matrices are forced affine by the implementation;
    /// image matrices may be projective.
    pub fn is_affine(&self) -> bool {
        self.0[2] == [0.0, 0.0, 1.0]
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Index<usize> for Matrix {
    type Output = [f32; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl std::ops::IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

/// A rotation angle.
///
/// OpenVG natively works in degrees; [Angle::Radians] values are converted
/// at the call boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    /// An angle in degrees.
    Degrees(f32),
    /// An angle in radians.
    Radians(f32),
}

impl Angle {
    /// The angle in degrees, as OpenVG wants it.
    pub fn degrees(self) -> f32 {
        match self {
            Self::Degrees(deg) => deg,
            Self::Radians(rad) => rad.to_degrees(),
        }
    }
}

impl Context {
    /// Replace the current matrix with the identity.
    pub fn load_identity(&self) -> VgResult<()> {
        unsafe { (self.vg.lib().vgLoadIdentity)() };
        self.vg.check(())
    }

    /// Replace the current matrix with `matrix`.
    pub fn load_matrix(&self, matrix: &Matrix) -> VgResult<()> {
        let flat = matrix.to_flat();
        unsafe { (self.vg.lib().vgLoadMatrix)(flat.as_ptr()) };
        self.vg.check(())
    }

    /// Read back the current matrix.
    pub fn current_matrix(&self) -> VgResult<Matrix> {
        let mut flat = [0.0f32; 9];
        unsafe { (self.vg.lib().vgGetMatrix)(flat.as_mut_ptr()) };
        self.vg.check(Matrix::from_flat(flat))
    }

    /// Right-multiply the current matrix by `matrix`.
    pub fn mult_matrix(&self, matrix: &Matrix) -> VgResult<()> {
        let flat = matrix.to_flat();
        unsafe { (self.vg.lib().vgMultMatrix)(flat.as_ptr()) };
        self.vg.check(())
    }

    /// Append a translation to the current matrix.
    pub fn translate(&self, tx: f32, ty: f32) -> VgResult<()> {
        unsafe { (self.vg.lib().vgTranslate)(tx, ty) };
        self.vg.check(())
    }

    /// Append a scale to the current matrix.
    pub fn scale(&self, sx: f32, sy: f32) -> VgResult<()> {
        unsafe { (self.vg.lib().vgScale)(sx, sy) };
        self.vg.check(())
    }

    /// Append a shear to the current matrix.
    pub fn shear(&self, shx: f32, shy: f32) -> VgResult<()> {
        unsafe { (self.vg.lib().vgShear)(shx, shy) };
        self.vg.check(())
    }

    /// Append a rotation about the origin to the current matrix.
    pub fn rotate(&self, angle: Angle) -> VgResult<()> {
        unsafe { (self.vg.lib().vgRotate)(angle.degrees()) };
        self.vg.check(())
    }

    /// Append a rotation about `(cx, cy)` to the current matrix.
    pub fn rotate_about(
        &self,
        cx: f32,
        cy: f32,
        angle: Angle,
    ) -> VgResult<()> {
        self.translate(cx, cy)?;
        self.rotate(angle)?;
        self.translate(-cx, -cy)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flat_layout_matches_openvg() {
        // {sx, shy, w0, shx, sy, w1, tx, ty, w2}
        let m = Matrix([
            [2.0, 0.5, 10.0], // sx shx tx
            [0.25, 3.0, 20.0], // shy sy ty
            [0.0, 0.0, 1.0],  // w0 w1 w2
        ]);
        assert_eq!(
            [2.0, 0.25, 0.0, 0.5, 3.0, 0.0, 10.0, 20.0, 1.0],
            m.to_flat()
        );
    }

    #[test]
    fn flat_round_trip() {
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(flat, Matrix::from_flat(flat).to_flat());
    }

    #[test]
    fn identity_is_affine() {
        assert!(Matrix::identity().is_affine());
        let mut m = Matrix::identity();
        m[2] = [0.1, 0.0, 1.0];
        assert!(!m.is_affine());
    }

    #[test]
    fn angle_conversion() {
        assert_eq!(90.0, Angle::Degrees(90.0).degrees());
        let deg = Angle::Radians(std::f32::consts::PI).degrees();
        assert!((deg - 180.0).abs() < 1e-4);
    }
}
