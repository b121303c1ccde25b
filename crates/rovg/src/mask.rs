//! Alpha masking: surface mask operations and mask layer objects.
//!
//! The drawing surface carries an optional coverage mask that modulates
//! every drawing operation while [masking](crate::Context::set_masking) is
//! enabled. The mask is updated from images, from [MaskLayer] objects, or by
//! rendering a path ([Path::render_to_mask](crate::Path::render_to_mask)).

use std::marker::PhantomData;

use rovg_sys::{consts, VGHandle};

use crate::{
    macros::imp_enum, Context, Handle, Image, MaskLayerHandle, Rect, Vg,
    VgError, VgResult,
};

imp_enum! {
    /// How new coverage values combine with the existing surface mask.
    MaskOperation: "VGMaskOperation" {
        /// Set the region to zero coverage, ignoring the source.
        Clear = consts::VG_CLEAR_MASK,
        /// Set the region to full coverage, ignoring the source.
        Fill = consts::VG_FILL_MASK,
        /// Replace the region with the source coverage.
        Set = consts::VG_SET_MASK,
        /// Union of existing and source coverage.
        Union = consts::VG_UNION_MASK,
        /// Intersection of existing and source coverage.
        Intersect = consts::VG_INTERSECT_MASK,
        /// Existing coverage minus source coverage.
        Subtract = consts::VG_SUBTRACT_MASK,
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::Image {}
    impl Sealed for crate::MaskLayer {}
}

/// Objects whose coverage can be combined into the surface mask:
/// [Image] and [MaskLayer].
pub trait MaskSource: sealed::Sealed {
    /// The raw handle `vgMask` consumes.
    #[doc(hidden)]
    fn mask_handle(&self) -> VGHandle;
}

impl MaskSource for Image {
    fn mask_handle(&self) -> VGHandle {
        self.handle().raw()
    }
}

impl MaskSource for MaskLayer {
    fn mask_handle(&self) -> VGHandle {
        self.handle().raw()
    }
}

impl Context {
    /// Set `rect` of the surface mask to zero coverage, hiding everything
    /// drawn there.
    pub fn clear_mask(&self, rect: Rect) -> VgResult<()> {
        self.mask_op(consts::VG_INVALID_HANDLE, MaskOperation::Clear, rect)
    }

    /// Set `rect` of the surface mask to full coverage.
    pub fn fill_mask(&self, rect: Rect) -> VgResult<()> {
        self.mask_op(consts::VG_INVALID_HANDLE, MaskOperation::Fill, rect)
    }

    /// Combine `source`'s coverage into `rect` of the surface mask.
    ///
    /// For an [Image] source, coverage is the alpha channel (or luminance
    /// for alpha-less formats).
    pub fn mask<S: MaskSource>(
        &self,
        source: &S,
        operation: MaskOperation,
        rect: Rect,
    ) -> VgResult<()> {
        self.mask_op(source.mask_handle(), operation, rect)
    }

    fn mask_op(
        &self,
        source: VGHandle,
        operation: MaskOperation,
        rect: Rect,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgMask)(
                source,
                operation.raw(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            )
        };
        self.vg.check(())
    }
}

/// An owned OpenVG mask layer: offscreen coverage storage matching the
/// drawing surface's mask format.
///
/// Created through [Vg::create_mask_layer]; the native object is destroyed
/// on drop.
#[derive(Debug)]
pub struct MaskLayer {
    vg: Vg,
    handle: MaskLayerHandle,
    width: i32,
    height: i32,
    _not_send: PhantomData<*const ()>,
}

impl MaskLayer {
    pub(crate) fn create(
        vg: &Vg,
        width: i32,
        height: i32,
    ) -> VgResult<Self> {
        let raw = unsafe { (vg.lib().vgCreateMaskLayer)(width, height) };
        vg.check(())?;
        let handle = Handle::new(raw)
            .ok_or(VgError::CreationFailed { what: "mask layer" })?;
        Ok(Self {
            vg: vg.clone(),
            handle: handle.into(),
            width,
            height,
            _not_send: PhantomData,
        })
    }

    /// The underlying handle.
    pub fn handle(&self) -> MaskLayerHandle {
        self.handle
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Set `rect` of this layer to a constant coverage `value` in `[0, 1]`.
    pub fn fill(&self, rect: Rect, value: f32) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgFillMaskLayer)(
                self.handle.raw(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                value,
            )
        };
        self.vg.check(())
    }

    /// Set the whole layer to a constant coverage `value` in `[0, 1]`.
    pub fn fill_all(&self, value: f32) -> VgResult<()> {
        self.fill(Rect::new(0, 0, self.width, self.height), value)
    }

    /// Copy a region of the surface mask into this layer at `(dx, dy)`.
    pub fn copy_from_surface(
        &self,
        dx: i32,
        dy: i32,
        src_rect: Rect,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgCopyMask)(
                self.handle.raw(),
                dx,
                dy,
                src_rect.x,
                src_rect.y,
                src_rect.width,
                src_rect.height,
            )
        };
        self.vg.check(())
    }
}

impl Drop for MaskLayer {
    fn drop(&mut self) {
        unsafe { (self.vg.lib().vgDestroyMaskLayer)(self.handle.raw()) };
        if let Some(err) = self.vg.last_error() {
            tracing::debug!(
                handle = %self.handle,
                %err,
                "vgDestroyMaskLayer failed"
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mask_operation_values() {
        const F: &[(MaskOperation, u32)] = &[
            (MaskOperation::Clear, 0x1500),
            (MaskOperation::Fill, 0x1501),
            (MaskOperation::Set, 0x1502),
            (MaskOperation::Union, 0x1503),
            (MaskOperation::Intersect, 0x1504),
            (MaskOperation::Subtract, 0x1505),
        ];

        for (op, raw) in F.iter() {
            assert_eq!(*raw, op.raw());
            assert_eq!(Some(*op), MaskOperation::from_raw(*raw));
        }
    }
}
