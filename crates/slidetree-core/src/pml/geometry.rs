//! Geometry resolution.
//!
//! Raw EMU values are read from the first chain level that defines them and
//! converted to points only at that moment, so fallback never compounds
//! rounding. Undefined values stay `None`.

use super::result::Frame;
use crate::error::Result;
use crate::xml::{XmlNode, A};

pub const EMU_PER_POINT: f64 = 12700.0;

pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMU_PER_POINT
}

/// 60,000ths of a degree → degrees in `[0, 360)`.
pub fn angle_to_degrees(raw: i64) -> f64 {
    (raw as f64 / 60_000.0).rem_euclid(360.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub left: Option<f64>,
    pub top: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// `resolvePosition(slideXfrm, layoutXfrm, masterXfrm)`: `a:off` of the first
/// transform that has one. An `a:off` without integer `x`/`y` is malformed.
pub fn resolve_position(xfrms: &[Option<XmlNode<'_>>]) -> Result<Position> {
    match xfrms.iter().flatten().find_map(|x| x.child(&A::off())) {
        Some(off) => Ok(Position {
            left: Some(emu_to_pt(off.require_i64("x")?)),
            top: Some(emu_to_pt(off.require_i64("y")?)),
        }),
        None => Ok(Position::default()),
    }
}

/// `resolveSize(...)`: `a:ext` of the first transform that has one.
pub fn resolve_size(xfrms: &[Option<XmlNode<'_>>]) -> Result<Size> {
    match xfrms.iter().flatten().find_map(|x| x.child(&A::ext())) {
        Some(ext) => Ok(Size {
            width: Some(emu_to_pt(ext.require_i64("cx")?)),
            height: Some(emu_to_pt(ext.require_i64("cy")?)),
        }),
        None => Ok(Size::default()),
    }
}

/// `@rot` of a transform in degrees; absent is 0.
pub fn rotation(xfrm: Option<XmlNode<'_>>) -> f64 {
    xfrm.and_then(|x| x.attr_i64("rot"))
        .map(angle_to_degrees)
        .unwrap_or(0.0)
}

/// `(flipH, flipV)` of a transform.
pub fn flips(xfrm: Option<XmlNode<'_>>) -> (bool, bool) {
    match xfrm {
        Some(x) => (x.attr("flipH") == Some("1"), x.attr("flipV") == Some("1")),
        None => (false, false),
    }
}

/// Resolve a frame from a transform chain, with the given rotation and order.
pub fn resolve_frame(xfrms: &[Option<XmlNode<'_>>], rotate: f64, order: usize) -> Result<Frame> {
    let position = resolve_position(xfrms)?;
    let size = resolve_size(xfrms)?;
    Ok(Frame {
        left: position.left,
        top: position.top,
        width: size.width,
        height: size.height,
        rotate,
        order,
    })
}

/// One group's `{offset, childOffset, extent, childExtent, rotation}`, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTransform {
    pub off_x: f64,
    pub off_y: f64,
    pub ch_off_x: f64,
    pub ch_off_y: f64,
    pub cx: f64,
    pub cy: f64,
    pub ch_cx: f64,
    pub ch_cy: f64,
    pub rotate: f64,
}

impl GroupTransform {
    /// Read a group's `a:xfrm`. All four of `off`, `ext`, `chOff`, `chExt`
    /// are required.
    pub fn from_xfrm(xfrm: XmlNode<'_>) -> Result<Self> {
        let off = xfrm.require_child(&A::off())?;
        let ext = xfrm.require_child(&A::ext())?;
        let ch_off = xfrm.require_child(&A::chOff())?;
        let ch_ext = xfrm.require_child(&A::chExt())?;
        Ok(Self {
            off_x: emu_to_pt(off.require_i64("x")?),
            off_y: emu_to_pt(off.require_i64("y")?),
            ch_off_x: emu_to_pt(ch_off.require_i64("x")?),
            ch_off_y: emu_to_pt(ch_off.require_i64("y")?),
            cx: emu_to_pt(ext.require_i64("cx")?),
            cy: emu_to_pt(ext.require_i64("cy")?),
            ch_cx: emu_to_pt(ch_ext.require_i64("cx")?),
            ch_cy: emu_to_pt(ch_ext.require_i64("cy")?),
            rotate: rotation(Some(xfrm)),
        })
    }

    /// `extent.cx / childExtent.cx`; a degenerate child extent does not scale.
    pub fn scale_x(&self) -> f64 {
        if self.ch_cx == 0.0 {
            1.0
        } else {
            self.cx / self.ch_cx
        }
    }

    pub fn scale_y(&self) -> f64 {
        if self.ch_cy == 0.0 {
            1.0
        } else {
            self.cy / self.ch_cy
        }
    }

    /// The group's own frame: its offset and extent, not its child offset.
    pub fn frame(&self, order: usize) -> Frame {
        Frame {
            left: Some(self.off_x),
            top: Some(self.off_y),
            width: Some(self.cx),
            height: Some(self.cy),
            rotate: self.rotate,
            order,
        }
    }

    /// Map a child frame from child space: `(value - childOffset) * scale`.
    /// Rotation is left on the child untouched.
    pub fn rescale(&self, frame: &mut Frame) {
        let (sx, sy) = (self.scale_x(), self.scale_y());
        frame.left = frame.left.map(|l| (l - self.ch_off_x) * sx);
        frame.top = frame.top.map(|t| (t - self.ch_off_y) * sy);
        frame.width = frame.width.map(|w| w * sx);
        frame.height = frame.height.map(|h| h * sy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlideTreeError;
    use crate::xml::parser::parse;
    use proptest::prelude::*;

    /// Per-axis scale + translate: `x' = x * sx + tx`.
    #[derive(Debug, Clone, Copy)]
    struct AxisAffine {
        sx: f64,
        sy: f64,
        tx: f64,
        ty: f64,
    }

    impl AxisAffine {
        /// The child-space → parent-space map of `group`, including its offset.
        fn of(group: &GroupTransform) -> Self {
            let (sx, sy) = (group.scale_x(), group.scale_y());
            Self {
                sx,
                sy,
                tx: group.off_x - group.ch_off_x * sx,
                ty: group.off_y - group.ch_off_y * sy,
            }
        }

        fn apply(&self, x: f64, y: f64) -> (f64, f64) {
            (x * self.sx + self.tx, y * self.sy + self.ty)
        }

        /// `self` followed by `outer`.
        fn then(&self, outer: &AxisAffine) -> AxisAffine {
            AxisAffine {
                sx: self.sx * outer.sx,
                sy: self.sy * outer.sy,
                tx: self.tx * outer.sx + outer.tx,
                ty: self.ty * outer.sy + outer.ty,
            }
        }
    }

    const A_NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#;

    fn xfrm(body: &str) -> crate::xml::XmlDocument {
        parse(&format!(r#"<a:xfrm {A_NS} {body}</a:xfrm>"#)).unwrap()
    }

    #[test]
    fn first_defined_level_wins_per_field() {
        let slide = xfrm(r#">"#);
        let layout = xfrm(r#"><a:off x="914400" y="457200"/><a:ext cx="1828800" cy="914400"/>"#);
        let master = xfrm(r#"><a:off x="0" y="0"/><a:ext cx="1" cy="1"/>"#);
        let levels = [slide.root_node(), layout.root_node(), master.root_node()];

        assert_eq!(
            resolve_position(&levels).unwrap(),
            Position { left: Some(72.0), top: Some(36.0) }
        );
        assert_eq!(
            resolve_size(&levels).unwrap(),
            Size { width: Some(144.0), height: Some(72.0) }
        );
    }

    #[test]
    fn nothing_defined_stays_undefined() {
        let levels = [None, None, None];
        assert_eq!(resolve_position(&levels).unwrap(), Position::default());
        assert_eq!(resolve_size(&levels).unwrap(), Size::default());
    }

    #[test]
    fn offset_without_coordinates_is_malformed() {
        let doc = xfrm(r#"><a:off x="1"/>"#);
        assert!(matches!(
            resolve_position(&[doc.root_node()]),
            Err(SlideTreeError::MalformedTree { .. })
        ));
    }

    #[test]
    fn rotation_normalizes_into_range() {
        assert_eq!(angle_to_degrees(5_400_000), 90.0);
        assert_eq!(angle_to_degrees(-5_400_000), 270.0);
        assert_eq!(angle_to_degrees(21_600_000), 0.0);
        let doc = xfrm(r#"rot="-60000" flipH="1">"#);
        assert_eq!(rotation(doc.root_node()), 359.0);
        assert_eq!(flips(doc.root_node()), (true, false));
    }

    #[test]
    fn group_requires_child_extent() {
        let doc = xfrm(r#"><a:off x="0" y="0"/><a:ext cx="10" cy="10"/><a:chOff x="0" y="0"/>"#);
        assert!(matches!(
            GroupTransform::from_xfrm(doc.root_node().unwrap()),
            Err(SlideTreeError::MalformedTree { .. })
        ));
    }

    #[test]
    fn rescale_maps_out_of_child_space() {
        let doc = xfrm(
            r#"><a:off x="127000" y="127000"/><a:ext cx="254000" cy="254000"/><a:chOff x="127000" y="254000"/><a:chExt cx="127000" cy="127000"/>"#,
        );
        let group = GroupTransform::from_xfrm(doc.root_node().unwrap()).unwrap();
        let mut frame = Frame {
            left: Some(15.0),
            top: Some(25.0),
            width: Some(5.0),
            height: None,
            rotate: 45.0,
            order: 1,
        };
        group.rescale(&mut frame);
        assert_eq!(frame.left, Some(10.0));
        assert_eq!(frame.top, Some(10.0));
        assert_eq!(frame.width, Some(10.0));
        assert_eq!(frame.height, None);
        assert_eq!(frame.rotate, 45.0);
        assert_eq!(group.frame(0).left, Some(10.0));
    }

    fn arb_group() -> impl Strategy<Value = GroupTransform> {
        (
            -500.0..500.0f64,
            -500.0..500.0f64,
            -500.0..500.0f64,
            -500.0..500.0f64,
            1.0..400.0f64,
            1.0..400.0f64,
            1.0..400.0f64,
            1.0..400.0f64,
        )
            .prop_map(|(off_x, off_y, ch_off_x, ch_off_y, cx, cy, ch_cx, ch_cy)| GroupTransform {
                off_x,
                off_y,
                ch_off_x,
                ch_off_y,
                cx,
                cy,
                ch_cx,
                ch_cy,
                rotate: 0.0,
            })
    }

    proptest! {
        #[test]
        fn nested_rescale_equals_composed_affine(
            inner in arb_group(),
            outer in arb_group(),
            x in -1000.0..1000.0f64,
            y in -1000.0..1000.0f64,
        ) {
            // inner group places the leaf, outer group places the inner group
            let mut leaf = Frame { left: Some(x), top: Some(y), ..Frame::default() };
            inner.rescale(&mut leaf);
            let absolute_in_outer_child_space = (
                inner.off_x + leaf.left.unwrap(),
                inner.off_y + leaf.top.unwrap(),
            );
            let mut as_child = Frame {
                left: Some(absolute_in_outer_child_space.0),
                top: Some(absolute_in_outer_child_space.1),
                ..Frame::default()
            };
            outer.rescale(&mut as_child);
            let stepwise = (
                outer.off_x + as_child.left.unwrap(),
                outer.off_y + as_child.top.unwrap(),
            );

            let composed = AxisAffine::of(&inner).then(&AxisAffine::of(&outer)).apply(x, y);
            prop_assert!((stepwise.0 - composed.0).abs() < 1e-6 * (1.0 + composed.0.abs()));
            prop_assert!((stepwise.1 - composed.1).abs() < 1e-6 * (1.0 + composed.1.abs()));
        }

        #[test]
        fn rotation_is_always_in_range(raw in any::<i32>()) {
            let degrees = angle_to_degrees(raw as i64);
            prop_assert!((0.0..360.0).contains(&degrees));
        }
    }
}
