//! How floats in a vertex buffer map onto shader input locations.
//!
//! Location 0 is always the position (x, y, z). Location 1, when present,
//! is the colour (r, g, b), interleaved after the position of each vertex.

use glow::HasContext;

const F32_SIZE: usize = std::mem::size_of::<f32>();

pub const SLOT_POSITION: u32 = 0;
pub const SLOT_COLOR: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub slot: u32,
    pub components: usize,
    /// 0 means tightly packed, as in `glVertexAttribPointer`
    pub stride_bytes: usize,
    pub offset_bytes: usize,
}

impl VertexAttribute {
    pub fn effective_stride_bytes(&self) -> usize {
        if self.stride_bytes == 0 {
            self.components * F32_SIZE
        } else {
            self.stride_bytes
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
    floats_per_vertex: usize,
}

impl VertexLayout {
    /// positions only, tightly packed
    pub fn xyz() -> Self {
        VertexLayout {
            attributes: vec![VertexAttribute {
                slot: SLOT_POSITION,
                components: 3,
                stride_bytes: 0,
                offset_bytes: 0,
            }],
            floats_per_vertex: 3,
        }
    }

    /// interleaved `x, y, z, r, g, b` records
    pub fn xyzrgb() -> Self {
        let stride_bytes = 6 * F32_SIZE;
        VertexLayout {
            attributes: vec![
                VertexAttribute {
                    slot: SLOT_POSITION,
                    components: 3,
                    stride_bytes,
                    offset_bytes: 0,
                },
                VertexAttribute {
                    slot: SLOT_COLOR,
                    components: 3,
                    stride_bytes,
                    offset_bytes: 3 * F32_SIZE,
                },
            ],
            floats_per_vertex: 6,
        }
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    pub fn attribute(&self, slot: u32) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.slot == slot)
    }

    /// Number of whole vertices in a buffer of `num_float` floats.
    pub fn vertex_count(&self, num_float: usize) -> usize {
        num_float / self.floats_per_vertex
    }

    pub fn check_shape(&self, vtx2data: &[f32]) -> crate::Result<()> {
        if vtx2data.len() % self.floats_per_vertex != 0 {
            return Err(crate::Error::VertexShape {
                len: vtx2data.len(),
                floats_per_vertex: self.floats_per_vertex,
            });
        }
        Ok(())
    }

    /// The floats the attribute at `slot` reads for vertex `i_vtx`, computed
    /// from the same stride/offset that [`VertexLayout::apply`] hands to GL.
    pub fn resolve<'a>(&self, slot: u32, vtx2data: &'a [f32], i_vtx: usize) -> Option<&'a [f32]> {
        let attr = self.attribute(slot)?;
        let start = (i_vtx * attr.effective_stride_bytes() + attr.offset_bytes) / F32_SIZE;
        vtx2data.get(start..start + attr.components)
    }

    /// Declare every attribute on the currently bound vertex array, reading
    /// from the currently bound `ARRAY_BUFFER`.
    ///
    /// # Safety
    /// A GL context must be current, with the target vertex array and
    /// vertex buffer bound.
    pub unsafe fn apply(&self, gl: &glow::Context) {
        for attr in &self.attributes {
            gl.vertex_attrib_pointer_f32(
                attr.slot,
                attr.components as i32,
                glow::FLOAT,
                false,
                attr.stride_bytes as i32,
                attr.offset_bytes as i32,
            );
            gl.enable_vertex_attrib_array(attr.slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coloured_square() -> Vec<f32> {
        vec![
            -0.5, 0.5, 0.0, 1.0, 0.0, 0.0, //
            -0.5, -0.5, 0.0, 0.0, 1.0, 0.0, //
            0.5, -0.5, 0.0, 0.0, 0.0, 1.0, //
            0.5, 0.5, 0.0, 0.0, 1.0, 1.0,
        ]
    }

    #[test]
    fn xyz_vertex_count_is_a_third_of_the_floats() {
        let layout = VertexLayout::xyz();
        for k in 0..10 {
            assert_eq!(layout.vertex_count(3 * k), k);
        }
    }

    #[test]
    fn xyz_is_tightly_packed_position() {
        let layout = VertexLayout::xyz();
        assert_eq!(layout.attributes().len(), 1);
        let pos = layout.attribute(SLOT_POSITION).unwrap();
        assert_eq!(pos.stride_bytes, 0);
        assert_eq!(pos.effective_stride_bytes(), 12);
        let vtx2xyz = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(layout.resolve(0, &vtx2xyz, 1), Some(&vtx2xyz[3..6]));
        assert_eq!(layout.resolve(0, &vtx2xyz, 2), None);
        assert_eq!(layout.resolve(SLOT_COLOR, &vtx2xyz, 0), None);
    }

    #[test]
    fn xyzrgb_slots_split_each_record() {
        let layout = VertexLayout::xyzrgb();
        let vtx2xyzrgb = coloured_square();
        assert_eq!(layout.vertex_count(vtx2xyzrgb.len()), 4);
        for i_vtx in 0..4 {
            let record = &vtx2xyzrgb[i_vtx * 6..i_vtx * 6 + 6];
            assert_eq!(layout.resolve(SLOT_POSITION, &vtx2xyzrgb, i_vtx), Some(&record[0..3]));
            assert_eq!(layout.resolve(SLOT_COLOR, &vtx2xyzrgb, i_vtx), Some(&record[3..6]));
        }
        assert_eq!(
            layout.resolve(SLOT_COLOR, &vtx2xyzrgb, 3),
            Some(&[0.0, 1.0, 1.0][..])
        );
    }

    #[test]
    fn xyzrgb_byte_layout() {
        let layout = VertexLayout::xyzrgb();
        let pos = layout.attribute(SLOT_POSITION).unwrap();
        let rgb = layout.attribute(SLOT_COLOR).unwrap();
        assert_eq!((pos.components, pos.stride_bytes, pos.offset_bytes), (3, 24, 0));
        assert_eq!((rgb.components, rgb.stride_bytes, rgb.offset_bytes), (3, 24, 12));
    }

    #[test]
    fn shape_check_rejects_partial_vertices() {
        assert!(VertexLayout::xyz().check_shape(&[0.0; 9]).is_ok());
        assert!(VertexLayout::xyz().check_shape(&[]).is_ok());
        assert!(matches!(
            VertexLayout::xyzrgb().check_shape(&[0.0; 9]),
            Err(crate::Error::VertexShape {
                len: 9,
                floats_per_vertex: 6
            })
        ));
    }
}
